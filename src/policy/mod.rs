//! Tabular policy: state-value table and its on-disk persistence.

mod store;
mod table;

pub use store::{PolicyStore, PolicyStoreConfig};
pub use table::PolicyTable;
