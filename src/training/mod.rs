//! Training infrastructure: episode runner, trainer loop, and metrics
//! collection.

pub mod episode;
pub mod metrics;
pub mod trainer;
