use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Tabular state-value estimates keyed by board state key.
///
/// Unseen keys read as 0.0. Only the owning agent's reward propagation
/// writes to the table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct PolicyTable {
    values: HashMap<String, f64>,
}

impl PolicyTable {
    pub fn new() -> Self {
        PolicyTable {
            values: HashMap::new(),
        }
    }

    /// Value estimate for a state key, 0.0 if unseen.
    pub fn value(&self, key: &str) -> f64 {
        self.values.get(key).copied().unwrap_or(0.0)
    }

    pub fn set_value(&mut self, key: String, value: f64) {
        self.values.insert(key, value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unseen_key_defaults_to_zero() {
        let table = PolicyTable::new();
        assert_eq!(table.value("........."), 0.0);
        assert!(table.is_empty());
    }

    #[test]
    fn test_set_and_get() {
        let mut table = PolicyTable::new();
        table.set_value("X........".to_string(), 0.45);
        assert!((table.value("X........") - 0.45).abs() < 1e-12);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let mut table = PolicyTable::new();
        table.set_value("X........".to_string(), 0.5);
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"X........":0.5}"#);
    }
}
