//! Configuration fingerprints
//!
//! Each scenario in a sweep report carries a SHA-256 digest of its
//! configuration plus the stream seed it ran with, so two reports can be
//! compared for "same inputs" without diffing every field.

use crate::orchestrator::SimulationError;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Hex SHA-256 of a value's JSON form
///
/// The value passes through `serde_json::Value` first. Its object map is a
/// `BTreeMap` (the `preserve_order` feature stays off), so keys are written
/// sorted and map insertion order never changes the digest.
pub fn compute_config_hash<T: Serialize>(config: &T) -> Result<String, SimulationError> {
    let bytes = serde_json::to_value(config)
        .and_then(|value| serde_json::to_vec(&value))
        .map_err(|e| {
            SimulationError::Serialization(format!("cannot fingerprint config: {}", e))
        })?;

    Ok(format!("{:x}", Sha256::digest(&bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orchestrator::ScenarioConfig;
    use serde_json::Value;
    use std::collections::HashMap;

    #[test]
    fn test_hash_is_stable_and_hex() {
        let config = ScenarioConfig::new(7, 10);
        let a = compute_config_hash(&config).unwrap();
        let b = compute_config_hash(&config.clone()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_hash_changes_with_bed_counts_and_seed() {
        let a = compute_config_hash(&(ScenarioConfig::new(7, 10), 1u64)).unwrap();
        let b = compute_config_hash(&(ScenarioConfig::new(8, 10), 1u64)).unwrap();
        let c = compute_config_hash(&(ScenarioConfig::new(7, 10), 2u64)).unwrap();
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_hash_ignores_key_order() {
        let a: Value = serde_json::from_str(r#"{"a": 1, "b": {"c": 2, "d": 3}}"#).unwrap();
        let b: Value = serde_json::from_str(r#"{"b": {"d": 3, "c": 2}, "a": 1}"#).unwrap();
        assert_eq!(compute_config_hash(&a).unwrap(), compute_config_hash(&b).unwrap());
    }

    #[test]
    fn test_hash_ignores_hash_map_iteration_order() {
        let mut x = HashMap::new();
        let mut y = HashMap::new();
        for key in ["icu", "ward", "horizon", "seed", "min", "max"] {
            x.insert(key, key.len());
        }
        for key in ["max", "min", "seed", "horizon", "ward", "icu"] {
            y.insert(key, key.len());
        }
        assert_eq!(compute_config_hash(&x).unwrap(), compute_config_hash(&y).unwrap());
    }
}
