//! Growth configuration for [`DynamicVec`](crate::DynamicVec).

use super::{Config, parse_env_var};
use crate::error::{Result, VectorError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for vector construction and growth.
///
/// The default reproduces the classic doubling policy: an empty vector grows
/// to 1 slot, then 2, 4, 8, ...
///
/// ```rust
/// use advanced_vector::config::{Config, VecConfig};
///
/// let config = VecConfig::default();
/// assert_eq!(config.growth_factor, 2);
/// assert!(config.validate().is_ok());
///
/// let policy = config.growth_policy();
/// assert_eq!(policy.next_capacity(0), 1);
/// assert_eq!(policy.next_capacity(4), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VecConfig {
    /// Capacity reserved up front by `DynamicVec::with_config`.
    pub initial_capacity: usize,
    /// Multiplier applied to the current capacity when a full vector grows.
    /// Must be at least 2 to keep appends amortized O(1).
    pub growth_factor: usize,
    /// Smallest capacity a growing vector will allocate. Must be at least 1.
    pub min_grow_capacity: usize,
}

impl VecConfig {
    /// Runtime growth policy derived from this configuration.
    pub fn growth_policy(&self) -> GrowthPolicy {
        GrowthPolicy {
            factor: self.growth_factor,
            min_capacity: self.min_grow_capacity,
        }
    }
}

impl Default for VecConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            growth_factor: 2,
            min_grow_capacity: 1,
        }
    }
}

impl Config for VecConfig {
    fn validate(&self) -> Result<()> {
        if self.growth_factor < 2 {
            return Err(VectorError::configuration(format!(
                "growth_factor must be at least 2, got {}",
                self.growth_factor
            )));
        }
        if self.min_grow_capacity == 0 {
            return Err(VectorError::configuration(
                "min_grow_capacity must be greater than 0",
            ));
        }
        Ok(())
    }

    fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        let mut config = Self::default();
        config.initial_capacity = parse_env_var(
            &format!("{}VEC_INITIAL_CAPACITY", prefix),
            config.initial_capacity,
        );
        config.growth_factor =
            parse_env_var(&format!("{}VEC_GROWTH_FACTOR", prefix), config.growth_factor);
        config.min_grow_capacity = parse_env_var(
            &format!("{}VEC_MIN_GROW_CAPACITY", prefix),
            config.min_grow_capacity,
        );
        config.validate()?;
        log::debug!("Loaded vector config from environment: {:?}", config);
        Ok(config)
    }

    fn performance_preset() -> Self {
        Self {
            initial_capacity: 64,
            growth_factor: 2,
            min_grow_capacity: 16,
        }
    }

    fn memory_preset() -> Self {
        Self {
            initial_capacity: 0,
            growth_factor: 2,
            min_grow_capacity: 1,
        }
    }

    fn realtime_preset() -> Self {
        // Fewer, larger reallocations
        Self {
            initial_capacity: 256,
            growth_factor: 4,
            min_grow_capacity: 64,
        }
    }

    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serialized = serde_json::to_string_pretty(self).map_err(|e| {
            VectorError::configuration(format!("Failed to serialize vector config: {}", e))
        })?;
        std::fs::write(path, serialized)?;
        Ok(())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            VectorError::configuration(format!("Failed to parse vector config file: {}", e))
        })?;
        config.validate()?;
        log::debug!("Loaded vector config from file: {:?}", config);
        Ok(config)
    }
}

/// How a full vector picks its next capacity.
///
/// `next_capacity(cap) = max(min_capacity, cap * factor, cap + 1)`, saturating.
///
/// ```rust
/// use advanced_vector::GrowthPolicy;
///
/// let policy = GrowthPolicy::DOUBLING;
/// assert_eq!(policy.next_capacity(0), 1);
/// assert_eq!(policy.next_capacity(3), 6);
/// assert_eq!(policy.next_capacity(usize::MAX), usize::MAX);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthPolicy {
    factor: usize,
    min_capacity: usize,
}

impl GrowthPolicy {
    /// Doubling from an initial single slot.
    pub const DOUBLING: GrowthPolicy = GrowthPolicy {
        factor: 2,
        min_capacity: 1,
    };

    /// Capacity to allocate when a vector of capacity `capacity` is full.
    #[inline]
    pub fn next_capacity(&self, capacity: usize) -> usize {
        capacity
            .saturating_mul(self.factor)
            .max(self.min_capacity)
            .max(capacity.saturating_add(1))
    }

    /// Growth multiplier.
    pub fn factor(&self) -> usize {
        self.factor
    }

    /// Smallest capacity allocated on growth.
    pub fn min_capacity(&self) -> usize {
        self.min_capacity
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::DOUBLING
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::tempdir;

    #[test]
    fn test_default_is_valid() {
        assert!(VecConfig::default().validate().is_ok());
        assert_eq!(VecConfig::default().growth_policy(), GrowthPolicy::DOUBLING);
    }

    #[test]
    fn test_presets_valid() {
        assert!(VecConfig::performance_preset().validate().is_ok());
        assert!(VecConfig::memory_preset().validate().is_ok());
        assert!(VecConfig::realtime_preset().validate().is_ok());
        assert_eq!(VecConfig::balanced_preset(), VecConfig::default());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let config = VecConfig {
            growth_factor: 1,
            ..VecConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(VectorError::Configuration { .. })
        ));

        let config = VecConfig {
            min_grow_capacity: 0,
            ..VecConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_doubling_sequence() {
        let policy = GrowthPolicy::DOUBLING;
        let mut capacity = 0;
        let mut seen = Vec::new();
        for _ in 0..5 {
            capacity = policy.next_capacity(capacity);
            seen.push(capacity);
        }
        assert_eq!(seen, vec![1, 2, 4, 8, 16]);
    }

    #[test]
    fn test_next_capacity_saturates() {
        let policy = GrowthPolicy::DOUBLING;
        assert_eq!(policy.next_capacity(usize::MAX / 2 + 1), usize::MAX);
    }

    #[test]
    fn test_from_env_with_prefix() {
        unsafe { env::set_var("ADVEC_TEST_VEC_GROWTH_FACTOR", "3"); }
        unsafe { env::set_var("ADVEC_TEST_VEC_MIN_GROW_CAPACITY", "8"); }

        let config = VecConfig::from_env_with_prefix("ADVEC_TEST_").unwrap();
        assert_eq!(config.growth_factor, 3);
        assert_eq!(config.min_grow_capacity, 8);
        assert_eq!(config.initial_capacity, 0);

        unsafe { env::remove_var("ADVEC_TEST_VEC_GROWTH_FACTOR"); }
        unsafe { env::remove_var("ADVEC_TEST_VEC_MIN_GROW_CAPACITY"); }
    }

    #[test]
    fn test_from_env_rejects_invalid() {
        unsafe { env::set_var("ADVEC_BAD_VEC_GROWTH_FACTOR", "1"); }
        assert!(VecConfig::from_env_with_prefix("ADVEC_BAD_").is_err());
        unsafe { env::remove_var("ADVEC_BAD_VEC_GROWTH_FACTOR"); }
    }

    #[test]
    fn test_file_round_trip() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("vec_config.json");

        let config = VecConfig::realtime_preset();
        config.save_to_file(&path)?;
        let loaded = VecConfig::load_from_file(&path)?;
        assert_eq!(config, loaded);
        Ok(())
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            VecConfig::load_from_file(&path),
            Err(VectorError::Configuration { .. })
        ));

        let missing = dir.path().join("missing.json");
        assert!(matches!(
            VecConfig::load_from_file(&missing),
            Err(VectorError::Io(_))
        ));
    }
}
