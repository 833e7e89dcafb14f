//! Configuration APIs for advanced-vector
//!
//! Configuration types implement the [`Config`] trait, which covers
//! validation, initialization from environment variables, presets, and
//! JSON file persistence.
//!
//! ```rust
//! use advanced_vector::config::{Config, VecConfig};
//! use advanced_vector::DynamicVec;
//!
//! let config = VecConfig::performance_preset();
//! let vec: DynamicVec<u32> = DynamicVec::with_config(&config).unwrap();
//! assert_eq!(vec.capacity(), config.initial_capacity);
//! ```
//!
//! Environment variables use the `ADVEC_` prefix by default, e.g.
//! `ADVEC_VEC_GROWTH_FACTOR=4`.

use crate::error::Result;
use std::env;
use std::fmt;
use std::path::Path;

pub mod vector;

pub use vector::{GrowthPolicy, VecConfig};

/// Common configuration trait providing validation, environment initialization,
/// and preset management functionality.
pub trait Config: Clone + fmt::Debug {
    /// Validate the configuration for correctness and consistency.
    fn validate(&self) -> Result<()>;

    /// Initialize configuration from environment variables with the `ADVEC_` prefix.
    fn from_env() -> Result<Self>
    where
        Self: Default,
    {
        Self::from_env_with_prefix("ADVEC_")
    }

    /// Initialize configuration from environment variables with a custom prefix.
    ///
    /// Unset or unparsable variables fall back to the default value.
    fn from_env_with_prefix(prefix: &str) -> Result<Self>
    where
        Self: Default;

    /// Preset favoring throughput over memory usage.
    fn performance_preset() -> Self;

    /// Preset favoring a small memory footprint.
    fn memory_preset() -> Self;

    /// Preset favoring few, predictable reallocations.
    fn realtime_preset() -> Self;

    /// Balanced preset, the default configuration.
    fn balanced_preset() -> Self
    where
        Self: Default,
    {
        Self::default()
    }

    /// Save configuration to a JSON file.
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()>;

    /// Load and validate configuration from a JSON file.
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self>;
}

/// Utility function to parse environment variable with fallback to default.
pub fn parse_env_var<T>(var_name: &str, default: T) -> T
where
    T: std::str::FromStr + Clone,
{
    env::var(var_name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_var_fallback() {
        assert_eq!(parse_env_var("ADVEC_DEFINITELY_UNSET_VAR", 17usize), 17);

        unsafe { env::set_var("ADVEC_PARSE_TEST_GARBAGE", "not-a-number"); }
        assert_eq!(parse_env_var("ADVEC_PARSE_TEST_GARBAGE", 3usize), 3);
        unsafe { env::remove_var("ADVEC_PARSE_TEST_GARBAGE"); }
    }
}
