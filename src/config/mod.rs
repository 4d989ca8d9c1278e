//! Configuration APIs for linear-collections
//!
//! The containers themselves never read the environment or touch files. Their
//! tunables (initial capacities and growth logging) live in
//! [`CollectionConfig`], which can be built from presets, read from
//! environment variables, or loaded from a JSON file.
//!
//! # Preset Configurations
//!
//! ```rust
//! use linear_collections::config::{CollectionConfig, Config};
//!
//! // Large initial buffers, fewer reallocations
//! let config = CollectionConfig::performance_preset();
//!
//! // Smallest possible initial buffers
//! let config = CollectionConfig::memory_preset();
//! ```
//!
//! # Environment Initialization
//!
//! ```rust
//! use linear_collections::config::{CollectionConfig, Config};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Reads LINEAR_ARRAY_INITIAL_CAPACITY and friends
//! let config = CollectionConfig::from_env()?;
//!
//! // Custom prefix
//! let config = CollectionConfig::from_env_with_prefix("MYAPP_")?;
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use std::env;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

pub mod collection;

pub use collection::{CollectionConfig, CollectionConfigBuilder};

/// Default prefix for environment variables read by [`Config::from_env`].
pub const ENV_PREFIX: &str = "LINEAR_";

/// Common configuration trait providing validation, environment initialization,
/// and preset management functionality.
pub trait Config: Clone + fmt::Debug {
    /// Validate the configuration for correctness and consistency.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the configuration is valid, `Err` with details if invalid.
    fn validate(&self) -> Result<()>;

    /// Initialize configuration from environment variables.
    ///
    /// Environment variables use the format `LINEAR_{FIELD}`, for example
    /// `LINEAR_QUEUE_INITIAL_CAPACITY=16`. Unset or unparsable variables
    /// leave the default value in place.
    fn from_env() -> Result<Self>
    where
        Self: Default,
    {
        Self::from_env_with_prefix(ENV_PREFIX)
    }

    /// Initialize configuration from environment variables with a custom prefix.
    ///
    /// # Arguments
    ///
    /// * `prefix` - The environment variable prefix to use
    fn from_env_with_prefix(prefix: &str) -> Result<Self>
    where
        Self: Default;

    /// Get a performance-optimized preset configuration.
    ///
    /// Favors fewer reallocations over a small initial footprint.
    fn performance_preset() -> Self;

    /// Get a memory-optimized preset configuration.
    fn memory_preset() -> Self;

    /// Get a real-time preset configuration.
    ///
    /// Sized so that typical workloads never reallocate after construction,
    /// keeping per-operation latency flat.
    fn realtime_preset() -> Self;

    /// Get a balanced preset configuration.
    fn balanced_preset() -> Self
    where
        Self: Default,
    {
        Self::default()
    }

    /// Save configuration to a file as pretty-printed JSON.
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()>;

    /// Load configuration from a JSON file and validate it.
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self>;
}

/// Read `var_name` and parse it as `T`.
///
/// Surrounding whitespace is ignored. An unset or unparsable variable yields
/// `default`.
pub fn parse_env_var<T: FromStr>(var_name: &str, default: T) -> T {
    match env::var(var_name) {
        Ok(raw) => raw.trim().parse().unwrap_or(default),
        Err(_) => default,
    }
}

/// Read `var_name` as a flag.
///
/// `true`, `1`, `yes` and `on` (any case) switch it on; any other value
/// switches it off. An unset variable yields `default`.
pub fn parse_env_bool(var_name: &str, default: bool) -> bool {
    match env::var(var_name) {
        Ok(raw) => is_truthy(raw.trim()),
        Err(_) => default,
    }
}

fn is_truthy(raw: &str) -> bool {
    ["true", "1", "yes", "on"]
        .iter()
        .any(|word| raw.eq_ignore_ascii_case(word))
}
