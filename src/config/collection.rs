//! Configuration for the array-backed containers.

use super::{parse_env_bool, parse_env_var, Config};
use crate::error::{CollectionError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Initial capacity used when no configuration is supplied.
pub const DEFAULT_INITIAL_CAPACITY: usize = 4;

/// Initial capacities and growth logging for the array-backed containers.
///
/// Node-backed containers allocate per element and ignore this configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionConfig {
    /// Initial (and post-`clear`) capacity of a `GrowableArray`
    pub array_initial_capacity: usize,
    /// Initial (and post-`clear`) capacity of a `CircularQueue`
    pub queue_initial_capacity: usize,
    /// Initial capacity of an `ArrayStack`
    pub stack_initial_capacity: usize,
    /// Emit a debug log record for every reallocation
    pub log_reallocations: bool,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            array_initial_capacity: DEFAULT_INITIAL_CAPACITY,
            queue_initial_capacity: DEFAULT_INITIAL_CAPACITY,
            stack_initial_capacity: DEFAULT_INITIAL_CAPACITY,
            log_reallocations: true,
        }
    }
}

impl Config for CollectionConfig {
    fn validate(&self) -> Result<()> {
        let capacities = [
            ("array_initial_capacity", self.array_initial_capacity),
            ("queue_initial_capacity", self.queue_initial_capacity),
            ("stack_initial_capacity", self.stack_initial_capacity),
        ];

        let zero_fields: Vec<&str> = capacities
            .iter()
            .filter(|(_, capacity)| *capacity == 0)
            .map(|(field, _)| *field)
            .collect();

        if !zero_fields.is_empty() {
            return Err(CollectionError::configuration(format!(
                "initial capacity must be at least 1 (zero in: {})",
                zero_fields.join(", ")
            )));
        }

        Ok(())
    }

    fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        let mut config = Self::default();

        config.array_initial_capacity = parse_env_var(
            &format!("{}ARRAY_INITIAL_CAPACITY", prefix),
            config.array_initial_capacity,
        );
        config.queue_initial_capacity = parse_env_var(
            &format!("{}QUEUE_INITIAL_CAPACITY", prefix),
            config.queue_initial_capacity,
        );
        config.stack_initial_capacity = parse_env_var(
            &format!("{}STACK_INITIAL_CAPACITY", prefix),
            config.stack_initial_capacity,
        );
        config.log_reallocations = parse_env_bool(
            &format!("{}LOG_REALLOCATIONS", prefix),
            config.log_reallocations,
        );

        config.validate()?;
        Ok(config)
    }

    fn performance_preset() -> Self {
        Self {
            array_initial_capacity: 64,
            queue_initial_capacity: 64,
            stack_initial_capacity: 64,
            log_reallocations: false,
        }
    }

    fn memory_preset() -> Self {
        Self {
            array_initial_capacity: 1,
            queue_initial_capacity: 1,
            stack_initial_capacity: 1,
            log_reallocations: true,
        }
    }

    fn realtime_preset() -> Self {
        Self {
            array_initial_capacity: 1024,
            queue_initial_capacity: 1024,
            stack_initial_capacity: 1024,
            log_reallocations: false,
        }
    }

    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serialized = serde_json::to_string_pretty(self).map_err(|e| {
            CollectionError::configuration(format!("Failed to serialize collection config: {}", e))
        })?;

        std::fs::write(path, serialized)?;
        Ok(())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = serde_json::from_str(&content).map_err(|e| {
            CollectionError::configuration(format!("Failed to parse collection config file: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }
}

impl CollectionConfig {
    /// Create a new collection configuration builder.
    pub fn builder() -> CollectionConfigBuilder {
        CollectionConfigBuilder::new()
    }
}

/// Builder for constructing collection configurations.
#[derive(Debug, Clone, Default)]
pub struct CollectionConfigBuilder {
    config: CollectionConfig,
}

impl CollectionConfigBuilder {
    /// Create a new builder starting from the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial capacity of growable arrays.
    pub fn array_initial_capacity(mut self, capacity: usize) -> Self {
        self.config.array_initial_capacity = capacity;
        self
    }

    /// Set the initial capacity of circular queues.
    pub fn queue_initial_capacity(mut self, capacity: usize) -> Self {
        self.config.queue_initial_capacity = capacity;
        self
    }

    /// Set the initial capacity of array stacks.
    pub fn stack_initial_capacity(mut self, capacity: usize) -> Self {
        self.config.stack_initial_capacity = capacity;
        self
    }

    /// Enable or disable reallocation logging.
    pub fn log_reallocations(mut self, enabled: bool) -> Self {
        self.config.log_reallocations = enabled;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<CollectionConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
