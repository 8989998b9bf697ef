//! Configuration module for membuf
//!
//! Buffers are usually built with defaults; embedding applications that
//! carry their own JSON configuration can hand the raw bytes here.

use serde::Deserialize;

use crate::buffer::BLOCK_SIZE;

/// Buffer construction settings
#[derive(Clone, Debug, Deserialize)]
pub struct BufferConfig {
    /// Capacity requested at construction (rounded up to the block grid)
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,

    /// Growth granularity; capacity is always a multiple of this
    #[serde(default = "default_block_size")]
    pub block_size: usize,

    /// Whether the buffer emits structured telemetry events
    #[serde(default = "default_log_events")]
    pub log_events: bool,
}

fn default_initial_capacity() -> usize {
    BLOCK_SIZE
}

fn default_block_size() -> usize {
    BLOCK_SIZE
}

fn default_log_events() -> bool {
    true
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            initial_capacity: default_initial_capacity(),
            block_size: default_block_size(),
            log_events: default_log_events(),
        }
    }
}

impl BufferConfig {
    /// Parse configuration from JSON bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config_str =
            std::str::from_utf8(bytes).map_err(|e| ConfigError::InvalidUtf8(e.to_string()))?;

        let config: Self = serde_json::from_str(config_str)
            .map_err(|e| ConfigError::InvalidJson(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject settings the growth rule cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.block_size == 0 {
            return Err(ConfigError::InvalidBlockSize(self.block_size));
        }
        Ok(())
    }
}

/// Configuration parsing errors
#[derive(Debug)]
pub enum ConfigError {
    InvalidUtf8(String),
    InvalidJson(String),
    InvalidBlockSize(usize),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidUtf8(e) => write!(f, "Invalid UTF-8: {}", e),
            ConfigError::InvalidJson(e) => write!(f, "Invalid JSON: {}", e),
            ConfigError::InvalidBlockSize(size) => {
                write!(f, "Invalid block size: {} (must be > 0)", size)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
