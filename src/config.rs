//! Configuration System
//!
//! Settings for the generation runner and logging, layered from built-in
//! defaults, a user-level file, project files and environment variables.
//! The library API never reads configuration on its own: callers hand a
//! `GenerationConfig` to `Runner::from_config`.

use crate::error::TracegenError;
use crate::logging::LoggingConfig;
use crate::time::TimeSpan;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TracegenConfig {
    /// Generator run settings
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the initial generation state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Fixed seed for reproducible runs; fresh entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,

    /// Clock increment applied after each timed insertion, in milliseconds
    #[serde(default = "default_clock_delta_ms")]
    pub clock_delta_ms: u64,
}

fn default_clock_delta_ms() -> u64 {
    TimeSpan::DEFAULT.as_millis() as u64
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            clock_delta_ms: default_clock_delta_ms(),
        }
    }
}

impl GenerationConfig {
    pub fn clock_delta(&self) -> TimeSpan {
        TimeSpan::from_millis(self.clock_delta_ms)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.clock_delta_ms == 0 {
            return Err("clock_delta_ms must be positive".to_string());
        }
        Ok(())
    }
}

impl TracegenConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), TracegenError> {
        self.generation
            .validate()
            .map_err(|e| TracegenError::Config(format!("generation: {}", e)))
    }
}
