/*!
 * Process Types
 * Common types for zombie generation
 */

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Spawn operation result
pub type SpawnResult<T> = Result<T, SpawnError>;

/// Spawn errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpawnError {
    #[error("Process creation failed: {0}")]
    CreationFailed(String),
}

/// Configuration for the zombie generator loop
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GeneratorConfig {
    /// How long a spawned child stays alive before exiting
    pub child_lifetime: Duration,
    /// Delay in the continuing role between creations
    pub spawn_interval: Duration,
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self {
            child_lifetime: Duration::from_secs(60),
            spawn_interval: Duration::from_secs(30),
        }
    }

    pub fn with_child_lifetime(mut self, lifetime: Duration) -> Self {
        self.child_lifetime = lifetime;
        self
    }

    pub fn with_spawn_interval(mut self, interval: Duration) -> Self {
        self.spawn_interval = interval;
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}
