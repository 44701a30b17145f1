/*!
 * Process Module
 * Fork wrapper and the zombie generator loop
 */

pub mod generator;
pub mod spawn;
pub mod types;

// Re-export for convenience
pub use generator::ZombieGenerator;
pub use spawn::{current_pid, spawn_duplicate, ChildHandle, ForkOutcome};
pub use types::{GeneratorConfig, SpawnError, SpawnResult};
