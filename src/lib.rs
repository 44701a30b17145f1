/*!
 * Zombie Maker Library
 * Zombie-generation functionality exposed as a library
 */

pub mod core;
pub mod monitoring;
pub mod process;

// Re-exports
pub use monitoring::init_tracing;
pub use process::{GeneratorConfig, SpawnError, SpawnResult, ZombieGenerator};
