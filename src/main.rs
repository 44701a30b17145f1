/*!
 * Zombie Maker - Main Entry Point
 *
 * Fault-injection demo that provides:
 * - A fixed-cadence loop creating child processes
 * - Children that exit on their own and are never reaped
 */

use std::error::Error;
use tracing::info;

use zombie_maker::process::current_pid;
use zombie_maker::{init_tracing, GeneratorConfig, ZombieGenerator};

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize structured tracing
    init_tracing();

    info!("Zombie maker service started (PID: {})", current_pid());
    info!("Press Ctrl+C to exit; accumulated zombies are released when this process dies");

    let generator = ZombieGenerator::new(GeneratorConfig::new());

    // The continuing role loops forever and the spawned role exits on its
    // own, so the only way back out is a failed creation.
    match generator.run() {
        Ok(never) => match never {},
        Err(e) => {
            tracing::error!(error = %e, "Process creation failed");
            Err(e.into())
        }
    }
}
