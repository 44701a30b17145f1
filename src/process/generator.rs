/*!
 * Zombie Generator Loop
 * Creates children on a fixed cadence and never reaps them
 */

use super::spawn::{self, ForkOutcome};
use super::types::{GeneratorConfig, SpawnResult};
use log::info;
use std::convert::Infallible;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread;

/// Produces zombie processes at a fixed cadence.
///
/// Every child this generator creates exits on its own after
/// `child_lifetime` and is never waited on, so it stays in the process
/// table as a zombie for as long as the generator itself is alive.
pub struct ZombieGenerator {
    config: GeneratorConfig,
    spawned: AtomicU64,
}

impl ZombieGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        info!(
            "Zombie generator initialized (child lifetime: {:?}, spawn interval: {:?})",
            config.child_lifetime, config.spawn_interval
        );
        Self {
            config,
            spawned: AtomicU64::new(0),
        }
    }

    /// Number of children created so far
    pub fn spawned(&self) -> u64 {
        self.spawned.load(Ordering::Relaxed)
    }

    /// Run the generator loop forever.
    ///
    /// Only a failed creation makes this return, and that is fatal by
    /// design: no retry, no backoff. In the spawned role this never
    /// returns at all; the child exits the process with status 0 once its
    /// lifetime elapses.
    pub fn run(&self) -> SpawnResult<Infallible> {
        loop {
            self.generate_one()?;
            thread::sleep(self.config.spawn_interval);
        }
    }

    /// Bounded variant of `run` that checks `stop` between iterations.
    ///
    /// Deviation from the demonstration loop so the cadence can be driven
    /// under a test harness; the shipped binary uses `run`. Returns the
    /// number of children created by this call.
    pub fn run_until(&self, stop: &AtomicBool) -> SpawnResult<u64> {
        let mut created = 0;
        while !stop.load(Ordering::SeqCst) {
            self.generate_one()?;
            created += 1;
            thread::sleep(self.config.spawn_interval);
        }
        Ok(created)
    }

    /// Create one child. The originator logs the PID pair and returns
    /// without waiting; the child sleeps out its lifetime, then exits
    /// with status 0.
    fn generate_one(&self) -> SpawnResult<()> {
        match spawn::spawn_duplicate()? {
            ForkOutcome::Originator(child) => {
                self.spawned.fetch_add(1, Ordering::Relaxed);
                info!(
                    "Parent process (PID: {}) created child (PID: {})",
                    spawn::current_pid(),
                    child.pid()
                );
                // `child` is dropped here without a wait; once it exits,
                // its status sits uncollected in the process table.
                Ok(())
            }
            ForkOutcome::Spawned => self.child_main(),
        }
    }

    /// Body of the spawned role. Never returns.
    fn child_main(&self) -> SpawnResult<()> {
        let pid = spawn::current_pid();
        info!("Child process (PID: {}) started", pid);
        thread::sleep(self.config.child_lifetime);
        info!("Child process (PID: {}) exiting", pid);
        std::process::exit(0)
    }
}
