/*!
 * Zombie Generator Tests
 * Tests for spawn roles, cadence, and the no-reap contract
 */

use pretty_assertions::assert_eq;
use serial_test::serial;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use zombie_maker::process::{current_pid, spawn_duplicate, ForkOutcome};
use zombie_maker::{GeneratorConfig, ZombieGenerator};

#[test]
#[serial]
fn test_fork_reports_distinct_pids() {
    match spawn_duplicate().unwrap() {
        ForkOutcome::Originator(child) => {
            assert!(child.pid() > 0);
            assert_ne!(child.pid(), current_pid());
        }
        ForkOutcome::Spawned => {
            // Child copy of the test harness: leave immediately.
            std::process::exit(0);
        }
    }
}

#[test]
#[serial]
#[cfg(target_os = "linux")]
fn test_unreaped_child_becomes_zombie() {
    match spawn_duplicate().unwrap() {
        ForkOutcome::Spawned => std::process::exit(0),
        ForkOutcome::Originator(child) => {
            // Give the child time to exit. Nobody in this process waits on
            // it, so its state in the process table must read as zombie.
            thread::sleep(Duration::from_millis(200));

            let stat = std::fs::read_to_string(format!("/proc/{}/stat", child.pid()))
                .expect("child must still occupy a process-table slot");
            let state = stat
                .rsplit(')')
                .next()
                .and_then(|rest| rest.trim_start().chars().next())
                .expect("malformed stat line");
            assert_eq!(state, 'Z');
        }
    }
}

#[test]
#[serial]
fn test_run_until_spawns_at_cadence() {
    let config = GeneratorConfig::new()
        .with_child_lifetime(Duration::from_millis(10))
        .with_spawn_interval(Duration::from_millis(20));
    let generator = Arc::new(ZombieGenerator::new(config));
    let stop = Arc::new(AtomicBool::new(false));

    let worker = {
        let generator = Arc::clone(&generator);
        let stop = Arc::clone(&stop);
        thread::spawn(move || generator.run_until(&stop))
    };

    // A bit over three intervals: at least two creations must land.
    thread::sleep(Duration::from_millis(70));
    stop.store(true, Ordering::SeqCst);

    let created = worker.join().unwrap().unwrap();
    assert!(created >= 2, "expected at least two creations, got {created}");
    assert_eq!(generator.spawned(), created);
}
