/*!
 * Core Types
 * Common types used across the crate
 */

/// Process ID type, as assigned by the OS kernel
pub type Pid = u32;
