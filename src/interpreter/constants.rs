// Constants for the demonstration interpreter and its history

/// Default memory budget for the snapshot history (64 MB)
pub const DEFAULT_SNAPSHOT_LIMIT: usize = 64 * 1024 * 1024;

/// Fixed per-snapshot overhead used by the size estimate
pub const SNAPSHOT_BASE_ESTIMATE: usize = 64;

/// Estimated bytes per variable table entry
pub const VARIABLE_ENTRY_ESTIMATE: usize = 32;

/// Estimated bytes per captured terminal line
pub const TERMINAL_LINE_ESTIMATE: usize = 50;

/// Prefix of every line the demonstration run prints
pub const OUTPUT_PREFIX: &str = "Output: ";
