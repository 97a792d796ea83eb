/// Bounds enforced by [`AppConfig::validate`](super::AppConfig::validate)

/// Longest accepted delay for either switch phase (milliseconds)
pub const MAX_TRANSITION_PHASE_MS: u64 = 5_000;

/// Event polling bounds (milliseconds)
pub const MIN_POLL_TIMEOUT_MS: u64 = 10;
pub const MAX_POLL_TIMEOUT_MS: u64 = 1_000;

/// Tick interval bounds (milliseconds)
pub const MIN_TICK_INTERVAL_MS: u64 = 10;
pub const MAX_TICK_INTERVAL_MS: u64 = 1_000;

/// Width of one terminal cell used for breakpoint decisions (px)
pub const MIN_CELL_WIDTH_PX: u16 = 4;
pub const MAX_CELL_WIDTH_PX: u16 = 32;

/// Background task concurrency
pub const MAX_WORKER_TASKS: usize = 64;

/// Accepted log levels
pub const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];
