//! Time-Related Constants
//!
//! Unit conversions and the sampling cadence of the monitor loop.

/// Milliseconds per second.
pub const MS_PER_SECOND: u64 = 1000;

/// Milliseconds per minute. Used to turn inter-beat intervals into BPM.
pub const MS_PER_MINUTE: u64 = 60_000;

/// Monitor loop period (milliseconds).
///
/// One full sample-estimate-report pass every 2 seconds. Slow enough for
/// battery operation, fast enough that an alert lags a real condition by
/// at most one period.
pub const SAMPLE_INTERVAL_MS: u64 = 2000;
