//! Error Types for Sensor Collaborators
//!
//! Errors only exist at the sensor seam: a collaborator can be missing
//! from the bus or a single read can fail. The monitor never propagates
//! them - every failure degrades to a sentinel reading and the loop keeps
//! polling (the next iteration is the retry).
//!
//! Errors stay small: `Copy`, no heap, `&'static str` reasons only, so
//! they can be returned from hot paths and formatted on targets without
//! an allocator.

use thiserror_no_std::Error;

/// Result type for sensor operations.
pub type SensorResult<T> = Result<T, SensorError>;

/// Failures a sensor collaborator can report.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// The device did not answer on the bus during probing.
    #[error("sensor not detected on the bus")]
    NotDetected,

    /// A single read failed; the device itself is still present.
    #[error("sensor read failed: {reason}")]
    ReadFailed {
        /// Short static description of what went wrong.
        reason: &'static str,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for SensorError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::NotDetected => defmt::write!(fmt, "sensor not detected"),
            Self::ReadFailed { reason } => defmt::write!(fmt, "read failed: {}", reason),
        }
    }
}
