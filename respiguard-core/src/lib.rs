//! Core monitoring engine for RespiGuard
//!
//! Polls ambient humidity, an analog gas proxy and a photoplethysmography
//! sensor, derives CO2 concentration, SpO2 and heart rate, and raises a
//! single de-duplicated alert when thresholds are crossed.
//!
//! Key constraints:
//! - Runs on small MCUs (ESP32-class targets)
//! - No heap allocation in the sampling path
//! - Every sensor failure degrades to a sentinel reading, never a panic
//!
//! ```no_run
//! use respiguard_core::{
//!     monitor::{ConsoleReporter, Monitor},
//!     sensors::{ScriptedGas, ScriptedHumidity, ScriptedPulse},
//!     time::{SleepTicker, SystemClock},
//! };
//!
//! let mut monitor = Monitor::new(
//!     ScriptedHumidity::new(&[45.0]),
//!     ScriptedGas::new(&[550]),
//!     ScriptedPulse::absent(),
//!     SystemClock::new(),
//! );
//!
//! let mut ticker = SleepTicker::default();
//! monitor.run(&mut ConsoleReporter, &mut ticker);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod air;
pub mod alert;
pub mod buffer;
pub mod constants;
pub mod detector;
pub mod errors;
pub mod monitor;
pub mod reading;
pub mod sensors;
pub mod time;
pub mod vitals;

// Public API
pub use air::AirQualityEstimator;
pub use alert::{Alert, AlertGate};
pub use detector::BeatDetector;
pub use errors::{SensorError, SensorResult};
pub use monitor::{Monitor, Reporter};
pub use reading::VitalsReading;
pub use vitals::{BeatOutcome, RejectReason, VitalsEstimator};

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
