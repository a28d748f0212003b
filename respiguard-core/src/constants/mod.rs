//! Constants for RespiGuard Core
//!
//! Centralized numeric values used throughout the monitor, grouped by
//! domain. Thresholds and calibration anchors are compile-time constants:
//! the device carries no configuration file and no persisted state.
//!
//! ## Organization
//!
//! - **Thresholds**: alert trigger levels
//! - **Sensors**: sensor characteristics and calibration anchors
//! - **Vitals**: beat detection and vitals acceptance windows
//! - **Time**: sampling intervals and unit conversions

/// Alert trigger thresholds for the rule evaluator.
pub mod thresholds;

/// Sensor characteristics, presence gates and calibration anchors.
pub mod sensors;

/// Beat detection and vitals acceptance parameters.
pub mod vitals;

/// Sampling intervals and time unit conversions.
pub mod time;

// Re-export commonly used constants for convenience
pub use thresholds::{BPM_HIGH, CO2_ALERT_PPM, HUMIDITY_ALERT_PCT, SPO2_LOW_PCT};

pub use sensors::{
    CO2_CLAMP_MAX_PPM, CO2_CLAMP_MIN_PPM, FINGER_PRESENCE_IR, SPO2_MAX_PCT, SPO2_MIN_PCT,
};

pub use vitals::{BEAT_DEBOUNCE_MS, BPM_MAX, BPM_MIN};

pub use time::{MS_PER_MINUTE, MS_PER_SECOND, SAMPLE_INTERVAL_MS};
