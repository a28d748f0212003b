//! Alert Trigger Thresholds
//!
//! Levels at which the rule evaluator raises an alert. These are tuned for
//! indoor monitoring of a person at risk of respiratory crises; they are
//! deliberately conservative rather than clinical.

/// Relative humidity above which the room is considered crisis-prone (%RH).
///
/// High humidity combined with stale air aggravates asthma symptoms.
/// Only acted on together with [`CO2_ALERT_PPM`]; humidity alone never
/// triggers an alert.
///
/// Source: WHO indoor air quality guidance (60-70% RH upper comfort band)
pub const HUMIDITY_ALERT_PCT: f32 = 70.0;

/// CO2 concentration above which air is considered stale (ppm).
///
/// 1200 ppm is roughly the point where cognitive effects and respiratory
/// discomfort are reported in office studies. Outdoor baseline is ~420 ppm.
///
/// Source: ASHRAE 62.1 ventilation guidance
pub const CO2_ALERT_PPM: f32 = 1200.0;

/// SpO2 below which the wearer should act (%).
///
/// Healthy adults sit at 95-99%. Below 94% warrants intervention for an
/// at-risk person; sustained values below 90% are a medical emergency,
/// which this device does not attempt to distinguish.
pub const SPO2_LOW_PCT: f32 = 94.0;

/// Heart rate above which a calming prompt is issued (BPM).
///
/// Resting tachycardia threshold for adults. Exercise obviously exceeds
/// this; the device assumes a resting wearer.
pub const BPM_HIGH: u32 = 100;
