//! Per-Iteration Measurement Snapshot

/// One snapshot of everything the monitor measured this iteration.
///
/// Produced fresh every loop pass and not retained; cross-iteration state
/// lives in the estimators, not here. Sentinels follow the device
/// convention: `spo2` is within [70, 100] or exactly 0 (no valid
/// reading), `bpm` is within (30, 220) or 0, `co2_ppm` is always within
/// [400, 5000].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VitalsReading {
    /// Relative humidity (%RH); 0.0 when the sensor is absent.
    pub humidity: f32,
    /// Approximate CO2 concentration (ppm).
    pub co2_ppm: f32,
    /// Blood-oxygen estimate (%); 0.0 without tissue contact.
    pub spo2: f32,
    /// Heart rate (BPM); 0 without an accepted beat.
    pub bpm: u32,
}
