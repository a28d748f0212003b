//! BPM and SpO2 Estimation from Beat Timing
//!
//! Consumes beat events (timestamp of the detection) plus the red/infrared
//! intensity pair and maintains the current heart rate and blood-oxygen
//! estimate.
//!
//! ## Acceptance gating
//!
//! A beat only updates the vitals when its timing is plausible:
//!
//! 1. The inter-beat interval must exceed the debounce window (300 ms,
//!    i.e. 200 BPM) - anything faster is a double-trigger.
//! 2. The resulting rate must fall strictly inside (30, 220) BPM.
//!
//! Rejected beats still advance the beat timestamp but leave the previous
//! BPM/SpO2 in place. Every call returns a [`BeatOutcome`] tagging the
//! measurement as accepted or rejected with a reason, so callers can
//! decide whether a stale value is acceptable instead of discovering it
//! later.
//!
//! SpO2 uses the standard first-order ratio fit
//! `104 - 17 * (red / ir)`, clamped to [70, 100]. The value 0 is reserved
//! as the "no valid reading" sentinel reported while the sensor has no
//! tissue contact.

use crate::constants::sensors::{SPO2_INTERCEPT, SPO2_MAX_PCT, SPO2_MIN_PCT, SPO2_SLOPE};
use crate::constants::time::MS_PER_MINUTE;
use crate::constants::vitals::{BEAT_DEBOUNCE_MS, BPM_MAX, BPM_MIN};
use crate::time::Timestamp;

/// Why a beat did not update the vitals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Interval at or below the debounce window; double-trigger.
    Debounce,
    /// Computed rate outside the plausible (30, 220) BPM band.
    ImplausibleRate,
}

/// Result of feeding one beat to the estimator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BeatOutcome {
    /// The beat updated the vitals to these values.
    Accepted {
        /// Heart rate derived from the inter-beat interval.
        bpm: u32,
        /// Blood-oxygen estimate derived from the red/IR ratio.
        spo2: f32,
    },
    /// The beat was discarded; previous vitals remain in effect.
    Rejected(RejectReason),
}

/// Derives BPM and SpO2 from beat events.
#[derive(Debug, Clone)]
pub struct VitalsEstimator {
    last_beat_at: Timestamp,
    bpm: u32,
    spo2: f32,
}

impl VitalsEstimator {
    /// Create an estimator with no beat history and sentinel vitals.
    pub const fn new() -> Self {
        Self {
            last_beat_at: 0,
            bpm: 0,
            spo2: 0.0,
        }
    }

    /// Current heart rate; 0 until a beat has been accepted.
    pub fn bpm(&self) -> u32 {
        self.bpm
    }

    /// Current SpO2 estimate; 0.0 until a beat has been accepted.
    pub fn spo2(&self) -> f32 {
        self.spo2
    }

    /// Timestamp of the most recent beat, accepted or not.
    pub fn last_beat_at(&self) -> Timestamp {
        self.last_beat_at
    }

    /// Process a beat detected at `now` with the current intensity pair.
    ///
    /// The beat timestamp advances unconditionally; the vitals only
    /// change when the outcome is [`BeatOutcome::Accepted`].
    pub fn on_beat(&mut self, now: Timestamp, red: u32, ir: u32) -> BeatOutcome {
        let delta = now.saturating_sub(self.last_beat_at);
        self.last_beat_at = now;

        if delta <= BEAT_DEBOUNCE_MS {
            return BeatOutcome::Rejected(RejectReason::Debounce);
        }

        let bpm = (MS_PER_MINUTE / delta) as u32;
        if bpm <= BPM_MIN || bpm >= BPM_MAX {
            return BeatOutcome::Rejected(RejectReason::ImplausibleRate);
        }

        let ratio = red as f32 / ir as f32;
        let spo2 = (SPO2_INTERCEPT - SPO2_SLOPE * ratio).clamp(SPO2_MIN_PCT, SPO2_MAX_PCT);

        self.bpm = bpm;
        self.spo2 = spo2;
        BeatOutcome::Accepted { bpm, spo2 }
    }

    /// Force the sentinel vitals: no tissue on the sensor.
    ///
    /// Overrides whatever the last accepted beat produced; the beat
    /// timestamp is left alone so contact regaining does not look like a
    /// fresh epoch.
    pub fn no_contact(&mut self) {
        self.bpm = 0;
        self.spo2 = 0.0;
    }
}

impl Default for VitalsEstimator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debounced_beat_keeps_previous_vitals() {
        let mut vitals = VitalsEstimator::new();

        // Establish a valid reading: 1000 ms interval = 60 BPM.
        let outcome = vitals.on_beat(1000, 54_000, 60_000);
        assert!(matches!(outcome, BeatOutcome::Accepted { bpm: 60, .. }));

        // 200 ms later: inside the debounce window.
        let outcome = vitals.on_beat(1200, 54_000, 60_000);
        assert_eq!(outcome, BeatOutcome::Rejected(RejectReason::Debounce));
        assert_eq!(vitals.bpm(), 60);

        // The rejected beat still moved the timestamp.
        assert_eq!(vitals.last_beat_at(), 1200);
    }

    #[test]
    fn debounce_boundary_is_inclusive() {
        let mut vitals = VitalsEstimator::new();
        vitals.on_beat(1000, 54_000, 60_000);

        // Exactly 300 ms is still rejected.
        let outcome = vitals.on_beat(1300, 54_000, 60_000);
        assert_eq!(outcome, BeatOutcome::Rejected(RejectReason::Debounce));
    }

    #[test]
    fn implausible_rate_is_rejected() {
        let mut vitals = VitalsEstimator::new();
        vitals.on_beat(1000, 54_000, 60_000);
        assert_eq!(vitals.bpm(), 60);

        // 2000 ms interval = exactly 30 BPM, outside the open interval.
        let outcome = vitals.on_beat(3000, 54_000, 60_000);
        assert_eq!(
            outcome,
            BeatOutcome::Rejected(RejectReason::ImplausibleRate)
        );
        assert_eq!(vitals.bpm(), 60);

        // Long dropout: 10 s interval = 6 BPM, also rejected.
        let outcome = vitals.on_beat(13_000, 54_000, 60_000);
        assert_eq!(
            outcome,
            BeatOutcome::Rejected(RejectReason::ImplausibleRate)
        );
        assert_eq!(vitals.bpm(), 60);
    }

    #[test]
    fn accepted_beat_computes_ratio_spo2() {
        let mut vitals = VitalsEstimator::new();

        // ratio 54000/60000 = 0.9 -> spo2 = 104 - 17*0.9 = 88.7
        let outcome = vitals.on_beat(1000, 54_000, 60_000);
        match outcome {
            BeatOutcome::Accepted { bpm, spo2 } => {
                assert_eq!(bpm, 60);
                assert!((spo2 - 88.7).abs() < 0.01);
            }
            other => panic!("expected acceptance, got {:?}", other),
        }
        assert!((vitals.spo2() - 88.7).abs() < 0.01);
    }

    #[test]
    fn spo2_clamps_to_band() {
        let mut vitals = VitalsEstimator::new();

        // ratio 0.1 -> 104 - 1.7 = 102.3, clamped to 100.
        vitals.on_beat(1000, 6_000, 60_000);
        assert_eq!(vitals.spo2(), 100.0);

        // ratio 2.5 -> 104 - 42.5 = 61.5, clamped to 70.
        vitals.on_beat(2000, 150_000, 60_000);
        assert_eq!(vitals.spo2(), 70.0);
    }

    #[test]
    fn no_contact_forces_sentinels() {
        let mut vitals = VitalsEstimator::new();
        vitals.on_beat(1000, 54_000, 60_000);
        assert_eq!(vitals.bpm(), 60);

        vitals.no_contact();
        assert_eq!(vitals.bpm(), 0);
        assert_eq!(vitals.spo2(), 0.0);
    }

    #[test]
    fn first_beat_from_boot_can_be_accepted() {
        let mut vitals = VitalsEstimator::new();

        // The initial timestamp is 0, so a beat 800 ms after boot is a
        // plausible 75 BPM.
        let outcome = vitals.on_beat(800, 54_000, 60_000);
        assert!(matches!(outcome, BeatOutcome::Accepted { bpm: 75, .. }));
    }
}
