//! Threshold Alerts and Notification De-Duplication
//!
//! ## Rule evaluation
//!
//! Four rules are checked in fixed priority order against the current
//! reading; the first match wins and at most one alert exists per
//! iteration. All comparisons are strict, so a CO2 estimate of exactly
//! 1200.0 ppm does not count as stale air.
//!
//! ## Episode gating
//!
//! A condition that persists across iterations must not spam the wearer.
//! [`AlertGate`] is a two-state machine (`Quiet`/`Alerted`) that lets the
//! first matching iteration through and suppresses the rest until an
//! iteration with no match re-arms it.
//!
//! The gate tracks *whether* an alert is active, not *which* one: if the
//! room degrades from stale air into full crisis conditions mid-episode,
//! the escalation is not re-announced. The contract is one notification
//! per contiguous episode; callers wanting per-rule de-duplication
//! should track a set of active [`Alert`] values instead.

use crate::constants::thresholds::{BPM_HIGH, CO2_ALERT_PPM, HUMIDITY_ALERT_PCT, SPO2_LOW_PCT};
use crate::reading::VitalsReading;

/// Alert conditions, declared in priority order (highest first).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alert {
    /// Humid and CO2-saturated room; crisis-prone conditions.
    CrisisRisk,
    /// CO2 alone above the stale-air threshold.
    StaleAir,
    /// Valid SpO2 reading below the intervention level.
    LowSpo2,
    /// Heart rate above the resting tachycardia level.
    HighHeartRate,
}

impl Alert {
    /// Evaluate the rules against a reading; first match wins.
    pub fn evaluate(reading: &VitalsReading) -> Option<Alert> {
        if reading.humidity > HUMIDITY_ALERT_PCT && reading.co2_ppm > CO2_ALERT_PPM {
            Some(Alert::CrisisRisk)
        } else if reading.co2_ppm > CO2_ALERT_PPM {
            Some(Alert::StaleAir)
        } else if reading.spo2 > 0.0 && reading.spo2 < SPO2_LOW_PCT {
            Some(Alert::LowSpo2)
        } else if reading.bpm > BPM_HIGH {
            Some(Alert::HighHeartRate)
        } else {
            None
        }
    }

    /// Advice text shown to the wearer.
    pub const fn message(&self) -> &'static str {
        match self {
            Alert::CrisisRisk => "high crisis risk, ventilate or leave the room",
            Alert::StaleAir => "activate an air purifier automatically",
            Alert::LowSpo2 => "use your inhaler",
            Alert::HighHeartRate => "elevated heart rate, breathe calmly",
        }
    }
}

/// Suppresses repeat notifications while an alert condition persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GateState {
    /// No active episode; the next match notifies.
    Quiet,
    /// An episode is in progress and has already been announced.
    Alerted,
}

/// Two-state notification gate over alert episodes.
#[derive(Debug, Clone)]
pub struct AlertGate {
    state: GateState,
}

impl AlertGate {
    /// Create a gate in the quiet, armed state.
    pub const fn new() -> Self {
        Self {
            state: GateState::Quiet,
        }
    }

    /// Whether an episode is currently in progress.
    pub fn is_alerted(&self) -> bool {
        self.state == GateState::Alerted
    }

    /// Feed this iteration's evaluation result through the gate.
    ///
    /// Returns the alert to announce, exactly once per contiguous
    /// episode. A `None` input re-arms the gate.
    pub fn update(&mut self, alert: Option<Alert>) -> Option<Alert> {
        match (self.state, alert) {
            (GateState::Quiet, Some(alert)) => {
                self.state = GateState::Alerted;
                Some(alert)
            }
            (GateState::Alerted, Some(_)) => None,
            (_, None) => {
                self.state = GateState::Quiet;
                None
            }
        }
    }
}

impl Default for AlertGate {
    fn default() -> Self {
        Self::new()
    }
}
