//! The Monitor Loop
//!
//! Orchestrates one sampling pass every period: read humidity, estimate
//! CO2 from the gas proxy, run beat detection and vitals estimation on
//! the pulse front-end, report the snapshot, then evaluate the alert
//! rules through the episode gate.
//!
//! Everything the loop mutates across iterations - beat history, beat
//! timestamp, alert gate - is owned by [`Monitor`], so a single
//! [`Monitor::step`] call is fully deterministic given its sensors and
//! clock, and tests can drive iterations directly without any real time
//! passing.
//!
//! The loop never terminates on its own and never fails: absent sensors
//! are detected once at build time and their readings degrade to
//! sentinels; a failed read falls back the same way and is retried by
//! the next iteration.

use core::fmt::Write as _;

use crate::air::AirQualityEstimator;
use crate::alert::{Alert, AlertGate};
use crate::constants::sensors::{FINGER_PRESENCE_IR, HUMIDITY_FALLBACK_PCT};
use crate::detector::BeatDetector;
use crate::reading::VitalsReading;
use crate::sensors::{GasSensor, HumiditySensor, PulseSensor};
use crate::time::{Clock, Ticker};
use crate::vitals::{BeatOutcome, VitalsEstimator};

/// Capacity of a formatted status report.
pub const STATUS_CAPACITY: usize = 96;

/// Capacity of a formatted alert line.
pub const ALERT_CAPACITY: usize = 64;

/// Sink for the monitor's line-oriented output.
pub trait Reporter {
    /// Called once per iteration with the fresh snapshot.
    fn status(&mut self, reading: &VitalsReading);

    /// Called when an alert episode opens (at most once per episode).
    fn alert(&mut self, alert: Alert);
}

/// Render the status block: header, humidity to 1 decimal, CO2 to 0
/// decimals, SpO2 to 1 decimal with integer BPM.
pub fn format_status(reading: &VitalsReading) -> heapless::String<STATUS_CAPACITY> {
    let mut out = heapless::String::new();
    let _ = write!(
        out,
        "=== status ===\nhumidity: {:.1} %\nco2 approx: {:.0} PPM\nspo2: {:.1} % | bpm: {}",
        reading.humidity, reading.co2_ppm, reading.spo2, reading.bpm
    );
    out
}

/// Render a single alert line.
pub fn format_alert(alert: Alert) -> heapless::String<ALERT_CAPACITY> {
    let mut out = heapless::String::new();
    let _ = write!(out, "ALERT: {}", alert.message());
    out
}

/// Reporter that prints to stdout (requires std).
#[cfg(feature = "std")]
#[derive(Debug, Clone, Default)]
pub struct ConsoleReporter;

#[cfg(feature = "std")]
impl Reporter for ConsoleReporter {
    fn status(&mut self, reading: &VitalsReading) {
        println!("{}", format_status(reading));
    }

    fn alert(&mut self, alert: Alert) {
        println!("\n{}\n", format_alert(alert));
    }
}

/// The polling monitor: sensors in, status lines and alerts out.
pub struct Monitor<H, G, P, C> {
    humidity: H,
    gas: G,
    pulse: P,
    clock: C,
    humidity_present: bool,
    pulse_present: bool,
    detector: BeatDetector,
    vitals: VitalsEstimator,
    air: AirQualityEstimator,
    gate: AlertGate,
}

impl<H, G, P, C> Monitor<H, G, P, C>
where
    H: HumiditySensor,
    G: GasSensor,
    P: PulseSensor,
    C: Clock,
{
    /// Build a monitor, probing each probeable sensor exactly once.
    ///
    /// Probe failures are logged and remembered; the affected readings
    /// report sentinels from then on and the monitor runs regardless.
    pub fn new(mut humidity: H, gas: G, mut pulse: P, clock: C) -> Self {
        let humidity_present = match humidity.probe() {
            Ok(()) => {
                #[cfg(feature = "log")]
                log::info!("humidity sensor detected");
                true
            }
            Err(_err) => {
                #[cfg(feature = "log")]
                log::warn!("humidity sensor not detected ({_err}), continuing without humidity");
                false
            }
        };

        let pulse_present = match pulse.probe() {
            Ok(()) => {
                #[cfg(feature = "log")]
                log::info!("pulse sensor detected");
                true
            }
            Err(_err) => {
                #[cfg(feature = "log")]
                log::warn!("pulse sensor not detected ({_err}), continuing without SpO2/BPM");
                false
            }
        };

        Self {
            humidity,
            gas,
            pulse,
            clock,
            humidity_present,
            pulse_present,
            detector: BeatDetector::new(),
            vitals: VitalsEstimator::new(),
            air: AirQualityEstimator::new(),
            gate: AlertGate::new(),
        }
    }

    /// Replace the default CO2 estimator, e.g. with a custom calibration.
    pub fn with_air_estimator(mut self, air: AirQualityEstimator) -> Self {
        self.air = air;
        self
    }

    /// Whether an alert episode is currently in progress.
    pub fn is_alerted(&self) -> bool {
        self.gate.is_alerted()
    }

    /// Run exactly one sampling pass and return its snapshot.
    pub fn step<R: Reporter>(&mut self, reporter: &mut R) -> VitalsReading {
        let humidity = if self.humidity_present {
            self.humidity
                .read_humidity()
                .unwrap_or(HUMIDITY_FALLBACK_PCT)
        } else {
            HUMIDITY_FALLBACK_PCT
        };

        let co2_ppm = self.air.estimate(self.gas.read_raw());

        if self.pulse_present {
            self.sample_pulse();
        } else {
            self.vitals.no_contact();
        }

        let reading = VitalsReading {
            humidity,
            co2_ppm,
            spo2: self.vitals.spo2(),
            bpm: self.vitals.bpm(),
        };

        reporter.status(&reading);

        if let Some(alert) = self.gate.update(Alert::evaluate(&reading)) {
            reporter.alert(alert);
        }

        reading
    }

    /// Run the loop until the ticker stops it (the production ticker
    /// never does).
    pub fn run<R: Reporter, T: Ticker>(&mut self, reporter: &mut R, ticker: &mut T) {
        loop {
            self.step(reporter);
            if !ticker.wait() {
                break;
            }
        }
    }

    fn sample_pulse(&mut self) {
        let ir = self.pulse.infrared();

        if ir <= FINGER_PRESENCE_IR {
            // No tissue on the sensor: vitals report their sentinels and
            // the detector is left untouched.
            self.vitals.no_contact();
            return;
        }

        if self.detector.update(ir) {
            let red = self.pulse.red();
            match self.vitals.on_beat(self.clock.now(), red, ir) {
                BeatOutcome::Accepted { .. } => {}
                BeatOutcome::Rejected(_reason) => {
                    #[cfg(feature = "log")]
                    log::debug!("beat rejected: {_reason:?}");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_format_reproduces_precision() {
        let reading = VitalsReading {
            humidity: 45.0,
            co2_ppm: 1466.6667,
            spo2: 88.7,
            bpm: 72,
        };

        assert_eq!(
            format_status(&reading).as_str(),
            "=== status ===\nhumidity: 45.0 %\nco2 approx: 1467 PPM\nspo2: 88.7 % | bpm: 72"
        );
    }

    #[test]
    fn status_format_with_sentinels() {
        let reading = VitalsReading {
            humidity: 0.0,
            co2_ppm: 400.0,
            spo2: 0.0,
            bpm: 0,
        };

        assert_eq!(
            format_status(&reading).as_str(),
            "=== status ===\nhumidity: 0.0 %\nco2 approx: 400 PPM\nspo2: 0.0 % | bpm: 0"
        );
    }

    #[test]
    fn alert_format() {
        assert_eq!(
            format_alert(Alert::StaleAir).as_str(),
            "ALERT: activate an air purifier automatically"
        );
    }

    #[test]
    fn longest_lines_fit_their_buffers() {
        let reading = VitalsReading {
            humidity: 100.0,
            co2_ppm: 5000.0,
            spo2: 100.0,
            bpm: 219,
        };
        let status = format_status(&reading);
        assert!(status.len() < STATUS_CAPACITY);

        let alert = format_alert(Alert::CrisisRisk);
        assert!(alert.len() < ALERT_CAPACITY);
    }
}
