//! Beat Detection from Raw Infrared Samples
//!
//! ## Signal model
//!
//! A photoplethysmography front-end reports a large, slowly drifting DC
//! level (tissue, ambient light) with a small pulsatile AC component on
//! top. Each heartbeat shows up as a rise of hundreds to thousands of
//! counts above the local baseline.
//!
//! The detector estimates the baseline as the moving average of a short
//! sample window, arms itself whenever the signal dips below that
//! baseline (the trough between pulses), and fires on the next rising
//! edge that clears the baseline by a margin. A refractory gate measured
//! in samples suppresses double-fires on a single pulse.
//!
//! The window free-runs for the lifetime of the process: there is no
//! reset path, matching how the device is used (strapped on once, polled
//! forever). Callers are expected to consult the detector only while the
//! finger-presence gate is satisfied; samples taken in open air would
//! drag the baseline down and produce spurious edges.

use crate::buffer::SampleWindow;
use crate::constants::vitals::{
    BEAT_MIN_SAMPLES, BEAT_REFRACTORY_SAMPLES, BEAT_RISE_MARGIN, BEAT_WINDOW_SAMPLES,
};

/// Decides whether a raw infrared sample represents a heartbeat.
#[derive(Debug, Clone)]
pub struct BeatDetector {
    window: SampleWindow<BEAT_WINDOW_SAMPLES>,
    samples_since_beat: u32,
    armed: bool,
}

impl BeatDetector {
    /// Create a detector with an empty sample history.
    pub const fn new() -> Self {
        Self {
            window: SampleWindow::new(),
            // Start with the refractory gate already satisfied so the
            // first genuine pulse after warm-up is not swallowed.
            samples_since_beat: BEAT_REFRACTORY_SAMPLES,
            armed: false,
        }
    }

    /// Feed one raw infrared sample; returns true if a beat fired now.
    pub fn update(&mut self, sample: u32) -> bool {
        self.samples_since_beat = self.samples_since_beat.saturating_add(1);
        self.window.push(sample);

        if self.window.len() < BEAT_MIN_SAMPLES {
            return false;
        }

        let baseline = self.window.mean();
        let magnitude = sample as f32;

        if magnitude < baseline {
            // Trough between pulses: arm for the next rising edge.
            self.armed = true;
            return false;
        }

        if self.armed
            && magnitude > baseline + BEAT_RISE_MARGIN
            && self.samples_since_beat >= BEAT_REFRACTORY_SAMPLES
        {
            self.armed = false;
            self.samples_since_beat = 0;
            return true;
        }

        false
    }
}

impl Default for BeatDetector {
    fn default() -> Self {
        Self::new()
    }
}
