//! Beat Detection and Vitals Acceptance Parameters
//!
//! Windows and gates used when turning raw infrared samples into beats and
//! beats into BPM/SpO2 values.

/// Minimum inter-beat interval accepted by the vitals estimator (ms).
///
/// Intervals at or below this are double-triggers or electrical noise:
/// 300 ms corresponds to 200 BPM, well above anything a resting wearer
/// produces.
pub const BEAT_DEBOUNCE_MS: u64 = 300;

/// Lowest plausible heart rate (BPM, exclusive).
pub const BPM_MIN: u32 = 30;

/// Highest plausible heart rate (BPM, exclusive).
pub const BPM_MAX: u32 = 220;

/// Number of recent infrared samples the beat detector keeps.
///
/// Power of 2 so the ring index math compiles to a mask.
pub const BEAT_WINDOW_SAMPLES: usize = 8;

/// Samples required in the window before detection is attempted.
///
/// The moving average is meaningless until the window has some history.
pub const BEAT_MIN_SAMPLES: usize = 4;

/// Counts above the moving average a sample must rise to count as a beat.
///
/// Rejects ADC jitter around a flat baseline. Pulsatile swings on a
/// MAX3010x-class part are hundreds to thousands of counts.
pub const BEAT_RISE_MARGIN: f32 = 50.0;

/// Minimum spacing between detections, in samples.
pub const BEAT_REFRACTORY_SAMPLES: u32 = 3;
