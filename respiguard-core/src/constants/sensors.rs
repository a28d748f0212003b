//! Sensor Characteristics and Calibration Anchors
//!
//! Operational constants for the three sensor collaborators: the humidity
//! source, the analog gas proxy and the photoplethysmography front-end.
//! Values follow the MQ-135 and MAX3010x-class parts the reference
//! hardware uses.

// ===== PHOTOPLETHYSMOGRAPHY FRONT-END =====

/// Infrared magnitude below which no finger is assumed on the sensor.
///
/// MAX3010x-class parts read tens of thousands of counts with tissue in
/// contact and a few hundred in open air. Below this gate no beat
/// detection is attempted and vitals report their sentinel zeros.
///
/// Source: SparkFun MAX3010x application note
pub const FINGER_PRESENCE_IR: u32 = 50_000;

/// Intercept of the linear SpO2 estimate (%).
pub const SPO2_INTERCEPT: f32 = 104.0;

/// Slope of the linear SpO2 estimate against the red/IR ratio.
///
/// `spo2 = SPO2_INTERCEPT - SPO2_SLOPE * (red / ir)` is a first-order fit
/// of the pulse-oximetry calibration curve. Good enough for trend alerts,
/// not a clinical measurement.
pub const SPO2_SLOPE: f32 = 17.0;

/// Lowest SpO2 the estimator will report for a live reading (%).
///
/// Readings are clamped here; the value 0 is reserved as the "no valid
/// reading" sentinel.
pub const SPO2_MIN_PCT: f32 = 70.0;

/// Highest SpO2 the estimator will report (%).
pub const SPO2_MAX_PCT: f32 = 100.0;

// ===== GAS PROXY (MQ-135 CLASS) =====

/// Raw ADC reading anchored to the low end of the CO2 fit.
pub const CO2_RAW_LO: u16 = 100;

/// Raw ADC reading anchored to the high end of the CO2 fit.
pub const CO2_RAW_HI: u16 = 1000;

/// CO2 estimate at [`CO2_RAW_LO`] (ppm).
pub const CO2_PPM_LO: f32 = 400.0;

/// CO2 estimate at [`CO2_RAW_HI`] (ppm).
pub const CO2_PPM_HI: f32 = 2000.0;

/// Lower clamp for the CO2 estimate (ppm).
///
/// 400 ppm is the outdoor baseline; the sensor cannot meaningfully read
/// below it.
pub const CO2_CLAMP_MIN_PPM: f32 = 400.0;

/// Upper clamp for the CO2 estimate (ppm).
///
/// Beyond 5000 ppm the two-point fit has no validity and occupational
/// exposure limits are exceeded anyway.
///
/// Source: OSHA 8-hour permissible exposure limit for CO2
pub const CO2_CLAMP_MAX_PPM: f32 = 5000.0;

// ===== HUMIDITY SOURCE =====

/// Humidity reported when the sensor is absent or a read fails (%RH).
pub const HUMIDITY_FALLBACK_PCT: f32 = 0.0;
