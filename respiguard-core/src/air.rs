//! CO2 Estimation from the Analog Gas Proxy
//!
//! An MQ-135-class sensor does not measure CO2 directly; its resistance
//! tracks total reducing gases. We map the raw ADC reading to an
//! approximate CO2 concentration with a two-point linear fit and clamp
//! the result to the band the sensor can plausibly represent.
//!
//! The estimate is a calibration approximation: good enough to drive
//! ventilation alerts, never a certified gas measurement. A real
//! calibration would fit the sensor's log-log response against a
//! reference meter.

use crate::constants::sensors::{
    CO2_CLAMP_MAX_PPM, CO2_CLAMP_MIN_PPM, CO2_PPM_HI, CO2_PPM_LO, CO2_RAW_HI, CO2_RAW_LO,
};

/// Two-point calibration anchoring raw ADC counts to ppm values.
#[derive(Debug, Clone, Copy)]
pub struct Co2Calibration {
    /// Raw reading at the low anchor.
    pub raw_lo: u16,
    /// Raw reading at the high anchor.
    pub raw_hi: u16,
    /// Concentration at the low anchor (ppm).
    pub ppm_lo: f32,
    /// Concentration at the high anchor (ppm).
    pub ppm_hi: f32,
}

impl Default for Co2Calibration {
    fn default() -> Self {
        Self {
            raw_lo: CO2_RAW_LO,
            raw_hi: CO2_RAW_HI,
            ppm_lo: CO2_PPM_LO,
            ppm_hi: CO2_PPM_HI,
        }
    }
}

/// Maps raw analog readings to an approximate CO2 concentration.
#[derive(Debug, Clone, Copy, Default)]
pub struct AirQualityEstimator {
    cal: Co2Calibration,
}

impl AirQualityEstimator {
    /// Estimator with the default MQ-135 anchors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Estimator with custom anchors.
    pub fn with_calibration(cal: Co2Calibration) -> Self {
        Self { cal }
    }

    /// Estimate CO2 concentration in ppm for a raw ADC reading.
    ///
    /// Linear interpolation between the calibration anchors, extrapolated
    /// outside them, then clamped to [400, 5000] ppm. Monotonically
    /// non-decreasing over the entire input range.
    pub fn estimate(&self, raw: u16) -> f32 {
        let raw_span = f32::from(self.cal.raw_hi) - f32::from(self.cal.raw_lo);
        if raw_span <= 0.0 {
            // Degenerate anchors; report the low anchor rather than
            // dividing by zero.
            return self.cal.ppm_lo.clamp(CO2_CLAMP_MIN_PPM, CO2_CLAMP_MAX_PPM);
        }

        let offset = f32::from(raw) - f32::from(self.cal.raw_lo);
        let ppm = self.cal.ppm_lo + offset * (self.cal.ppm_hi - self.cal.ppm_lo) / raw_span;
        ppm.clamp(CO2_CLAMP_MIN_PPM, CO2_CLAMP_MAX_PPM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn anchor_points_map_exactly() {
        let est = AirQualityEstimator::new();
        assert_eq!(est.estimate(100), 400.0);
        assert_eq!(est.estimate(1000), 2000.0);
    }

    #[test]
    fn midrange_interpolates() {
        let est = AirQualityEstimator::new();
        // 400 + (550-100) * 1600/900 = 1200.0 exactly.
        assert_eq!(est.estimate(550), 1200.0);
    }

    #[test]
    fn below_domain_clamps_to_baseline() {
        let est = AirQualityEstimator::new();
        assert_eq!(est.estimate(0), 400.0);
        assert_eq!(est.estimate(50), 400.0);
    }

    #[test]
    fn above_domain_clamps_to_ceiling() {
        let est = AirQualityEstimator::new();
        // Full-scale 12-bit reading extrapolates far past the ceiling.
        assert_eq!(est.estimate(4095), 5000.0);
    }

    #[test]
    fn degenerate_calibration_reports_low_anchor() {
        let est = AirQualityEstimator::with_calibration(Co2Calibration {
            raw_lo: 500,
            raw_hi: 500,
            ppm_lo: 450.0,
            ppm_hi: 2000.0,
        });
        assert_eq!(est.estimate(700), 450.0);
    }

    proptest! {
        #[test]
        fn estimate_is_monotone(a in 0u16..=4095, b in 0u16..=4095) {
            let est = AirQualityEstimator::new();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(est.estimate(lo) <= est.estimate(hi));
        }

        #[test]
        fn in_domain_results_stay_in_fit_band(raw in 100u16..=1000) {
            let est = AirQualityEstimator::new();
            let ppm = est.estimate(raw);
            prop_assert!((400.0..=2000.0).contains(&ppm));
        }

        #[test]
        fn all_results_stay_in_clamp_band(raw in 0u16..=4095) {
            let est = AirQualityEstimator::new();
            let ppm = est.estimate(raw);
            prop_assert!((400.0..=5000.0).contains(&ppm));
        }
    }
}
