//! Calibration Tables and Piecewise-Linear Interpolation
//!
//! ## Motivation
//!
//! NTC thermistors are strongly non-linear; the usual closed forms
//! (beta model, Steinhart-Hart) need `ln()` and `exp()`, which are expensive
//! on microcontrollers without an FPU. The sensors this crate targets ship
//! with an empirical calibration table instead, so the conversion is a single
//! bounded scan plus one multiply-divide, with no transcendental math at all.
//!
//! ## Table Design
//!
//! A table is an ordered list of `(resistance kOhm, temperature °C)` points.
//! Two invariants hold for every table this module accepts:
//!
//! - resistance is strictly increasing across the list, and
//! - temperature is strictly decreasing (NTC: hotter means less resistive).
//!
//! Together they encode a strictly decreasing function `T = f(R)`, so at most
//! one adjacent pair can bracket a given resistance. Boundary values shared
//! by two pairs resolve identically through either, because exact matches
//! return the table value directly instead of interpolating.
//!
//! The built-in [`TYPE2_10K`](CalibrationCurve::TYPE2_10K) table is the
//! manufacturer characterization of the 10K Type II curve: 112 points,
//! published on a 2 °F grid and expressed here in °C, from 1.034 kOhm at
//! 86.11 °C down to 323.839 kOhm at the cold end, with the nominal
//! 10.000 kOhm ↔ 25.00 °C point near the middle.
//!
//! ## Lookup Semantics
//!
//! The scan visits adjacent pairs in table order and stops at the first pair
//! whose closed interval contains the input. Exact endpoint hits short-circuit
//! to the stored temperature so table points reproduce exactly, with no
//! floating-point rounding from the interpolation formula. Inputs outside the
//! table are an error, not a clamp: extrapolating a thermistor curve past its
//! characterized range produces numbers that look plausible and are wrong.

use crate::errors::{ConversionError, ConversionResult, TableError};

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

/// One empirical calibration point: a resistance and the temperature the
/// sensor exhibits it at.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalibrationPoint {
    /// Sensor resistance in kOhm
    pub resistance_kohm: f32,
    /// Temperature in °C at that resistance
    pub temperature_c: f32,
}

impl CalibrationPoint {
    /// Build a point. `const` so tables can live in flash.
    pub const fn new(resistance_kohm: f32, temperature_c: f32) -> Self {
        Self {
            resistance_kohm,
            temperature_c,
        }
    }
}

/// An ordered calibration table with piecewise-linear lookup.
///
/// Wraps a `'static` slice of [`CalibrationPoint`]s fixed at build time; the
/// curve never re-sorts or mutates it, so a curve is safe to share freely
/// (including across interrupt contexts).
#[derive(Debug, Clone, Copy)]
pub struct CalibrationCurve {
    points: &'static [CalibrationPoint],
}

impl CalibrationCurve {
    /// The embedded 10K Type II characterization table.
    pub const TYPE2_10K: Self = Self {
        points: &TYPE2_10K_POINTS,
    };

    /// Curve over a caller-supplied table.
    ///
    /// The table must obey the module invariants (strictly increasing
    /// resistance, strictly decreasing temperature); run [`validate`] on
    /// anything that didn't ship with the crate. The data is still fixed at
    /// build time; this is for custom sensors, not runtime calibration.
    ///
    /// [`validate`]: Self::validate
    pub const fn from_points(points: &'static [CalibrationPoint]) -> Self {
        Self { points }
    }

    /// The underlying table.
    pub const fn points(&self) -> &'static [CalibrationPoint] {
        self.points
    }

    /// Number of calibration points.
    pub const fn len(&self) -> usize {
        self.points.len()
    }

    /// True for a table with no points.
    pub const fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Calibrated resistance span `(min, max)` in kOhm.
    pub fn resistance_range(&self) -> (f32, f32) {
        let min = self.points.first().map_or(0.0, |p| p.resistance_kohm);
        let max = self.points.last().map_or(0.0, |p| p.resistance_kohm);
        (min, max)
    }

    /// Calibrated temperature span `(min, max)` in °C.
    pub fn temperature_range(&self) -> (f32, f32) {
        let min = self.points.last().map_or(0.0, |p| p.temperature_c);
        let max = self.points.first().map_or(0.0, |p| p.temperature_c);
        (min, max)
    }

    /// Check the table invariants.
    ///
    /// Returns the index of the first offending point if resistance ever
    /// fails to increase or temperature fails to decrease, or if the table
    /// is too short to interpolate at all.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.points.len() < 2 {
            return Err(TableError::TooShort {
                len: self.points.len(),
            });
        }
        for (i, pair) in self.points.windows(2).enumerate() {
            let ordered = pair[1].resistance_kohm > pair[0].resistance_kohm
                && pair[1].temperature_c < pair[0].temperature_c;
            if !ordered {
                return Err(TableError::NotMonotonic { index: i + 1 });
            }
        }
        Ok(())
    }

    /// Map a resistance (kOhm) to a temperature (°C).
    ///
    /// Scans adjacent pairs in table order and returns on the first pair
    /// whose closed interval contains `resistance_kohm`. Exact endpoint
    /// matches return the stored temperature; interior values interpolate
    /// linearly between the pair. Resistances outside the table return
    /// [`ConversionError::OutOfCalibrationRange`].
    pub fn temperature(&self, resistance_kohm: f32) -> ConversionResult<f32> {
        for pair in self.points.windows(2) {
            let (x1, y1) = (pair[0].resistance_kohm, pair[0].temperature_c);
            let (x2, y2) = (pair[1].resistance_kohm, pair[1].temperature_c);

            if resistance_kohm < x1.min(x2) || resistance_kohm > x1.max(x2) {
                continue;
            }
            // Exact hits bypass the formula so table points reproduce
            // bit-for-bit
            if resistance_kohm == x1 {
                return Ok(y1);
            }
            if resistance_kohm == x2 {
                return Ok(y2);
            }
            return Ok(y1 + (y2 - y1) / (x2 - x1) * (resistance_kohm - x1));
        }

        let (min, max) = self.resistance_range();
        log_warn!(
            "calibration lookup: {} kOhm outside table [{}, {}]",
            resistance_kohm,
            min,
            max
        );
        Err(ConversionError::OutOfCalibrationRange {
            resistance: resistance_kohm,
            min,
            max,
        })
    }
}

/// 10K Type II calibration data.
///
/// Empirical curve for the Type II 10 kOhm NTC family, on the 2 °F grid the
/// characterization is published at (temperatures converted to °C). The cold
/// endpoint carries the manufacturer's as-measured value rather than the
/// grid extrapolation.
pub const TYPE2_10K_POINTS: [CalibrationPoint; 112] = [
    CalibrationPoint::new(1.034, 86.11),
    CalibrationPoint::new(1.070, 85.00),
    CalibrationPoint::new(1.108, 83.89),
    CalibrationPoint::new(1.147, 82.78),
    CalibrationPoint::new(1.188, 81.67),
    CalibrationPoint::new(1.230, 80.56),
    CalibrationPoint::new(1.275, 79.44),
    CalibrationPoint::new(1.321, 78.33),
    CalibrationPoint::new(1.369, 77.22),
    CalibrationPoint::new(1.420, 76.11),
    CalibrationPoint::new(1.472, 75.00),
    CalibrationPoint::new(1.527, 73.89),
    CalibrationPoint::new(1.584, 72.78),
    CalibrationPoint::new(1.644, 71.67),
    CalibrationPoint::new(1.707, 70.56),
    CalibrationPoint::new(1.772, 69.44),
    CalibrationPoint::new(1.840, 68.33),
    CalibrationPoint::new(1.911, 67.22),
    CalibrationPoint::new(1.986, 66.11),
    CalibrationPoint::new(2.064, 65.00),
    CalibrationPoint::new(2.145, 63.89),
    CalibrationPoint::new(2.231, 62.78),
    CalibrationPoint::new(2.320, 61.67),
    CalibrationPoint::new(2.414, 60.56),
    CalibrationPoint::new(2.512, 59.44),
    CalibrationPoint::new(2.615, 58.33),
    CalibrationPoint::new(2.722, 57.22),
    CalibrationPoint::new(2.835, 56.11),
    CalibrationPoint::new(2.954, 55.00),
    CalibrationPoint::new(3.078, 53.89),
    CalibrationPoint::new(3.208, 52.78),
    CalibrationPoint::new(3.345, 51.67),
    CalibrationPoint::new(3.488, 50.56),
    CalibrationPoint::new(3.639, 49.44),
    CalibrationPoint::new(3.798, 48.33),
    CalibrationPoint::new(3.964, 47.22),
    CalibrationPoint::new(4.139, 46.11),
    CalibrationPoint::new(4.323, 45.00),
    CalibrationPoint::new(4.517, 43.89),
    CalibrationPoint::new(4.721, 42.78),
    CalibrationPoint::new(4.935, 41.67),
    CalibrationPoint::new(5.161, 40.56),
    CalibrationPoint::new(5.399, 39.44),
    CalibrationPoint::new(5.649, 38.33),
    CalibrationPoint::new(5.914, 37.22),
    CalibrationPoint::new(6.192, 36.11),
    CalibrationPoint::new(6.486, 35.00),
    CalibrationPoint::new(6.796, 33.89),
    CalibrationPoint::new(7.124, 32.78),
    CalibrationPoint::new(7.469, 31.67),
    CalibrationPoint::new(7.835, 30.56),
    CalibrationPoint::new(8.221, 29.44),
    CalibrationPoint::new(8.629, 28.33),
    CalibrationPoint::new(9.060, 27.22),
    CalibrationPoint::new(9.517, 26.11),
    // Nominal point: 10 kOhm at 25 °C
    CalibrationPoint::new(10.000, 25.00),
    CalibrationPoint::new(10.512, 23.89),
    CalibrationPoint::new(11.054, 22.78),
    CalibrationPoint::new(11.628, 21.67),
    CalibrationPoint::new(12.237, 20.56),
    CalibrationPoint::new(12.883, 19.44),
    CalibrationPoint::new(13.568, 18.33),
    CalibrationPoint::new(14.295, 17.22),
    CalibrationPoint::new(15.067, 16.11),
    CalibrationPoint::new(15.888, 15.00),
    CalibrationPoint::new(16.760, 13.89),
    CalibrationPoint::new(17.687, 12.78),
    CalibrationPoint::new(18.673, 11.67),
    CalibrationPoint::new(19.723, 10.56),
    CalibrationPoint::new(20.840, 9.44),
    CalibrationPoint::new(22.031, 8.33),
    CalibrationPoint::new(23.300, 7.22),
    CalibrationPoint::new(24.653, 6.11),
    CalibrationPoint::new(26.096, 5.00),
    CalibrationPoint::new(27.636, 3.89),
    CalibrationPoint::new(29.281, 2.78),
    CalibrationPoint::new(31.038, 1.67),
    CalibrationPoint::new(32.916, 0.56),
    CalibrationPoint::new(34.925, -0.56),
    CalibrationPoint::new(37.074, -1.67),
    CalibrationPoint::new(39.374, -2.78),
    CalibrationPoint::new(41.839, -3.89),
    CalibrationPoint::new(44.479, -5.00),
    CalibrationPoint::new(47.311, -6.11),
    CalibrationPoint::new(50.349, -7.22),
    CalibrationPoint::new(53.609, -8.33),
    CalibrationPoint::new(57.112, -9.44),
    CalibrationPoint::new(60.875, -10.56),
    CalibrationPoint::new(64.922, -11.67),
    CalibrationPoint::new(69.276, -12.78),
    CalibrationPoint::new(73.963, -13.89),
    CalibrationPoint::new(79.011, -15.00),
    CalibrationPoint::new(84.452, -16.11),
    CalibrationPoint::new(90.321, -17.22),
    CalibrationPoint::new(96.653, -18.33),
    CalibrationPoint::new(103.491, -19.44),
    CalibrationPoint::new(110.880, -20.56),
    CalibrationPoint::new(118.868, -21.67),
    CalibrationPoint::new(127.511, -22.78),
    CalibrationPoint::new(136.868, -23.89),
    CalibrationPoint::new(147.004, -25.00),
    CalibrationPoint::new(157.993, -26.11),
    CalibrationPoint::new(169.913, -27.22),
    CalibrationPoint::new(182.854, -28.33),
    CalibrationPoint::new(196.912, -29.44),
    CalibrationPoint::new(212.195, -30.56),
    CalibrationPoint::new(228.821, -31.67),
    CalibrationPoint::new(246.923, -32.78),
    CalibrationPoint::new(266.644, -33.89),
    CalibrationPoint::new(288.147, -35.00),
    CalibrationPoint::new(311.611, -36.11),
    CalibrationPoint::new(323.839, -37.22),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_is_well_formed() {
        let curve = CalibrationCurve::TYPE2_10K;
        assert_eq!(curve.len(), 112);
        assert!(curve.validate().is_ok());

        let (r_min, r_max) = curve.resistance_range();
        assert_eq!(r_min, 1.034);
        assert_eq!(r_max, 323.839);

        let (t_min, t_max) = curve.temperature_range();
        assert_eq!(t_min, -37.22);
        assert_eq!(t_max, 86.11);
    }

    #[test]
    fn table_points_reproduce_exactly() {
        let curve = CalibrationCurve::TYPE2_10K;
        for point in curve.points() {
            assert_eq!(
                curve.temperature(point.resistance_kohm),
                Ok(point.temperature_c),
                "point at {} kOhm",
                point.resistance_kohm
            );
        }
    }

    #[test]
    fn nominal_point_is_exact() {
        let t = CalibrationCurve::TYPE2_10K.temperature(10.0).unwrap();
        assert_eq!(t, 25.00);
    }

    #[test]
    fn interpolates_between_adjacent_points() {
        // 1.052 kOhm sits midway between 1.034 -> 86.11 and 1.070 -> 85.00
        let t = CalibrationCurve::TYPE2_10K.temperature(1.052).unwrap();
        assert!((t - 85.56).abs() < 0.01, "got {t}");
    }

    #[test]
    fn out_of_range_is_rejected() {
        let curve = CalibrationCurve::TYPE2_10K;

        // Above the cold end of the table
        let err = curve.temperature(500.0).unwrap_err();
        assert!(matches!(
            err,
            ConversionError::OutOfCalibrationRange { resistance, .. } if resistance == 500.0
        ));

        // Below the hot end, including the 0.0 a saturated divider produces
        assert!(curve.temperature(0.0).is_err());
        assert!(curve.temperature(1.0).is_err());
    }

    #[test]
    fn lookup_is_decreasing_within_an_interval() {
        let curve = CalibrationCurve::TYPE2_10K;
        // Sample strictly inside the 10.000..10.512 interval
        let mut last = f32::INFINITY;
        for r in [10.05f32, 10.2, 10.35, 10.45] {
            let t = curve.temperature(r).unwrap();
            assert!(t < last, "{r} kOhm gave {t}, not below {last}");
            last = t;
        }
    }

    #[test]
    fn custom_table_round_trip() {
        static LINEAR: [CalibrationPoint; 3] = [
            CalibrationPoint::new(1.0, 30.0),
            CalibrationPoint::new(2.0, 20.0),
            CalibrationPoint::new(3.0, 10.0),
        ];
        let curve = CalibrationCurve::from_points(&LINEAR);
        assert!(curve.validate().is_ok());
        assert_eq!(curve.temperature(1.5).unwrap(), 25.0);
        assert_eq!(curve.temperature(3.0).unwrap(), 10.0);
    }

    #[test]
    fn validate_rejects_bad_tables() {
        static SHORT: [CalibrationPoint; 1] = [CalibrationPoint::new(1.0, 30.0)];
        assert_eq!(
            CalibrationCurve::from_points(&SHORT).validate(),
            Err(TableError::TooShort { len: 1 })
        );

        static UNSORTED: [CalibrationPoint; 3] = [
            CalibrationPoint::new(1.0, 30.0),
            CalibrationPoint::new(3.0, 20.0),
            CalibrationPoint::new(2.0, 10.0),
        ];
        assert_eq!(
            CalibrationCurve::from_points(&UNSORTED).validate(),
            Err(TableError::NotMonotonic { index: 2 })
        );

        // Resistance ordered but temperature not strictly decreasing
        static FLAT: [CalibrationPoint; 3] = [
            CalibrationPoint::new(1.0, 30.0),
            CalibrationPoint::new(2.0, 30.0),
            CalibrationPoint::new(3.0, 10.0),
        ];
        assert_eq!(
            CalibrationCurve::from_points(&FLAT).validate(),
            Err(TableError::NotMonotonic { index: 1 })
        );
    }

    #[test]
    fn empty_table_never_matches() {
        static EMPTY: [CalibrationPoint; 0] = [];
        let curve = CalibrationCurve::from_points(&EMPTY);
        assert!(curve.is_empty());
        assert!(curve.temperature(10.0).is_err());
    }
}
