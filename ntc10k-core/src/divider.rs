//! Resistance Estimation From a Voltage Divider
//!
//! The supported circuit puts the thermistor in the upper leg of a divider
//! with a known pull-down resistor in the lower leg:
//!
//! ```text
//! VCC ── thermistor ──┬── ADC pin
//!                     │
//!                 pull-down
//!                     │
//!                    GND
//! ```
//!
//! The ADC quantizes the midpoint voltage to an integer code in
//! `[0, full_scale]`. Inverting the divider equation gives the thermistor
//! resistance from the code alone:
//!
//! ```text
//! R_sensor = R_ref / code * (full_scale - code)
//! ```
//!
//! A code of 0 means no current reached the pin (open circuit, probe
//! unplugged) and has no resistance solution; a code of `full_scale` is the
//! legitimate 0 kOhm limit of a fully saturated divider.

use crate::errors::{ConversionError, ConversionResult};

/// Full-scale code of a 10-bit converter.
///
/// The default for this sensor family; the classic boards it ships on use
/// 10-bit ADCs. 12-bit parts pass 4095 to [`Divider::with_full_scale`].
pub const ADC_FULL_SCALE_10BIT: u16 = 1023;

/// Converts ADC codes into thermistor resistance estimates (kOhm).
///
/// Holds the two circuit constants the inversion needs: the pull-down
/// reference resistance and the converter's full-scale code. Construct one
/// per divider circuit; the estimate itself is a pure function of the code.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Divider {
    /// Pull-down resistor value in kOhm. Must be positive.
    reference_kohm: f32,
    /// Full-scale ADC code (1023 for 10-bit, 4095 for 12-bit).
    full_scale: u16,
}

impl Divider {
    /// Divider with a 10-bit converter ([`ADC_FULL_SCALE_10BIT`]).
    ///
    /// `reference_kohm` is the measured pull-down value in kOhm and must be
    /// positive; 10.0 is the usual pairing for the 10K Type II sensor.
    pub const fn new(reference_kohm: f32) -> Self {
        Self {
            reference_kohm,
            full_scale: ADC_FULL_SCALE_10BIT,
        }
    }

    /// Divider with an explicit full-scale code (e.g. 4095 for 12-bit parts).
    pub const fn with_full_scale(reference_kohm: f32, full_scale: u16) -> Self {
        Self {
            reference_kohm,
            full_scale,
        }
    }

    /// Pull-down reference resistance in kOhm.
    pub const fn reference_kohm(&self) -> f32 {
        self.reference_kohm
    }

    /// Full-scale ADC code this divider was configured for.
    pub const fn full_scale(&self) -> u16 {
        self.full_scale
    }

    /// Estimate the thermistor resistance (kOhm) for an ADC code.
    ///
    /// Inverts the divider equation `R = R_ref / code * (full_scale - code)`.
    /// A code of 0 returns [`ConversionError::OpenCircuit`]; a code equal to
    /// `full_scale` returns `Ok(0.0)`.
    ///
    /// Codes above `full_scale` are not validated here; the sampling
    /// hardware constrains the range. Such codes produce a negative estimate,
    /// which the calibration curve rejects as out of range.
    pub fn resistance(&self, code: u16) -> ConversionResult<f32> {
        if code == 0 {
            return Err(ConversionError::OpenCircuit);
        }
        let code = code as f32;
        Ok(self.reference_kohm / code * (self.full_scale as f32 - code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_code_is_open_circuit() {
        let divider = Divider::new(10.0);
        assert_eq!(divider.resistance(0), Err(ConversionError::OpenCircuit));

        // Reference value doesn't matter for the guard
        let divider = Divider::new(4.7);
        assert_eq!(divider.resistance(0), Err(ConversionError::OpenCircuit));
    }

    #[test]
    fn full_scale_code_is_zero_resistance() {
        let divider = Divider::new(10.0);
        assert_eq!(divider.resistance(ADC_FULL_SCALE_10BIT).unwrap(), 0.0);
    }

    #[test]
    fn midpoint_code_matches_reference() {
        // code 341 leaves 682 counts across the sensor: exactly twice the
        // reference, so 5 kOhm below becomes 10 kOhm above
        let divider = Divider::new(5.0);
        assert_eq!(divider.resistance(341).unwrap(), 10.0);
    }

    #[test]
    fn estimate_decreases_with_code() {
        let divider = Divider::new(10.0);
        let mut last = f32::INFINITY;
        for code in [1u16, 8, 64, 256, 512, 768, 1000, 1023] {
            let r = divider.resistance(code).unwrap();
            assert!(r < last, "code {code} gave {r}, not below {last}");
            last = r;
        }
    }

    #[test]
    fn twelve_bit_full_scale() {
        let divider = Divider::with_full_scale(10.0, 4095);
        // Half scale on 12 bits: (4095 - 2048) / 2048 ~ 0.9995
        let r = divider.resistance(2048).unwrap();
        assert!((r - 9.995).abs() < 0.01);
    }
}
