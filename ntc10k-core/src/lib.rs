//! Core conversion engine for ntc10k
//!
//! Turns raw ADC codes from a thermistor voltage divider into Celsius
//! temperatures using an embedded calibration table for the 10K Type II
//! sensor family. Designed for edge devices with limited resources.
//!
//! Key constraints:
//! - No heap allocation anywhere
//! - Pure, re-entrant conversion math (safe to call from interrupt handlers)
//! - Single bounded pass over a compile-time table per lookup
//!
//! ```
//! use ntc10k_core::{CalibrationCurve, Divider};
//!
//! // 10 kOhm pull-down on a 10-bit converter
//! let divider = Divider::new(10.0);
//!
//! let resistance = divider.resistance(512)?;
//! let celsius = CalibrationCurve::TYPE2_10K.temperature(resistance)?;
//! assert!(celsius > 24.0 && celsius < 26.0);
//! # Ok::<(), ntc10k_core::ConversionError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod curve;
pub mod divider;
pub mod errors;
pub mod sensor;

// Public API
pub use curve::{CalibrationCurve, CalibrationPoint};
pub use divider::{Divider, ADC_FULL_SCALE_10BIT};
pub use errors::{ConversionError, ConversionResult, SensorError, TableError};
pub use sensor::{AdcSource, ThermistorChannel};

/// Crate version string, taken from the package manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
