//! Error Types for Divider and Calibration Failures
//!
//! ## Design Philosophy
//!
//! The C-era convention for this sensor family signalled failure by returning
//! `0.0`, which is also a perfectly valid reading (0 °C, or a shorted
//! divider). These types make the two failure conditions explicit instead:
//!
//! - [`ConversionError::OpenCircuit`]: the divider read no current (ADC code
//!   0), so the inversion formula has no solution.
//! - [`ConversionError::OutOfCalibrationRange`]: the estimated resistance
//!   falls outside the calibration table, i.e. the sensor is beyond its
//!   characterized temperature range.
//!
//! Errors follow the same rules as the rest of the crate:
//!
//! 1. **Small Size**: every variant is a few words at most; errors travel
//!    through hot paths and may be queued.
//! 2. **No Heap Allocation**: all error data is inline.
//! 3. **Copy Semantics**: errors implement `Copy` for cheap returns.
//! 4. **Actionable Information**: out-of-range errors carry the offending
//!    resistance and the table bounds, enough to decide on a response
//!    (re-sample, flag the probe, widen the table) without further queries.

use thiserror_no_std::Error;

/// Result type for divider and calibration-curve operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Conversion failures from the ADC-to-temperature pipeline
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConversionError {
    /// ADC code was 0: no current through the divider, probe likely
    /// disconnected. The inversion formula divides by the code, so there is
    /// no resistance estimate to give.
    #[error("open circuit: ADC read no signal")]
    OpenCircuit,

    /// Estimated resistance has no containing interval in the calibration
    /// table. The sensor is outside its characterized range (or the divider
    /// is shorted / mis-wired).
    #[error("resistance {resistance} kOhm outside calibrated range [{min}, {max}]")]
    OutOfCalibrationRange {
        /// The resistance estimate that failed to match any table interval
        resistance: f32,
        /// Smallest calibrated resistance (hottest table point)
        min: f32,
        /// Largest calibrated resistance (coldest table point)
        max: f32,
    },
}

/// Structural defects in a caller-supplied calibration table
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// Interpolation needs at least one adjacent pair
    #[error("calibration table needs at least two points, has {len}")]
    TooShort {
        /// Number of points in the rejected table
        len: usize,
    },

    /// Resistance must strictly increase and temperature strictly decrease
    /// across the table
    #[error("calibration table not strictly monotonic at index {index}")]
    NotMonotonic {
        /// Index of the first point that breaks the ordering
        index: usize,
    },
}

/// Failures from the composed read path ([`crate::ThermistorChannel`])
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SensorError<E> {
    /// The ADC collaborator failed to produce a sample
    #[error("ADC sample failed")]
    Adc(E),

    /// Sampling succeeded but the conversion pipeline rejected the code
    #[error("conversion failed: {0}")]
    Convert(#[from] ConversionError),
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConversionError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::OpenCircuit => defmt::write!(fmt, "open circuit"),
            Self::OutOfCalibrationRange { resistance, min, max } => {
                defmt::write!(fmt, "{} kOhm outside [{}, {}]", resistance, min, max)
            }
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TableError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::TooShort { len } => defmt::write!(fmt, "table too short: {}", len),
            Self::NotMonotonic { index } => {
                defmt::write!(fmt, "table not monotonic at {}", index)
            }
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for SensorError<E> {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Adc(e) => defmt::write!(fmt, "ADC: {}", e),
            Self::Convert(e) => defmt::write!(fmt, "convert: {}", e),
        }
    }
}
