//! Composed Read Path Over an Abstracted ADC Channel
//!
//! The conversion math in [`divider`](crate::divider) and
//! [`curve`](crate::curve) is pure; the one external collaborator is the ADC
//! that produces the raw code. [`AdcSource`] abstracts it as an
//! already-configured analog channel so the read path stays portable across
//! HALs and trivially mockable in tests.
//!
//! Pin selection is deliberately not part of the trait: in Rust HALs the
//! pin/channel binding happens when the channel object is constructed, so a
//! source *is* a pin. Wrapping an `embedded-hal` one-shot ADC takes a few
//! lines:
//!
//! ```ignore
//! struct Pa4Channel { adc: Adc<ADC1>, pin: PA4<Analog> }
//!
//! impl AdcSource for Pa4Channel {
//!     type Error = ();
//!     fn sample(&mut self) -> nb::Result<u16, ()> {
//!         self.adc.read(&mut self.pin)
//!     }
//! }
//! ```
//!
//! [`ThermistorChannel`] ties a source to the two conversion stages and is
//! the crate's single externally consumed operation: one sample in, one
//! temperature out, no state carried between calls.

use crate::{
    curve::CalibrationCurve,
    divider::Divider,
    errors::SensorError,
};

/// One configured analog input channel.
///
/// `sample` returns the quantized code in `[0, full_scale]`. The `nb` return
/// type matches embedded-hal one-shot ADCs: hardware still converting reports
/// `WouldBlock` rather than blocking the caller.
pub trait AdcSource {
    /// Error the underlying converter can report.
    type Error;

    /// Take one sample from the channel.
    fn sample(&mut self) -> nb::Result<u16, Self::Error>;
}

/// Closures are sources. Covers tests, mocks, and HALs whose channel read is
/// already a plain call.
impl<F, E> AdcSource for F
where
    F: FnMut() -> nb::Result<u16, E>,
{
    type Error = E;

    fn sample(&mut self) -> nb::Result<u16, E> {
        self()
    }
}

/// A thermistor divider attached to an ADC channel.
///
/// Owns the sampling source plus the two conversion stages. Reading is
/// synchronous and stateless: each call samples the hardware exactly once and
/// runs the code through divider inversion and table lookup.
#[derive(Debug)]
pub struct ThermistorChannel<A: AdcSource> {
    source: A,
    divider: Divider,
    curve: CalibrationCurve,
}

impl<A: AdcSource> ThermistorChannel<A> {
    /// Attach `source` to a divider and calibration curve.
    pub const fn new(source: A, divider: Divider, curve: CalibrationCurve) -> Self {
        Self {
            source,
            divider,
            curve,
        }
    }

    /// Channel for the stock circuit: 10-bit converter, [`CalibrationCurve::TYPE2_10K`]
    /// table, pull-down of `reference_kohm`.
    pub const fn type2_10k(source: A, reference_kohm: f32) -> Self {
        Self::new(
            source,
            Divider::new(reference_kohm),
            CalibrationCurve::TYPE2_10K,
        )
    }

    /// The divider configuration in use.
    pub const fn divider(&self) -> &Divider {
        &self.divider
    }

    /// The calibration curve in use.
    pub const fn curve(&self) -> &CalibrationCurve {
        &self.curve
    }

    /// Sample once and return the estimated sensor resistance in kOhm.
    pub fn read_resistance(&mut self) -> Result<f32, SensorError<A::Error>> {
        let code = nb::block!(self.source.sample()).map_err(SensorError::Adc)?;
        let resistance = self.divider.resistance(code)?;
        Ok(resistance)
    }

    /// Sample once and return the temperature in °C.
    ///
    /// Blocks on `WouldBlock` until the converter finishes, then runs the
    /// two-stage pipeline. Safe to call repeatedly; no state is carried
    /// between reads.
    pub fn read_temperature(&mut self) -> Result<f32, SensorError<A::Error>> {
        let resistance = self.read_resistance()?;
        let celsius = self.curve.temperature(resistance)?;
        Ok(celsius)
    }
}
