//! ADC Sweep Example
//!
//! Walks the whole 10-bit code range through the two-stage pipeline and
//! prints what comes out: the resistance estimate from the divider inversion
//! and the temperature from the calibration table.
//!
//! ## What You'll Learn
//!
//! - How ADC codes map to divider resistance for a 10 kOhm pull-down
//! - Where the calibrated range begins and ends, and what the errors for
//!   codes outside it look like
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_convert_sweep
//! ```

use ntc10k_core::{CalibrationCurve, ConversionError, Divider};

fn main() {
    println!("ntc10k ADC Sweep Example");
    println!("========================\n");

    let divider = Divider::new(10.0);
    let curve = CalibrationCurve::TYPE2_10K;

    let (r_min, r_max) = curve.resistance_range();
    let (t_min, t_max) = curve.temperature_range();
    println!(
        "Table: {} points, {:.3}..{:.3} kOhm, {:.2}..{:.2} degC\n",
        curve.len(),
        r_min,
        r_max,
        t_min,
        t_max
    );

    println!("{:>6} {:>14} {:>12}", "code", "kOhm", "degC");
    println!("{:->6} {:->14} {:->12}", "", "", "");

    for code in (0u16..=1023).step_by(64).chain([1023]) {
        match describe(&divider, &curve, code) {
            Ok((resistance, celsius)) => {
                println!("{code:>6} {resistance:>14.3} {celsius:>12.2}");
            }
            Err(ConversionError::OpenCircuit) => {
                println!("{code:>6} {:>14} {:>12}", "-", "open circuit");
            }
            Err(ConversionError::OutOfCalibrationRange { resistance, .. }) => {
                println!("{code:>6} {resistance:>14.3} {:>12}", "out of range");
            }
        }
    }

    println!("\nCodes near the rails fall outside the calibrated span:");
    println!("  code 0    -> open circuit (no current through the divider)");
    println!("  code 1023 -> 0 kOhm, hotter than the table characterizes");
}

fn describe(
    divider: &Divider,
    curve: &CalibrationCurve,
    code: u16,
) -> Result<(f32, f32), ConversionError> {
    let resistance = divider.resistance(code)?;
    let celsius = curve.temperature(resistance)?;
    Ok((resistance, celsius))
}
