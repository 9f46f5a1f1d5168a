//! Mock Channel Example
//!
//! Runs the composed [`ThermistorChannel`] read path against a scripted ADC
//! source, the same way a host-side test or a hardware-in-the-loop rig would
//! stand in for the real converter.
//!
//! ## What You'll Learn
//!
//! - How a closure stands in for an ADC channel through [`AdcSource`]
//! - What the channel reports for healthy, unplugged, and shorted probes
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_mock_channel
//! ```

use ntc10k_core::{SensorError, ThermistorChannel};

fn main() {
    println!("ntc10k Mock Channel Example");
    println!("===========================\n");

    // A measurement cycle as the firmware would see it: a warm-up drift,
    // then the probe gets unplugged, then someone shorts the header.
    let script: &[(u16, &str)] = &[
        (341, "probe at the nominal point"),
        (430, "a little cooler"),
        (650, "cooler still"),
        (0, "probe unplugged"),
        (1023, "header shorted to VCC"),
    ];

    let mut cursor = 0usize;
    let source = move || {
        let (code, _) = script[cursor % script.len()];
        cursor += 1;
        Ok::<u16, nb::Error<std::convert::Infallible>>(code)
    };

    // 5 kOhm pull-down on the stock 10-bit circuit
    let mut channel = ThermistorChannel::type2_10k(source, 5.0);

    for (_, label) in script {
        match channel.read_temperature() {
            Ok(celsius) => println!("{label:<28} -> {celsius:.2} degC"),
            Err(SensorError::Convert(e)) => println!("{label:<28} -> rejected: {e}"),
            Err(SensorError::Adc(_)) => println!("{label:<28} -> ADC failure"),
        }
    }

    println!("\nFailures are explicit errors, never a fake 0.00 degC reading.");
}
