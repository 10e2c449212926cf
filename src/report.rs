use crate::complex::Complex;
use crate::error::TuningError;
use crate::math::Swr;
use crate::network::{tap_letter, LNetwork};
use crate::scale::Scale;
use std::fmt;

const OHM: &str = "\u{03a9}";

/// `25.0 - j20.0 Ω`
pub fn format_impedance(z: &Complex) -> String {
    format!("{:.1} {}", z, OHM)
}

/// `A:1 µH, B:2.5 µH`
pub fn format_taps(taps: &[f64]) -> String {
    taps.iter()
        .enumerate()
        .map(|(i, t)| format!("{}:{} {}H", tap_letter(i), t, Scale::Micro))
        .collect::<Vec<String>>()
        .join(", ")
}

pub fn format_swr(swr: &Swr) -> String {
    format!("{:.1}", swr)
}

/// Network parameters and current settings
pub fn parameters_report(net: &LNetwork) -> String {
    let (min, max) = net.capacitor_range();
    let mut out = String::new();
    out.push_str("\nNetwork Parameters:\n\n");
    out.push_str(&format!("Frequency: {} {}Hz\n", net.frequency(), Scale::Mega));
    out.push_str(&format!(
        "Antenna Impedance: {}\n",
        format_impedance(&net.antenna())
    ));
    out.push_str(&format!(
        "Capacitor Range: {} {p}F --> {} {p}F\n",
        min,
        max,
        p = Scale::Pico
    ));
    out.push_str(&format!(
        "Inductor Taps: {}\n",
        format_taps(net.inductor_taps())
    ));
    out.push_str(&format!("High Pass: {}\n", net.is_high_pass()));
    out.push_str("\nCurrent Settings:\n\n");
    out.push_str(&format!("Inductor: {} {}H\n", net.inductance(), Scale::Micro));
    out.push_str(&format!("Capacitor: {} {}F\n", net.capacitance(), Scale::Pico));
    out
}

/// Antenna impedance and SWR before and after the network
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TuningReport {
    pub antenna: Complex,
    pub antenna_swr: Swr,
    pub tuned: Complex,
    pub tuned_swr: Swr,
}

impl TuningReport {
    /// Run the transform for the configured topology and grade both ends
    pub fn compute(net: &mut LNetwork) -> Result<TuningReport, TuningError> {
        let antenna = net.antenna();
        let antenna_swr = net.antenna_swr()?;
        let tuned = net.transform()?;
        let tuned_swr = net.compute_swr(net.compute_gamma(tuned)?);
        Ok(TuningReport {
            antenna,
            antenna_swr,
            tuned,
            tuned_swr,
        })
    }

    /// The network lowered the SWR
    pub fn improved(&self) -> bool {
        self.tuned_swr.value() < self.antenna_swr.value()
    }
}

impl fmt::Display for TuningReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nUntuned:\n")?;
        writeln!(f, "Antenna: {}", format_impedance(&self.antenna))?;
        writeln!(f, "SWR: {}\n", format_swr(&self.antenna_swr))?;
        writeln!(f, "Tuned:\n")?;
        writeln!(f, "Input: {}", format_impedance(&self.tuned))?;
        writeln!(f, "SWR: {}", format_swr(&self.tuned_swr))
    }
}
