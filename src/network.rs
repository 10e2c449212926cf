use crate::complex::Complex;
use crate::consts::{DEFAULT_ANTENNA, FIRST_TAP_LETTER, INDUCTOR_MAX_TAPS};
use crate::enums::Topology;
use crate::error::TuningError;

pub mod builder;
pub mod reactance;
pub mod transform;

pub use self::builder::LNetworkBuilder;

/// A tuning network of one series inductor and one parallel capacitor
///
/// The capacitor is variable over a configured range and the inductor is
/// tapped with up to [`INDUCTOR_MAX_TAPS`] selectable positions addressed by
/// the letters `A` to `P`. An arbitrary inductance may override the tap.
///
/// Units: capacitance in picofarads, inductance in microhenries and
/// frequency in megahertz.
#[derive(Clone, Debug, PartialEq)]
pub struct LNetwork {
    min_capacitance: f64,
    max_capacitance: f64,
    capacitance: f64,
    inductor_taps: Vec<f64>,
    inductor_tap: usize,
    inductance: Option<f64>,
    frequency: f64,
    antenna: Complex,
    topology: Topology,
    tuned: Option<Complex>,
}

impl LNetwork {
    /// Network connected to a matched 50 ohm load
    pub fn new() -> LNetwork {
        LNetwork::with_antenna(DEFAULT_ANTENNA)
    }

    /// Network connected to an antenna of the given impedance
    pub fn with_antenna(antenna: Complex) -> LNetwork {
        LNetwork {
            min_capacitance: 0.0,
            max_capacitance: 0.0,
            capacitance: 0.0,
            inductor_taps: Vec::with_capacity(INDUCTOR_MAX_TAPS),
            inductor_tap: 0,
            inductance: None,
            frequency: 0.0,
            antenna,
            topology: Topology::default(),
            tuned: None,
        }
    }

    /// Install a variable capacitor, the setting starts at mid range
    pub fn set_capacitor_range(&mut self, min: f64, max: f64) -> Result<(), TuningError> {
        if !min.is_finite() || !max.is_finite() || min < 0.0 {
            return Err(TuningError::InvalidValue(format!(
                "invalid capacitor range {} pF to {} pF",
                min, max
            )));
        }
        if min > max {
            return Err(TuningError::InvalidValue(format!(
                "capacitor minimum {} pF exceeds maximum {} pF",
                min, max
            )));
        }
        self.min_capacitance = min;
        self.max_capacitance = max;
        self.capacitance = (min + max) / 2.0;
        Ok(())
    }

    pub fn capacitor_range(&self) -> (f64, f64) {
        (self.min_capacitance, self.max_capacitance)
    }

    pub fn set_capacitance(&mut self, c: f64) -> Result<(), TuningError> {
        // NaN fails both comparisons, check containment instead
        if !(self.min_capacitance..=self.max_capacitance).contains(&c) {
            return Err(TuningError::OutOfRange(format!(
                "capacitance {} pF outside {} pF to {} pF",
                c, self.min_capacitance, self.max_capacitance
            )));
        }
        self.capacitance = c;
        Ok(())
    }

    pub fn capacitance(&self) -> f64 {
        self.capacitance
    }

    /// Append an inductor tap position
    pub fn add_inductor_tap(&mut self, t: f64) -> Result<(), TuningError> {
        if !(t >= 0.0) || !t.is_finite() {
            return Err(TuningError::InvalidValue(format!(
                "invalid inductance {} \u{00b5}H",
                t
            )));
        }
        if self.inductor_taps.len() >= INDUCTOR_MAX_TAPS {
            return Err(TuningError::CapacityExceeded(INDUCTOR_MAX_TAPS));
        }
        self.inductor_taps.push(t);
        Ok(())
    }

    /// Turn the tap switch to the position labelled `tap`
    pub fn select_inductor_tap(&mut self, tap: char) -> Result<(), TuningError> {
        let index = tap_index(tap).filter(|&i| i < self.inductor_taps.len());
        match index {
            Some(i) => {
                self.inductor_tap = i;
                Ok(())
            }
            None => Err(TuningError::InvalidSelection(format!(
                "no inductor tap {}, {} tap(s) available",
                tap,
                self.inductor_taps.len()
            ))),
        }
    }

    pub fn inductor_taps(&self) -> &[f64] {
        &self.inductor_taps
    }

    /// Letter of the selected tap
    pub fn selected_tap(&self) -> char {
        tap_letter(self.inductor_tap)
    }

    /// Value at the selected tap, zero when no taps are installed
    pub fn tapped_inductance(&self) -> f64 {
        self.inductor_taps
            .get(self.inductor_tap)
            .copied()
            .unwrap_or(0.0)
    }

    /// Override the tap with an arbitrary inductance, zero clears the override
    pub fn set_arbitrary_inductance(&mut self, h: f64) -> Result<(), TuningError> {
        if !(h >= 0.0) || !h.is_finite() {
            return Err(TuningError::InvalidValue(format!(
                "invalid inductance {} \u{00b5}H",
                h
            )));
        }
        self.inductance = if h > 0.0 { Some(h) } else { None };
        Ok(())
    }

    pub fn arbitrary_inductance(&self) -> Option<f64> {
        self.inductance
    }

    /// Inductance in effect: the arbitrary value if set, otherwise the tap
    pub fn inductance(&self) -> f64 {
        match self.inductance {
            Some(h) => h,
            None => self.tapped_inductance(),
        }
    }

    pub fn set_frequency(&mut self, f: f64) -> Result<(), TuningError> {
        if !(f >= 0.0) || !f.is_finite() {
            return Err(TuningError::InvalidValue(format!(
                "invalid frequency {} MHz",
                f
            )));
        }
        self.frequency = f;
        Ok(())
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn set_antenna_impedance(&mut self, re: f64, im: f64) {
        self.set_antenna(Complex::new(re, im));
    }

    pub fn set_antenna(&mut self, z: Complex) {
        self.antenna = z;
    }

    pub fn antenna(&self) -> Complex {
        self.antenna
    }

    pub fn set_topology(&mut self, topology: Topology) {
        self.topology = topology;
    }

    /// Standard configuration
    pub fn set_low_pass(&mut self) {
        self.topology = Topology::LowPass;
    }

    /// Reverse coax connections
    pub fn set_high_pass(&mut self) {
        self.topology = Topology::HighPass;
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn is_high_pass(&self) -> bool {
        self.topology.is_high_pass()
    }

    /// Input impedance from the most recent transform
    pub fn tuned_impedance(&self) -> Option<Complex> {
        self.tuned
    }
}

impl Default for LNetwork {
    fn default() -> Self {
        LNetwork::new()
    }
}

/// Zero based index for a tap letter, `None` outside `A..=P`
pub fn tap_index(tap: char) -> Option<usize> {
    if !tap.is_ascii_uppercase() {
        return None;
    }
    let i = (tap as u8 - FIRST_TAP_LETTER as u8) as usize;
    if i < INDUCTOR_MAX_TAPS {
        Some(i)
    } else {
        None
    }
}

/// Letter labelling the tap at `index`
pub fn tap_letter(index: usize) -> char {
    (FIRST_TAP_LETTER as u8 + index as u8) as char
}
