use crate::complex::Complex;
use crate::consts::DEFAULT_ANTENNA;
use crate::enums::Topology;
use crate::error::TuningError;
use crate::network::LNetwork;

/// Collects settings and validates them in one go on [`LNetworkBuilder::build`]
#[derive(Clone, Debug)]
pub struct LNetworkBuilder {
    capacitor: Option<(f64, f64)>,
    capacitance: Option<f64>,
    taps: Vec<f64>,
    tap: Option<char>,
    inductance: Option<f64>,
    frequency: Option<f64>,
    antenna: Complex,
    topology: Topology,
}

impl LNetworkBuilder {
    pub fn new() -> Self {
        LNetworkBuilder::default()
    }

    pub fn capacitor(mut self, min: f64, max: f64) -> Self {
        self.capacitor = Some((min, max));
        self
    }

    pub fn capacitance(mut self, c: f64) -> Self {
        self.capacitance = Some(c);
        self
    }

    pub fn tap(mut self, val: f64) -> Self {
        self.taps.push(val);
        self
    }

    pub fn taps(mut self, vals: &[f64]) -> Self {
        self.taps.extend_from_slice(vals);
        self
    }

    pub fn select_tap(mut self, tap: char) -> Self {
        self.tap = Some(tap);
        self
    }

    pub fn inductance(mut self, h: f64) -> Self {
        self.inductance = Some(h);
        self
    }

    pub fn frequency(mut self, f: f64) -> Self {
        self.frequency = Some(f);
        self
    }

    pub fn antenna(mut self, re: f64, im: f64) -> Self {
        self.antenna = Complex::new(re, im);
        self
    }

    pub fn topology(mut self, topology: Topology) -> Self {
        self.topology = topology;
        self
    }

    pub fn build(self) -> Result<LNetwork, TuningError> {
        let mut net = LNetwork::with_antenna(self.antenna);
        if let Some((min, max)) = self.capacitor {
            net.set_capacitor_range(min, max)?;
        }
        if let Some(c) = self.capacitance {
            net.set_capacitance(c)?;
        }
        for t in self.taps {
            net.add_inductor_tap(t)?;
        }
        if let Some(tap) = self.tap {
            net.select_inductor_tap(tap)?;
        }
        if let Some(h) = self.inductance {
            net.set_arbitrary_inductance(h)?;
        }
        if let Some(f) = self.frequency {
            net.set_frequency(f)?;
        }
        net.set_topology(self.topology);
        Ok(net)
    }
}

impl Default for LNetworkBuilder {
    fn default() -> Self {
        Self {
            capacitor: None,
            capacitance: None,
            taps: vec![],
            tap: None,
            inductance: None,
            frequency: None,
            antenna: DEFAULT_ANTENNA,
            topology: Topology::LowPass,
        }
    }
}
