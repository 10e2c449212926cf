use crate::complex::Complex;
use crate::consts::Z_REF;
use crate::enums::Topology;
use crate::error::TuningError;
use crate::math::{self, Swr};
use crate::network::LNetwork;

impl LNetwork {
    /// Input impedance of the low pass arrangement
    ///
    /// The capacitor shunts the antenna, then the inductor is added in series:
    /// `z1 = (jXc * Zant) / (jXc + Zant)`, `z2 = jXl + z1`.
    pub fn transform_low_pass(&mut self) -> Result<Complex, TuningError> {
        let z_c = Complex::from_imag(self.capacitive_reactance()?);
        let z_l = Complex::from_imag(self.inductive_reactance());

        let z_1 = math::parallel(z_c, self.antenna())?;
        let z_2 = math::series(z_l, z_1);

        self.tuned = Some(z_2);
        Ok(z_2)
    }

    /// Input impedance of the high pass arrangement
    ///
    /// Reverse sequence of the low pass: `z1 = Zant + jXl`,
    /// `z2 = (z1 * jXc) / (z1 + jXc)`.
    pub fn transform_high_pass(&mut self) -> Result<Complex, TuningError> {
        let z_l = Complex::from_imag(self.inductive_reactance());
        let z_c = Complex::from_imag(self.capacitive_reactance()?);

        let z_1 = math::series(self.antenna(), z_l);
        let z_2 = math::parallel(z_1, z_c)?;

        self.tuned = Some(z_2);
        Ok(z_2)
    }

    /// Transform for the configured topology
    pub fn transform(&mut self) -> Result<Complex, TuningError> {
        match self.topology() {
            Topology::LowPass => self.transform_low_pass(),
            Topology::HighPass => self.transform_high_pass(),
        }
    }

    /// Reflection coefficient of `z_load` against the fixed 50 ohm reference
    pub fn compute_gamma(&self, z_load: Complex) -> Result<Complex, TuningError> {
        math::z_to_gamma(z_load, Z_REF)
    }

    pub fn compute_swr(&self, gamma: Complex) -> Swr {
        math::gamma_to_swr(gamma)
    }

    /// SWR seen looking straight into the antenna
    pub fn antenna_swr(&self) -> Result<Swr, TuningError> {
        Ok(self.compute_swr(self.compute_gamma(self.antenna())?))
    }
}
