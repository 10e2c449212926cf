use crate::error::TuningError;
use crate::math;
use crate::network::LNetwork;
use crate::scale::Scale;

impl LNetwork {
    /// Reactance of the capacitor at the current setting, negative
    ///
    /// Fails with [`TuningError::DegenerateResult`] while the frequency or
    /// the capacitance is still zero.
    pub fn capacitive_reactance(&self) -> Result<f64, TuningError> {
        math::capacitive_reactance(
            Scale::Mega.unscale(self.frequency()),
            Scale::Pico.unscale(self.capacitance()),
        )
    }

    /// Reactance of the inductance in effect, positive
    pub fn inductive_reactance(&self) -> f64 {
        math::inductive_reactance(
            Scale::Mega.unscale(self.frequency()),
            Scale::Micro.unscale(self.inductance()),
        )
    }
}

#[cfg(test)]
mod network_reactance_tests {
    use super::*;
    use crate::util::comp_f64;
    use float_cmp::F64Margin;

    fn margin() -> F64Margin {
        F64Margin {
            epsilon: 1e-9,
            ulps: 4,
        }
    }

    #[test]
    fn test_capacitive_reactance() {
        let mut net = LNetwork::new();
        net.set_frequency(14.0).unwrap();
        net.set_capacitor_range(10.0, 500.0).unwrap();
        net.set_capacitance(100.0).unwrap();

        let xc = net.capacitive_reactance().unwrap();
        assert!(xc < 0.0);
        comp_f64(&-113.68210220849667, &xc, margin(), "xc", "14MHz/100pF");
        assert!((xc.abs() - 113.7).abs() < 0.05);
    }

    #[test]
    fn test_capacitive_reactance_unconfigured() {
        let mut net = LNetwork::new();
        assert!(matches!(
            net.capacitive_reactance(),
            Err(TuningError::DegenerateResult(_))
        ));

        net.set_capacitor_range(10.0, 100.0).unwrap();
        assert!(matches!(
            net.capacitive_reactance(),
            Err(TuningError::DegenerateResult(_))
        ));

        net.set_frequency(14.0).unwrap();
        net.set_capacitor_range(0.0, 0.0).unwrap();
        assert!(matches!(
            net.capacitive_reactance(),
            Err(TuningError::DegenerateResult(_))
        ));
    }

    #[test]
    fn test_inductive_reactance() {
        let mut net = LNetwork::new();
        assert_eq!(net.inductive_reactance(), 0.0);

        net.set_frequency(14.0).unwrap();
        net.set_arbitrary_inductance(1.0).unwrap();
        let xl = net.inductive_reactance();
        assert!(xl > 0.0);
        comp_f64(&87.96459430051421, &xl, margin(), "xl", "14MHz/1uH");

        net.add_inductor_tap(3.0).unwrap();
        net.set_frequency(7.1).unwrap();
        net.set_arbitrary_inductance(0.0).unwrap();
        comp_f64(&133.8318470429252, &net.inductive_reactance(), margin(), "xl", "7.1MHz/3uH");
    }
}
