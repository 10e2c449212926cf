use crate::complex::Complex;
use crate::consts::PI2;
use crate::error::TuningError;
use std::fmt;

/// Magnitudes of gamma this close to one are treated as total reflection
pub const TOTAL_REFLECTION_TOL: f64 = 1e-12;

/// Standing wave ratio of a load
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Swr {
    Finite(f64),
    /// |gamma| >= 1, nothing is delivered to the load
    Infinite,
}

impl Swr {
    pub fn value(&self) -> f64 {
        match self {
            Swr::Finite(v) => *v,
            Swr::Infinite => f64::INFINITY,
        }
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, Swr::Finite(_))
    }
}

impl fmt::Display for Swr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Swr::Finite(v) => {
                let prec = f.precision().unwrap_or(1);
                write!(f, "{:.*}", prec, v)
            }
            Swr::Infinite => write!(f, "\u{221e}"),
        }
    }
}

/// gamma = (z - z0) / (z + z0)
pub fn z_to_gamma(z: Complex, z0: Complex) -> Result<Complex, TuningError> {
    (z - z0).checked_div(z + z0)
}

/// swr = (1 + |gamma|) / (1 - |gamma|)
pub fn gamma_to_swr(gamma: Complex) -> Swr {
    let mag = gamma.abs();
    if !mag.is_finite() || 1.0 - mag <= TOTAL_REFLECTION_TOL {
        Swr::Infinite
    } else {
        Swr::Finite((1.0 + mag) / (1.0 - mag))
    }
}

/// Reactance of a capacitor in ohms, negative by convention
///
/// Frequency in hertz, capacitance in farads.
pub fn capacitive_reactance(freq: f64, cap: f64) -> Result<f64, TuningError> {
    if freq == 0.0 {
        return Err(TuningError::DegenerateResult(
            "capacitive reactance at zero frequency".to_string(),
        ));
    }
    if cap == 0.0 {
        return Err(TuningError::DegenerateResult(
            "capacitive reactance of zero capacitance".to_string(),
        ));
    }
    Ok(-1.0 / (PI2 * freq * cap))
}

/// Reactance of an inductor in ohms, frequency in hertz and inductance in henries
pub fn inductive_reactance(freq: f64, ind: f64) -> f64 {
    PI2 * freq * ind
}

/// Impedance of two elements in parallel: (z1 * z2) / (z1 + z2)
pub fn parallel(z1: Complex, z2: Complex) -> Result<Complex, TuningError> {
    (z1 * z2).checked_div(z1 + z2)
}

/// Impedance of two elements in series
pub fn series(z1: Complex, z2: Complex) -> Complex {
    z1 + z2
}

#[cfg(test)]
mod math_tests {
    use super::*;
    use crate::consts::Z_REF;
    use crate::util::{comp_c64, comp_f64};
    use float_cmp::F64Margin;

    fn margin() -> F64Margin {
        F64Margin {
            epsilon: 1e-9,
            ulps: 4,
        }
    }

    #[test]
    fn test_gamma() {
        let g = z_to_gamma(Complex::new(100.0, 0.0), Z_REF).unwrap();
        comp_c64(&Complex::new(1.0 / 3.0, 0.0), &g, margin(), "gamma", "100");
        let g = z_to_gamma(Complex::new(25.0, 0.0), Z_REF).unwrap();
        comp_c64(&Complex::new(-1.0 / 3.0, 0.0), &g, margin(), "gamma", "25");
        let g = z_to_gamma(Z_REF, Z_REF).unwrap();
        assert_eq!(g, Complex::ZERO);
        assert_eq!(
            z_to_gamma(Complex::new(-50.0, 0.0), Z_REF),
            Err(TuningError::DivisionByZero)
        );
    }

    #[test]
    fn test_swr_table() {
        let table = [
            (Complex::new(100.0, 0.0), 2.0),
            (Complex::new(25.0, 0.0), 2.0),
            (Complex::new(25.0, -10.0), 2.1049233092751733),
            (Complex::new(60.0, 10.0), 1.2936749891968884),
            (Complex::new(75.0, 15.0), 1.602732057392879),
            (Complex::new(25.0, 15.0), 2.23196412483911),
        ];
        for (i, (z, exemplar)) in table.iter().enumerate() {
            let swr = gamma_to_swr(z_to_gamma(*z, Z_REF).unwrap());
            comp_f64(exemplar, &swr.value(), margin(), "swr_table", &i.to_string());
        }
    }

    #[test]
    fn test_swr_total_reflection() {
        assert_eq!(gamma_to_swr(Complex::ONE), Swr::Infinite);
        assert_eq!(gamma_to_swr(Complex::new(0.0, -1.0)), Swr::Infinite);
        assert_eq!(gamma_to_swr(Complex::new(2.0, 0.0)), Swr::Infinite);
        // purely reactive load
        let g = z_to_gamma(Complex::new(0.0, 50.0), Z_REF).unwrap();
        assert_eq!(gamma_to_swr(g), Swr::Infinite);
        assert_eq!(Swr::Infinite.value(), f64::INFINITY);
        assert_eq!(gamma_to_swr(Complex::ZERO), Swr::Finite(1.0));
    }

    #[test]
    fn test_swr_display() {
        assert_eq!(Swr::Finite(19.733785546753452).to_string(), "19.7");
        assert_eq!(format!("{:.2}", Swr::Finite(2.0)), "2.00");
        assert_eq!(Swr::Infinite.to_string(), "\u{221e}");
    }

    #[test]
    fn test_reactance() {
        let xc = capacitive_reactance(14e6, 100e-12).unwrap();
        comp_f64(&-113.68210220849667, &xc, margin(), "xc", "0");
        let xl = inductive_reactance(14e6, 1e-6);
        comp_f64(&87.96459430051421, &xl, margin(), "xl", "0");
        assert!(capacitive_reactance(0.0, 100e-12).is_err());
        assert!(capacitive_reactance(14e6, 0.0).is_err());
        assert_eq!(inductive_reactance(0.0, 1e-6), 0.0);
    }

    #[test]
    fn test_parallel_series() {
        let z = parallel(Complex::new(100.0, 0.0), Complex::new(100.0, 0.0)).unwrap();
        comp_c64(&Complex::new(50.0, 0.0), &z, margin(), "parallel", "0");
        assert_eq!(
            parallel(Complex::new(0.0, 50.0), Complex::new(0.0, -50.0)),
            Err(TuningError::DivisionByZero)
        );
        assert_eq!(
            series(Complex::new(25.0, -20.0), Complex::new(0.0, 20.0)),
            Complex::new(25.0, 0.0)
        );
    }
}
