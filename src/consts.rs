use crate::complex::Complex;

/// Reference (source) impedance every gamma is measured against
pub const Z_REF: Complex = Complex::new(50.0, 0.0);

/// Default antenna impedance for a freshly constructed network
pub const DEFAULT_ANTENNA: Complex = Z_REF;

/// Maximum number of inductor tap positions
pub const INDUCTOR_MAX_TAPS: usize = 16;

/// Letter addressing the first inductor tap
pub const FIRST_TAP_LETTER: char = 'A';

/// Default configuration file read by the tuner binary
pub const DEFAULT_CONFIG_FILE: &str = "tuner.cfg";

/// 2 * pi
pub const PI2: f64 = 2.0 * core::f64::consts::PI;

#[cfg(test)]
mod consts_tests {
    use super::*;

    #[test]
    fn tap_letters_cover_capacity() {
        let last = (FIRST_TAP_LETTER as u8 + INDUCTOR_MAX_TAPS as u8 - 1) as char;
        assert_eq!(last, 'P');
    }

    #[test]
    fn reference_is_real() {
        assert_eq!(Z_REF.re(), 50.0);
        assert_eq!(Z_REF.im(), 0.0);
        assert_eq!(PI2, core::f64::consts::TAU);
    }
}
