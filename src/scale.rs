use std::fmt;

/// SI prefix applied to a component value
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Scale {
    Pico,
    Nano,
    Micro,
    Milli,
    #[default]
    Base,
    Kilo,
    Mega,
    Giga,
}

impl Scale {
    pub fn to_str(&self) -> &str {
        match self {
            Scale::Pico => "p",
            Scale::Nano => "n",
            Scale::Micro => "\u{00b5}",
            Scale::Milli => "m",
            Scale::Base => "",
            Scale::Kilo => "k",
            Scale::Mega => "M",
            Scale::Giga => "G",
        }
    }

    /// Provides multiplier for scale
    /// Scale::Pico = 1e-12
    pub fn multiplier(&self) -> f64 {
        match self {
            Scale::Pico => 1e-12,
            Scale::Nano => 1e-9,
            Scale::Micro => 1e-6,
            Scale::Milli => 1e-3,
            Scale::Base => 1.0,
            Scale::Kilo => 1e3,
            Scale::Mega => 1e6,
            Scale::Giga => 1e9,
        }
    }

    /// Scaled value converted to the base unit, e.g. 7.1 MHz -> 7.1e6 Hz
    pub fn unscale(&self, val: f64) -> f64 {
        val * self.multiplier()
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

#[cfg(test)]
mod scale_tests {
    use super::*;
    use crate::util::comp_f64;
    use float_cmp::F64Margin;

    #[test]
    fn test_unscale() {
        let margin = F64Margin {
            epsilon: 1e-18,
            ulps: 4,
        };
        comp_f64(&7.1e6, &Scale::Mega.unscale(7.1), margin, "mega", "0");
        comp_f64(&250e-12, &Scale::Pico.unscale(250.0), margin, "pico", "0");
        comp_f64(&3e-6, &Scale::Micro.unscale(3.0), margin, "micro", "0");
    }

    #[test]
    fn test_display() {
        assert_eq!(Scale::Pico.to_string(), "p");
        assert_eq!(Scale::Micro.to_string(), "\u{00b5}");
        assert_eq!(Scale::Mega.to_string(), "M");
    }
}
