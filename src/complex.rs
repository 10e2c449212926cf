use crate::error::TuningError;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// An immutable complex number of two f64 components
///
/// Addition, subtraction and multiplication are total and available as
/// operators. Division is only offered through [`Complex::checked_div`],
/// which refuses a zero divisor instead of yielding NaN or infinity.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Complex {
    re: f64,
    im: f64,
}

impl Complex {
    pub const ZERO: Complex = Complex { re: 0.0, im: 0.0 };
    pub const ONE: Complex = Complex { re: 1.0, im: 0.0 };

    /// Create a new complex number from real and imaginary parts
    pub const fn new(re: f64, im: f64) -> Self {
        Complex { re, im }
    }

    /// Create a new complex number from a real number (imaginary part = 0)
    pub const fn from_real(re: f64) -> Self {
        Complex { re, im: 0.0 }
    }

    /// Create a new complex number from an imaginary number (real part = 0)
    pub const fn from_imag(im: f64) -> Self {
        Complex { re: 0.0, im }
    }

    /// Get the real part
    pub fn re(&self) -> f64 {
        self.re
    }

    /// Get the imaginary part
    pub fn im(&self) -> f64 {
        self.im
    }

    /// Get the magnitude (absolute value) of the complex number
    pub fn abs(&self) -> f64 {
        self.re.hypot(self.im)
    }

    pub fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    pub fn add(self, other: Complex) -> Self {
        Complex::new(self.re + other.re, self.im + other.im)
    }

    pub fn sub(self, other: Complex) -> Self {
        Complex::new(self.re - other.re, self.im - other.im)
    }

    pub fn mul(self, other: Complex) -> Self {
        Complex::new(
            self.re * other.re - self.im * other.im,
            self.re * other.im + self.im * other.re,
        )
    }

    /// Divide by `other`, failing when `other` is exactly zero
    ///
    /// Smith's algorithm: scaling by the larger component of the divisor
    /// keeps `|other|^2` from underflowing or overflowing. A quotient that
    /// still leaves the f64 range is a [`TuningError::DegenerateResult`].
    pub fn checked_div(self, other: Complex) -> Result<Self, TuningError> {
        if other.is_zero() {
            return Err(TuningError::DivisionByZero);
        }
        let q = if other.re.abs() >= other.im.abs() {
            let r = other.im / other.re;
            let den = other.re + other.im * r;
            Complex::new((self.re + self.im * r) / den, (self.im - self.re * r) / den)
        } else {
            let r = other.re / other.im;
            let den = other.re * r + other.im;
            Complex::new((self.re * r + self.im) / den, (self.im * r - self.re) / den)
        };
        if !q.is_finite() {
            return Err(TuningError::DegenerateResult(format!(
                "({}, {}) / ({}, {}) is not representable",
                self.re, self.im, other.re, other.im
            )));
        }
        Ok(q)
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Complex::add(self, other)
    }
}

impl Add<f64> for Complex {
    type Output = Self;

    fn add(self, other: f64) -> Self {
        Complex::new(self.re + other, self.im)
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Complex::sub(self, other)
    }
}

impl Sub<f64> for Complex {
    type Output = Self;

    fn sub(self, other: f64) -> Self {
        Complex::new(self.re - other, self.im)
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Complex::mul(self, other)
    }
}

impl Mul<f64> for Complex {
    type Output = Self;

    fn mul(self, other: f64) -> Self {
        Complex::new(self.re * other, self.im * other)
    }
}

impl Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self {
        Complex::new(-self.re, -self.im)
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Complex::from_real(re)
    }
}

impl From<(f64, f64)> for Complex {
    fn from(ri: (f64, f64)) -> Self {
        Complex::new(ri.0, ri.1)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = f.precision().unwrap_or(1);
        if self.im < 0.0 {
            write!(f, "{:.*} - j{:.*}", prec, self.re, prec, self.im.abs())
        } else {
            write!(f, "{:.*} + j{:.*}", prec, self.re, prec, self.im)
        }
    }
}
