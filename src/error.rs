use std::fmt;

/// Errors raised by the tuning network model
#[derive(Clone, Debug, PartialEq)]
pub enum TuningError {
    InvalidValue(String),
    OutOfRange(String),
    InvalidSelection(String),
    CapacityExceeded(usize),
    DivisionByZero,
    DegenerateResult(String),
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::InvalidValue(msg) => write!(f, "Invalid value: {}", msg),
            TuningError::OutOfRange(msg) => write!(f, "Out of range: {}", msg),
            TuningError::InvalidSelection(msg) => write!(f, "Invalid selection: {}", msg),
            TuningError::CapacityExceeded(max) => {
                write!(f, "Capacity exceeded: at most {} inductor taps", max)
            }
            TuningError::DivisionByZero => write!(f, "Division by zero"),
            TuningError::DegenerateResult(msg) => write!(f, "Degenerate result: {}", msg),
        }
    }
}

impl std::error::Error for TuningError {}
