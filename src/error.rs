use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmulatorError {
    /// Reserved-instruction condition: a lane index or format encoding
    /// outside the architectural range for the operation.
    InvalidOperand,
    InvalidRegister(u32),
}

impl fmt::Display for EmulatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmulatorError::InvalidOperand => write!(f, "Invalid operand"),
            EmulatorError::InvalidRegister(wr) => write!(f, "Invalid vector register: w{}", wr),
        }
    }
}

impl std::error::Error for EmulatorError {}

pub type Result<T> = std::result::Result<T, EmulatorError>;
