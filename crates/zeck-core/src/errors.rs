//! Error type shared by the Zeckendorf core and the `zeck` binary.

use crate::constants::exit_codes;

/// Errors raised by construction, conversion, and configuration.
///
/// Arithmetic and comparison on valid values never fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ZeckError {
    /// The input is not a signed decimal integer.
    #[error("invalid decimal integer: {0}")]
    Format(String),

    /// A narrowing conversion does not fit the target type.
    #[error("value does not fit in {target}")]
    Overflow { target: &'static str },

    /// A digit sequence breaks the canonical Zeckendorf invariants.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl ZeckError {
    /// Process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Format(_) => exit_codes::ERROR_FORMAT,
            Self::Overflow { .. } => exit_codes::ERROR_OVERFLOW,
            Self::InvariantViolation(_) => exit_codes::ERROR_GENERIC,
            Self::Config(_) => exit_codes::ERROR_CONFIG,
        }
    }
}
