//! Error types for the boundary of the crate.
//!
//! The conversion math itself never fails, out of gamut and non-converged
//! results are reported through [`Flags`](crate::Flags) instead. Errors only
//! come from parsing or unpacking caller input.

use thiserror::Error;

/// Errors that can occur when turning caller input into colors.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ColorError {
    /// The input does not describe a color.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ColorError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message() {
        let err = ColorError::invalid("#12345 is not a hex color");
        assert_eq!(err.to_string(), "Invalid input: #12345 is not a hex color");
    }
}
