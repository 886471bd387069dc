// src/error.rs
use thiserror::Error;

/// Errors raised by the bs-greeks library.
///
/// Pricing itself never fails on bad numbers: non-positive spot, strike,
/// expiry or volatility flow through as NaN/Inf. Errors are reserved for
/// malformed input shapes, opt-in validation, configuration and output.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricerError {
    /// Two sequence parameters disagree on length
    #[error("Shape mismatch for '{parameter}': expected length {expected}, found {found}")]
    ShapeMismatch {
        parameter: String,
        expected: usize,
        found: usize,
    },

    /// Parameter outside its domain (only reported by explicit validation)
    #[error("Invalid parameter '{parameter}' = {value}: {constraint}")]
    InvalidParameter {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Invalid evaluation configuration
    #[error("Invalid configuration for '{field}': {reason}")]
    InvalidConfiguration { field: String, reason: String },

    /// Command-line argument could not be parsed
    #[error("Could not parse argument '{argument}': {reason}")]
    Parse { argument: String, reason: String },

    /// Writing or serializing results failed
    #[error("Output error: {0}")]
    Output(String),
}

impl From<std::io::Error> for PricerError {
    fn from(e: std::io::Error) -> Self {
        PricerError::Output(e.to_string())
    }
}

impl From<serde_json::Error> for PricerError {
    fn from(e: serde_json::Error) -> Self {
        PricerError::Output(e.to_string())
    }
}

/// Result type alias for bs-greeks operations
pub type PricerResult<T> = Result<T, PricerError>;

/// Validation utilities
pub mod validation {
    use super::{PricerError, PricerResult};

    /// Validate that a parameter is strictly positive
    pub fn validate_positive(name: &str, value: f64) -> PricerResult<()> {
        // `!(value > 0.0)` so that NaN is rejected too
        if !(value > 0.0) {
            Err(PricerError::InvalidParameter {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> PricerResult<()> {
        if !value.is_finite() {
            Err(PricerError::InvalidParameter {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a sequence parameter has the expected length
    pub fn validate_same_length(name: &str, expected: usize, found: usize) -> PricerResult<()> {
        if expected != found {
            Err(PricerError::ShapeMismatch {
                parameter: name.to_string(),
                expected,
                found,
            })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validation::*;
    use super::*;

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("sigma", 0.2).is_ok());
        assert!(validate_positive("sigma", 0.0).is_err());
        assert!(validate_positive("sigma", -0.1).is_err());
        assert!(validate_positive("sigma", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite("r", 0.03).is_ok());
        assert!(validate_finite("r", -0.01).is_ok());
        assert!(validate_finite("r", f64::NAN).is_err());
        assert!(validate_finite("r", f64::INFINITY).is_err());
        assert!(validate_finite("r", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_validate_same_length() {
        assert!(validate_same_length("k", 3, 3).is_ok());
        assert_eq!(
            validate_same_length("k", 3, 2),
            Err(PricerError::ShapeMismatch {
                parameter: "k".to_string(),
                expected: 3,
                found: 2,
            })
        );
    }

    #[test]
    fn test_error_display() {
        let error = PricerError::InvalidParameter {
            parameter: "sigma".to_string(),
            value: -0.1,
            constraint: "must be positive".to_string(),
        };

        let display = format!("{}", error);
        assert!(display.contains("sigma"));
        assert!(display.contains("-0.1"));
        assert!(display.contains("positive"));
    }

    #[test]
    fn test_shape_mismatch_display() {
        let error = PricerError::ShapeMismatch {
            parameter: "t".to_string(),
            expected: 4,
            found: 2,
        };

        let display = format!("{}", error);
        assert!(display.contains("'t'"));
        assert!(display.contains("4"));
        assert!(display.contains("2"));
    }
}
