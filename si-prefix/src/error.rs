use std::fmt;

/// Error types for SI prefix formatting and parsing
#[derive(Debug, Clone, PartialEq)]
pub enum SiError {
    /// Exponent is more than 8 prefix levels away from the base unit
    ExponentOutOfRange { expof10: i32 },
    /// Character is not one of the SI prefix symbols
    UnknownPrefix { symbol: char },
    /// Input string is not a recognized number
    InvalidInput { input: String, reason: String },
    /// Format template could not be compiled
    InvalidTemplate { template: String, reason: String },
}

impl SiError {
    pub(crate) fn invalid_input(input: &str, reason: impl Into<String>) -> Self {
        SiError::InvalidInput {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_template(template: &str, reason: impl Into<String>) -> Self {
        SiError::InvalidTemplate {
            template: template.to_string(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiError::ExponentOutOfRange { expof10 } => {
                write!(f, "Exponent {expof10} out of range of available prefixes")
            }
            SiError::UnknownPrefix { symbol } => {
                write!(f, "Unknown SI prefix '{symbol}'")
            }
            SiError::InvalidInput { input, reason } => {
                write!(f, "Failed to parse '{}': {}", input, reason)
            }
            SiError::InvalidTemplate { template, reason } => {
                write!(f, "Invalid format template '{}': {}", template, reason)
            }
        }
    }
}

impl std::error::Error for SiError {}

/// Result type for SI prefix operations
pub type SiResult<T> = Result<T, SiError>;
