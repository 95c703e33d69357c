//! Error types for the portfolio page

use thiserror::Error;

/// Why a contact form submission was rejected.
///
/// Checked in field order, so the first failing rule is reported.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Name is empty after trimming whitespace
    #[error("Please enter your name")]
    EmptyName,

    /// Email has no `@`
    #[error("Please enter a valid email address")]
    InvalidEmail,

    /// Message is empty after trimming whitespace
    #[error("Please write a message")]
    EmptyMessage,
}

/// Main error type for portfolio operations
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// Contact form failed local validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The message delivery collaborator could not take the submission
    #[error("Delivery error: {0}")]
    Delivery(String),

    /// The resume document could not be fetched
    #[error("Resume error: {0}")]
    Resume(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error during serialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PortfolioError {
    /// Whether this error came from local validation rather than a collaborator.
    pub fn is_validation(&self) -> bool {
        matches!(self, PortfolioError::Validation(_))
    }
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PortfolioError::Delivery("outbox unavailable".to_string());
        assert_eq!(format!("{}", err), "Delivery error: outbox unavailable");
    }

    #[test]
    fn test_validation_display() {
        let err: PortfolioError = ValidationError::InvalidEmail.into();
        assert!(err.is_validation());
        assert_eq!(
            format!("{}", err),
            "Validation error: Please enter a valid email address"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PortfolioError = io_err.into();
        assert!(matches!(err, PortfolioError::Io(_)));
        assert!(!err.is_validation());
    }
}
