//! Eligibility domain errors
//!
//! Every failure in this crate is a validation failure on caller-supplied
//! input. There is no I/O, so nothing is retryable and nothing is partial.

use core_kernel::TemporalError;
use thiserror::Error;

/// Errors that can occur while classifying records or building worklists
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EligibilityError {
    /// Caller input failed validation; `field` is a path such as
    /// `students[2].certifications[0].expiration_date`
    #[error("Validation error on {field}: {message}")]
    Validation {
        field: String,
        message: String,
    },
}

impl EligibilityError {
    /// Creates a validation error for the given field path
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        EligibilityError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The offending field path
    pub fn field(&self) -> &str {
        match self {
            EligibilityError::Validation { field, .. } => field,
        }
    }
}

impl From<TemporalError> for EligibilityError {
    fn from(err: TemporalError) -> Self {
        let field = err.field().unwrap_or("as_of").to_string();
        EligibilityError::Validation {
            field,
            message: err.to_string(),
        }
    }
}

/// Result alias for eligibility operations
pub type EligibilityResult<T> = Result<T, EligibilityError>;
