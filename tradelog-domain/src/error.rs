//! Error module for the TradeLog domain layer.

use thiserror::Error;

use crate::toasts::ToastError;
use tradelog_core::CoreError;

/// A general Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

/// The primary error type for the domain layer.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Core infrastructure error (configuration, logging).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Toast subscription error.
    #[error(transparent)]
    Toast(#[from] ToastError),

    /// Other error.
    #[error("Domain error: {0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_error_converts_transparently() {
        let err = DomainError::from(ToastError::Lagged { missed: 3 });
        assert_eq!(
            err.to_string(),
            "Subscriber lagged behind; 3 snapshot(s) were dropped."
        );
    }

    #[test]
    fn core_error_converts_transparently() {
        let err = DomainError::from(CoreError::Internal("boom".to_string()));
        assert!(matches!(err, DomainError::Core(_)));
    }
}
