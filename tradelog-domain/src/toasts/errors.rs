use thiserror::Error;
use tokio::sync::broadcast::error::RecvError;

/// Errors a toast subscriber can observe.
///
/// The store's own operations are total and never fail; only the snapshot
/// stream between the store and a consumer has error-like conditions.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ToastError {
    /// The subscriber consumed snapshots slower than the store produced
    /// them and the channel dropped the oldest ones. The next receive
    /// resumes with the most recent retained snapshot.
    #[error("Subscriber lagged behind; {missed} snapshot(s) were dropped.")]
    Lagged { missed: u64 },

    /// The store was dropped while the subscription was still open.
    #[error("The toast store was shut down.")]
    Closed,
}

impl From<RecvError> for ToastError {
    fn from(err: RecvError) -> Self {
        match err {
            RecvError::Lagged(missed) => ToastError::Lagged { missed },
            RecvError::Closed => ToastError::Closed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recv_error_maps_onto_toast_error() {
        assert_eq!(
            ToastError::from(RecvError::Lagged(4)),
            ToastError::Lagged { missed: 4 }
        );
        assert_eq!(ToastError::from(RecvError::Closed), ToastError::Closed);
    }
}
