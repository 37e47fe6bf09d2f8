//! Application-level error type.
//!
//! [`AppError`] unifies the lower-layer errors for exit-code mapping in
//! `main`. The core layers never terminate the process; this is the only
//! place an error becomes an exit status.

use sendevent_event::EventError;
use sendevent_transport::TransportError;
use sendevent_types::ErrorCode;
use thiserror::Error;

/// Unified application error.
///
/// Lower-layer errors convert in via `From`; `Display` passes the inner
/// message through untouched so the user sees the specific fault, not a
/// layer prefix.
#[derive(Debug, Error)]
pub enum AppError {
    /// Event construction or serialization failed.
    #[error(transparent)]
    Event(#[from] EventError),

    /// Delivery failed.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl ErrorCode for AppError {
    fn code(&self) -> &'static str {
        match self {
            Self::Event(e) => e.code(),
            Self::Transport(e) => e.code(),
        }
    }

    fn is_recoverable(&self) -> bool {
        match self {
            Self::Event(e) => e.is_recoverable(),
            Self::Transport(e) => e.is_recoverable(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_error_converts() {
        let err: AppError = EventError::MissingField("uei").into();
        assert!(matches!(err, AppError::Event(_)));
        assert_eq!(err.code(), "EVENT_MISSING_FIELD");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn transport_error_converts() {
        let err: AppError = TransportError::InvalidPort("x".into()).into();
        assert!(matches!(err, AppError::Transport(_)));
        assert_eq!(err.code(), "TRANSPORT_INVALID_PORT");
    }
}
