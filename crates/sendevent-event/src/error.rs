//! Event layer errors.

use sendevent_types::{ErrorCode, SeverityError};
use thiserror::Error;

/// Event construction or rendering error.
///
/// | Variant | Code | Recoverable |
/// |---------|------|-------------|
/// | [`MissingField`](Self::MissingField) | `EVENT_MISSING_FIELD` | no |
/// | [`InvalidNodeId`](Self::InvalidNodeId) | `EVENT_INVALID_NODE_ID` | no |
/// | [`Severity`](Self::Severity) | delegated | no |
/// | [`Render`](Self::Render) | `EVENT_RENDER_FAILED` | no |
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    /// A required field (`uei` or `interface`) was absent from the input
    /// mapping. No event is constructed and nothing is transmitted.
    #[error("required field {0} is not set")]
    MissingField(&'static str),

    /// The node id did not parse as an integer.
    #[error("node id {0} is not an integer")]
    InvalidNodeId(String),

    /// The severity code was invalid.
    #[error(transparent)]
    Severity(#[from] SeverityError),

    /// Internal formatting fault while rendering the XML document.
    /// Not expected to occur with valid inputs.
    #[error("failed to render event document: {0}")]
    Render(#[from] std::fmt::Error),
}

impl ErrorCode for EventError {
    fn code(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "EVENT_MISSING_FIELD",
            Self::InvalidNodeId(_) => "EVENT_INVALID_NODE_ID",
            Self::Severity(e) => e.code(),
            Self::Render(_) => "EVENT_RENDER_FAILED",
        }
    }

    fn is_recoverable(&self) -> bool {
        false
    }
}
