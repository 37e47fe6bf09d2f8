//! Unified error interface for sendevent.
//!
//! Every error type in the workspace implements [`ErrorCode`] so that the
//! CLI layer can log a stable machine-readable code next to the human
//! message, and so that callers can distinguish transient I/O faults from
//! input errors that will never succeed on retry.

/// Unified error code interface.
///
/// # Code Format
///
/// - **UPPER_SNAKE_CASE**: e.g. `"TRANSPORT_INVALID_PORT"`
/// - **Domain-prefixed**: `EVENT_`, `SEVERITY_`, `TRANSPORT_`
/// - **Stable**: codes are an API contract and do not change once defined
///
/// # Recoverability
///
/// An error is recoverable when retrying the operation may succeed (a
/// transient network fault, for instance). Invalid input is never
/// recoverable: the same arguments will fail the same way next time.
///
/// # Example
///
/// ```
/// use sendevent_types::ErrorCode;
///
/// #[derive(Debug)]
/// enum MyError {
///     BadInput(String),
///     ConnectionReset,
/// }
///
/// impl ErrorCode for MyError {
///     fn code(&self) -> &'static str {
///         match self {
///             Self::BadInput(_) => "BAD_INPUT",
///             Self::ConnectionReset => "CONNECTION_RESET",
///         }
///     }
///
///     fn is_recoverable(&self) -> bool {
///         matches!(self, Self::ConnectionReset)
///     }
/// }
///
/// assert_eq!(MyError::ConnectionReset.code(), "CONNECTION_RESET");
/// assert!(!MyError::BadInput("x".into()).is_recoverable());
/// ```
pub trait ErrorCode {
    /// Returns a machine-readable error code.
    fn code(&self) -> &'static str;

    /// Returns whether retrying the failed operation may succeed.
    fn is_recoverable(&self) -> bool;
}
