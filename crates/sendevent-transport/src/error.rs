//! Transport layer errors.

use std::io;
use std::net::SocketAddr;

use sendevent_types::ErrorCode;
use thiserror::Error;

/// Delivery failure.
///
/// The input errors ([`InvalidPort`](Self::InvalidPort),
/// [`UnknownHost`](Self::UnknownHost)) are raised before any connection
/// attempt and are not recoverable. The I/O variants wrap the underlying
/// cause and are recoverable in the sense that a later attempt against a
/// healthy network may succeed — this layer itself never retries.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The port string did not parse as a positive integer.
    #[error("TCP port {0} is not a positive integer")]
    InvalidPort(String),

    /// The host did not resolve to an IPv4 address.
    #[error("host {0} did not resolve to an IPv4 address")]
    UnknownHost(String),

    /// Connecting to the resolved address failed.
    #[error("failed to connect to {addr}: {source}")]
    Connect {
        /// The address the connection was attempted against.
        addr: SocketAddr,
        /// Underlying I/O fault.
        source: io::Error,
    },

    /// Writing the payload failed mid-stream. Nothing is considered sent.
    #[error("failed to write event payload: {0}")]
    Write(#[source] io::Error),

    /// Closing the connection failed after the payload was written.
    #[error("failed to close connection: {0}")]
    Close(#[source] io::Error),
}

impl ErrorCode for TransportError {
    fn code(&self) -> &'static str {
        match self {
            Self::InvalidPort(_) => "TRANSPORT_INVALID_PORT",
            Self::UnknownHost(_) => "TRANSPORT_UNKNOWN_HOST",
            Self::Connect { .. } => "TRANSPORT_CONNECT_FAILED",
            Self::Write(_) => "TRANSPORT_WRITE_FAILED",
            Self::Close(_) => "TRANSPORT_CLOSE_FAILED",
        }
    }

    fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Connect { .. } | Self::Write(_) | Self::Close(_)
        )
    }
}
