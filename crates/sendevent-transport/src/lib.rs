//! TCP delivery layer for sendevent.
//!
//! One [`TransportClient::send`] call opens one blocking TCP connection,
//! writes the whole serialized event, and closes the socket. There is no
//! queuing, no retry and no response handling: success means the bytes
//! were written and the socket closed without an I/O fault, not that the
//! server accepted the event.

mod client;
mod error;

pub use client::TransportClient;
pub use error::TransportError;
