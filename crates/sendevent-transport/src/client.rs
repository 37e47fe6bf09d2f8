//! The blocking TCP client.

use std::io::Write;
use std::net::{Shutdown, SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

use tracing::debug;

use crate::error::TransportError;

/// Fire-and-forget event delivery over one TCP connection.
///
/// The socket is exclusively owned by one [`send`](Self::send) call and is
/// closed on every exit path: ownership scoping guarantees the close on
/// failure, and the success path shuts the stream down explicitly so that
/// close faults still surface.
///
/// The default client blocks indefinitely on connect and write;
/// [`with_timeout`](Self::with_timeout) applies a deadline to both.
///
/// # Example
///
/// ```no_run
/// use sendevent_transport::TransportClient;
///
/// let client = TransportClient::new();
/// client.send("localhost", "5817", b"<log>...</log>")?;
/// # Ok::<(), sendevent_transport::TransportError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TransportClient {
    timeout: Option<Duration>,
}

impl TransportClient {
    /// Creates a client with no connect/write deadline.
    #[must_use]
    pub fn new() -> Self {
        Self { timeout: None }
    }

    /// Creates a client that bounds both the connect and the write.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }

    /// Delivers `payload` to `host:port` in a single stream write.
    ///
    /// The port is validated before any resolution or connection attempt.
    /// No response is read; the server either processes the event or it
    /// does not, and this layer cannot tell the difference.
    ///
    /// # Errors
    ///
    /// - [`TransportError::InvalidPort`] — `port` is not a positive integer
    /// - [`TransportError::UnknownHost`] — `host` has no IPv4 address
    /// - [`TransportError::Connect`] / [`TransportError::Write`] /
    ///   [`TransportError::Close`] — the I/O layer failed; never retried
    pub fn send(&self, host: &str, port: &str, payload: &[u8]) -> Result<(), TransportError> {
        let port: u16 = port
            .parse()
            .ok()
            .filter(|p| *p > 0)
            .ok_or_else(|| TransportError::InvalidPort(port.to_string()))?;

        let addr = resolve_ipv4(host, port)?;
        debug!(%addr, "connecting");

        let mut stream = match self.timeout {
            Some(timeout) => TcpStream::connect_timeout(&addr, timeout),
            None => TcpStream::connect(addr),
        }
        .map_err(|source| TransportError::Connect { addr, source })?;

        if self.timeout.is_some() {
            stream
                .set_write_timeout(self.timeout)
                .map_err(TransportError::Write)?;
        }

        stream.write_all(payload).map_err(TransportError::Write)?;
        stream.flush().map_err(TransportError::Write)?;
        debug!(bytes = payload.len(), "payload written");

        stream
            .shutdown(Shutdown::Both)
            .map_err(TransportError::Close)?;
        Ok(())
    }
}

/// Resolves `host` to its first IPv4 address.
///
/// The eventd listener is addressed over IPv4; IPv6-only resolutions are
/// treated the same as no resolution at all.
fn resolve_ipv4(host: &str, port: u16) -> Result<SocketAddr, TransportError> {
    let addrs = (host, port)
        .to_socket_addrs()
        .map_err(|_| TransportError::UnknownHost(host.to_string()))?;
    addrs
        .into_iter()
        .find(SocketAddr::is_ipv4)
        .ok_or_else(|| TransportError::UnknownHost(host.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_port_strings_are_rejected() {
        let client = TransportClient::new();
        for port in ["notaport", "", "0", "-1", "70000", "5817x"] {
            let err = client.send("localhost", port, b"x").unwrap_err();
            assert!(
                matches!(err, TransportError::InvalidPort(_)),
                "port {port:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn port_is_validated_before_resolution() {
        // A bad port on an unresolvable host must fail as InvalidPort:
        // validation happens before any name lookup.
        let err = TransportClient::new()
            .send("no-such-host.invalid", "notaport", b"x")
            .unwrap_err();
        assert!(matches!(err, TransportError::InvalidPort(_)));
    }

    #[test]
    fn unresolvable_host_is_rejected() {
        let err = TransportClient::new()
            .send("no-such-host.invalid", "5817", b"x")
            .unwrap_err();
        assert!(matches!(err, TransportError::UnknownHost(_)));
        assert!(err.to_string().contains("no-such-host.invalid"));
    }

    #[test]
    fn numeric_addresses_resolve() {
        let addr = resolve_ipv4("127.0.0.1", 5817).unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:5817");
    }
}
