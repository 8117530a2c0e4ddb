//! Inbound listeners. Each transport owns its socket loop and spawns one
//! task per datagram (UDP) or per accepted connection (TCP).

pub mod tcp;
pub mod udp;

use crate::dns::server::DnsServerHandler;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::{TcpListener, UdpSocket};
use tracing::info;
use xip_dns_domain::{DomainError, TransportKind};

pub use tcp::TcpResponseChannel;
pub use udp::UdpResponseChannel;

/// Pause after a receive or accept error that says nothing about the peer,
/// such as running out of file descriptors.
pub const SOCKET_ERROR_BACKOFF: Duration = Duration::from_millis(100);

/// How a listener loop reacts to a failed `accept` or `recv_from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocketErrorAction {
    /// The error belongs to one peer; go straight back to the socket.
    Retry,
    /// A resource shortage that clears on its own; sleep, then continue.
    Backoff,
    /// The listening socket itself is unusable.
    Fail,
}

pub fn classify_socket_error(e: &io::Error) -> SocketErrorAction {
    match e.kind() {
        io::ErrorKind::ConnectionAborted
        | io::ErrorKind::ConnectionReset
        | io::ErrorKind::ConnectionRefused
        | io::ErrorKind::Interrupted
        | io::ErrorKind::WouldBlock
        | io::ErrorKind::TimedOut => SocketErrorAction::Retry,
        io::ErrorKind::InvalidInput | io::ErrorKind::NotConnected | io::ErrorKind::Unsupported => {
            SocketErrorAction::Fail
        }
        _ => SocketErrorAction::Backoff,
    }
}

enum Bound {
    Udp(Arc<UdpSocket>),
    Tcp(TcpListener),
}

/// A bound, not yet serving, listener for one transport.
pub struct DnsListener {
    bound: Bound,
    local_addr: SocketAddr,
}

impl DnsListener {
    pub async fn bind(addr: SocketAddr, kind: TransportKind) -> Result<Self, DomainError> {
        let bound = match kind {
            TransportKind::Udp => Bound::Udp(Arc::new(UdpSocket::bind(addr).await?)),
            TransportKind::Tcp => Bound::Tcp(TcpListener::bind(addr).await?),
        };

        let local_addr = match &bound {
            Bound::Udp(socket) => socket.local_addr()?,
            Bound::Tcp(listener) => listener.local_addr()?,
        };

        Ok(Self { bound, local_addr })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn kind(&self) -> TransportKind {
        match self.bound {
            Bound::Udp(_) => TransportKind::Udp,
            Bound::Tcp(_) => TransportKind::Tcp,
        }
    }

    /// Serve until the listening socket becomes unusable. Never returns
    /// `Ok` in practice.
    pub async fn run(self, handler: Arc<DnsServerHandler>) -> Result<(), DomainError> {
        match self.bound {
            Bound::Udp(socket) => udp::run(socket, handler).await,
            Bound::Tcp(listener) => tcp::run(listener, handler).await,
        }
    }
}

/// Bind `addr` for `kind` and serve it indefinitely.
pub async fn serve(
    addr: SocketAddr,
    kind: TransportKind,
    handler: Arc<DnsServerHandler>,
) -> Result<(), DomainError> {
    let listener = DnsListener::bind(addr, kind).await?;
    info!(bind_address = %listener.local_addr(), transport = %listener.kind(), "Listening");
    listener.run(handler).await
}
