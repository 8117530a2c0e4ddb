//! DNS over UDP (RFC 1035 §4.2.1). One message per datagram, no framing.

use crate::dns::codec::ResponseTemplate;
use crate::dns::server::DnsServerHandler;
use crate::dns::transport::{classify_socket_error, SocketErrorAction, SOCKET_ERROR_BACKOFF};
use async_trait::async_trait;
use hickory_proto::op::ResponseCode;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tracing::{debug, error, warn};
use xip_dns_application::ports::ResponseChannel;
use xip_dns_domain::{DomainError, Reply, TransportKind, ZoneTransferEnvelope};

/// Receive buffer size, large enough for EDNS(0) sized queries
const MAX_UDP_MESSAGE_SIZE: usize = 4096;

pub struct UdpResponseChannel {
    socket: Arc<UdpSocket>,
    peer: SocketAddr,
    template: ResponseTemplate,
    hijacked: bool,
}

impl UdpResponseChannel {
    pub fn new(socket: Arc<UdpSocket>, peer: SocketAddr, template: ResponseTemplate) -> Self {
        Self {
            socket,
            peer,
            template,
            hijacked: false,
        }
    }

    async fn send(&mut self, bytes: &[u8]) -> Result<(), DomainError> {
        if self.hijacked {
            return Err(DomainError::ConnectionHijacked);
        }
        self.socket.send_to(bytes, self.peer).await?;
        Ok(())
    }
}

#[async_trait]
impl ResponseChannel for UdpResponseChannel {
    async fn send_reply(&mut self, reply: &Reply) -> Result<(), DomainError> {
        let bytes = self.template.encode_reply(reply)?;
        self.send(&bytes).await
    }

    async fn send_transfer(
        &mut self,
        envelope: &ZoneTransferEnvelope,
    ) -> Result<(), DomainError> {
        let bytes = self.template.encode_transfer(envelope)?;
        self.send(&bytes)
            .await
            .map_err(|e| DomainError::TransferFailed(e.to_string()))
    }

    async fn send_refused(&mut self) -> Result<(), DomainError> {
        let bytes = self.template.encode_error(ResponseCode::Refused)?;
        self.send(&bytes).await
    }

    async fn send_not_implemented(&mut self) -> Result<(), DomainError> {
        let bytes = self.template.encode_error(ResponseCode::NotImp)?;
        self.send(&bytes).await
    }

    /// Datagrams have no connection to hand off; the channel only stops
    /// accepting writes.
    fn hijack(&mut self) {
        self.hijacked = true;
    }
}

pub(crate) async fn run(
    socket: Arc<UdpSocket>,
    handler: Arc<DnsServerHandler>,
) -> Result<(), DomainError> {
    let mut recv_buf = vec![0u8; MAX_UDP_MESSAGE_SIZE];

    loop {
        let (n, peer) = match socket.recv_from(&mut recv_buf).await {
            Ok(received) => received,
            Err(e) => match classify_socket_error(&e) {
                SocketErrorAction::Retry => {
                    debug!(error = %e, "Transient UDP receive error");
                    continue;
                }
                SocketErrorAction::Backoff => {
                    warn!(error = %e, "UDP receive failed, backing off");
                    tokio::time::sleep(SOCKET_ERROR_BACKOFF).await;
                    continue;
                }
                SocketErrorAction::Fail => {
                    error!(error = %e, "UDP listener failed");
                    return Err(e.into());
                }
            },
        };

        let Some(incoming) = handler.decode(&recv_buf[..n], peer, TransportKind::Udp) else {
            continue;
        };

        let handler = handler.clone();
        let socket = socket.clone();
        tokio::spawn(async move {
            let mut channel = UdpResponseChannel::new(socket, peer, incoming.template.clone());
            handler.respond(&incoming, &mut channel).await;
        });
    }
}
