//! DNS over TCP (RFC 1035 §4.2.2)
//!
//! Every message is prefixed with its length as a big-endian u16. A
//! connection may carry several queries; it is served until the peer closes
//! it, it sits idle, or a zone transfer hijacks it.

use crate::dns::codec::ResponseTemplate;
use crate::dns::server::DnsServerHandler;
use crate::dns::transport::{classify_socket_error, SocketErrorAction, SOCKET_ERROR_BACKOFF};
use async_trait::async_trait;
use hickory_proto::op::ResponseCode;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpListener;
use tracing::{debug, error, warn};
use xip_dns_application::ports::ResponseChannel;
use xip_dns_domain::{DomainError, Reply, TransportKind, ZoneTransferEnvelope};

const MAX_TCP_MESSAGE_SIZE: usize = u16::MAX as usize;

/// Idle time after which a connection without a new query is closed
pub const TCP_IDLE_TIMEOUT: Duration = Duration::from_secs(10);

pub struct TcpResponseChannel<'a, W> {
    writer: &'a mut W,
    template: ResponseTemplate,
    hijacked: bool,
}

impl<'a, W> TcpResponseChannel<'a, W>
where
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(writer: &'a mut W, template: ResponseTemplate) -> Self {
        Self {
            writer,
            template,
            hijacked: false,
        }
    }

    pub fn is_hijacked(&self) -> bool {
        self.hijacked
    }

    async fn send(&mut self, bytes: &[u8]) -> Result<(), DomainError> {
        if self.hijacked {
            return Err(DomainError::ConnectionHijacked);
        }
        send_with_length_prefix(&mut *self.writer, bytes).await
    }
}

#[async_trait]
impl<W> ResponseChannel for TcpResponseChannel<'_, W>
where
    W: AsyncWrite + Unpin + Send,
{
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

    fn hijack(&mut self) {
        self.hijacked = true;
    }
}

pub(crate) async fn run(
    listener: TcpListener,
    handler: Arc<DnsServerHandler>,
) -> Result<(), DomainError> {
    loop {
        let (stream, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => match classify_socket_error(&e) {
                SocketErrorAction::Retry => {
                    debug!(error = %e, "Transient TCP accept error");
                    continue;
                }
                SocketErrorAction::Backoff => {
                    warn!(error = %e, "TCP accept failed, backing off");
                    tokio::time::sleep(SOCKET_ERROR_BACKOFF).await;
                    continue;
                }
                SocketErrorAction::Fail => {
                    error!(error = %e, "TCP listener failed");
                    return Err(e.into());
                }
            },
        };

        let handler = handler.clone();
        tokio::spawn(async move {
            serve_connection(stream, peer, handler).await;
        });
    }
}

/// Serve queries on one connection until EOF, idle timeout, a framing
/// error, or a hijack. The stream is shut down and dropped afterwards.
pub async fn serve_connection<S>(
    mut stream: S,
    peer: SocketAddr,
    handler: Arc<DnsServerHandler>,
) where
    S: AsyncRead + AsyncWrite + Unpin + Send,
{
    loop {
        let read = tokio::time::timeout(TCP_IDLE_TIMEOUT, read_with_length_prefix(&mut stream));
        let bytes = match read.await {
            Ok(Ok(Some(bytes))) => bytes,
            Ok(Ok(None)) => break,
            Ok(Err(e)) => {
                debug!(client = %peer, error = %e, "TCP read failed");
                break;
            }
            Err(_) => {
                debug!(client = %peer, "TCP connection idle, closing");
                break;
            }
        };

        let Some(incoming) = handler.decode(&bytes, peer, TransportKind::Tcp) else {
            continue;
        };

        let mut channel = TcpResponseChannel::new(&mut stream, incoming.template.clone());
        handler.respond(&incoming, &mut channel).await;

        if channel.is_hijacked() {
            debug!(client = %peer, "Connection handed off after zone transfer");
            break;
        }
    }

    let _ = stream.shutdown().await;
}

pub(crate) async fn send_with_length_prefix<S>(
    stream: &mut S,
    message_bytes: &[u8],
) -> Result<(), DomainError>
where
    S: AsyncWrite + Unpin,
{
    if message_bytes.len() > MAX_TCP_MESSAGE_SIZE {
        return Err(DomainError::InvalidDnsMessage(format!(
            "Message too large: {} bytes (max {})",
            message_bytes.len(),
            MAX_TCP_MESSAGE_SIZE
        )));
    }

    let length = message_bytes.len() as u16;
    stream.write_all(&length.to_be_bytes()).await?;
    stream.write_all(message_bytes).await?;
    stream.flush().await?;

    Ok(())
}

/// `Ok(None)` on a clean EOF before the length prefix.
pub(crate) async fn read_with_length_prefix<S>(
    stream: &mut S,
) -> Result<Option<Vec<u8>>, DomainError>
where
    S: AsyncRead + Unpin,
{
    let mut len_buf = [0u8; 2];
    match stream.read_exact(&mut len_buf).await {
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
        Err(e) => return Err(e.into()),
    }

    let message_len = u16::from_be_bytes(len_buf) as usize;

    let mut message = vec![0u8; message_len];
    stream.read_exact(&mut message).await?;

    Ok(Some(message))
}
