use async_trait::async_trait;
use xip_dns_domain::{DomainError, Reply, ZoneTransferEnvelope};

/// Write side of one accepted query, owned by the transport it arrived on.
///
/// The transport fills in header fields and the question section from the
/// original request; callers only supply record content.
#[async_trait]
pub trait ResponseChannel: Send {
    /// Encode and transmit a single reply message.
    async fn send_reply(&mut self, reply: &Reply) -> Result<(), DomainError>;

    /// Stream a zone transfer envelope as one message.
    async fn send_transfer(&mut self, envelope: &ZoneTransferEnvelope)
        -> Result<(), DomainError>;

    /// Answer REFUSED with an empty answer section.
    async fn send_refused(&mut self) -> Result<(), DomainError>;

    /// Answer NOTIMP for an opcode other than QUERY.
    async fn send_not_implemented(&mut self) -> Result<(), DomainError>;

    /// Relinquish the underlying connection. The transport stops serving it
    /// once the current query returns; further writes fail with
    /// `DomainError::ConnectionHijacked`.
    fn hijack(&mut self);
}
