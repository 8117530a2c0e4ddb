use crate::ports::ResponseChannel;
use crate::services::{RecordBuilder, A_RECORD_TTL, SOA_SERIAL, SOA_TTL};
use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::{debug, info, warn};
use xip_dns_domain::{Config, DnsQuery, DnsRequest, Reply, ZoneTransferEnvelope};

/// What a single question is answered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryAnswer {
    Reply(Reply),
    Transfer(ZoneTransferEnvelope),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A reply was written to the channel.
    Replied,
    /// The transfer envelope was written and the connection handed off.
    Transferred,
    /// The name is outside the zone and was answered REFUSED.
    Refused,
    /// The opcode is not QUERY and was answered NOTIMP.
    NotImplemented,
    /// Nothing was written.
    Dropped,
}

/// Per-request decision: question type in, reply or zone transfer out.
///
/// Holds no mutable state, so one instance is shared by every listener.
pub struct HandleDnsQueryUseCase {
    zone: Arc<str>,
    default_address: Ipv4Addr,
    verbose: bool,
}

impl HandleDnsQueryUseCase {
    pub fn new(zone: impl Into<Arc<str>>, default_address: Ipv4Addr, verbose: bool) -> Self {
        Self {
            zone: zone.into(),
            default_address,
            verbose,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.zone.fqdn.as_str(),
            config.zone.default_address,
            config.logging.verbose,
        )
    }

    pub fn zone(&self) -> &str {
        &self.zone
    }

    /// Build the answer for `query` without touching any transport.
    pub fn answer(&self, query: &DnsQuery) -> QueryAnswer {
        let record_type = query.record_type;

        if record_type.is_address() {
            let a = RecordBuilder::build_a(&query.name, self.default_address, A_RECORD_TTL);
            return QueryAnswer::Reply(Reply::with_answer(a));
        }

        let soa = RecordBuilder::build_soa(&self.zone, SOA_TTL, SOA_SERIAL);

        if record_type.is_zone_transfer() {
            let a = RecordBuilder::build_a(&query.name, self.default_address, A_RECORD_TTL);
            return QueryAnswer::Transfer(ZoneTransferEnvelope::new(soa, a));
        }

        QueryAnswer::Reply(Reply::with_answer(soa))
    }

    pub async fn execute(
        &self,
        request: &DnsRequest,
        channel: &mut dyn ResponseChannel,
    ) -> DispatchOutcome {
        let Some(query) = request.question() else {
            debug!(client = %request.client, "Empty question section, dropping");
            return DispatchOutcome::Dropped;
        };

        match self.answer(query) {
            QueryAnswer::Reply(reply) => {
                if self.verbose {
                    info!(
                        client = %request.client,
                        transport = %request.transport,
                        "Reply for {} {}\n{}",
                        query.name,
                        query.record_type,
                        reply
                    );
                }

                match channel.send_reply(&reply).await {
                    Ok(()) => DispatchOutcome::Replied,
                    Err(e) => {
                        warn!(error = %e, client = %request.client, "Failed to send reply");
                        DispatchOutcome::Dropped
                    }
                }
            }
            QueryAnswer::Transfer(envelope) => {
                match channel.send_transfer(&envelope).await {
                    Ok(()) => {
                        channel.hijack();
                        DispatchOutcome::Transferred
                    }
                    Err(e) => {
                        if self.verbose {
                            warn!(error = %e, client = %request.client, "Zone transfer failed");
                        }
                        DispatchOutcome::Dropped
                    }
                }
            }
        }
    }
}
