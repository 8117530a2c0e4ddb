use crate::dns::codec::ResponseTemplate;
use crate::dns::record_type_map::RecordTypeMapper;
use hickory_proto::op::{Message, MessageType};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, warn};
use xip_dns_application::ports::ResponseChannel;
use xip_dns_application::use_cases::{DispatchOutcome, HandleDnsQueryUseCase};
use xip_dns_domain::{DnsQuery, DnsRequest, TransportKind};

/// A decoded query plus what its response has to echo back.
#[derive(Debug, Clone)]
pub struct IncomingQuery {
    pub template: ResponseTemplate,
    pub request: DnsRequest,
}

/// Shared by both listeners. Decodes wire messages, routes names under the
/// zone to the dispatcher and refuses everything else.
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        Self { use_case }
    }

    pub fn zone(&self) -> &str {
        self.use_case.zone()
    }

    /// `None` for bytes that are not a DNS query message.
    pub fn decode(
        &self,
        bytes: &[u8],
        client: SocketAddr,
        transport: TransportKind,
    ) -> Option<IncomingQuery> {
        let message = match Message::from_vec(bytes) {
            Ok(message) => message,
            Err(e) => {
                debug!(client = %client, transport = %transport, error = %e, "Failed to decode DNS message");
                return None;
            }
        };

        if message.message_type() != MessageType::Query {
            debug!(client = %client, "Ignoring DNS response message");
            return None;
        }

        let questions = message
            .queries()
            .iter()
            .map(|query| {
                DnsQuery::new(
                    query.name().to_ascii(),
                    RecordTypeMapper::from_hickory(query.query_type()),
                )
            })
            .collect();

        Some(IncomingQuery {
            template: ResponseTemplate::from_request(&message),
            request: DnsRequest::new(questions, client, transport),
        })
    }

    /// Answer one decoded message: NOTIMP for opcodes other than QUERY,
    /// otherwise the same as [`handle`](Self::handle).
    pub async fn respond(
        &self,
        incoming: &IncomingQuery,
        channel: &mut dyn ResponseChannel,
    ) -> DispatchOutcome {
        if !incoming.template.is_standard_query() {
            debug!(client = %incoming.request.client, "Unsupported opcode, answering NOTIMP");
            return match channel.send_not_implemented().await {
                Ok(()) => DispatchOutcome::NotImplemented,
                Err(e) => {
                    warn!(error = %e, client = %incoming.request.client, "Failed to send NOTIMP");
                    DispatchOutcome::Dropped
                }
            };
        }

        self.handle(&incoming.request, channel).await
    }

    pub async fn handle(
        &self,
        request: &DnsRequest,
        channel: &mut dyn ResponseChannel,
    ) -> DispatchOutcome {
        if let Some(query) = request.question() {
            debug!(
                name = %query.name,
                record_type = %query.record_type,
                client = %request.client,
                transport = %request.transport,
                "DNS query received"
            );

            if !query.is_within(self.zone()) {
                debug!(name = %query.name, zone = %self.zone(), "Name outside zone, refusing");
                return match channel.send_refused().await {
                    Ok(()) => DispatchOutcome::Refused,
                    Err(e) => {
                        warn!(error = %e, client = %request.client, "Failed to send refusal");
                        DispatchOutcome::Dropped
                    }
                };
            }
        }

        self.use_case.execute(request, channel).await
    }
}
