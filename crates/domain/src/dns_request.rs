use super::{DnsQuery, TransportKind};
use std::net::SocketAddr;

#[derive(Debug, Clone)]
pub struct DnsRequest {
    pub questions: Vec<DnsQuery>,
    pub client: SocketAddr,
    pub transport: TransportKind,
}

impl DnsRequest {
    pub fn new(questions: Vec<DnsQuery>, client: SocketAddr, transport: TransportKind) -> Self {
        Self {
            questions,
            client,
            transport,
        }
    }

    /// Only the first question is ever answered.
    pub fn question(&self) -> Option<&DnsQuery> {
        self.questions.first()
    }
}
