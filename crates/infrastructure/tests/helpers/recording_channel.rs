use async_trait::async_trait;
use xip_dns_application::ports::ResponseChannel;
use xip_dns_domain::{DomainError, Reply, ZoneTransferEnvelope};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Reply(Reply),
    Transfer(ZoneTransferEnvelope),
    Refused,
    NotImplemented,
}

pub struct RecordingChannel {
    pub sent: Vec<Sent>,
    pub hijacked: bool,
}

impl RecordingChannel {
    pub fn new() -> Self {
        Self {
            sent: Vec::new(),
            hijacked: false,
        }
    }
}

#[async_trait]
impl ResponseChannel for RecordingChannel {
    async fn send_reply(&mut self, reply: &Reply) -> Result<(), DomainError> {
        self.sent.push(Sent::Reply(reply.clone()));
        Ok(())
    }

    async fn send_transfer(
        &mut self,
        envelope: &ZoneTransferEnvelope,
    ) -> Result<(), DomainError> {
        self.sent.push(Sent::Transfer(envelope.clone()));
        Ok(())
    }

    async fn send_refused(&mut self) -> Result<(), DomainError> {
        self.sent.push(Sent::Refused);
        Ok(())
    }

    async fn send_not_implemented(&mut self) -> Result<(), DomainError> {
        self.sent.push(Sent::NotImplemented);
        Ok(())
    }

    fn hijack(&mut self) {
        self.hijacked = true;
    }
}
