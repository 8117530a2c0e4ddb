use async_trait::async_trait;
use xip_dns_application::ports::ResponseChannel;
use xip_dns_domain::{DomainError, Reply, TransportKind, ZoneTransferEnvelope};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Written {
    Reply(Reply),
    Transfer(ZoneTransferEnvelope),
    Refused,
    NotImplemented,
}

/// Records everything written through it instead of touching a socket.
pub struct MockResponseChannel {
    pub transport: TransportKind,
    pub written: Vec<Written>,
    pub hijacked: bool,
    fail_reply: bool,
    fail_transfer: bool,
}

impl MockResponseChannel {
    pub fn new(transport: TransportKind) -> Self {
        Self {
            transport,
            written: Vec::new(),
            hijacked: false,
            fail_reply: false,
            fail_transfer: false,
        }
    }

    pub fn failing_reply(mut self) -> Self {
        self.fail_reply = true;
        self
    }

    pub fn failing_transfer(mut self) -> Self {
        self.fail_transfer = true;
        self
    }

    pub fn only_reply(&self) -> &Reply {
        assert_eq!(self.written.len(), 1, "expected exactly one write");
        match &self.written[0] {
            Written::Reply(reply) => reply,
            other => panic!("expected a reply, got {:?}", other),
        }
    }

    pub fn only_transfer(&self) -> &ZoneTransferEnvelope {
        assert_eq!(self.written.len(), 1, "expected exactly one write");
        match &self.written[0] {
            Written::Transfer(envelope) => envelope,
            other => panic!("expected a transfer, got {:?}", other),
        }
    }
}

#[async_trait]
impl ResponseChannel for MockResponseChannel {
    async fn send_reply(&mut self, reply: &Reply) -> Result<(), DomainError> {
        if self.hijacked {
            return Err(DomainError::ConnectionHijacked);
        }
        if self.fail_reply {
            return Err(DomainError::IoError("connection reset".to_string()));
        }
        self.written.push(Written::Reply(reply.clone()));
        Ok(())
    }

    async fn send_transfer(
        &mut self,
        envelope: &ZoneTransferEnvelope,
    ) -> Result<(), DomainError> {
        if self.hijacked {
            return Err(DomainError::ConnectionHijacked);
        }
        if self.fail_transfer {
            return Err(DomainError::TransferFailed("transfer refused".to_string()));
        }
        self.written.push(Written::Transfer(envelope.clone()));
        Ok(())
    }

    async fn send_refused(&mut self) -> Result<(), DomainError> {
        if self.hijacked {
            return Err(DomainError::ConnectionHijacked);
        }
        self.written.push(Written::Refused);
        Ok(())
    }

    async fn send_not_implemented(&mut self) -> Result<(), DomainError> {
        if self.hijacked {
            return Err(DomainError::ConnectionHijacked);
        }
        self.written.push(Written::NotImplemented);
        Ok(())
    }

    fn hijack(&mut self) {
        self.hijacked = true;
    }
}
