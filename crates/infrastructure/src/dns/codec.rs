//! Reply encoding on top of hickory-proto.
//!
//! A `ResponseTemplate` captures what a response must echo from its request
//! (id, opcode, RD/CD flags, question section) so transports can encode the
//! dispatcher's record content without keeping the request message around.

use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::rdata::{A, SOA};
use hickory_proto::rr::{Name, RData, Record};
use xip_dns_domain::{DomainError, Reply, ResourceRecord, ZoneTransferEnvelope};

#[derive(Debug, Clone)]
pub struct ResponseTemplate {
    id: u16,
    op_code: OpCode,
    recursion_desired: bool,
    checking_disabled: bool,
    queries: Vec<Query>,
}

impl ResponseTemplate {
    pub fn from_request(request: &Message) -> Self {
        Self {
            id: request.id(),
            op_code: request.op_code(),
            recursion_desired: request.recursion_desired(),
            checking_disabled: request.checking_disabled(),
            queries: request.queries().to_vec(),
        }
    }

    pub fn id(&self) -> u16 {
        self.id
    }

    /// Only standard queries are answered; every other opcode gets NOTIMP.
    pub fn is_standard_query(&self) -> bool {
        self.op_code == OpCode::Query
    }

    pub fn encode_reply(&self, reply: &Reply) -> Result<Vec<u8>, DomainError> {
        let mut message = self.response(ResponseCode::NoError);
        for record in &reply.answers {
            message.add_answer(to_hickory_record(record)?);
        }
        for record in &reply.additional {
            message.add_additional(to_hickory_record(record)?);
        }
        encode(&message)
    }

    /// The whole envelope goes out as the answer section of one message.
    pub fn encode_transfer(&self, envelope: &ZoneTransferEnvelope) -> Result<Vec<u8>, DomainError> {
        let mut message = self.response(ResponseCode::NoError);
        for record in &envelope.records {
            message.add_answer(to_hickory_record(record)?);
        }
        encode(&message).map_err(|e| DomainError::TransferFailed(e.to_string()))
    }

    pub fn encode_error(&self, code: ResponseCode) -> Result<Vec<u8>, DomainError> {
        encode(&self.response(code))
    }

    fn response(&self, code: ResponseCode) -> Message {
        let mut message = Message::new();
        message
            .set_id(self.id)
            .set_message_type(MessageType::Response)
            .set_op_code(self.op_code)
            .set_authoritative(true)
            .set_recursion_desired(self.recursion_desired)
            .set_checking_disabled(self.checking_disabled)
            .set_response_code(code);
        for query in &self.queries {
            message.add_query(query.clone());
        }
        message
    }
}

pub fn to_hickory_record(record: &ResourceRecord) -> Result<Record, DomainError> {
    match record {
        ResourceRecord::A { name, ttl, address } => Ok(Record::from_rdata(
            parse_name(name)?,
            *ttl,
            RData::A(A(*address)),
        )),
        ResourceRecord::SOA {
            name,
            ttl,
            nameserver,
            mailbox,
            serial,
            refresh,
            retry,
            expire,
            minimum,
        } => {
            let soa = SOA::new(
                parse_name(nameserver)?,
                parse_name(mailbox)?,
                *serial,
                to_i32(*refresh)?,
                to_i32(*retry)?,
                to_i32(*expire)?,
                *minimum,
            );
            Ok(Record::from_rdata(parse_name(name)?, *ttl, RData::SOA(soa)))
        }
    }
}

fn parse_name(name: &str) -> Result<Name, DomainError> {
    Name::from_ascii(name)
        .map_err(|e| DomainError::InvalidDomainName(format!("{}: {}", name, e)))
}

fn to_i32(value: u32) -> Result<i32, DomainError> {
    i32::try_from(value)
        .map_err(|_| DomainError::InvalidDnsMessage(format!("SOA timer out of range: {}", value)))
}

fn encode(message: &Message) -> Result<Vec<u8>, DomainError> {
    message
        .to_vec()
        .map_err(|e| DomainError::InvalidDnsMessage(format!("Failed to encode response: {}", e)))
}
