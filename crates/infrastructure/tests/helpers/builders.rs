use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{Name, RecordType};
use std::net::Ipv4Addr;
use std::sync::Arc;
use xip_dns_application::use_cases::HandleDnsQueryUseCase;
use xip_dns_infrastructure::dns::DnsServerHandler;

pub const ZONE: &str = "xip.name.";
pub const DEFAULT_IP: Ipv4Addr = Ipv4Addr::new(127, 0, 0, 1);

pub fn make_handler() -> Arc<DnsServerHandler> {
    let use_case = HandleDnsQueryUseCase::new(ZONE, DEFAULT_IP, false);
    Arc::new(DnsServerHandler::new(Arc::new(use_case)))
}

pub fn query_bytes(id: u16, name: &str, record_type: RecordType) -> Vec<u8> {
    let mut message = Message::new();
    message
        .set_id(id)
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true);
    message.add_query(Query::query(Name::from_ascii(name).unwrap(), record_type));
    message.to_vec().unwrap()
}

pub fn query_bytes_without_question(id: u16) -> Vec<u8> {
    let mut message = Message::new();
    message
        .set_id(id)
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query);
    message.to_vec().unwrap()
}

/// A well-formed message carrying `op_code` instead of QUERY.
pub fn message_bytes_with_opcode(id: u16, name: &str, op_code: OpCode) -> Vec<u8> {
    let mut message = Message::from_vec(&query_bytes(id, name, RecordType::SOA)).unwrap();
    message.set_op_code(op_code);
    message.to_vec().unwrap()
}
