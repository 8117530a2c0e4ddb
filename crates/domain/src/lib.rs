//! xip-dns Domain Layer
pub mod config;
pub mod dns_protocol;
pub mod dns_query;
pub mod dns_record;
pub mod dns_request;
pub mod embedded_address;
pub mod errors;
pub mod reply;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_protocol::TransportKind;
pub use dns_query::DnsQuery;
pub use dns_record::{RecordType, ResourceRecord};
pub use dns_request::DnsRequest;
pub use embedded_address::Extraction;
pub use errors::DomainError;
pub use reply::{Reply, ZoneTransferEnvelope};
