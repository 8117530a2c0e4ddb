pub mod codec;
pub mod record_type_map;
pub mod server;
pub mod transport;

pub use codec::ResponseTemplate;
pub use record_type_map::RecordTypeMapper;
pub use server::{DnsServerHandler, IncomingQuery};
pub use transport::{serve, DnsListener};
