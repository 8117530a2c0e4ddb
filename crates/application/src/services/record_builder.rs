use std::net::Ipv4Addr;
use tracing::debug;
use xip_dns_domain::embedded_address::{self, Extraction};
use xip_dns_domain::ResourceRecord;

/// TTL of A records answering address questions.
pub const A_RECORD_TTL: u32 = 300;
/// TTL of the zone SOA, also used for the SOA fallback answer.
pub const SOA_TTL: u32 = 1440;
pub const SOA_SERIAL: u32 = 2014123101;
pub const SOA_REFRESH: u32 = 21600;
pub const SOA_RETRY: u32 = 7200;
pub const SOA_EXPIRE: u32 = 604800;
pub const SOA_MINIMUM: u32 = 3600;

/// Builds the records the responder answers with.
pub struct RecordBuilder;

impl RecordBuilder {
    /// A record for `name`, pointing at the embedded address or at
    /// `default_address` when there is none.
    pub fn build_a(name: &str, default_address: Ipv4Addr, ttl: u32) -> ResourceRecord {
        let address = match embedded_address::scan(name) {
            Extraction::Found(ip) => ip,
            Extraction::Malformed(candidate) => {
                debug!(name = %name, candidate = %candidate, "Embedded address does not parse, using default");
                default_address
            }
            Extraction::Absent => default_address,
        };

        ResourceRecord::A {
            name: name.into(),
            ttl,
            address,
        }
    }

    /// SOA for `zone`, naming the zone itself as nameserver and mailbox.
    pub fn build_soa(zone: &str, ttl: u32, serial: u32) -> ResourceRecord {
        ResourceRecord::SOA {
            name: zone.into(),
            ttl,
            nameserver: zone.into(),
            mailbox: zone.into(),
            serial,
            refresh: SOA_REFRESH,
            retry: SOA_RETRY,
            expire: SOA_EXPIRE,
            minimum: SOA_MINIMUM,
        }
    }
}
