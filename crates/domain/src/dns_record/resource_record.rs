use super::RecordType;
use std::fmt;
use std::net::Ipv4Addr;
use std::sync::Arc;

/// A record the responder answers with. Built fresh for every query.
///
/// `Display` renders the tab-separated presentation format used in
/// diagnostics, e.g. `nr1.10.0.0.1\t300\tIN\tA\t10.0.0.1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceRecord {
    A {
        name: Arc<str>,
        ttl: u32,
        address: Ipv4Addr,
    },
    SOA {
        name: Arc<str>,
        ttl: u32,
        nameserver: Arc<str>,
        mailbox: Arc<str>,
        serial: u32,
        refresh: u32,
        retry: u32,
        expire: u32,
        minimum: u32,
    },
}

impl ResourceRecord {
    pub fn name(&self) -> &str {
        match self {
            ResourceRecord::A { name, .. } | ResourceRecord::SOA { name, .. } => name,
        }
    }

    pub fn ttl(&self) -> u32 {
        match self {
            ResourceRecord::A { ttl, .. } | ResourceRecord::SOA { ttl, .. } => *ttl,
        }
    }

    pub fn record_type(&self) -> RecordType {
        match self {
            ResourceRecord::A { .. } => RecordType::A,
            ResourceRecord::SOA { .. } => RecordType::SOA,
        }
    }

    pub fn address(&self) -> Option<Ipv4Addr> {
        match self {
            ResourceRecord::A { address, .. } => Some(*address),
            ResourceRecord::SOA { .. } => None,
        }
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\tIN\t{}\t",
            self.name(),
            self.ttl(),
            self.record_type()
        )?;

        match self {
            ResourceRecord::A { address, .. } => write!(f, "{}", address),
            ResourceRecord::SOA {
                nameserver,
                mailbox,
                serial,
                refresh,
                retry,
                expire,
                minimum,
                ..
            } => write!(
                f,
                "{} {} {} {} {} {} {}",
                nameserver, mailbox, serial, refresh, retry, expire, minimum
            ),
        }
    }
}
