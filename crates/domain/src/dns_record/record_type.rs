use std::fmt;

/// Query types the dispatcher distinguishes. Everything else is carried
/// as `Other` with its numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    CNAME,
    SOA,

    IXFR,
    AXFR,

    Other(u16),
}

impl RecordType {
    pub fn from_u16(code: u16) -> Self {
        match code {
            1 => RecordType::A,
            5 => RecordType::CNAME,
            6 => RecordType::SOA,
            28 => RecordType::AAAA,
            251 => RecordType::IXFR,
            252 => RecordType::AXFR,
            other => RecordType::Other(other),
        }
    }

    /// Address-style questions answered with an embedded-address A record.
    pub fn is_address(&self) -> bool {
        matches!(self, RecordType::A | RecordType::AAAA | RecordType::CNAME)
    }

    pub fn is_zone_transfer(&self) -> bool {
        matches!(self, RecordType::AXFR | RecordType::IXFR)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordType::A => f.write_str("A"),
            RecordType::AAAA => f.write_str("AAAA"),
            RecordType::CNAME => f.write_str("CNAME"),
            RecordType::SOA => f.write_str("SOA"),
            RecordType::IXFR => f.write_str("IXFR"),
            RecordType::AXFR => f.write_str("AXFR"),
            RecordType::Other(code) => write!(f, "TYPE{}", code),
        }
    }
}
