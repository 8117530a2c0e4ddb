//! Embedded IPv4 address extraction.
//!
//! Hostnames such as `foo.10.0.0.82.xip.name` or `app-192-168-1-7.xip.name`
//! carry the address they should resolve to. The first run of four 1-3 digit
//! groups separated by `.` or `-`, starting on a word boundary, is taken as
//! that address.

use fancy_regex::Regex;
use std::net::Ipv4Addr;
use std::sync::LazyLock;

static EMBEDDED_IPV4: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[0-9]{1,3}[.-][0-9]{1,3}[.-][0-9]{1,3}[.-][0-9]{1,3}")
        .expect("embedded address pattern is valid")
});

/// Result of scanning a name for an embedded address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Found(Ipv4Addr),
    /// A candidate sequence was present but is not a valid IPv4 literal
    /// (octet above 255, leading zeros).
    Malformed(String),
    Absent,
}

impl Extraction {
    pub fn address(&self) -> Option<Ipv4Addr> {
        match self {
            Extraction::Found(ip) => Some(*ip),
            Extraction::Malformed(_) | Extraction::Absent => None,
        }
    }
}

/// Scan `name` left to right and classify the leftmost candidate.
pub fn scan(name: &str) -> Extraction {
    let candidate = match EMBEDDED_IPV4.find(name) {
        Ok(Some(m)) => m.as_str(),
        Ok(None) | Err(_) => return Extraction::Absent,
    };

    let normalized = candidate.replace('-', ".");
    match normalized.parse::<Ipv4Addr>() {
        Ok(ip) => Extraction::Found(ip),
        Err(_) => Extraction::Malformed(normalized),
    }
}

/// The embedded address of `name`, if any. A malformed candidate and no
/// candidate at all are both `None`.
pub fn extract(name: &str) -> Option<Ipv4Addr> {
    scan(name).address()
}
