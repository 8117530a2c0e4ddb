use std::fmt;

/// Transport a query arrived on and its reply leaves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportKind {
    /// Stream-oriented, length-prefixed framing (RFC 1035 §4.2.2)
    Tcp,
    /// Datagram-oriented, one message per packet (RFC 1035 §4.2.1)
    Udp,
}

impl TransportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportKind::Tcp => "tcp",
            TransportKind::Udp => "udp",
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
