//! xip-dns Infrastructure Layer: hickory-proto codec and UDP/TCP listeners
pub mod dns;
