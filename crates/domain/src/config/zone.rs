use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ZoneConfig {
    /// Zone suffix this server is authoritative for.
    pub fqdn: String,

    /// Answer for names without an embedded address.
    pub default_address: Ipv4Addr,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            fqdn: "xip.name.".to_string(),
            default_address: Ipv4Addr::LOCALHOST,
        }
    }
}

/// Fully qualify `name` by appending the root label when it is missing.
pub fn fqdn(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}
