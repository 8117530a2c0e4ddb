use super::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// `ip:port` both listeners bind to. An empty host (`:53`) means
    /// every IPv4 interface; IPv6 needs an explicit `[::]:53`.
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: ":53".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = if self.bind_address.starts_with(':') {
            format!("0.0.0.0{}", self.bind_address)
        } else {
            self.bind_address.clone()
        };

        addr.parse().map_err(|_| {
            ConfigError::Validation(format!("Invalid bind address: {}", self.bind_address))
        })
    }
}
