use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::zone::{fqdn, ZoneConfig};

const ENV_VERBOSE: &str = "XIP_VERBOSE";
const ENV_FQDN: &str = "XIP_FQDN";
const ENV_ADDR: &str = "XIP_ADDR";
const ENV_IP: &str = "XIP_IP";
const ENV_LOG_LEVEL: &str = "XIP_LOG_LEVEL";

/// Main configuration structure for xip-dns
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Config {
    /// Listener configuration
    pub server: ServerConfig,

    /// Zone suffix and fallback address
    pub zone: ZoneConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file, environment and command line
    ///
    /// Priority order (highest first):
    /// 1. Command-line overrides
    /// 2. `XIP_*` environment variables
    /// 3. Explicitly provided path, then xip-dns.toml, then /etc/xip-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let base = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        base.layered(|key| std::env::var(key).ok(), cli_overrides)
    }

    /// Parse a TOML document. Missing sections and keys keep their defaults.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    /// Apply environment and command-line layers on top of `self`, then
    /// normalize and validate. `env` looks up a variable by name.
    pub fn layered<F>(mut self, env: F, cli_overrides: CliOverrides) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.apply_env(env)?;
        self.apply_cli_overrides(cli_overrides);
        self.zone.fqdn = fqdn(&self.zone.fqdn);
        self.validate()?;
        Ok(self)
    }

    fn apply_env<F>(&mut self, env: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| env(key).filter(|value| !value.is_empty());

        if let Some(value) = lookup(ENV_VERBOSE) {
            self.logging.verbose = parse_bool(&value)
                .ok_or_else(|| ConfigError::InvalidEnv(ENV_VERBOSE.to_string(), value))?;
        }
        if let Some(value) = lookup(ENV_FQDN) {
            self.zone.fqdn = value;
        }
        if let Some(value) = lookup(ENV_ADDR) {
            self.server.bind_address = value;
        }
        if let Some(value) = lookup(ENV_IP) {
            self.zone.default_address = value
                .parse()
                .map_err(|_| ConfigError::InvalidEnv(ENV_IP.to_string(), value))?;
        }
        if let Some(value) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = value;
        }
        Ok(())
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if overrides.verbose {
            self.logging.verbose = true;
        }
        if let Some(fqdn) = overrides.fqdn {
            self.zone.fqdn = fqdn;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(ip) = overrides.default_address {
            self.zone.default_address = ip;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.zone.fqdn.trim_end_matches('.').is_empty() {
            return Err(ConfigError::Validation("Zone FQDN cannot be empty".to_string()));
        }

        if self.zone.fqdn.split('.').rev().skip(1).any(str::is_empty) {
            return Err(ConfigError::Validation(format!(
                "Zone FQDN has an empty label: {}",
                self.zone.fqdn
            )));
        }

        self.server.socket_addr()?;
        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new("xip-dns.toml").exists() {
            Some("xip-dns.toml".to_string())
        } else if std::path::Path::new("/etc/xip-dns/config.toml").exists() {
            Some("/etc/xip-dns/config.toml".to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    /// Only ever turns verbose mode on.
    pub verbose: bool,
    pub fqdn: Option<String>,
    pub bind_address: Option<String>,
    pub default_address: Option<Ipv4Addr>,
    pub log_level: Option<String>,
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}
