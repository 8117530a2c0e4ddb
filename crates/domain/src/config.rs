pub mod errors;
pub mod logging;
pub mod root;
pub mod server;
pub mod zone;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use zone::{fqdn, ZoneConfig};
