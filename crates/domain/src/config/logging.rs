use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,

    /// Log the startup configuration and every composed reply.
    pub verbose: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            verbose: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
