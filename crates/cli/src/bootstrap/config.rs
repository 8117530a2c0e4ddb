use xip_dns_domain::{CliOverrides, Config};

/// Fatal on any error: no listener is started with a bad configuration.
pub fn load_config(path: Option<&str>, cli_overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, cli_overrides)?;
    Ok(config)
}
