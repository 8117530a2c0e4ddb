use clap::Parser;
use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::info;
use xip_dns_application::use_cases::HandleDnsQueryUseCase;
use xip_dns_domain::CliOverrides;
use xip_dns_infrastructure::dns::DnsServerHandler;

mod bootstrap;
mod server;

#[derive(Parser, Debug)]
#[command(name = "xip-dns")]
#[command(version)]
#[command(about = "xip-dns - answers with the IPv4 address embedded in the queried name")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log the configuration and every reply
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Zone suffix to answer for (default: xip.name.)
    #[arg(long)]
    fqdn: Option<String>,

    /// Address to bind both listeners on, as ip:port. A bare :port binds
    /// every IPv4 interface only, not IPv6 (default: :53)
    #[arg(short = 'a', long)]
    addr: Option<String>,

    /// Address for names without an embedded one (default: 127.0.0.1)
    #[arg(long)]
    ip: Option<Ipv4Addr>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            verbose: self.verbose,
            fqdn: self.fqdn.clone(),
            bind_address: self.addr.clone(),
            default_address: self.ip,
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;

    bootstrap::init_logging(&config);

    info!("Starting xip-dns v{}", env!("CARGO_PKG_VERSION"));
    if config.logging.verbose {
        info!(
            verbose = config.logging.verbose,
            fqdn = %config.zone.fqdn,
            bind_address = %config.server.bind_address,
            default_address = %config.zone.default_address,
            "Configuration"
        );
    }

    let bind_addr = config.server.socket_addr()?;
    let use_case = Arc::new(HandleDnsQueryUseCase::from_config(&config));
    let handler = Arc::new(DnsServerHandler::new(use_case));

    server::start_dns_server(bind_addr, handler).await;

    info!("Server shutdown complete");
    Ok(())
}
