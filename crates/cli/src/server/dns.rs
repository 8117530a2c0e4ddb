use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};
use xip_dns_domain::TransportKind;
use xip_dns_infrastructure::dns::{serve, DnsServerHandler};

/// Start the TCP and UDP listeners and block until SIGINT or SIGTERM.
///
/// A listener that fails to bind only logs; the other keeps serving.
/// Nothing is drained on the way out.
pub async fn start_dns_server(bind_addr: SocketAddr, handler: Arc<DnsServerHandler>) {
    for kind in [TransportKind::Tcp, TransportKind::Udp] {
        let handler = handler.clone();
        tokio::spawn(async move {
            if let Err(e) = serve(bind_addr, kind, handler).await {
                error!(transport = %kind, bind_address = %bind_addr, error = %e, "Failed to set up the DNS listener");
            }
        });
    }

    info!("Ready to receive requests, CTRL-C to shutdown");

    shutdown_signal().await;
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!("failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                error!("failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Signal (SIGINT) received, stopping");
        }
        _ = terminate => {
            info!("Signal (SIGTERM) received, stopping");
        }
    }
}
