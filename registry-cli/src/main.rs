use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use registry_rpc::HttpServer;
use registry_service::RegistryConfig;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Serve an in-memory user registry over HTTP/JSON
#[derive(Parser, Debug)]
#[command(name = "user-registry", version, about)]
struct Cli {
    /// YAML config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Address to listen on (default: 0.0.0.0:8008)
    #[arg(short, long, value_name = "ADDR")]
    bind: Option<String>,

    /// Log filter used when RUST_LOG is unset (default: info)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

impl Cli {
    fn load_config(&self) -> Result<RegistryConfig> {
        let config = match &self.config {
            Some(path) => RegistryConfig::from_file(path)?,
            None => RegistryConfig::default(),
        };
        Ok(config
            .with_bind_address(self.bind.clone())
            .with_log_level(self.log_level.clone()))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config = cli.load_config()?;
    init_tracing(&config.log_level);

    info!("Starting user-registry v{}", env!("CARGO_PKG_VERSION"));

    let listener = TcpListener::bind(&config.bind_address)
        .await
        .wrap_err_with(|| format!("failed to bind {}", config.bind_address))?;

    HttpServer::new()
        .serve(listener, shutdown_signal())
        .await
        .wrap_err("HTTP server error")?;

    info!("user-registry shutdown completed");
    Ok(())
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
