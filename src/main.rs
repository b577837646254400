use clap::Parser;
use hhse::application::catalog::PriceCatalog;
use hhse::config::PricingConfig;
use hhse::domain::product::Product;
use hhse::infrastructure::static_catalog::happy_hour_menu;
use hhse::interfaces::csv::product_reader::ProductReader;
use hhse::interfaces::http::AppState;
use hhse::interfaces::http::router::create_router;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8000)]
    port: u16,

    /// Seconds an idle product waits before its price decays one step
    #[arg(long, default_value_t = 60)]
    decay_period_secs: u64,

    /// CSV catalog with columns id, name, base_price (pence). Uses the built-in menu if omitted.
    #[arg(long)]
    catalog: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let products: Vec<Product> = match cli.catalog {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            ProductReader::new(file)
                .products()
                .collect::<hhse::error::Result<_>>()
                .into_diagnostic()?
        }
        None => happy_hour_menu(),
    };

    let config =
        PricingConfig::default().with_decay_period(Duration::from_secs(cli.decay_period_secs));
    let catalog = Arc::new(PriceCatalog::new(products, &config).into_diagnostic()?);

    let app = create_router(AppState::new(catalog.clone()));

    let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
    let listener = TcpListener::bind(addr).await.into_diagnostic()?;
    info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .into_diagnostic()?;

    catalog.shutdown().await;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
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
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("shutdown signal received (Ctrl+C)"),
        _ = terminate => info!("shutdown signal received (SIGTERM)"),
    }
}
