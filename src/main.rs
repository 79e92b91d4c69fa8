//! Strimzi CRD Provider host
//!
//! Reads one JSON request per line on stdin and writes one JSON response per
//! line on stdout. Logs go to stderr.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use strimzi_crd_provider::diagnostics::Diagnostic;
use strimzi_crd_provider::provider::{Provider, Request, Response};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    info!(
        "Starting Strimzi CRD Provider {}",
        env!("CARGO_PKG_VERSION")
    );

    tokio::select! {
        result = serve() => {
            if let Err(err) = &result {
                error!("Request loop failed: {}", err);
            }
            result?;
        }
        _ = shutdown_signal() => {
            info!("Received shutdown signal, stopping provider");
        }
    }

    info!("Strimzi CRD Provider stopped");
    Ok(())
}

/// Serve requests until stdin is closed
async fn serve() -> anyhow::Result<()> {
    let mut provider = Provider::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Request>(&line) {
            Ok(request) => provider.handle(request).await,
            Err(err) => {
                warn!("Malformed request: {}", err);
                Response::from_diagnostics(vec![Diagnostic::error(
                    "Malformed request",
                    format!("Could not parse request: {}", err),
                )])
            }
        };

        let mut out = serde_json::to_vec(&response)?;
        out.push(b'\n');
        stdout.write_all(&out).await?;
        stdout.flush().await?;
    }

    info!("Input closed");
    Ok(())
}

/// Initialize tracing subscriber, writing JSON to stderr
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,strimzi_crd_provider=debug,kube=warn,hyper=warn")
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Wait for shutdown signal (SIGTERM or SIGINT)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!("Failed to install CTRL+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                error!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received CTRL+C signal");
        }
        _ = terminate => {
            info!("Received SIGTERM signal");
        }
    }
}
