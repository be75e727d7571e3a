//! # Price Checker Kiosk Entry Point
//!
//! Runs the kiosk runtime against the real lookup API with the terminal as
//! its screen and keyboard.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration (defaults → kiosk.toml → PRICECHECK_* env)
//! 3. Build the HTTP product fetcher
//! 4. Discover slides
//! 5. Spawn the kiosk task
//! 6. Feed stdin lines until `/quit`, end of input or Ctrl+C

mod console;

use std::sync::Arc;

use pricecheck_kiosk::{
    ConfiguredSlides, HttpProductFetcher, Kiosk, KioskConfig, KioskHandle, KioskResult,
    SlideSource,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::console::{Command, ConsoleRenderer};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!(version = env!("CARGO_PKG_VERSION"), "Starting price checker kiosk");

    let config = KioskConfig::load_or_default(None);
    info!(
        kiosk_id = %config.kiosk_id(),
        name = %config.kiosk.name,
        api = %config.api.base_url,
        "Configuration loaded"
    );

    let fetcher = Arc::new(HttpProductFetcher::from_config(&config)?);
    let slides = ConfiguredSlides::from_config(&config).discover().await;

    let (kiosk, handle) = Kiosk::new(&config, slides, fetcher, Arc::new(ConsoleRenderer));
    let kiosk_task = tokio::spawn(kiosk.run());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) => {
                    if !dispatch(&handle, &line).await? {
                        break;
                    }
                }
                None => {
                    info!("Input closed");
                    break;
                }
            },
            _ = &mut shutdown => break,
        }
    }

    if let Err(e) = handle.shutdown().await {
        warn!(error = %e, "Kiosk already stopped");
    }
    kiosk_task.await?;

    info!("Kiosk shutdown complete");
    Ok(())
}

/// Initializes tracing. `RUST_LOG` overrides the default filter.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,pricecheck=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Forwards one input line to the kiosk. Returns false on `/quit`.
async fn dispatch(handle: &KioskHandle, line: &str) -> KioskResult<bool> {
    let command = match console::parse_command(line) {
        Ok(command) => command,
        Err(message) => {
            warn!(%message, "Ignoring input");
            return Ok(true);
        }
    };

    match command {
        Command::Scan(code) => handle.scan(&code).await?,
        Command::Manual(text) => handle.submit_manual(text).await?,
        Command::Focus => handle.set_manual_focus(true).await?,
        Command::Blur => handle.set_manual_focus(false).await?,
        Command::Dismiss => handle.dismiss().await?,
        Command::Slide(index) => handle.select_slide(index).await?,
        Command::Key(key) => handle.key(key).await?,
        Command::State => {
            for line in console::describe(&handle.state().await) {
                println!("{}", line);
            }
        }
        Command::Quit => return Ok(false),
    }

    Ok(true)
}

/// Resolves on Ctrl+C (or SIGTERM on unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
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
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
