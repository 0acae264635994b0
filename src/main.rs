//! Pokedex - A command-line Pokedex for the PokeAPI
//!
//! Responses are memoized in a time-bounded cache whose stale entries are
//! removed by a background sweep.

use anyhow::Context;
use tokio::io::BufReader;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::{Config, PokeApiClient, Repl, TimedCache};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr, so it stays out of the REPL)
/// 2. Load configuration from environment variables
/// 3. Create the response cache, which starts its sweep task
/// 4. Build the PokeAPI client around the cache
/// 5. Run the REPL on stdin/stdout until `exit`, end of input, or a signal
/// 6. Stop the sweep task
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn", can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Pokedex");

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_interval={}s, api_base_url={}, page_size={}, request_timeout={}s",
        config.cache_interval, config.api_base_url, config.page_size, config.request_timeout
    );

    let cache = TimedCache::new(config.cache_interval());
    let client = PokeApiClient::new(&config, cache.clone())
        .context("failed to build PokeAPI HTTP client")?;
    let mut repl = Repl::new(client, config.prompt.clone());

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();

    tokio::select! {
        result = repl.run(stdin, &mut stdout) => {
            result.context("REPL stopped on an I/O error")?;
        }
        _ = shutdown_signal() => {
            println!();
        }
    }

    let stats = cache.stats();
    info!(
        hits = stats.hits,
        misses = stats.misses,
        reaped = stats.reaped,
        entries = stats.total_entries,
        "Cache statistics at exit"
    );

    cache.shutdown().await;
    info!("Pokedex shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!(error = %err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
