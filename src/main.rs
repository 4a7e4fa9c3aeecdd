//! Libris - Library Catalog Console
//!
//! Interactive console for managing an in-memory book catalog.

use std::io;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use libris::{Catalog, Shell};

fn main() -> anyhow::Result<()> {
    // Initialize tracing. Logs go to stderr so the interactive menu on
    // stdout stays clean.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "libris=info".into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!("Starting Libris v{}", env!("CARGO_PKG_VERSION"));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(Catalog::new(), stdin.lock(), stdout.lock());
    shell.run()?;

    tracing::info!("Session closed");
    Ok(())
}
