// changesize - rewrites lattice-size parameters of a configuration file in place

pub mod cli;
pub mod error;
pub mod rewrite;
pub mod utils;

pub use error::{ChangeSizeError, ChangeSizeResult};
pub use rewrite::{rewrite, rewrite_file, RewriteResult, RewriteValues};

use anyhow::{anyhow, Result};
use tracing::debug;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Initialize logging.
///
/// Logs always go to stderr so stdout only ever carries the usage text.
/// `RUST_LOG` selects the level, defaulting to `warn`.
pub fn init_with_logger(ansi_colors: bool) -> Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt::Subscriber::builder()
        .with_ansi(ansi_colors)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logger: {}", e))?;

    debug!("Initializing changesize v{}", version());

    Ok(())
}
