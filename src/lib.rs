// drive-patch - adds error logging to the drive skill's cross-device move fallback
// A one-shot literal find-and-replace over a single source file

pub mod config;
pub mod core;
pub mod diff;
pub mod error;
pub mod utils;

pub use crate::config::{ConfigLoader, PatchConfig};
pub use crate::core::{PatchOutcome, PatchPreview, Patcher};
pub use crate::error::{FileOp, PatchError, PatchResult};

use anyhow::Result;
use tracing::debug;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Initialize logging on stderr so stdout carries only the confirmation line.
///
/// `RUST_LOG` takes precedence; otherwise the level is `warn`, or `debug`
/// when `verbose` is set.
pub fn init_with_logger(verbose: bool) -> Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt::Subscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(verbose)
        .without_time()
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    debug!("Initializing drive-patch v{}", version());
    Ok(())
}
