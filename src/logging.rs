//! Logging setup
//!
//! Installs a `tracing` subscriber for binaries embedding this crate. The
//! filter is taken from `RUST_LOG` when set, defaulting to `info`.

use tracing_subscriber::EnvFilter;

use crate::core::{ModePolicyError, ModePolicyResult};

/// Initialize the global logging subscriber
///
/// Fails if a global subscriber is already installed.
pub fn init_logging() -> ModePolicyResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| ModePolicyError::LoggingInit(e.to_string()))
}
