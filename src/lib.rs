// typepatch - annotates untyped `map` callbacks in a TSX component
// Plain textual rewrite: no parsing of the TypeScript source

pub mod config;
pub mod diff;
pub mod error;
pub mod patch;
pub mod utils;

pub use config::{ConfigLoader, PatchConfig, RuleSpec};
pub use error::{PatchError, PatchResult};
pub use patch::{run, run_default, PatchReport};

use tracing_subscriber::EnvFilter;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Initialize logging to stderr, filtered by `RUST_LOG` (default `warn`).
///
/// Stdout is left to the completion message. Calling this twice is harmless.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .try_init();

    tracing::debug!("Initializing typepatch v{}", version());
}
