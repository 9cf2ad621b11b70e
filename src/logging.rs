use tracing_subscriber::EnvFilter;

use crate::error::{Result, ToolError};

/// Installs the global subscriber. `RUST_LOG` wins over `default_filter`.
///
/// Events go to stderr so they never interleave with the console prompts on
/// stdout.
pub fn init_logging(default_filter: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|err| ToolError::Logging(err.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| ToolError::Logging(err.to_string()))
}
