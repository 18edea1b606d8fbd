use anyhow::{Context, Result};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

/// Install a formatting subscriber filtered by `RUST_LOG`, with `directive`
/// (e.g. `"translate_hub=info"`) added on top.
///
/// Returns an error instead of panicking when a global subscriber is already
/// installed.
pub fn init(directive: &str) -> Result<()> {
    let filter = EnvFilter::from_default_env().add_directive(
        directive
            .parse::<Directive>()
            .with_context(|| format!("Invalid log directive '{}'", directive))?,
    );

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))
}
