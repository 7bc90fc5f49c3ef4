use anyhow::{Context, Result};
use tracing::info;

use typepatch::ConfigLoader;

fn main() -> Result<()> {
    typepatch::init_logging();

    let config = ConfigLoader::new()
        .load()
        .context("Failed to load patch configuration")?;

    info!("Patching {}", config.target_path.display());

    let report = typepatch::run(&config)
        .with_context(|| format!("Failed to patch {}", config.target_path.display()))?;

    println!("{}", report.completion_message());

    Ok(())
}
