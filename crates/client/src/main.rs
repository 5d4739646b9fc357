//! Headless demo host for the readiness monitors.
//!
//! Loads content from `WATCH_CONTENT_DIR`, registers the crop, fruit tree and
//! fish pond monitors, and simulates a few in-game days while printing every
//! tooltip the scripted pointer reveals.
mod canvas;
mod config;
mod logging;
mod session;

use anyhow::{Context, Result};
use config::ClientConfig;
use session::Session;
use watch_content::ContentFactory;
use watch_runtime::OracleManager;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let _guard = logging::setup(config.session_id.as_deref())?;

    let factory = ContentFactory::new(&config.content_dir);
    let watch = factory
        .load_config()
        .context("loading monitor configuration")?;
    let world = factory.load_world().context("loading world snapshot")?;
    let names = factory.load_names().context("loading item names")?;
    tracing::info!(
        content = %factory.data_dir().display(),
        regions = world.regions.len(),
        items = names.items.len(),
        "content loaded"
    );

    let oracles = OracleManager::from_content(world, names);
    Session::new(config, watch, oracles)?.run().await
}
