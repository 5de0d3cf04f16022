use anyhow::{Context, Result};
use clap::Parser;

use recordesk::args::CliArgs;
use recordesk::config::Config;
use recordesk::logging;
use recordesk::ui;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    logging::init_tracing();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load().context("failed to load configuration")?,
    };
    if let Some(data_dir) = args.data_dir {
        config.defaults.data_dir = Some(data_dir);
    }

    tracing::info!(
        collection = %args.collection.as_deref().unwrap_or(&config.defaults.collection),
        data_dir = %config.data_dir().display(),
        "starting"
    );

    ui::run(config, args.collection).context("terminal UI failed")
}
