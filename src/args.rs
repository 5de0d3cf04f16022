use std::path::PathBuf;

use clap::Parser;

/// Terminal admin panel for JSON record collections.
#[derive(Debug, Parser)]
#[command(name = "recordesk", version, about)]
pub struct CliArgs {
    /// Path to the config file (defaults to the platform config dir).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Collection to open instead of the configured default.
    #[arg(long, short = 'c')]
    pub collection: Option<String>,

    /// Directory holding the collection data files.
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}
