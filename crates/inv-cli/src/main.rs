use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use inv_cli::{logging, Session};
use inv_core::InventoryConfig;

#[derive(Parser)]
#[command(name = "inventory")]
#[command(version, about = "Bill-of-materials inventory request processor")]
struct Cli {
    /// Request file (default: stdin)
    input: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long, env = "INVENTORY_CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => InventoryConfig::default(),
    };

    let mut session = Session::new(config, io::stdout().lock(), io::stderr());
    match &cli.input {
        Some(path) => {
            let file = File::open(path).with_context(|| path.display().to_string())?;
            session.run(BufReader::new(file))?;
        }
        None => session.run(io::stdin().lock())?,
    }

    Ok(())
}

fn load_config(path: &Path) -> Result<InventoryConfig> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    InventoryConfig::from_json(&json)
        .with_context(|| format!("parsing config {}", path.display()))
}
