use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use pharmadash::config::Config;
use pharmadash::session::Session;
use pharmadash::{trace, ui};

/// Terminal dashboard for a pharmacy inventory service.
#[derive(Parser, Debug)]
#[command(name = "pharmadash", version, about)]
struct Cli {
    /// Path to the config file (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the API base URL from the config file.
    #[arg(long)]
    api_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    trace::init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }
    // Validate before the terminal enters raw mode so errors print
    // like a normal CLI failure.
    config.validate().context("invalid configuration")?;

    ui::runtime::run(config, Session::default())?;
    Ok(())
}
