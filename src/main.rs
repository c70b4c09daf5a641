use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use std::io;

use verdict_fetch::cli::Cli;
use verdict_fetch::logging;
use verdict_fetch::Outcome;

fn init_logging(cli: &Cli) {
    if cli.no_log_file {
        return;
    }

    let dir = match &cli.log_dir {
        Some(dir) => Ok(dir.clone()),
        None => logging::default_log_dir(),
    };

    if let Err(e) = dir.and_then(|dir| logging::setup_logging(&dir)) {
        eprintln!("warning: file logging disabled: {:#}", e);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let settings = cli.into_settings();
    info!("verdict-fetch starting");
    info!("URL: {}", settings.url);

    let stdout = io::stdout();
    match verdict_fetch::run(&settings, &mut stdout.lock()) {
        Ok(Outcome::Saved { path, bytes }) => {
            info!("Saved {} bytes to {:?}", bytes, path);
            Ok(())
        }
        Ok(outcome) => {
            info!("Finished: {}", outcome);
            Ok(())
        }
        Err(e) => {
            error!("Download failed: {}", e);
            Err(e).context("Download failed")
        }
    }
}
