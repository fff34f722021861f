#![forbid(unsafe_code)]

use std::process::ExitCode;

use anyhow::Result;
use tracing::{error, info};

mod config;
mod db;
mod report;
mod runner;
mod utils;

use config::Config;

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("Error: {e}");
            error!("customer report failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<()> {
    let config = Config::load()?;
    utils::logging::init_tracing(&config.logging);
    info!("customer report starting up");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = runner::run(&config, &mut out)?;

    info!(
        seeded = summary.seeded,
        average = ?summary.average,
        matched = summary.accounts.len(),
        "customer report finished"
    );
    Ok(())
}
