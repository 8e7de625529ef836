mod cli;
mod dimensions;
mod error;
mod process;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use log::error;
use std::io::Write;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    Cli::parse();

    if let Err(e) = run() {
        error!("failed to get size of screen: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let dims = dimensions::fetch(&cli::query_command())?;
    output(&dims)
}

fn output(dims: &dimensions::Dimensions) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    // Callers read the value straight into shell variables.
    write!(stdout, "{}", dimensions::format_human(dims))?;
    stdout.flush()?;
    Ok(())
}
