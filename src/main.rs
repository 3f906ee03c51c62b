mod data;
mod error;
mod state;
mod ui;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use error::{DataError, MAX_HEADER_LEN};
use ui::menu::Menu;

/// Min / average / max PM2.5 tables by zip code and time of day.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// CSV export to load with the "Load Data" option
    #[arg(short, long, env = "PURPLE_AIR_FILE", default_value = "./purple_air.csv")]
    file: PathBuf,

    /// Title printed above the menu
    #[arg(long, default_value = "Air Quality Database", value_parser = parse_header)]
    header: String,
}

fn parse_header(s: &str) -> Result<String, DataError> {
    let len = s.chars().count();
    if len > MAX_HEADER_LEN {
        return Err(DataError::HeaderTooLong(len));
    }
    Ok(s.to_string())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("data file: {}", cli.file.display());

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    Menu::new(cli.header, cli.file, stdin, stdout)
        .run()
        .context("menu I/O failed")
}
