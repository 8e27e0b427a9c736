// src/bin/cli.rs
use nifty_stats::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run()
}
