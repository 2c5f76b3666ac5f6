// src/bin/cli.rs
use clap::Parser;
use vgzh_scrape::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init();

    let args = cli::Args::parse();
    let summary = cli::run(args)?;
    println!("HTML erstellt: {}", summary.out_path.display());
    Ok(())
}
