//
// main.rs
// Dicom-Catalog-rs
//
// Entry point: parses arguments, installs the stderr log subscriber and hands off to the CLI layer.
//
// Thales Matheus Mendonça Santos - November 2025

use clap::Parser;
use dicom_catalog::cli::{self, Cli};
use tracing::Level;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    cli::run(cli)
}
