//! Main entry point for docsnap CLI

use clap::Parser;
use docsnap::cli::Cli;
use docsnap::commands::execute_command;

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    if let Err(e) = execute_command(cli.command, cli.store.as_deref()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
