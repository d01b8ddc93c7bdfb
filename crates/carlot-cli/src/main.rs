//! carlot - browse, buy, and administer a local car marketplace catalog

mod cli;
mod commands;
mod config;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
