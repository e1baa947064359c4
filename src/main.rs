//! bindx - default application lookup
//!
//! Shows which application the host opens a file extension with, or lists
//! every extension the installed applications declare together with its
//! current default handler.

use clap::Parser;
use console::Style;

mod aggregator;
mod cli;
mod commands;
mod config;
mod domain;
mod error;
mod indexer;
mod logging;
mod platform;
mod resolver;
mod ui;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Mode, USAGE};
use config::RunConfig;
use error::Result;

fn dispatch(mode: Mode, config: &RunConfig) -> Result<()> {
    match mode {
        Mode::Completions(shell) => commands::completions::run(&shell),
        Mode::Lookup(extension) => {
            let backend = platform::system()?;
            commands::lookup::run(backend.registry.as_ref(), &extension)
        }
        Mode::Enumerate { filter, output } => {
            let backend = platform::system()?;
            commands::list::run(&backend, config, filter.as_deref(), output)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let config = RunConfig::from_cli(&cli);
    logging::init(config.verbosity);

    let Some(mode) = cli.mode() else {
        eprintln!("{USAGE}");
        std::process::exit(1);
    };

    if let Err(e) = dispatch(mode, &config) {
        eprintln!(
            "{} {}",
            Style::new().for_stderr().red().bold().apply_to("Error:"),
            e
        );
        std::process::exit(1);
    }
}
