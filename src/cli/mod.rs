//! CLI definitions using clap derive API
//!
//! bindx has no subcommands: a positional extension selects a single lookup,
//! `--json` / `--app` select enumeration.

use clap::builder::{Styles, styling::AnsiColor};
use clap::{ArgAction, Parser};

use crate::ui::OutputMode;

/// Printed when no mode is selected
pub const USAGE: &str = "Usage: bindx <extension> | --json | -j | --app <Name> [-j]";

/// bindx - default application lookup
///
/// Show which application opens a file extension, or list every association
/// the installed applications declare.
#[derive(Parser, Debug)]
#[command(
    name = "bindx",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Show the default application for file extensions",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  bindx pdf              \x1b[90m# Default handler for .pdf\x1b[0m\n   \
                  bindx --json           \x1b[90m# Every association as JSON\x1b[0m\n   \
                  bindx --app preview    \x1b[90m# Extensions opened by Preview\x1b[0m\n   \
                  bindx -a preview -j    \x1b[90m# Same, as JSON\x1b[0m\n"
)]
pub struct Cli {
    /// File extension to look up (with or without the leading dot)
    pub extension: Option<String>,

    /// Enumerate all associations and print them as JSON
    #[arg(long, short = 'j')]
    pub json: bool,

    /// Enumerate associations whose handler path or bundle id contains NAME
    #[arg(long, short = 'a', value_name = "NAME", num_args = 0..=1)]
    pub app: Option<Option<String>>,

    /// Give up on the application scan after SECS seconds
    #[arg(
        long,
        value_name = "SECS",
        default_value_t = 60,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Increase log output on stderr (-v debug, -vv trace)
    #[arg(long, short = 'v', action = ArgAction::Count)]
    pub verbose: u8,

    /// Print shell completions (bash, elvish, fish, powershell, zsh) and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<String>,
}

/// What a parsed command line asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Lookup(String),
    Enumerate {
        filter: Option<String>,
        output: OutputMode,
    },
    Completions(String),
}

impl Cli {
    /// Pick the mode. An extension wins over the enumeration flags; `--app`
    /// without a value enumerates unfiltered. `None` means nothing was asked.
    pub fn mode(&self) -> Option<Mode> {
        if let Some(ref shell) = self.completions {
            return Some(Mode::Completions(shell.clone()));
        }
        if let Some(ref extension) = self.extension {
            return Some(Mode::Lookup(extension.clone()));
        }
        if self.json || self.app.is_some() {
            let output = if self.json {
                OutputMode::Json
            } else {
                OutputMode::List
            };
            return Some(Mode::Enumerate {
                filter: self.app.clone().flatten(),
                output,
            });
        }
        None
    }
}
