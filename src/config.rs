//! Run configuration
//!
//! bindx reads no config file and no environment; everything comes from the
//! command line.

use std::time::Duration;

use crate::cli::Cli;

/// Settings shared by every mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Upper bound on the application scan
    pub scan_timeout: Duration,
    /// `-v` count
    pub verbosity: u8,
}

impl RunConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            scan_timeout: Duration::from_secs(cli.timeout),
            verbosity: cli.verbose,
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            scan_timeout: Duration::from_secs(60),
            verbosity: 0,
        }
    }
}
