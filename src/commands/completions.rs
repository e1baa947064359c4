//! Shell completions

use clap::CommandFactory;

use crate::error::{BindxError, Result};

fn parse_shell(name: &str) -> Result<clap_complete::Shell> {
    match name.to_lowercase().as_str() {
        "bash" => Ok(clap_complete::Shell::Bash),
        "elvish" => Ok(clap_complete::Shell::Elvish),
        "fish" => Ok(clap_complete::Shell::Fish),
        "powershell" | "pwsh" => Ok(clap_complete::Shell::PowerShell),
        "zsh" => Ok(clap_complete::Shell::Zsh),
        _ => Err(BindxError::UnsupportedShell {
            shell: name.to_string(),
        }),
    }
}

/// Generate shell completions to `out`
pub fn generate(shell: &str, out: &mut dyn std::io::Write) -> Result<()> {
    let shell = parse_shell(shell)?;
    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "bindx", out);
    Ok(())
}

/// Generate shell completions to stdout
pub fn run(shell: &str) -> Result<()> {
    generate(shell, &mut std::io::stdout().lock())
}
