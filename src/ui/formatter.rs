//! Formatters for association output
//!
//! Pure text rendering; printing is left to the commands.

use crate::domain::{Association, Handler};
use crate::error::Result;

/// Enumeration output modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// One extension per line
    List,
    /// Pretty-printed JSON array of association records
    Json,
}

/// Render an enumeration result. Input order is preserved.
pub fn format(associations: &[Association], mode: OutputMode) -> Result<String> {
    match mode {
        OutputMode::List => Ok(associations
            .iter()
            .map(|a| a.extension().as_str())
            .collect::<Vec<_>>()
            .join("\n")),
        OutputMode::Json => Ok(serde_json::to_string_pretty(associations)?),
    }
}

/// Render the answer for a single-extension query
pub fn format_lookup(assoc: &Association) -> String {
    match assoc.handler() {
        Handler::Installed { id, path } => {
            format!("Bundle ID: {id}\nApplication: {}", path.display())
        }
        Handler::Registered(id) => {
            format!("Bundle ID: {id}\nApplication path not found for bundle ID.")
        }
        Handler::Unregistered => format!(
            "No default handler found for extension '.{}'",
            assoc.extension()
        ),
    }
}
