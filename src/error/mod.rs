//! Error types and handling for bindx
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Lookup absences (no canonical type inside an enumeration, no default
//! handler, no install location) are data, not errors, and never show up here.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for bindx operations
#[derive(Error, Diagnostic, Debug)]
pub enum BindxError {
    #[error("Invalid input: {input}")]
    #[diagnostic(
        code(bindx::input::invalid),
        help("Usage: bindx <extension> | --json | -j | --app <Name> [-j]")
    )]
    InvalidInput { input: String },

    #[error("Could not determine UTI for extension '.{extension}'")]
    #[diagnostic(code(bindx::resolve::unknown_extension))]
    UnknownExtension { extension: String },

    #[error("Application scan did not finish within {seconds} seconds")]
    #[diagnostic(
        code(bindx::scan::timeout),
        help("Raise the limit with --timeout <SECS>")
    )]
    ScanTimeout { seconds: u64 },

    #[error("Application scan failed: {reason}")]
    #[diagnostic(code(bindx::scan::failed))]
    ScanFailed { reason: String },

    #[error("Malformed application bundle at {path}: {reason}")]
    #[diagnostic(code(bindx::scan::malformed_bundle))]
    MalformedBundle { path: String, reason: String },

    #[error("Association registry error: {message}")]
    #[diagnostic(code(bindx::registry::failed))]
    Registry { message: String },

    #[error("Failed to serialize associations: {message}")]
    #[diagnostic(code(bindx::output::serialization))]
    Serialization { message: String },

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(bindx::cli::unsupported_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },

}

impl From<serde_json::Error> for BindxError {
    fn from(err: serde_json::Error) -> Self {
        BindxError::Serialization {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, BindxError>;

/// Build a [`BindxError::MalformedBundle`] for `path`
pub fn malformed_bundle(path: &std::path::Path, reason: impl std::fmt::Display) -> BindxError {
    BindxError::MalformedBundle {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Build a [`BindxError::Registry`] from any displayable cause
pub fn registry(message: impl std::fmt::Display) -> BindxError {
    BindxError::Registry {
        message: message.to_string(),
    }
}
