//! Identifier value types
//!
//! Extensions, content types and application ids are all plain strings on the
//! wire; the newtypes keep them from being mixed up between layers.

use std::fmt;

use crate::error::{BindxError, Result};

/// A filename extension token such as `pdf`, without a leading dot.
///
/// Ordering is plain code-point order of the token, which is the order
/// enumeration output is emitted in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Extension(String);

impl Extension {
    /// Normalize user input: every `.` is removed (`.tar.gz` becomes `targz`).
    /// Case is kept; resolvers match case-insensitively.
    pub fn parse(input: &str) -> Result<Self> {
        let token: String = input.chars().filter(|c| *c != '.').collect();
        let token = token.trim();
        if token.is_empty() {
            return Err(BindxError::InvalidInput {
                input: format!("extension '{input}' is empty after removing dots"),
            });
        }
        Ok(Self(token.to_string()))
    }

    /// Take an extension exactly as an application declared it.
    ///
    /// Declared tokens are not normalized, so `PDF` and `pdf` stay distinct.
    /// Empty tokens are rejected.
    pub fn declared(token: &str) -> Option<Self> {
        if token.is_empty() {
            None
        } else {
            Some(Self(token.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonical content-type identifier (a UTI on macOS, a MIME type elsewhere)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentType(String);

impl ContentType {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stable application identifier (bundle id or desktop-file id)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AppId(String);

impl AppId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
