//! Installed application records produced by the indexer

use std::collections::BTreeSet;
use std::path::PathBuf;

use super::{AppId, Extension};

/// An application found during a scan, with the extensions it declares
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationRecord {
    /// Bundle or desktop-file id, when the manifest names one
    pub id: Option<AppId>,

    /// Bundle directory or desktop file location
    pub path: PathBuf,

    /// Flattened extensions across all declared document types
    pub extensions: BTreeSet<Extension>,
}

impl ApplicationRecord {
    pub fn new(id: Option<AppId>, path: impl Into<PathBuf>) -> Self {
        Self {
            id,
            path: path.into(),
            extensions: BTreeSet::new(),
        }
    }

    /// Add declared tokens verbatim, skipping empty ones
    pub fn with_extensions<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions
            .extend(tokens.into_iter().filter_map(|t| Extension::declared(t.as_ref())));
        self
    }
}
