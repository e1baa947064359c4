//! Association domain types
//!
//! An [`Association`] is the output row of every query: an extension and what
//! the system knows about its default handler.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{AppId, Extension};

/// Default-handler state for one extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handler {
    /// No application is registered as the default opener
    Unregistered,

    /// A handler is registered, but no installed application satisfies its id
    Registered(AppId),

    /// A handler is registered and installed at `path`
    Installed { id: AppId, path: PathBuf },
}

impl Handler {
    /// Combine the two lookup results. A path without an id cannot occur.
    pub fn from_lookup(id: Option<AppId>, path: Option<PathBuf>) -> Self {
        match (id, path) {
            (Some(id), Some(path)) => Handler::Installed { id, path },
            (Some(id), None) => Handler::Registered(id),
            (None, _) => Handler::Unregistered,
        }
    }

    pub fn id(&self) -> Option<&AppId> {
        match self {
            Handler::Unregistered => None,
            Handler::Registered(id) | Handler::Installed { id, .. } => Some(id),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Handler::Installed { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Resolved association between an extension and its default handler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "AssociationRecord", try_from = "AssociationRecord")]
pub struct Association {
    extension: Extension,
    handler: Handler,
}

impl Association {
    pub fn new(extension: Extension, handler: Handler) -> Self {
        Self { extension, handler }
    }

    pub fn extension(&self) -> &Extension {
        &self.extension
    }

    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    pub fn handler_id(&self) -> Option<&AppId> {
        self.handler.id()
    }

    pub fn handler_path(&self) -> Option<&Path> {
        self.handler.path()
    }
}

/// Wire shape of an association; absent values are written as `null`
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AssociationRecord {
    extension_name: String,
    bundle_identifier: Option<String>,
    application_path: Option<PathBuf>,
}

impl From<Association> for AssociationRecord {
    fn from(assoc: Association) -> Self {
        let (bundle_identifier, application_path) = match assoc.handler {
            Handler::Unregistered => (None, None),
            Handler::Registered(id) => (Some(id.as_str().to_string()), None),
            Handler::Installed { id, path } => (Some(id.as_str().to_string()), Some(path)),
        };
        Self {
            extension_name: assoc.extension.as_str().to_string(),
            bundle_identifier,
            application_path,
        }
    }
}

impl TryFrom<AssociationRecord> for Association {
    type Error = String;

    fn try_from(record: AssociationRecord) -> Result<Self, Self::Error> {
        let extension = Extension::declared(&record.extension_name)
            .ok_or_else(|| "extensionName must not be empty".to_string())?;
        if record.bundle_identifier.is_none() && record.application_path.is_some() {
            return Err(format!(
                "'{}' has an applicationPath but no bundleIdentifier",
                record.extension_name
            ));
        }
        let handler = Handler::from_lookup(
            record.bundle_identifier.map(AppId::new),
            record.application_path,
        );
        Ok(Self { extension, handler })
    }
}
