//! Test fixtures and utilities for reducing test setup duplication.
//!
//! In-memory stand-ins for the OS collaborators, plus helpers for on-disk
//! fixtures.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{FakeIndex, FakeRegistry};
//!
//! let registry = FakeRegistry::new()
//!     .with_type("pdf", "com.adobe.pdf")
//!     .with_handler("com.adobe.pdf", "com.apple.Preview");
//! let index = FakeIndex::new().with_bundle("/Applications/Preview.app", "com.apple.Preview", &["pdf"]);
//! ```

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::time::Duration;

use tempfile::TempDir;

use crate::domain::{AppId, ContentType, Extension};
use crate::error::{BindxError, Result, malformed_bundle, registry};
use crate::indexer::{AppIndex, BundleManifest};
use crate::resolver::{HandlerLookup, TypeResolver};

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Create test files in a directory.
///
/// Takes a list of (path, content) tuples relative to `temp`.
///
/// # Panics
///
/// Panics if any file cannot be created.
pub fn create_test_files(temp: &TempDir, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = temp.path().join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&full_path, content).expect("Failed to write test file");
    }
}

/// In-memory type and handler registry.
///
/// Extension keys are matched case-insensitively, like the real backends.
#[derive(Debug, Default)]
pub struct FakeRegistry {
    types: HashMap<String, String>,
    handlers: HashMap<String, String>,
    locations: HashMap<String, PathBuf>,
    faults: HashSet<String>,
}

impl FakeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, extension: &str, content_type: &str) -> Self {
        self.types
            .insert(extension.to_lowercase(), content_type.to_string());
        self
    }

    pub fn with_handler(mut self, content_type: &str, app: &str) -> Self {
        self.handlers
            .insert(content_type.to_string(), app.to_string());
        self
    }

    pub fn with_location(mut self, app: &str, path: &str) -> Self {
        self.locations.insert(app.to_string(), PathBuf::from(path));
        self
    }

    /// Make resolving `extension` fail as a registry fault
    pub fn with_fault(mut self, extension: &str) -> Self {
        self.faults.insert(extension.to_lowercase());
        self
    }

    /// Register `extension` with an installed default handler in one call
    pub fn with_app(self, extension: &str, app: &str, path: &str) -> Self {
        let content_type = format!("test.{}", extension.to_lowercase());
        self.with_type(extension, &content_type)
            .with_handler(&content_type, app)
            .with_location(app, path)
    }
}

impl TypeResolver for FakeRegistry {
    fn resolve(&self, extension: &Extension) -> Result<Option<ContentType>> {
        let key = extension.as_str().to_lowercase();
        if self.faults.contains(&key) {
            return Err(registry(format!("fault resolving {key}")));
        }
        Ok(self.types.get(&key).map(ContentType::new))
    }
}

impl HandlerLookup for FakeRegistry {
    fn default_handler(&self, content_type: &ContentType) -> Option<AppId> {
        self.handlers.get(content_type.as_str()).map(AppId::new)
    }

    fn locate(&self, app: &AppId) -> Option<PathBuf> {
        self.locations.get(app.as_str()).cloned()
    }
}

/// In-memory application index
#[derive(Debug, Default)]
pub struct FakeIndex {
    bundles: Vec<(PathBuf, Option<String>)>,
    delay: Option<Duration>,
    discovery_error: Option<String>,
}

impl FakeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bundle with one document type listing `extensions`
    pub fn with_bundle(mut self, path: &str, id: &str, extensions: &[&str]) -> Self {
        let manifest = serde_json::json!({
            "CFBundleIdentifier": id,
            "CFBundleDocumentTypes": [{ "CFBundleTypeExtensions": extensions }],
        });
        self.bundles
            .push((PathBuf::from(path), Some(manifest.to_string())));
        self
    }

    /// Add a bundle whose manifest is the given JSON text
    pub fn with_raw_manifest(mut self, path: &str, json: &str) -> Self {
        self.bundles
            .push((PathBuf::from(path), Some(json.to_string())));
        self
    }

    /// Add a bundle whose manifest cannot be read
    pub fn with_unreadable(mut self, path: &str) -> Self {
        self.bundles.push((PathBuf::from(path), None));
        self
    }

    /// Sleep this long before answering discovery
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn with_discovery_error(mut self, reason: &str) -> Self {
        self.discovery_error = Some(reason.to_string());
        self
    }
}

impl AppIndex for FakeIndex {
    fn discover(&self) -> Result<Vec<PathBuf>> {
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }
        if let Some(ref reason) = self.discovery_error {
            return Err(BindxError::ScanFailed {
                reason: reason.clone(),
            });
        }
        Ok(self.bundles.iter().map(|(path, _)| path.clone()).collect())
    }

    fn read_manifest(&self, bundle: &Path) -> Result<BundleManifest> {
        let entry = self.bundles.iter().find(|(path, _)| path == bundle);
        match entry {
            Some((_, Some(json))) => {
                serde_json::from_str(json).map_err(|e| malformed_bundle(bundle, e))
            }
            _ => Err(malformed_bundle(bundle, "Info.plist is unreadable")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_create_temp_dir() {
        let temp = create_temp_dir();
        assert!(temp.path().exists());
    }

    #[test]
    fn test_create_test_files() {
        let temp = create_temp_dir();
        create_test_files(&temp, &[("applications/a.desktop", "[Desktop Entry]")]);
        assert!(temp.path().join("applications/a.desktop").exists());
    }

    #[test]
    fn test_fake_registry_is_case_insensitive() {
        let registry = FakeRegistry::new().with_type("PDF", "com.adobe.pdf");
        let ext = Extension::declared("pdf").expect("valid token");
        assert!(registry.resolve(&ext).expect("no fault").is_some());
    }
}
