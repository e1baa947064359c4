//! freedesktop.org backend
//!
//! - Content types are MIME types from the shared-mime-info glob tables
//! - Default handlers come from `mimeapps.list`
//! - Applications are desktop entries under `<data dir>/applications`
//!
//! Every root directory is passed in through [`XdgDirs`], so nothing here
//! touches the real system unless [`XdgDirs::system`] is used.

pub mod desktop;
pub mod globs;
pub mod mimeapps;

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;
use walkdir::WalkDir;

use crate::domain::{AppId, ContentType, Extension};
use crate::error::{Result, malformed_bundle, registry};
use crate::indexer::{AppIndex, BundleManifest, DocumentType};
use crate::resolver::{HandlerLookup, TypeResolver};

use desktop::{DesktopEntry, desktop_id};
use globs::MimeDatabase;
use mimeapps::{DefaultApps, find_desktop_file, list_files};

/// Root directories, most important first
#[derive(Debug, Clone, Default)]
pub struct XdgDirs {
    pub data_dirs: Vec<PathBuf>,
    pub config_dirs: Vec<PathBuf>,
}

impl XdgDirs {
    /// The XDG base directories of this session: `$XDG_DATA_HOME` then
    /// `$XDG_DATA_DIRS`, `$XDG_CONFIG_HOME` then `$XDG_CONFIG_DIRS`, with
    /// the standard fallbacks when unset.
    #[cfg(not(target_os = "macos"))]
    pub fn system() -> Result<Self> {
        let base = ::xdg::BaseDirectories::new()
            .map_err(|e| registry(format!("cannot locate XDG base directories: {e}")))?;

        let mut data_dirs = vec![base.get_data_home()];
        data_dirs.extend(base.get_data_dirs());
        let mut config_dirs = vec![base.get_config_home()];
        config_dirs.extend(base.get_config_dirs());

        debug!(?data_dirs, ?config_dirs, "xdg base directories");
        Ok(Self {
            data_dirs,
            config_dirs,
        })
    }
}

/// Type and handler registry over shared-mime-info and `mimeapps.list`
#[derive(Debug)]
pub struct XdgRegistry {
    mime: Arc<MimeDatabase>,
    defaults: DefaultApps,
    data_dirs: Vec<PathBuf>,
}

impl XdgRegistry {
    pub fn load(dirs: &XdgDirs, mime: Arc<MimeDatabase>) -> Self {
        Self {
            mime,
            defaults: DefaultApps::load(&list_files(&dirs.config_dirs, &dirs.data_dirs)),
            data_dirs: dirs.data_dirs.clone(),
        }
    }
}

impl TypeResolver for XdgRegistry {
    /// A miss while some glob table was unreadable is a fault.
    fn resolve(&self, extension: &Extension) -> Result<Option<ContentType>> {
        if let Some(mime) = self.mime.mime_for_extension(extension.as_str()) {
            return Ok(Some(ContentType::new(mime)));
        }
        match self.mime.unreadable().first() {
            Some(path) => Err(registry(format!(
                "no type for '.{extension}' and mime table {} is unreadable",
                path.display()
            ))),
            None => Ok(None),
        }
    }
}

impl HandlerLookup for XdgRegistry {
    /// First installed default across every `mimeapps.list`, in priority
    /// order; when none is installed, the first one listed.
    fn default_handler(&self, content_type: &ContentType) -> Option<AppId> {
        let candidates: Vec<&str> = self.defaults.candidates(content_type.as_str()).collect();
        candidates
            .iter()
            .find(|id| find_desktop_file(&self.data_dirs, id).is_some())
            .or_else(|| candidates.first())
            .map(|id| AppId::new(*id))
    }

    fn locate(&self, app: &AppId) -> Option<PathBuf> {
        find_desktop_file(&self.data_dirs, app.as_str())
    }
}

/// Application index over desktop entries
#[derive(Debug)]
pub struct XdgIndex {
    mime: Arc<MimeDatabase>,
    data_dirs: Vec<PathBuf>,
}

impl XdgIndex {
    pub fn new(dirs: &XdgDirs, mime: Arc<MimeDatabase>) -> Self {
        Self {
            mime,
            data_dirs: dirs.data_dirs.clone(),
        }
    }
}

impl AppIndex for XdgIndex {
    /// Desktop files in every `applications/` tree; an id seen in an earlier
    /// directory shadows later ones.
    fn discover(&self) -> Result<Vec<PathBuf>> {
        let mut seen = HashSet::new();
        let mut found = Vec::new();
        for dir in &self.data_dirs {
            let apps = dir.join("applications");
            if !apps.is_dir() {
                continue;
            }
            for entry in WalkDir::new(&apps).follow_links(true) {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        debug!(error = %e, "skipping unreadable entry");
                        continue;
                    }
                };
                let path = entry.path();
                if !entry.file_type().is_file()
                    || path.extension().is_none_or(|ext| ext != "desktop")
                {
                    continue;
                }
                if let Some(id) = desktop_id(path) {
                    if seen.insert(id) {
                        found.push(path.to_path_buf());
                    }
                }
            }
        }
        Ok(found)
    }

    fn read_manifest(&self, bundle: &Path) -> Result<BundleManifest> {
        let text = std::fs::read_to_string(bundle).map_err(|e| malformed_bundle(bundle, e))?;
        let entry = DesktopEntry::parse(&text);
        if entry.hidden {
            return Ok(BundleManifest::default());
        }

        let document_types = entry.mime_types.map(|mimes| {
            mimes
                .iter()
                .map(|mime| DocumentType {
                    extensions: self
                        .mime
                        .extensions_for_mime(mime)
                        .map(str::to_string)
                        .collect(),
                })
                .collect()
        });

        Ok(BundleManifest {
            identifier: desktop_id(bundle),
            document_types,
        })
    }
}
