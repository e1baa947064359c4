//! Host operating system backends
//!
//! Each backend provides the OS collaborators the core consumes:
//! - a type registry and handler lookup ([`Registry`])
//! - a system-wide application index ([`AppIndex`])
//!
//! macOS uses Launch Services and Spotlight; every other Unix uses the
//! freedesktop.org databases.

#[cfg(target_os = "macos")]
pub mod macos;
pub mod xdg;

use std::sync::Arc;

use crate::error::Result;
use crate::indexer::AppIndex;
use crate::resolver::{HandlerLookup, TypeResolver};

/// A full association registry
pub trait Registry: TypeResolver + HandlerLookup + Send + Sync {}

impl<T> Registry for T where T: TypeResolver + HandlerLookup + Send + Sync {}

/// The collaborators for one run
pub struct Backend {
    pub registry: Box<dyn Registry>,
    pub index: Arc<dyn AppIndex>,
}

/// Backend for the host this binary was built for
#[cfg(target_os = "macos")]
pub fn system() -> Result<Backend> {
    Ok(Backend {
        registry: Box::new(macos::MacRegistry),
        index: Arc::new(macos::SpotlightIndex),
    })
}

/// Backend for the host this binary was built for
#[cfg(not(target_os = "macos"))]
pub fn system() -> Result<Backend> {
    let dirs = xdg::XdgDirs::system()?;
    let mime = Arc::new(xdg::globs::MimeDatabase::load(&dirs.data_dirs));
    Ok(Backend {
        registry: Box::new(xdg::XdgRegistry::load(&dirs, Arc::clone(&mime))),
        index: Arc::new(xdg::XdgIndex::new(&dirs, mime)),
    })
}
