//! Extension and handler resolution
//!
//! This module handles:
//! - Mapping an extension to the canonical content type the OS keys handlers by
//! - Looking up the default handler registered for a content type
//! - Locating the installed application behind a handler id
//!
//! The OS registries themselves live in [`crate::platform`]; everything here
//! talks to them only through [`TypeResolver`] and [`HandlerLookup`].

use tracing::debug;

use crate::domain::{AppId, Association, ContentType, Extension, Handler};
use crate::error::Result;

/// Maps extensions to canonical content types
pub trait TypeResolver {
    /// Resolve `extension` to its canonical type.
    ///
    /// `Ok(None)` means the registry has no type for the token. `Err` is
    /// reserved for faults in the lookup machinery itself.
    fn resolve(&self, extension: &Extension) -> Result<Option<ContentType>>;
}

/// Reads default-handler registrations and installed locations
pub trait HandlerLookup {
    /// Application registered as the default opener for `content_type`
    fn default_handler(&self, content_type: &ContentType) -> Option<AppId>;

    /// Filesystem location of an installed application
    fn locate(&self, app: &AppId) -> Option<std::path::PathBuf>;
}

/// Resolve one extension all the way to an [`Association`].
///
/// Returns `Ok(None)` when the extension has no canonical type.
pub fn lookup_association<R>(registry: &R, extension: &Extension) -> Result<Option<Association>>
where
    R: TypeResolver + HandlerLookup + ?Sized,
{
    let Some(content_type) = registry.resolve(extension)? else {
        debug!(%extension, "no canonical type");
        return Ok(None);
    };

    let id = registry.default_handler(&content_type);
    let path = id.as_ref().and_then(|id| registry.locate(id));
    debug!(%extension, %content_type, handler = ?id, path = ?path, "resolved");

    Ok(Some(Association::new(
        extension.clone(),
        Handler::from_lookup(id, path),
    )))
}
