//! macOS backend
//!
//! Type and handler lookups go through Launch Services (CoreServices). The
//! application index is Spotlight, queried with `mdfind`, and manifests are
//! decoded from each bundle's `Info.plist`.

use std::path::{Path, PathBuf};
use std::process::Command;

use core_foundation::array::{CFArray, CFArrayRef};
use core_foundation::base::TCFType;
use core_foundation::error::{CFError, CFErrorRef};
use core_foundation::string::{CFString, CFStringRef};
use core_foundation::url::CFURL;
use tracing::debug;

use crate::domain::{AppId, ContentType, Extension};
use crate::error::{BindxError, Result, malformed_bundle, registry};
use crate::indexer::{AppIndex, BundleManifest};
use crate::resolver::{HandlerLookup, TypeResolver};

/// `kLSRolesAll`
const LS_ROLES_ALL: u32 = 0xFFFF_FFFF;

/// Prefix of identifiers Launch Services invents for unknown tags
const DYNAMIC_PREFIX: &str = "dyn.";

const APPLICATION_QUERY: &str = "kMDItemContentType == 'com.apple.application-bundle'";

#[link(name = "CoreServices", kind = "framework")]
unsafe extern "C" {
    static kUTTagClassFilenameExtension: CFStringRef;

    fn UTTypeCreatePreferredIdentifierForTag(
        tag_class: CFStringRef,
        tag: CFStringRef,
        conforming_to: CFStringRef,
    ) -> CFStringRef;

    fn LSCopyDefaultRoleHandlerForContentType(content_type: CFStringRef, role: u32)
    -> CFStringRef;

    fn LSCopyApplicationURLsForBundleIdentifier(
        bundle_id: CFStringRef,
        out_error: *mut CFErrorRef,
    ) -> CFArrayRef;
}

/// Take ownership of a CFString returned under the create rule
fn copied_string(raw: CFStringRef) -> Option<String> {
    if raw.is_null() {
        None
    } else {
        // SAFETY: non-null and returned by a Create/Copy function.
        Some(unsafe { CFString::wrap_under_create_rule(raw) }.to_string())
    }
}

/// Launch Services registry
#[derive(Debug, Default)]
pub struct MacRegistry;

impl TypeResolver for MacRegistry {
    fn resolve(&self, extension: &Extension) -> Result<Option<ContentType>> {
        let tag = CFString::new(extension.as_str());
        // SAFETY: both arguments are live CFStrings; a null conforming type is allowed.
        let raw = unsafe {
            UTTypeCreatePreferredIdentifierForTag(
                kUTTagClassFilenameExtension,
                tag.as_concrete_TypeRef(),
                std::ptr::null(),
            )
        };
        let uti = copied_string(raw).ok_or_else(|| {
            registry(format!(
                "Launch Services returned no identifier for '.{extension}'"
            ))
        })?;
        Ok((!uti.starts_with(DYNAMIC_PREFIX)).then(|| ContentType::new(uti)))
    }
}

impl HandlerLookup for MacRegistry {
    fn default_handler(&self, content_type: &ContentType) -> Option<AppId> {
        let uti = CFString::new(content_type.as_str());
        // SAFETY: `uti` outlives the call.
        let raw =
            unsafe { LSCopyDefaultRoleHandlerForContentType(uti.as_concrete_TypeRef(), LS_ROLES_ALL) };
        copied_string(raw).map(AppId::new)
    }

    fn locate(&self, app: &AppId) -> Option<PathBuf> {
        let bundle_id = CFString::new(app.as_str());
        let mut error: CFErrorRef = std::ptr::null_mut();
        // SAFETY: `bundle_id` outlives the call; `error` is a valid out pointer.
        let raw = unsafe {
            LSCopyApplicationURLsForBundleIdentifier(bundle_id.as_concrete_TypeRef(), &mut error)
        };
        if raw.is_null() {
            if !error.is_null() {
                // SAFETY: the out error is returned under the create rule.
                let error = unsafe { CFError::wrap_under_create_rule(error) };
                debug!(app = %app, error = %error.description(), "application not located");
            }
            return None;
        }

        // SAFETY: non-null array of CFURLs returned by a Copy function.
        let urls: CFArray<CFURL> = unsafe { CFArray::wrap_under_create_rule(raw) };
        urls.iter().find_map(|url| url.to_path())
    }
}

/// Spotlight application index
#[derive(Debug, Default)]
pub struct SpotlightIndex;

impl AppIndex for SpotlightIndex {
    fn discover(&self) -> Result<Vec<PathBuf>> {
        let output = Command::new("mdfind")
            .arg(APPLICATION_QUERY)
            .output()
            .map_err(|e| BindxError::ScanFailed {
                reason: format!("failed to run mdfind: {e}"),
            })?;
        if !output.status.success() {
            return Err(BindxError::ScanFailed {
                reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .filter(|line| !line.is_empty())
            .map(PathBuf::from)
            .collect())
    }

    fn read_manifest(&self, bundle: &Path) -> Result<BundleManifest> {
        let plist = bundle.join("Contents").join("Info.plist");
        if !plist.is_file() {
            return Err(malformed_bundle(bundle, "missing Contents/Info.plist"));
        }
        BundleManifest::from_plist_file(bundle, &plist)
    }
}
