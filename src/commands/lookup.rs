//! Single-extension lookup
//!
//! Resolves one extension and prints its default handler.

use crate::domain::Extension;
use crate::error::{BindxError, Result};
use crate::platform::Registry;
use crate::resolver::lookup_association;
use crate::ui::format_lookup;

/// Run the lookup and print the answer
pub fn run(registry: &dyn Registry, input: &str) -> Result<()> {
    println!("{}", lookup(registry, input)?);
    Ok(())
}

/// Resolve `input` and render the answer.
///
/// An extension without a canonical type is an error; a missing handler or
/// location is an answer.
pub fn lookup(registry: &dyn Registry, input: &str) -> Result<String> {
    let extension = Extension::parse(input)?;
    let assoc = lookup_association(registry, &extension)?.ok_or_else(|| {
        BindxError::UnknownExtension {
            extension: extension.to_string(),
        }
    })?;
    Ok(format_lookup(&assoc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::FakeRegistry;

    fn registry() -> FakeRegistry {
        FakeRegistry::new()
            .with_type("pdf", "com.adobe.pdf")
            .with_handler("com.adobe.pdf", "com.apple.Preview")
            .with_location("com.apple.Preview", "/Applications/Preview.app")
            .with_type("heic", "public.heic")
    }

    #[test]
    fn test_lookup_pdf() {
        let text = lookup(&registry(), "pdf").unwrap();
        assert_eq!(
            text,
            "Bundle ID: com.apple.Preview\nApplication: /Applications/Preview.app"
        );
    }

    #[test]
    fn test_lookup_strips_dots() {
        assert_eq!(
            lookup(&registry(), ".pdf").unwrap(),
            lookup(&registry(), "pdf").unwrap()
        );
    }

    #[test]
    fn test_lookup_without_handler_is_not_an_error() {
        assert_eq!(
            lookup(&registry(), "heic").unwrap(),
            "No default handler found for extension '.heic'"
        );
    }

    #[test]
    fn test_lookup_unknown_extension() {
        let err = lookup(&registry(), "xyz123").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Could not determine UTI for extension '.xyz123'"
        );
    }

    #[test]
    fn test_lookup_empty_input() {
        assert!(matches!(
            lookup(&registry(), "."),
            Err(BindxError::InvalidInput { .. })
        ));
    }
}
