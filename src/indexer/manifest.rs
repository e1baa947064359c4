//! Application manifest model
//!
//! Field names follow the macOS `Info.plist` keys. Other platforms build a
//! [`BundleManifest`] directly from their own metadata.

use std::fmt;
use std::path::Path;

use serde::Deserialize;
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};

use crate::domain::{AppId, ApplicationRecord};
use crate::error::{Result, malformed_bundle};

/// The parts of an application manifest the indexer cares about
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BundleManifest {
    #[serde(rename = "CFBundleIdentifier", default)]
    pub identifier: Option<String>,

    #[serde(rename = "CFBundleDocumentTypes", default)]
    pub document_types: Option<Vec<DocumentType>>,
}

/// One document-type declaration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DocumentType {
    #[serde(
        rename = "CFBundleTypeExtensions",
        default,
        deserialize_with = "string_list"
    )]
    pub extensions: Vec<String>,
}

/// Any manifest value, reduced to what an extension list can use
enum Loose {
    Text(String),
    List(Vec<Loose>),
    Other,
}

struct LooseVisitor;

impl<'de> Visitor<'de> for LooseVisitor {
    type Value = Loose;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any value")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Loose, E> {
        Ok(Loose::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<Loose, E> {
        Ok(Loose::Text(v))
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> std::result::Result<Loose, E> {
        Ok(Loose::Other)
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> std::result::Result<Loose, E> {
        Ok(Loose::Other)
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> std::result::Result<Loose, E> {
        Ok(Loose::Other)
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> std::result::Result<Loose, E> {
        Ok(Loose::Other)
    }

    fn visit_bytes<E: de::Error>(self, _: &[u8]) -> std::result::Result<Loose, E> {
        Ok(Loose::Other)
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<Loose, E> {
        Ok(Loose::Other)
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Loose, E> {
        Ok(Loose::Other)
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> std::result::Result<Loose, D::Error> {
        Loose::deserialize(d)
    }

    fn visit_newtype_struct<D: Deserializer<'de>>(
        self,
        d: D,
    ) -> std::result::Result<Loose, D::Error> {
        IgnoredAny::deserialize(d).map(|_| Loose::Other)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<Loose, A::Error> {
        let mut items = Vec::new();
        while let Some(item) = seq.next_element::<Loose>()? {
            items.push(item);
        }
        Ok(Loose::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Loose, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(Loose::Other)
    }
}

impl<'de> Deserialize<'de> for Loose {
    fn deserialize<D: Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        d.deserialize_any(LooseVisitor)
    }
}

/// Keep only string items; a non-array value declares nothing.
fn string_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Loose::deserialize(deserializer)? {
        Loose::List(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Loose::Text(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

impl BundleManifest {
    /// Read a property list file (XML or binary) belonging to `bundle`
    pub fn from_plist_file(bundle: &Path, plist: &Path) -> Result<Self> {
        plist::from_file(plist).map_err(|e| malformed_bundle(bundle, e))
    }

    /// Turn the manifest into a record, or `None` when it declares no
    /// document types at all.
    pub fn into_record(self, bundle: &Path) -> Option<ApplicationRecord> {
        let document_types = self.document_types?;
        let record = ApplicationRecord::new(self.identifier.map(AppId::new), bundle);
        Some(record.with_extensions(document_types.into_iter().flat_map(|dt| dt.extensions)))
    }
}
