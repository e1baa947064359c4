//! Desktop entry (`.desktop`) parsing

use std::path::{Component, Path};

const ENTRY_GROUP: &str = "Desktop Entry";

/// The keys of a `[Desktop Entry]` group the indexer reads
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DesktopEntry {
    /// `MimeType=`; `None` when the key is absent
    pub mime_types: Option<Vec<String>>,
    /// `Hidden=true` marks a deleted entry
    pub hidden: bool,
}

impl DesktopEntry {
    pub fn parse(text: &str) -> Self {
        let mut entry = Self::default();
        let mut in_entry = false;
        for line in text.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some(group) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                in_entry = group == ENTRY_GROUP;
                continue;
            }
            if !in_entry {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            match key.trim() {
                "MimeType" => {
                    entry.mime_types = Some(
                        value
                            .split(';')
                            .map(str::trim)
                            .filter(|m| !m.is_empty())
                            .map(str::to_string)
                            .collect(),
                    );
                }
                "Hidden" => entry.hidden = value.trim() == "true",
                _ => {}
            }
        }
        entry
    }
}

/// Desktop-file id: the path below the nearest `applications` directory
/// with `/` replaced by `-`.
pub fn desktop_id(path: &Path) -> Option<String> {
    let components: Vec<Component<'_>> = path.components().collect();
    let base = components
        .iter()
        .rposition(|c| c.as_os_str() == "applications")?;
    let rest: Vec<String> = components[base + 1..]
        .iter()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if rest.is_empty() {
        None
    } else {
        Some(rest.join("-"))
    }
}
