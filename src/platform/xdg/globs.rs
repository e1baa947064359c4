//! shared-mime-info glob database
//!
//! Reads `mime/globs2` (falling back to the older `mime/globs`) and
//! `mime/aliases` from each data directory. Only simple `*.ext` globs take
//! part; anything with further wildcards is ignored.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::{Path, PathBuf};

use tracing::debug;

/// Weight the old `globs` format implies
const DEFAULT_WEIGHT: u32 = 50;

#[derive(Debug, Clone)]
struct GlobEntry {
    weight: u32,
    mime: String,
}

/// Extension ↔ MIME type tables
#[derive(Debug, Default)]
pub struct MimeDatabase {
    /// Case-insensitive globs, keyed by lowercased extension
    by_extension: HashMap<String, GlobEntry>,
    /// Globs carrying the `cs` flag, keyed verbatim
    case_sensitive: HashMap<String, GlobEntry>,
    /// Every `*.ext` glob per MIME type, as written
    by_mime: BTreeMap<String, BTreeSet<String>>,
    /// alias → canonical MIME type
    aliases: HashMap<String, String>,
    /// Tables that exist but could not be read
    unreadable: Vec<PathBuf>,
}

impl MimeDatabase {
    /// Load from `data_dirs`, most important first. Missing files are fine.
    pub fn load(data_dirs: &[PathBuf]) -> Self {
        let mut db = Self::default();
        for dir in data_dirs {
            let mime_dir = dir.join("mime");
            if let Some(text) = db.read_table(&mime_dir.join("globs2")) {
                db.add_globs2(&text);
            } else if let Some(text) = db.read_table(&mime_dir.join("globs")) {
                db.add_globs(&text);
            }
            if let Some(text) = db.read_table(&mime_dir.join("aliases")) {
                db.add_aliases(&text);
            }
        }
        debug!(
            extensions = db.by_extension.len() + db.case_sensitive.len(),
            mime_types = db.by_mime.len(),
            unreadable = db.unreadable.len(),
            "mime database loaded"
        );
        db
    }

    /// `weight:mime/type:glob[:flags]` lines
    pub fn add_globs2(&mut self, text: &str) {
        for line in content_lines(text) {
            let mut fields = line.split(':');
            let (Some(weight), Some(mime), Some(glob)) = (fields.next(), fields.next(), fields.next())
            else {
                continue;
            };
            let Ok(weight) = weight.trim().parse() else {
                continue;
            };
            let case_sensitive = fields
                .next()
                .is_some_and(|flags| flags.split(',').any(|f| f == "cs"));
            self.add_glob(weight, mime, glob, case_sensitive);
        }
    }

    /// `mime/type:glob` lines
    pub fn add_globs(&mut self, text: &str) {
        for line in content_lines(text) {
            if let Some((mime, glob)) = line.split_once(':') {
                self.add_glob(DEFAULT_WEIGHT, mime, glob, false);
            }
        }
    }

    /// `alias canonical` lines
    pub fn add_aliases(&mut self, text: &str) {
        for line in content_lines(text) {
            if let Some((alias, canonical)) = line.split_once(' ') {
                self.aliases
                    .entry(alias.to_string())
                    .or_insert_with(|| canonical.trim().to_string());
            }
        }
    }

    fn add_glob(&mut self, weight: u32, mime: &str, glob: &str, case_sensitive: bool) {
        let Some(extension) = simple_extension(glob) else {
            return;
        };
        self.by_mime
            .entry(mime.to_string())
            .or_default()
            .insert(extension.to_string());

        let (table, key) = if case_sensitive {
            (&mut self.case_sensitive, extension.to_string())
        } else {
            (&mut self.by_extension, extension.to_lowercase())
        };
        let entry = GlobEntry {
            weight,
            mime: mime.to_string(),
        };
        // Earlier directories win ties.
        if table.get(&key).is_none_or(|existing| weight > existing.weight) {
            table.insert(key, entry);
        }
    }

    /// MIME type for an extension token
    pub fn mime_for_extension(&self, extension: &str) -> Option<&str> {
        let exact = self.case_sensitive.get(extension);
        let folded = self.by_extension.get(&extension.to_lowercase());
        match (exact, folded) {
            (Some(a), Some(b)) if b.weight > a.weight => Some(b.mime.as_str()),
            (Some(a), _) => Some(a.mime.as_str()),
            (None, Some(b)) => Some(b.mime.as_str()),
            (None, None) => None,
        }
    }

    /// Extensions whose globs map to `mime` (after alias resolution)
    pub fn extensions_for_mime(&self, mime: &str) -> impl Iterator<Item = &str> {
        let canonical = self.canonical(mime);
        self.by_mime
            .get(canonical)
            .into_iter()
            .flat_map(|exts| exts.iter().map(String::as_str))
    }

    /// Table files that were present but failed to read
    pub fn unreadable(&self) -> &[PathBuf] {
        &self.unreadable
    }

    fn read_table(&mut self, path: &Path) -> Option<String> {
        match std::fs::read_to_string(path) {
            Ok(text) => Some(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "cannot read mime data");
                self.unreadable.push(path.to_path_buf());
                None
            }
        }
    }

    pub fn canonical<'a>(&'a self, mime: &'a str) -> &'a str {
        self.aliases.get(mime).map_or(mime, String::as_str)
    }
}

fn content_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

/// `*.pdf` → `pdf`; `*.tar.*`, `README`, `*.[ch]` → `None`
fn simple_extension(glob: &str) -> Option<&str> {
    let ext = glob.strip_prefix("*.")?;
    if ext.is_empty() || ext.contains(['*', '?', '[']) {
        None
    } else {
        Some(ext)
    }
}
