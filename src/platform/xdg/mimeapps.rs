//! `mimeapps.list` default-application tables

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::debug;

const DEFAULT_SECTION: &str = "Default Applications";

/// Default desktop ids per MIME type, one list per file in priority order
#[derive(Debug, Default)]
pub struct DefaultApps {
    defaults: HashMap<String, Vec<Vec<String>>>,
}

impl DefaultApps {
    /// Load list files in priority order
    pub fn load(files: &[PathBuf]) -> Self {
        let mut apps = Self::default();
        for file in files {
            match std::fs::read_to_string(file) {
                Ok(text) => apps.add_list(&text),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => debug!(path = %file.display(), error = %e, "cannot read mimeapps list"),
            }
        }
        apps
    }

    /// Append one file's `[Default Applications]` section. Within a file the
    /// first line for a MIME type counts.
    pub fn add_list(&mut self, text: &str) {
        let mut file_defaults: HashMap<String, Vec<String>> = HashMap::new();
        let mut in_defaults = false;
        for line in text.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some(section) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                in_defaults = section == DEFAULT_SECTION;
                continue;
            }
            if !in_defaults {
                continue;
            }
            let Some((mime, value)) = line.split_once('=') else {
                continue;
            };
            let ids: Vec<String> = value
                .split(';')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string)
                .collect();
            if !ids.is_empty() {
                file_defaults.entry(mime.trim().to_string()).or_insert(ids);
            }
        }
        for (mime, ids) in file_defaults {
            self.defaults.entry(mime).or_default().push(ids);
        }
    }

    /// Desktop ids listed as defaults for `mime`, best first across all files
    pub fn candidates<'a>(&'a self, mime: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.defaults
            .get(mime)
            .into_iter()
            .flatten()
            .flatten()
            .map(String::as_str)
    }
}

/// List files to consult, most important first: config dirs, then the
/// `applications/` directory of each data dir (including legacy
/// `defaults.list`).
pub fn list_files(config_dirs: &[PathBuf], data_dirs: &[PathBuf]) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = config_dirs
        .iter()
        .map(|dir| dir.join("mimeapps.list"))
        .collect();
    for dir in data_dirs {
        let apps = dir.join("applications");
        files.push(apps.join("mimeapps.list"));
        files.push(apps.join("defaults.list"));
    }
    files
}

/// Find the desktop file for `id` under any `<data dir>/applications`.
///
/// Ids encode subdirectories with `-` (`kde-okular.desktop` may live at
/// `applications/kde/okular.desktop`).
pub fn find_desktop_file(data_dirs: &[PathBuf], id: &str) -> Option<PathBuf> {
    data_dirs
        .iter()
        .map(|dir| dir.join("applications"))
        .find_map(|apps| desktop_id_candidates(id).find_map(|rel| existing(&apps.join(rel))))
}

fn desktop_id_candidates(id: &str) -> impl Iterator<Item = String> + '_ {
    std::iter::once(id.to_string()).chain(
        id.match_indices('-')
            .map(move |(i, _)| format!("{}/{}", &id[..i], &id[i + 1..])),
    )
}

fn existing(path: &Path) -> Option<PathBuf> {
    path.is_file().then(|| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{create_temp_dir, create_test_files};

    const USER_LIST: &str = "\
[Added Associations]
application/pdf=org.gnome.Evince.desktop;

[Default Applications]
application/pdf=org.gnome.Evince.desktop;okularApplication_pdf.desktop;
text/plain = org.gnome.TextEditor.desktop
";

    #[test]
    fn test_only_default_section_counts() {
        let mut apps = DefaultApps::default();
        apps.add_list("[Added Associations]\nimage/png=eog.desktop;\n");
        assert_eq!(apps.candidates("image/png").count(), 0);
    }

    #[test]
    fn test_candidates_in_order() {
        let mut apps = DefaultApps::default();
        apps.add_list(USER_LIST);
        assert_eq!(
            apps.candidates("application/pdf").collect::<Vec<_>>(),
            ["org.gnome.Evince.desktop", "okularApplication_pdf.desktop"]
        );
        assert_eq!(
            apps.candidates("text/plain").collect::<Vec<_>>(),
            ["org.gnome.TextEditor.desktop"]
        );
    }

    #[test]
    fn test_later_files_follow_earlier_ones() {
        let mut apps = DefaultApps::default();
        apps.add_list("[Default Applications]\ntext/plain=user.desktop;stale.desktop\n");
        apps.add_list("[Default Applications]\ntext/plain=system.desktop\n");
        assert_eq!(
            apps.candidates("text/plain").collect::<Vec<_>>(),
            ["user.desktop", "stale.desktop", "system.desktop"]
        );
    }

    #[test]
    fn test_first_line_in_a_file_wins() {
        let mut apps = DefaultApps::default();
        apps.add_list("[Default Applications]\ntext/plain=a.desktop\ntext/plain=b.desktop\n");
        assert_eq!(apps.candidates("text/plain").collect::<Vec<_>>(), ["a.desktop"]);
    }

    #[test]
    fn test_load_skips_missing_files() {
        let temp = create_temp_dir();
        create_test_files(&temp, &[("mimeapps.list", USER_LIST)]);
        let apps = DefaultApps::load(&[
            PathBuf::from("/nonexistent/mimeapps.list"),
            temp.path().join("mimeapps.list"),
        ]);
        assert_eq!(apps.candidates("text/plain").count(), 1);
    }

    #[test]
    fn test_list_files_order() {
        let files = list_files(&[PathBuf::from("/home/u/.config")], &[PathBuf::from("/usr/share")]);
        assert_eq!(
            files,
            vec![
                PathBuf::from("/home/u/.config/mimeapps.list"),
                PathBuf::from("/usr/share/applications/mimeapps.list"),
                PathBuf::from("/usr/share/applications/defaults.list"),
            ]
        );
    }

    #[test]
    fn test_find_desktop_file_with_prefix_directory() {
        let temp = create_temp_dir();
        create_test_files(
            &temp,
            &[
                ("applications/org.gnome.Evince.desktop", "[Desktop Entry]"),
                ("applications/kde/okular.desktop", "[Desktop Entry]"),
            ],
        );
        let dirs = vec![temp.path().to_path_buf()];

        assert_eq!(
            find_desktop_file(&dirs, "org.gnome.Evince.desktop"),
            Some(temp.path().join("applications/org.gnome.Evince.desktop"))
        );
        assert_eq!(
            find_desktop_file(&dirs, "kde-okular.desktop"),
            Some(temp.path().join("applications/kde/okular.desktop"))
        );
        assert_eq!(find_desktop_file(&dirs, "missing.desktop"), None);
    }
}
