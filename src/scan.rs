//! Directory enumeration and manifest entry construction.
//!
//! ## Directory Structure
//!
//! ```text
//! emoji/                      # Base directory
//! ├── organizer.toml          # Optional config (ignored by the scan)
//! ├── mengling.json           # Output manifest (ignored by the scan)
//! ├── cats/                   # Category folder
//! │   ├── 123456.jpg          # Canonical asset
//! │   ├── happy-cat.png       # Asset awaiting a rename
//! │   └── notes.txt           # Not an asset, ignored
//! └── dogs/
//!     └── 654321.gif
//! ```
//!
//! Only direct subdirectories of the base are categories, and only regular
//! files directly inside a category are considered. Nothing is sorted: the
//! order is whatever `read_dir` yields.

use crate::naming::has_asset_extension;
use crate::types::ManifestEntry;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A category folder and its name.
#[derive(Debug, Clone)]
pub struct Category {
    pub name: String,
    pub path: PathBuf,
}

/// Direct subdirectories of `base_dir`.
pub fn categories(base_dir: &Path) -> io::Result<Vec<Category>> {
    let mut found = Vec::new();
    for entry in fs::read_dir(base_dir)? {
        let path = entry?.path();
        if !path.is_dir() {
            continue;
        }
        let name = file_name_lossy(&path);
        found.push(Category { name, path });
    }
    Ok(found)
}

/// Every regular file directly inside `dir`, assets or not.
pub fn files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            found.push(path);
        }
    }
    Ok(found)
}

/// Asset files directly inside `dir`.
pub fn asset_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    Ok(files(dir)?
        .into_iter()
        .filter(|p| has_asset_extension(p))
        .collect())
}

/// Build one manifest entry per asset file under `base_dir`.
///
/// Reflects what is on disk right now: stems are not required to be
/// canonical identifiers.
pub fn scan_emoji_files(base_dir: &Path, base_url: &str) -> io::Result<Vec<ManifestEntry>> {
    let mut entries = Vec::new();
    for category in categories(base_dir)? {
        for path in asset_files(&category.path)? {
            let filename = file_name_lossy(&path);
            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            entries.push(ManifestEntry {
                url: entry_url(base_url, &category.name, &filename),
                name,
                category: category.name.clone(),
            });
        }
    }
    Ok(entries)
}

/// `<base_url>/<category>/<filename>`, with no escaping.
pub fn entry_url(base_url: &str, category: &str, filename: &str) -> String {
    format!("{base_url}/{category}/{filename}")
}

fn file_name_lossy(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use std::collections::HashSet;

    const BASE: &str = "https://cdn.example.com/emoji";

    #[test]
    fn entry_url_joins_with_slashes() {
        assert_eq!(
            entry_url(BASE, "cats", "123456.png"),
            "https://cdn.example.com/emoji/cats/123456.png"
        );
    }

    #[test]
    fn entry_url_is_not_escaped() {
        assert_eq!(
            entry_url(BASE, "猫 咪", "a b.gif"),
            "https://cdn.example.com/emoji/猫 咪/a b.gif"
        );
    }

    #[test]
    fn categories_skip_base_level_files() {
        let tmp = build_tree(&[("cats", &["a.png"]), ("dogs", &[])]);
        touch(tmp.path(), "mengling.json");
        touch(tmp.path(), "stray.png");

        let names: HashSet<String> = categories(tmp.path())
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, set(&["cats", "dogs"]));
    }

    #[test]
    fn asset_files_filters_extensions() {
        let tmp = build_tree(&[("cats", &["a.png", "b.JPG", "c.bmp", "notes.txt", "d.webp"])]);
        let found: HashSet<String> = asset_files(&tmp.path().join("cats"))
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(found, set(&["a.png", "b.JPG", "d.webp"]));
    }

    #[test]
    fn nested_directories_are_not_scanned() {
        let tmp = build_tree(&[("cats", &["a.png"])]);
        std::fs::create_dir(tmp.path().join("cats/inner.png")).unwrap();
        touch(&tmp.path().join("cats/inner.png"), "deep.png");

        let entries = scan_emoji_files(tmp.path(), BASE).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "a");
    }

    #[test]
    fn scan_builds_entries_from_current_names() {
        let tmp = build_tree(&[("cats", &["happy.png", "123456.jpg"]), ("dogs", &["b.gif"])]);
        let entries: HashSet<ManifestEntry> = scan_emoji_files(tmp.path(), BASE)
            .unwrap()
            .into_iter()
            .collect();

        let expected: HashSet<ManifestEntry> = [
            ("happy", "cats", "happy.png"),
            ("123456", "cats", "123456.jpg"),
            ("b", "dogs", "b.gif"),
        ]
        .into_iter()
        .map(|(name, category, file)| ManifestEntry {
            name: name.into(),
            category: category.into(),
            url: format!("{BASE}/{category}/{file}"),
        })
        .collect();
        assert_eq!(entries, expected);
    }

    #[test]
    fn scan_empty_base_is_empty() {
        let tmp = build_tree(&[]);
        assert!(scan_emoji_files(tmp.path(), BASE).unwrap().is_empty());
    }

    #[test]
    fn scan_missing_base_is_io_error() {
        let tmp = build_tree(&[]);
        let missing = tmp.path().join("nope");
        assert!(scan_emoji_files(&missing, BASE).is_err());
    }
}
