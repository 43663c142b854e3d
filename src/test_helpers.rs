//! Shared test utilities: fixture trees and set-based lookups.
//!
//! Directory iteration order is unspecified, so helpers return sets rather
//! than vectors.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = build_tree(&[
//!     ("cats", &["a.png", "123456.jpg"]),
//!     ("dogs", &["b.gif"]),
//! ]);
//! assert_eq!(file_names(&tmp.path().join("dogs")), set(&["b.gif"]));
//! ```

use std::collections::HashSet;
use std::path::Path;
use tempfile::TempDir;

/// Create a temp base directory with the given category folders and files.
///
/// Files are written with their own name as content so renames can be
/// traced back to their origin.
pub fn build_tree(categories: &[(&str, &[&str])]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for (category, files) in categories {
        let dir = tmp.path().join(category);
        std::fs::create_dir_all(&dir).unwrap();
        for file in *files {
            touch(&dir, file);
        }
    }
    tmp
}

/// Write a file named `name` in `dir` whose content is its name.
pub fn touch(dir: &Path, name: &str) {
    std::fs::write(dir.join(name), name).unwrap();
}

/// Names of all entries in `dir`.
pub fn file_names(dir: &Path) -> HashSet<String> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

/// Owned string set from literals.
pub fn set(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}
