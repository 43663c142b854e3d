//! # Emoji Organizer
//!
//! Keeps a directory of emoji images tidy and publishable. Each subdirectory
//! of the base directory is a category; each image inside it is an asset.
//!
//! ```text
//! emoji/
//! ├── cats/
//! │   ├── 123456.jpg      # canonical: left alone
//! │   └── happy-cat.png   # renamed to <fresh id>.png
//! ├── dogs/
//! │   └── b.gif
//! └── mengling.json       # manifest, rewritten on every run
//! ```
//!
//! Two passes, usable separately or together:
//!
//! 1. **Rename**: every asset whose stem is not exactly six digits gets a new
//!    unique id drawn from `100000..=999999`. The extension (and its case) is
//!    kept. Ids are unique across all categories.
//! 2. **Manifest**: every asset is listed with its stem, category and a
//!    download URL built as `<base_url>/<category>/<filename>`.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`organizer`] | The [`Organizer`](organizer::Organizer): id bookkeeping, rename pass, manifest writer |
//! | [`scan`] | Category and asset enumeration, manifest entry construction |
//! | [`ids`] | Unique id allocation over a caller-owned used-set |
//! | [`naming`] | Canonical-name and asset-extension predicates |
//! | [`types`] | Serialized manifest types |
//! | [`config`] | Optional `organizer.toml` loading and validation |
//! | [`menu`] | Interactive menu choice parsing |
//! | [`output`] | CLI output formatting |
//!
//! # Ordering
//!
//! Folders and files are visited in `read_dir` order, which is
//! platform-dependent. Manifest entry order is therefore unspecified.
//!
//! # No Rollback
//!
//! Renames happen one file at a time. If a rename fails the pass stops and
//! the files already renamed keep their new names. Running the manifest pass
//! on its own does not rename anything first.

pub mod config;
pub mod ids;
pub mod menu;
pub mod naming;
pub mod organizer;
pub mod output;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
