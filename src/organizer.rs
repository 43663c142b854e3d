//! The organizer: identifier bookkeeping, the rename pass, and manifest
//! generation over one base directory.
//!
//! ```text
//! load_existing_ids   base/*/*            →  used-id set
//! rename_files        non-canonical files →  <id>.<ext>    (uses the set)
//! generate_json       base/*/<asset>      →  mengling.json
//! organize_all        rename_files, then generate_json
//! ```
//!
//! The used-id set lives on the [`Organizer`] and is rebuilt from disk at the
//! start of every rename pass; nothing persists between runs except the
//! filenames themselves. There is no rollback: a failed rename leaves every
//! earlier rename of the pass in place.

use crate::config::{self, ConfigError, OrganizerConfig};
use crate::ids;
use crate::naming::{is_valid_filename, leading_id};
use crate::scan;
use crate::types::{MANIFEST_CODE, Manifest, ManifestEntry};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrganizeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One completed rename within a category folder.
#[derive(Debug, Clone, PartialEq)]
pub struct Rename {
    pub category: String,
    pub from: String,
    pub to: String,
}

/// Counts reported by [`Organizer::organize_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrganizeSummary {
    pub renamed: usize,
    pub entries: usize,
}

pub struct Organizer {
    base_dir: PathBuf,
    config: OrganizerConfig,
    used_ids: HashSet<String>,
    rng: StdRng,
}

impl Organizer {
    pub fn new(base_dir: impl Into<PathBuf>, config: OrganizerConfig) -> Self {
        Self::with_rng(base_dir, config, StdRng::from_os_rng())
    }

    /// Build an organizer reading `organizer.toml` from the base directory.
    pub fn open(base_dir: impl Into<PathBuf>) -> Result<Self, OrganizeError> {
        let base_dir = base_dir.into();
        let config = config::load_config(&base_dir)?;
        Ok(Self::new(base_dir, config))
    }

    /// Deterministic allocation for tests and reproducible runs.
    pub fn with_seed(base_dir: impl Into<PathBuf>, config: OrganizerConfig, seed: u64) -> Self {
        Self::with_rng(base_dir, config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(base_dir: impl Into<PathBuf>, config: OrganizerConfig, rng: StdRng) -> Self {
        Self {
            base_dir: base_dir.into(),
            config,
            used_ids: HashSet::new(),
            rng,
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn config(&self) -> &OrganizerConfig {
        &self.config
    }

    pub fn used_ids(&self) -> &HashSet<String> {
        &self.used_ids
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.base_dir.join(&self.config.manifest_file)
    }

    /// Rebuild the used-id set from every file stem under the categories.
    ///
    /// Prefix match: `123456_old.png` reserves `123456`. Non-asset files
    /// count too. Returns the size of the rebuilt set.
    pub fn load_existing_ids(&mut self) -> Result<usize, OrganizeError> {
        self.used_ids.clear();
        for category in scan::categories(&self.base_dir)? {
            for path in scan::files(&category.path)? {
                let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                    continue;
                };
                if let Some(id) = leading_id(stem) {
                    self.used_ids.insert(id.to_string());
                }
            }
        }
        Ok(self.used_ids.len())
    }

    /// Allocate and reserve a fresh identifier.
    pub fn generate_unique_id(&mut self) -> String {
        ids::generate_unique_id(&mut self.used_ids, &mut self.rng)
    }

    /// Rename every non-canonical asset file. Returns the number renamed.
    pub fn rename_files(&mut self) -> Result<usize, OrganizeError> {
        self.rename_files_with(|_| {})
    }

    /// Like [`rename_files`](Self::rename_files), calling `on_rename` after
    /// each rename lands on disk.
    pub fn rename_files_with(
        &mut self,
        mut on_rename: impl FnMut(&Rename),
    ) -> Result<usize, OrganizeError> {
        self.load_existing_ids()?;

        let mut renamed = 0;
        for category in scan::categories(&self.base_dir)? {
            for path in scan::asset_files(&category.path)? {
                let from = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                if is_valid_filename(&from) {
                    continue;
                }

                let id = self.generate_unique_id();
                // has_asset_extension guarantees an extension; keep its case
                let ext = path
                    .extension()
                    .map(|e| e.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let to = format!("{id}.{ext}");

                fs::rename(&path, category.path.join(&to))?;
                renamed += 1;
                on_rename(&Rename {
                    category: category.name.clone(),
                    from,
                    to,
                });
            }
        }
        Ok(renamed)
    }

    /// Manifest entries for whatever is on disk. No side effects.
    pub fn scan_emoji_files(&self) -> Result<Vec<ManifestEntry>, OrganizeError> {
        Ok(scan::scan_emoji_files(&self.base_dir, &self.config.base_url)?)
    }

    /// Write the manifest, overwriting any previous one. Returns the entry count.
    pub fn generate_json(&self) -> Result<usize, OrganizeError> {
        let manifest = Manifest {
            code: MANIFEST_CODE,
            msg: self.config.msg.clone(),
            data: self.scan_emoji_files()?,
        };
        let json = to_pretty_json(&manifest)?;
        fs::write(self.manifest_path(), json)?;
        Ok(manifest.data.len())
    }

    /// Rename, then write the manifest.
    pub fn organize_all(&mut self) -> Result<OrganizeSummary, OrganizeError> {
        self.organize_all_with(|_| {})
    }

    pub fn organize_all_with(
        &mut self,
        on_rename: impl FnMut(&Rename),
    ) -> Result<OrganizeSummary, OrganizeError> {
        let renamed = self.rename_files_with(on_rename)?;
        let entries = self.generate_json()?;
        Ok(OrganizeSummary { renamed, entries })
    }
}

/// Four-space indented JSON with a trailing newline. Non-ASCII is written
/// as-is.
fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}
