//! Manifest types written to `mengling.json`.

use serde::{Deserialize, Serialize};

/// Status code stored in every manifest.
pub const MANIFEST_CODE: u16 = 200;

/// The manifest envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub code: u16,
    pub msg: String,
    pub data: Vec<ManifestEntry>,
}

/// One asset file as listed in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Current filename stem (a 6-digit id once renamed)
    pub name: String,
    /// Containing folder name, verbatim
    pub category: String,
    /// `<base_url>/<category>/<filename>`, not escaped
    pub url: String,
}
