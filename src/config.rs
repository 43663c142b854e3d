//! Organizer configuration.
//!
//! An optional `organizer.toml` in the base directory overrides the built-in
//! defaults. The file is sparse: only the keys present are overridden.
//!
//! ```toml
//! # All options are optional - defaults shown below
//! base_url = "https://cdn.jsdmirror.com/gh/mengDot/static-file-repository@main/emoji"
//! msg = "萌灵表情包分享地址(mengling.meng.me)"
//! manifest_file = "mengling.json"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the config file looked up in the base directory.
pub const CONFIG_FILE: &str = "organizer.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OrganizerConfig {
    /// URL prefix that category and filename are appended to.
    pub base_url: String,
    /// Value of the manifest's `msg` field.
    pub msg: String,
    /// Manifest filename, written inside the base directory.
    pub manifest_file: String,
}

impl Default for OrganizerConfig {
    fn default() -> Self {
        Self {
            base_url: "https://cdn.jsdmirror.com/gh/mengDot/static-file-repository@main/emoji"
                .to_string(),
            msg: "萌灵表情包分享地址(mengling.meng.me)".to_string(),
            manifest_file: "mengling.json".to_string(),
        }
    }
}

impl OrganizerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::Validation(
                "base_url must start with http:// or https://".into(),
            ));
        }
        if self.base_url.ends_with('/') {
            return Err(ConfigError::Validation(
                "base_url must not end with '/'".into(),
            ));
        }
        let name = self.manifest_file.as_str();
        if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
            return Err(ConfigError::Validation(
                "manifest_file must be a plain filename".into(),
            ));
        }
        Ok(())
    }
}

/// Load `organizer.toml` from `base_dir`, falling back to defaults.
///
/// Returns `Err` if the file exists but is malformed, has unknown keys, or
/// fails validation.
pub fn load_config(base_dir: &Path) -> Result<OrganizerConfig, ConfigError> {
    let path = base_dir.join(CONFIG_FILE);
    let config = if path.exists() {
        let content = fs::read_to_string(&path)?;
        toml::from_str(&content)?
    } else {
        OrganizerConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// A fully commented stock `organizer.toml`, printed by `gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# Emoji Organizer Configuration
# ============================
# Place this file in the base directory as organizer.toml.
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# URL prefix for manifest entries. Each entry's url is
#   <base_url>/<category>/<filename>
# Must not end with a slash.
base_url = "https://cdn.jsdmirror.com/gh/mengDot/static-file-repository@main/emoji"

# Value of the manifest's "msg" field.
msg = "萌灵表情包分享地址(mengling.meng.me)"

# Manifest filename, written inside the base directory.
manifest_file = "mengling.json"
"##
}
