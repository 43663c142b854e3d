//! CLI output formatting.
//!
//! Each message has a `format_*` function that returns the lines to print
//! and a `print_*` wrapper that writes them to stdout. Format functions are
//! pure so the exact wording is covered by unit tests.
//!
//! ```text
//! ==> Renaming files in emoji/
//! Renamed: cats/happy.png -> cats/482913.png
//! Renamed 1 file
//! ==> Writing manifest
//! Wrote mengling.json (3 emoji)
//! ==> Organize complete
//!     Renamed: 1 file
//!     Manifest entries: 3
//! ```

use crate::organizer::{OrganizeSummary, Rename};
use std::path::Path;

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

pub fn format_stage(title: &str) -> String {
    format!("==> {title}")
}

pub fn format_menu() -> Vec<String> {
    vec![
        "Choose an action:".to_string(),
        "1. Rename files only".to_string(),
        "2. Generate manifest only".to_string(),
        "3. Rename, then generate manifest".to_string(),
    ]
}

pub fn format_menu_prompt() -> &'static str {
    "Enter choice (1-3): "
}

pub fn format_invalid_choice(input: &str) -> String {
    format!("Invalid choice: {:?}", input.trim())
}

pub fn format_rename_start(base_dir: &Path) -> String {
    format_stage(&format!("Renaming files in {}", base_dir.display()))
}

/// `Renamed: cats/happy.png -> cats/482913.png`
pub fn format_rename(rename: &Rename) -> String {
    format!(
        "Renamed: {cat}/{} -> {cat}/{}",
        rename.from,
        rename.to,
        cat = rename.category
    )
}

pub fn format_rename_summary(count: usize) -> String {
    format!("Renamed {}", plural(count, "file", "files"))
}

pub fn format_manifest_start() -> String {
    format_stage("Writing manifest")
}

pub fn format_manifest_summary(manifest_file: &str, entries: usize) -> String {
    format!("Wrote {manifest_file} ({entries} emoji)")
}

pub fn format_organize_summary(summary: &OrganizeSummary) -> Vec<String> {
    vec![
        format_stage("Organize complete"),
        format!("    Renamed: {}", plural(summary.renamed, "file", "files")),
        format!("    Manifest entries: {}", summary.entries),
    ]
}

pub fn print_menu() {
    for line in format_menu() {
        println!("{line}");
    }
}

pub fn print_rename(rename: &Rename) {
    println!("{}", format_rename(rename));
}

pub fn print_organize_summary(summary: &OrganizeSummary) {
    for line in format_organize_summary(summary) {
        println!("{line}");
    }
}
