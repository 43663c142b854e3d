//! Interactive menu selection.

/// What the user asked the organizer to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Rename non-canonical files only
    Rename,
    /// Write the manifest only
    Manifest,
    /// Rename, then write the manifest
    Organize,
}

impl Action {
    /// Parse a menu choice. Surrounding whitespace is ignored; anything other
    /// than `1`, `2` or `3` is rejected.
    pub fn from_choice(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Rename),
            "2" => Some(Self::Manifest),
            "3" => Some(Self::Organize),
            _ => None,
        }
    }
}
