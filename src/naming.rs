//! Filename predicates for the 6-digit identifier convention.
//!
//! Every asset in a category folder is expected to be named `<id>.<ext>`
//! where `<id>` is exactly six ASCII digits. Two checks are built on that:
//!
//! - [`is_valid_filename`] is strict: the whole stem must be the identifier.
//!   Anything else is renamed.
//! - [`leading_id`] is loose: any stem that *starts* with six digits reserves
//!   those digits, so `123456_old.png` keeps `123456` out of the allocator
//!   even though the file itself gets renamed.

use std::path::Path;

/// Number of digits in a canonical identifier.
pub const ID_LEN: usize = 6;

/// Image extensions treated as assets. Compared case-insensitively.
pub const ASSET_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// True if `name`'s stem is exactly six ASCII digits.
///
/// - `"123456.png"` → true
/// - `"12345.png"` → false (too short)
/// - `"1234567.png"` → false (too long)
/// - `"123456_old.png"` → false
pub fn is_valid_filename(name: &str) -> bool {
    Path::new(name)
        .file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(is_identifier)
}

/// True if `s` is a complete identifier.
pub fn is_identifier(s: &str) -> bool {
    s.len() == ID_LEN && s.bytes().all(|b| b.is_ascii_digit())
}

/// The six-digit prefix of a stem, if it has one.
///
/// - `"123456"` → Some("123456")
/// - `"1234567"` → Some("123456")
/// - `"123456_old"` → Some("123456")
/// - `"12345a"` → None
pub fn leading_id(stem: &str) -> Option<&str> {
    let prefix = stem.get(..ID_LEN)?;
    prefix
        .bytes()
        .all(|b| b.is_ascii_digit())
        .then_some(prefix)
}

/// True if the path's extension is one of [`ASSET_EXTENSIONS`].
pub fn has_asset_extension(path: &Path) -> bool {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    ASSET_EXTENSIONS.contains(&ext.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_digit_stem_is_valid() {
        assert!(is_valid_filename("123456.png"));
        assert!(is_valid_filename("999999.JPG"));
    }

    #[test]
    fn five_digit_stem_is_invalid() {
        assert!(!is_valid_filename("12345.png"));
    }

    #[test]
    fn seven_digit_stem_is_invalid() {
        assert!(!is_valid_filename("1234567.png"));
    }

    #[test]
    fn suffixed_stem_is_invalid() {
        assert!(!is_valid_filename("123456_old.png"));
        assert!(!is_valid_filename("a123456.png"));
    }

    #[test]
    fn non_ascii_digits_are_not_identifiers() {
        // Arabic-Indic digits are numeric but not ASCII
        assert!(!is_valid_filename("١٢٣٤٥٦.png"));
    }

    #[test]
    fn leading_zero_is_still_canonical() {
        // Allocation never produces these, but existing ones are left alone
        assert!(is_valid_filename("012345.gif"));
    }

    #[test]
    fn leading_id_exact() {
        assert_eq!(leading_id("123456"), Some("123456"));
    }

    #[test]
    fn leading_id_longer_stem() {
        assert_eq!(leading_id("1234567"), Some("123456"));
        assert_eq!(leading_id("654321_old"), Some("654321"));
    }

    #[test]
    fn leading_id_too_short_or_mixed() {
        assert_eq!(leading_id("12345"), None);
        assert_eq!(leading_id("12345a"), None);
        assert_eq!(leading_id("cat"), None);
        assert_eq!(leading_id(""), None);
    }

    #[test]
    fn leading_id_multibyte_stem_does_not_panic() {
        assert_eq!(leading_id("猫猫猫"), None);
        assert_eq!(leading_id("12345猫"), None);
    }

    #[test]
    fn asset_extensions_case_insensitive() {
        assert!(has_asset_extension(Path::new("a.png")));
        assert!(has_asset_extension(Path::new("a.JPEG")));
        assert!(has_asset_extension(Path::new("a.WebP")));
        assert!(has_asset_extension(Path::new("a.gif")));
    }

    #[test]
    fn other_extensions_are_not_assets() {
        assert!(!has_asset_extension(Path::new("a.bmp")));
        assert!(!has_asset_extension(Path::new("a.txt")));
        assert!(!has_asset_extension(Path::new("png")));
        assert!(!has_asset_extension(Path::new(".png")));
    }
}
