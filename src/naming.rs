//! Pure helpers for directory names and base locations.

use crate::error::{Result, TempDirError};
use chrono::Utc;

/// Characters that may not appear in a directory name.
pub const FORBIDDEN_NAME_CHARS: &[char] = &['\\', '/', '?', '%', '*', ':', '|', '"', '<', '>'];

pub fn is_valid_directory_name(name: &str) -> bool {
    !name.contains(FORBIDDEN_NAME_CHARS)
}

/// Validates `name` and returns it trimmed.
pub fn sanitize_name(name: &str) -> Result<String> {
    if !is_valid_directory_name(name) {
        return Err(TempDirError::InvalidDirectoryName(name.to_string()));
    }
    Ok(name.trim().to_string())
}

/// Strips surrounding whitespace and any trailing separators.
///
/// A bare root (`/`) collapses to the empty string, which `create()` later
/// resolves to the system temporary directory.
pub fn sanitize_location(location: &str) -> String {
    location
        .trim_start()
        .trim_end_matches(|c: char| c.is_whitespace() || is_separator(c))
        .to_string()
}

/// Random integer plus a microsecond timestamp, e.g. `1804289383-1718030512123456`.
pub fn generate_name() -> String {
    let now = Utc::now();
    let stamp = format!("{}.{:06}", now.timestamp(), now.timestamp_subsec_micros());
    format!("{}-{}", rand::random::<u32>(), stamp.replace([' ', '.'], ""))
}

pub(crate) fn is_separator(c: char) -> bool {
    c == '/' || c == std::path::MAIN_SEPARATOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names_are_trimmed() -> anyhow::Result<()> {
        assert_eq!(sanitize_name("  build-cache ")?, "build-cache");
        assert_eq!(sanitize_name("v1.2")?, "v1.2");
        assert_eq!(sanitize_name("")?, "");
        Ok(())
    }

    #[test]
    fn test_every_forbidden_char_is_rejected() {
        for c in FORBIDDEN_NAME_CHARS {
            let name = format!("bad{}name", c);
            match sanitize_name(&name) {
                Err(TempDirError::InvalidDirectoryName(n)) => assert_eq!(n, name),
                other => panic!("expected InvalidDirectoryName for {:?}, got {:?}", name, other),
            }
        }
    }

    #[test]
    fn test_location_trailing_noise_is_stripped() {
        assert_eq!(sanitize_location("/tmp/work/"), "/tmp/work");
        assert_eq!(sanitize_location("  /tmp/work//  "), "/tmp/work");
        assert_eq!(sanitize_location("/tmp/work / "), "/tmp/work");
        assert_eq!(sanitize_location("relative/dir"), "relative/dir");
        assert_eq!(sanitize_location("/"), "");
    }

    #[test]
    fn test_generated_names_are_usable() {
        let a = generate_name();
        let b = generate_name();
        assert!(is_valid_directory_name(&a));
        assert!(!a.contains(' '));
        assert!(!a.contains('.'));
        assert!(a.contains('-'));
        assert_ne!(a, b);
    }
}
