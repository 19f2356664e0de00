//! Generated file names: template, generation, and recognition.
//!
//! Names look like `autoname-20260808-ef3s2g`: the plugin name, the local date,
//! and six characters drawn from a fresh v4 UUID. Recognition rebuilds the
//! pattern from whatever directory is configured at call time, so a path only
//! counts as auto-named while it sits directly under the current new-file
//! directory.

use std::path::{Path, PathBuf};

use chrono::Local;
use regex::Regex;
use uuid::Uuid;

use crate::core::app;

/// Generate a fresh file name, e.g. `autoname-20210918-ef3s2g`.
pub fn generate_file_name() -> String {
    let date = Local::now().format("%Y%m%d");
    let id = Uuid::new_v4().to_string();
    // last 6 chars of a hyphenated v4 UUID, always hex
    let suffix = &id[id.len() - 6..];
    format!("{}-{}-{}", app::NAME, date, suffix)
}

/// Generate a fresh path directly under `directory`.
pub fn generate_path(directory: &Path) -> PathBuf {
    directory.join(generate_file_name())
}

/// Pattern matching auto-named paths directly under `directory`. The directory
/// text is escaped, so metacharacters in user paths don't widen the match; the
/// file-name part stays `\d{8}-\w{6}` verbatim.
pub fn directory_pattern(directory: &Path) -> Regex {
    let dir = regex::escape(&directory.to_string_lossy());
    let pattern = format!(r"^{}/{}-\d{{8}}-\w{{6}}$", dir, app::NAME);
    Regex::new(&pattern).expect("escaped directory yields a valid pattern")
}

/// True when `path` is an auto-named file directly under `directory`.
pub fn matches_directory(directory: &Path, path: &Path) -> bool {
    directory_pattern(directory).is_match(&path.to_string_lossy())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_name_matches_pattern() {
        let dir = Path::new("/home/me");
        let path = generate_path(dir);
        assert!(matches_directory(dir, &path));
    }

    #[test]
    fn date_component_is_stable_within_a_run() {
        let dates: Vec<String> = (0..20)
            .map(|_| generate_file_name()[9..17].to_string())
            .collect();
        assert!(dates.iter().all(|d| d == &dates[0]), "dates: {:?}", dates);
        assert!(dates[0].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn suffixes_are_effectively_unique() {
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let name = generate_file_name();
            let suffix = name.rsplit('-').next().expect("suffix");
            assert_eq!(suffix.len(), 6);
            seen.insert(suffix.to_string());
        }
        assert!(seen.len() > 190, "only {} distinct suffixes", seen.len());
    }

    #[test]
    fn rejects_path_in_other_directory() {
        let dir = Path::new("/home/me");
        assert!(!matches_directory(
            dir,
            Path::new("/home/other/autoname-20210918-ef3s2g")
        ));
    }

    #[test]
    fn rejects_path_in_subdirectory() {
        let dir = Path::new("/home/me");
        assert!(!matches_directory(
            dir,
            Path::new("/home/me/deeper/autoname-20210918-ef3s2g")
        ));
    }

    #[test]
    fn rejects_malformed_file_names() {
        let dir = Path::new("/home/me");
        for name in [
            "autoname-2021091-ef3s2g",    // 7-digit date
            "autoname-202109188-ef3s2g",  // 9-digit date
            "autoname-20210918-ef3s2",    // 5-char suffix
            "autoname-20210918-ef3s2gh",  // 7-char suffix
            "autoname-20210918-ef3s2g.x", // trailing extension
            "autoname-20210918-ef+s2g",   // non-word char
            "myautoname-20210918-ef3s2g", // prefixed
            "notes.txt",
        ] {
            assert!(
                !matches_directory(dir, &dir.join(name)),
                "should reject {}",
                name
            );
        }
    }

    #[test]
    fn accepts_word_suffixes_beyond_hex() {
        // The pattern is looser than the generator: \w covers letters, digits,
        // and underscore.
        let dir = Path::new("/home/me");
        assert!(matches_directory(
            dir,
            Path::new("/home/me/autoname-20210918-zz_9Qx")
        ));
    }

    #[test]
    fn directory_metacharacters_are_escaped() {
        let dir = Path::new("/home/me/notes+drafts");
        assert!(matches_directory(
            dir,
            Path::new("/home/me/notes+drafts/autoname-20210918-ef3s2g")
        ));
        // Without escaping, "+" would make the "s" repeatable.
        assert!(!matches_directory(
            dir,
            Path::new("/home/me/notessss/autoname-20210918-ef3s2g")
        ));
    }
}
