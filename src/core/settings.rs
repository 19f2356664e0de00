//! Persisted plugin settings in ~/.config/autoname/settings.json.
//!
//! One key, `new-file-dirpath`, default empty. Every read goes to disk so the
//! controller and the settings panel always observe the latest value; the
//! handle itself carries no state beyond the storage location. That matters
//! because hosts construct and drop plugin objects freely — the settings file
//! is the only state that survives.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::paths;

const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct SettingsFile {
    #[serde(default, rename = "new-file-dirpath")]
    new_file_dirpath: String,
}

/// Error opening or writing the settings store.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to write settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("No config directory available")]
    NoConfigDir,
}

/// Handle to the settings store.
#[derive(Clone, Debug)]
pub struct Settings {
    dir: PathBuf,
}

impl Settings {
    /// Open the store at the standard config location.
    pub fn open() -> Result<Self, SettingsError> {
        let dir = paths::config_dir().ok_or(SettingsError::NoConfigDir)?;
        Ok(Self { dir })
    }

    /// Open the store at an explicit directory. Hosts that hand the plugin a
    /// data directory use this; so do tests.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn file_path(&self) -> PathBuf {
        self.dir.join(SETTINGS_FILE)
    }

    /// Stored new-file directory, raw. Empty string when unset; resolving the
    /// empty value to a concrete directory is the caller's job. An unreadable
    /// or malformed file is logged and reads as unset.
    pub fn new_file_dirpath(&self) -> String {
        let path = self.file_path();
        let data = match fs::read_to_string(&path) {
            Ok(d) => d,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return String::new(),
            Err(e) => {
                log::warn!("Failed to read {}: {}", path.display(), e);
                return String::new();
            }
        };
        match serde_json::from_str::<SettingsFile>(&data) {
            Ok(file) => file.new_file_dirpath,
            Err(e) => {
                log::warn!("Invalid settings file {}: {}", path.display(), e);
                String::new()
            }
        }
    }

    /// Persist the new-file directory immediately. Creates the config dir if
    /// needed; the file is written atomically (tmp + rename).
    pub fn set_new_file_dirpath(&self, dirpath: &Path) -> Result<(), SettingsError> {
        fs::create_dir_all(&self.dir)?;
        let file = SettingsFile {
            new_file_dirpath: dirpath.to_string_lossy().into_owned(),
        };
        let json = serde_json::to_string_pretty(&file)?;
        let path = self.file_path();
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(tmp, path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_reads_as_empty() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        let settings = Settings::at(tmp.path());
        assert_eq!(settings.new_file_dirpath(), "");
    }

    #[test]
    fn set_then_read_roundtrip() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        let settings = Settings::at(tmp.path());
        settings
            .set_new_file_dirpath(Path::new("/home/me/notes"))
            .expect("save should succeed");
        assert_eq!(settings.new_file_dirpath(), "/home/me/notes");
    }

    #[test]
    fn set_overwrites_previous_value() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        let settings = Settings::at(tmp.path());
        settings
            .set_new_file_dirpath(Path::new("/tmp/a"))
            .expect("save ok");
        settings
            .set_new_file_dirpath(Path::new("/tmp/b"))
            .expect("save ok");
        assert_eq!(settings.new_file_dirpath(), "/tmp/b");
    }

    #[test]
    fn stored_file_uses_dashed_key() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        let settings = Settings::at(tmp.path());
        settings
            .set_new_file_dirpath(Path::new("/tmp/x"))
            .expect("save ok");
        let raw = fs::read_to_string(tmp.path().join("settings.json")).expect("read");
        assert!(raw.contains("\"new-file-dirpath\""));
    }

    #[test]
    fn invalid_json_reads_as_empty() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        fs::write(tmp.path().join("settings.json"), "not valid json {{{").expect("write");
        let settings = Settings::at(tmp.path());
        assert_eq!(settings.new_file_dirpath(), "");
    }

    #[test]
    fn two_handles_share_storage() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        let writer = Settings::at(tmp.path());
        let reader = Settings::at(tmp.path());
        writer
            .set_new_file_dirpath(Path::new("/srv/docs"))
            .expect("save ok");
        assert_eq!(reader.new_file_dirpath(), "/srv/docs");
    }
}
