//! Settings panel state.

use std::fs;
use std::path::PathBuf;

use ratatui::widgets::ListState;

use crate::core::paths;
use crate::core::settings::Settings;

/// Folder browser bound to the persisted new-file directory.
pub struct Panel {
    pub(crate) settings: Settings,
    /// Directory currently being browsed; `s` commits this one.
    pub(crate) browse_dir: PathBuf,
    /// Non-hidden subdirectories of `browse_dir`, sorted by name.
    pub(crate) entries: Vec<String>,
    pub(crate) selected_index: usize,
    pub(crate) list_state: ListState,
    /// Save confirmation or failure, shown under the list.
    pub(crate) status: Option<String>,
    /// Error listing `browse_dir`, if the last refresh failed.
    pub(crate) read_error: Option<String>,
}

impl Panel {
    /// Pre-populate from storage the way name generation does: the stored
    /// directory, or home when unset. `start_dir` overrides only where
    /// browsing begins, never the stored value.
    pub fn new(settings: Settings, start_dir: Option<PathBuf>) -> Self {
        let browse_dir = start_dir.unwrap_or_else(|| {
            let stored = settings.new_file_dirpath();
            if stored.is_empty() {
                paths::home_dir()
            } else {
                PathBuf::from(stored)
            }
        });
        let mut panel = Self {
            settings,
            browse_dir,
            entries: Vec::new(),
            selected_index: 0,
            list_state: ListState::default(),
            status: None,
            read_error: None,
        };
        panel.refresh_entries();
        panel
    }

    /// Stored setting for display.
    pub(crate) fn stored_display(&self) -> String {
        let stored = self.settings.new_file_dirpath();
        if stored.is_empty() {
            format!("{} (default)", paths::home_dir().display())
        } else {
            stored
        }
    }

    /// Re-list the browsed directory.
    pub(crate) fn refresh_entries(&mut self) {
        self.entries.clear();
        self.selected_index = 0;
        self.read_error = None;

        match fs::read_dir(&self.browse_dir) {
            Ok(read_dir) => {
                for entry in read_dir.flatten() {
                    let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
                    let name = entry.file_name().to_string_lossy().into_owned();
                    if is_dir && !name.starts_with('.') {
                        self.entries.push(name);
                    }
                }
                self.entries.sort();
            }
            Err(e) => {
                self.read_error = Some(e.to_string());
            }
        }
    }

    pub(crate) fn select_previous(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub(crate) fn select_next(&mut self) {
        if !self.entries.is_empty() {
            self.selected_index = (self.selected_index + 1).min(self.entries.len() - 1);
        }
    }

    /// Descend into the highlighted subdirectory.
    pub(crate) fn enter_selected(&mut self) {
        if let Some(name) = self.entries.get(self.selected_index) {
            self.browse_dir = self.browse_dir.join(name);
            self.refresh_entries();
        }
    }

    /// Go up to the parent directory.
    pub(crate) fn go_parent(&mut self) {
        if let Some(parent) = self.browse_dir.parent() {
            self.browse_dir = parent.to_path_buf();
            self.refresh_entries();
        }
    }

    /// Write the browsed directory to the persisted setting immediately. No
    /// validation and no debounce; a bad choice surfaces later as a failed
    /// save.
    pub(crate) fn choose_browse_dir(&mut self) {
        match self.settings.set_new_file_dirpath(&self.browse_dir) {
            Ok(()) => {
                self.status = Some(format!("Saved: {}", self.browse_dir.display()));
            }
            Err(e) => {
                log::warn!("Failed to persist new-file directory: {}", e);
                self.status = Some(format!("Save failed: {}", e));
            }
        }
    }
}
