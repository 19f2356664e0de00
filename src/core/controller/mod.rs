//! Reacts to document lifecycle events: names untitled documents on creation
//! and deletes empty auto-named files on close.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::document::Document;
use crate::core::events::{EventRegistry, HandlerId};
use crate::core::naming;
use crate::core::paths;
use crate::core::saver::Saver;
use crate::core::settings::Settings;

/// Documents at or past this many characters are never reported empty, so
/// close never deletes them. The emptiness scan only runs below the ceiling.
pub const EMPTY_SCAN_CEILING: usize = 100;

/// The plugin's lifecycle logic. Cloning is cheap; every clone reads the same
/// settings storage, and no field here is load-bearing state — hosts may
/// construct and drop controllers freely.
#[derive(Clone)]
pub struct NamingController {
    settings: Settings,
    saver: Saver,
}

impl NamingController {
    pub fn new(settings: Settings, saver: Saver) -> Self {
        Self { settings, saver }
    }

    /// Connect the two lifecycle handlers. Call on window activation; the
    /// returned token holder releases them on deactivation.
    pub fn activate(&self, registry: &mut EventRegistry) -> Activation {
        log::debug!("activate");
        let on_created = {
            let controller = self.clone();
            registry.connect_document_created(Box::new(move |doc| {
                controller.on_document_created(doc);
            }))
        };
        let on_closed = {
            let controller = self.clone();
            registry.connect_document_closed(Box::new(move |doc| {
                controller.on_document_closed(doc);
            }))
        };
        Activation {
            created: on_created,
            closed: on_closed,
        }
    }

    /// Handler for the document-created signal. Untitled documents get a
    /// generated path and a queued write to disk; anything already titled is
    /// left alone.
    pub fn on_document_created(&self, document: &mut dyn Document) {
        log::debug!("on_document_created");
        if !document.is_untitled() {
            return;
        }
        let path = naming::generate_path(&self.resolve_target_directory());
        log::debug!("Autonaming document as {}", path.display());
        document.set_location(path.clone());
        self.saver.request_save(path, document.text());
    }

    /// Handler for the document-closed signal. When the document's file is
    /// auto-named under the currently configured directory and the content
    /// never amounted to anything, the file is removed.
    pub fn on_document_closed(&self, document: &dyn Document) {
        log::debug!("on_document_closed");
        let Some(path) = document.location() else {
            return;
        };
        log::debug!("Closed document at {}", path.display());

        if self.is_autonamed(&path) && is_empty(document) {
            log::debug!("Deleting empty auto-named document {}", path.display());
            match fs::remove_file(&path) {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    log::warn!("Auto-named document already gone: {}", path.display());
                }
                Err(e) => {
                    log::warn!("Failed to delete {}: {}", path.display(), e);
                }
            }
        }
    }

    /// Directory new files go to: the persisted setting, or home when unset.
    /// Read from storage on every call so a change in the settings panel
    /// applies immediately.
    pub fn resolve_target_directory(&self) -> PathBuf {
        let stored = self.settings.new_file_dirpath();
        if stored.is_empty() {
            paths::home_dir()
        } else {
            PathBuf::from(stored)
        }
    }

    /// True when `path` is an auto-named file directly under the currently
    /// configured directory. Files created under a previously configured
    /// directory stop matching once the setting changes and are left in place;
    /// that is long-standing documented behavior.
    pub fn is_autonamed(&self, path: &Path) -> bool {
        naming::matches_directory(&self.resolve_target_directory(), path)
    }
}

/// A document is empty when it holds fewer than [`EMPTY_SCAN_CEILING`]
/// characters, all of them whitespace. At or past the ceiling the scan is
/// skipped and the document counts as non-empty regardless of content.
pub fn is_empty(document: &dyn Document) -> bool {
    let char_count = document.char_count();
    if char_count < EMPTY_SCAN_CEILING {
        return document.text().trim().is_empty();
    }
    false
}

/// Handler tokens held while the plugin is active on a window.
pub struct Activation {
    created: HandlerId,
    closed: HandlerId,
}

impl Activation {
    /// Disconnect both handlers. Call on window deactivation.
    pub fn deactivate(self, registry: &mut EventRegistry) {
        log::debug!("deactivate");
        registry.disconnect(self.created);
        registry.disconnect(self.closed);
    }
}
