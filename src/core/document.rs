//! Seam to the host editor's document objects.

use std::path::PathBuf;

/// The slice of a host document this plugin touches. The host owns the buffer
/// and its lifecycle; the plugin only reads the text and gets/sets the on-disk
/// location.
pub trait Document {
    /// Number of characters in the buffer.
    fn char_count(&self) -> usize;

    /// Full buffer contents.
    fn text(&self) -> String;

    /// On-disk location, if one has been assigned.
    fn location(&self) -> Option<PathBuf>;

    /// Assign the on-disk location.
    fn set_location(&mut self, path: PathBuf);

    /// True while no location has been assigned.
    fn is_untitled(&self) -> bool {
        self.location().is_none()
    }
}

/// Plain in-memory document. Enough for hosts that buffer text as a string,
/// and for exercising the controller in tests.
#[derive(Clone, Debug, Default)]
pub struct TextDocument {
    text: String,
    location: Option<PathBuf>,
}

impl TextDocument {
    pub fn untitled(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            location: None,
        }
    }

    pub fn at(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            location: Some(path.into()),
        }
    }
}

impl Document for TextDocument {
    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn text(&self) -> String {
        self.text.clone()
    }

    fn location(&self) -> Option<PathBuf> {
        self.location.clone()
    }

    fn set_location(&mut self, path: PathBuf) {
        self.location = Some(path);
    }
}
