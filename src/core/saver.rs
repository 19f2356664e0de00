//! Fire-and-forget persistence of freshly named documents.
//!
//! Writing the file right after naming is what lets the host's autosave
//! machinery pick the document up. The controller queues a write and moves on;
//! it never awaits completion. Failures — typically a configured directory
//! that doesn't exist — are logged, nothing more. Missing parents are not
//! created: a bad directory setting is supposed to surface as a failed save.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::runtime::Runtime;

/// Handle to the background save runtime. Cheap to clone; all clones share the
/// same worker thread.
#[derive(Clone)]
pub struct Saver {
    rt: Arc<Runtime>,
}

impl Saver {
    /// Spawn the save runtime.
    pub fn new() -> io::Result<Self> {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("autoname-saver")
            .build()?;
        Ok(Self { rt: Arc::new(rt) })
    }

    /// Queue a write of `contents` to `path` and return immediately.
    pub fn request_save(&self, path: PathBuf, contents: String) {
        self.rt.spawn(async move {
            log::debug!("Saving {}", path.display());
            if let Err(e) = tokio::fs::write(&path, contents.as_bytes()).await {
                log::warn!("Failed to save {}: {}", path.display(), e);
            }
        });
    }
}
