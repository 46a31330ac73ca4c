//! File system change as seen by the watcher

use std::path::{Path, PathBuf};

/// One logical change under the Watch Root.
///
/// Directories never appear here; the monitor drops them before forwarding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsEvent {
    Created(PathBuf),
    Modified(PathBuf),
    Deleted(PathBuf),
    Moved { from: PathBuf, to: PathBuf },
}

impl FsEvent {
    /// Paths touched by this event
    pub fn paths(&self) -> Vec<&Path> {
        match self {
            FsEvent::Created(path) | FsEvent::Modified(path) | FsEvent::Deleted(path) => {
                vec![path.as_path()]
            }
            FsEvent::Moved { from, to } => vec![from.as_path(), to.as_path()],
        }
    }
}
