//! Staleness Resolver
//!
//! Decides whether a compiled artifact must be rebuilt from its source.

use std::fs;
use std::path::Path;
use std::time::SystemTime;

/// Timestamp rule behind [`is_stale`].
///
/// Missing artifact is stale. Equal timestamps are stale too: file systems
/// with coarse mtime resolution can otherwise hide an edit made in the same
/// tick as the previous compile.
pub fn is_stale_at(source_modified: SystemTime, artifact_modified: Option<SystemTime>) -> bool {
    match artifact_modified {
        None => true,
        Some(artifact) => artifact <= source_modified,
    }
}

/// Whether `artifact` is missing or not newer than `source`.
///
/// Any metadata read failure counts as stale.
pub fn is_stale(source: &Path, artifact: &Path) -> bool {
    let artifact_modified = match fs::metadata(artifact) {
        Ok(meta) => match meta.modified() {
            Ok(time) => Some(time),
            Err(_) => return true,
        },
        Err(_) => None,
    };

    let source_modified = match fs::metadata(source).and_then(|m| m.modified()) {
        Ok(time) => time,
        Err(_) => return true,
    };

    is_stale_at(source_modified, artifact_modified)
}
