//! Shader source enumeration

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::domain::value_objects::is_shader_source;

/// All shader sources below `root`, sorted by path.
///
/// Every descendant counts, hidden directories and ignored files included.
/// Unreadable entries are skipped.
pub fn find_shader_sources(root: &Path) -> Vec<PathBuf> {
    let mut sources: Vec<PathBuf> = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .build()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_some_and(|t| t.is_file()))
        .map(ignore::DirEntry::into_path)
        .filter(|path| is_shader_source(path))
        .collect();

    sources.sort();
    sources
}
