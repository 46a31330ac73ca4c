//! Shader Path Value Object
//!
//! A shader source identified by its path relative to the Watch Root.
//! The compiled artifact location is derived from it, never stored.

use std::ffi::OsString;
use std::fmt;
use std::path::{Component, Path, PathBuf};

use super::shader_stage::ShaderStage;

/// Default extension appended to compiled artifacts.
pub const DEFAULT_ARTIFACT_EXTENSION: &str = "spv";

/// Error when a path cannot name a shader source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShaderPathError {
    /// Path is empty
    Empty,
    /// Path is absolute when relative is required
    AbsoluteNotAllowed,
    /// Path contains traversal components (..)
    ContainsTraversal,
    /// Path lies outside the watch root
    OutsideRoot { path: PathBuf, root: PathBuf },
    /// Extension is not a recognized shader stage
    NotAShader(PathBuf),
}

impl fmt::Display for ShaderPathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderPathError::Empty => write!(f, "Path is empty"),
            ShaderPathError::AbsoluteNotAllowed => {
                write!(f, "Absolute paths are not allowed")
            }
            ShaderPathError::ContainsTraversal => {
                write!(f, "Path contains traversal components (..)")
            }
            ShaderPathError::OutsideRoot { path, root } => write!(
                f,
                "Path '{}' is outside watch root '{}'",
                path.display(),
                root.display()
            ),
            ShaderPathError::NotAShader(path) => {
                write!(f, "'{}' is not a shader source", path.display())
            }
        }
    }
}

impl std::error::Error for ShaderPathError {}

/// A validated shader source path, relative to the Watch Root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShaderPath {
    relative: PathBuf,
    stage: ShaderStage,
}

impl ShaderPath {
    /// Validate a relative path
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, ShaderPathError> {
        let path = path.as_ref();

        if path.as_os_str().is_empty() {
            return Err(ShaderPathError::Empty);
        }
        if path.is_absolute() {
            return Err(ShaderPathError::AbsoluteNotAllowed);
        }
        if path
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            return Err(ShaderPathError::ContainsTraversal);
        }

        let stage = ShaderStage::from_path(path)
            .ok_or_else(|| ShaderPathError::NotAShader(path.to_path_buf()))?;

        // Normalize away `./` segments so equal sources compare equal.
        let relative: PathBuf = path
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect();

        Ok(Self { relative, stage })
    }

    /// Resolve an absolute path under `root`.
    ///
    /// This is a purely lexical prefix check; callers that may receive
    /// non-canonical paths should canonicalize before calling.
    pub fn within_root<P: AsRef<Path>, R: AsRef<Path>>(
        path: P,
        root: R,
    ) -> Result<Self, ShaderPathError> {
        let path = path.as_ref();
        let root = root.as_ref();

        if path.is_relative() {
            return Self::new(path);
        }

        let relative = path
            .strip_prefix(root)
            .map_err(|_| ShaderPathError::OutsideRoot {
                path: path.to_path_buf(),
                root: root.to_path_buf(),
            })?;
        Self::new(relative)
    }

    /// Path relative to the watch root
    pub fn relative(&self) -> &Path {
        &self.relative
    }

    /// Pipeline stage
    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    /// Absolute source location
    pub fn source_in(&self, watch_root: &Path) -> PathBuf {
        watch_root.join(&self.relative)
    }

    /// Artifact path relative to the output root: `<relative>.<ext>`
    pub fn artifact_relative(&self, extension: &str) -> PathBuf {
        let mut name = OsString::from(self.relative.as_os_str());
        name.push(".");
        name.push(extension);
        PathBuf::from(name)
    }

    /// Absolute artifact location
    pub fn artifact_in(&self, output_root: &Path, extension: &str) -> PathBuf {
        output_root.join(self.artifact_relative(extension))
    }
}

impl fmt::Display for ShaderPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.relative.display())
    }
}

impl AsRef<Path> for ShaderPath {
    fn as_ref(&self) -> &Path {
        &self.relative
    }
}
