//! Resolved, immutable runtime configuration

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::services::InvocationFlags;
use crate::error::{ShaderWatchError, ShaderWatchResult};

use super::types::Settings;

/// Name of the conventional shader directory next to the executable
pub const DEFAULT_SHADER_DIR: &str = "shaders";

/// Process-wide configuration, built once at startup and shared by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchConfig {
    /// Canonical directory being monitored
    pub watch_root: PathBuf,
    /// Absolute artifact root mirroring the watch root layout
    pub output_root: PathBuf,
    /// Extension appended to artifact file names
    pub artifact_extension: String,
    /// Flags forwarded to every compiler invocation
    pub flags: InvocationFlags,
    /// Wall-clock limit per compiler invocation
    pub timeout: Duration,
    /// Explicit compiler executable, if any
    pub compiler: Option<String>,
    /// Run the startup sweep before live monitoring
    pub sweep: bool,
}

impl WatchConfig {
    /// Minimal config with defaults: output root = watch root
    pub fn new(watch_root: PathBuf) -> Self {
        Self::from_settings(watch_root, &Settings::default())
    }

    /// Resolve file/env settings against an already-validated watch root
    pub fn from_settings(watch_root: PathBuf, settings: &Settings) -> Self {
        let output_root = match &settings.output.dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => watch_root.join(dir),
            None => watch_root.clone(),
        };
        let output_root = normalize(&output_root);

        let extension = settings.output.extension.trim_start_matches('.');
        let artifact_extension = if extension.is_empty() {
            crate::domain::value_objects::DEFAULT_ARTIFACT_EXTENSION.to_string()
        } else {
            extension.to_string()
        };

        Self {
            watch_root,
            output_root,
            artifact_extension,
            flags: InvocationFlags {
                debug: settings.compiler.debug,
                optimize: settings.compiler.optimize,
                target_env: settings.compiler.target_env.clone(),
            },
            timeout: Duration::from_secs(settings.compiler.timeout_secs.max(1)),
            compiler: settings.compiler.path.clone(),
            sweep: true,
        }
    }

    /// Set the output root
    pub fn with_output_root(mut self, output_root: PathBuf) -> Self {
        self.output_root = normalize(&output_root);
        self
    }

    /// Set the per-invocation timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the compiler flags
    pub fn with_flags(mut self, flags: InvocationFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Enable or disable the startup sweep
    pub fn with_sweep(mut self, sweep: bool) -> Self {
        self.sweep = sweep;
        self
    }
}

/// Validate and canonicalize the watch root.
pub fn resolve_watch_root(path: &Path) -> ShaderWatchResult<PathBuf> {
    if !path.exists() {
        return Err(ShaderWatchError::WatchRootNotFound {
            path: path.to_path_buf(),
        });
    }
    if !path.is_dir() {
        return Err(ShaderWatchError::NotADirectory {
            path: path.to_path_buf(),
        });
    }
    Ok(path.canonicalize()?)
}

/// Default watch directory: `shaders/` next to the executable if present,
/// otherwise the current working directory.
pub fn default_watch_dir(exe_dir: Option<&Path>, cwd: &Path) -> PathBuf {
    exe_dir
        .map(|dir| dir.join(DEFAULT_SHADER_DIR))
        .filter(|candidate| candidate.is_dir())
        .unwrap_or_else(|| cwd.to_path_buf())
}

/// Lexically drop `.` segments and fold `..` where possible.
fn normalize(path: &Path) -> PathBuf {
    use std::path::Component;

    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    // An existing output root may sit behind a symlink (e.g. /tmp on macOS)
    out.canonicalize().unwrap_or(out)
}
