//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::DEFAULT_ARTIFACT_EXTENSION;

/// Default per-invocation compiler timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Compiler configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerSettings {
    /// Explicit executable (path or bare name); probed from PATH when unset
    #[serde(default)]
    pub path: Option<String>,

    /// Include debug symbols
    #[serde(default)]
    pub debug: bool,

    /// Request performance optimization
    #[serde(default)]
    pub optimize: bool,

    /// Target environment, e.g. "vulkan1.3"
    #[serde(default)]
    pub target_env: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for CompilerSettings {
    fn default() -> Self {
        Self {
            path: None,
            debug: false,
            optimize: false,
            target_env: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Artifact root; relative paths resolve against the watch root
    #[serde(default)]
    pub dir: Option<PathBuf>,

    #[serde(default = "default_extension")]
    pub extension: String,

    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            dir: None,
            extension: default_extension(),
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_extension() -> String {
    DEFAULT_ARTIFACT_EXTENSION.to_string()
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure, as read from `shader-watch.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub compiler: CompilerSettings,

    #[serde(default)]
    pub output: OutputSettings,
}
