//! Configuration module for shader-watch
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SHADER_WATCH_*)
//! 3. Project config (`<watch-root>/shader-watch.toml`)
//! 4. User config (`<config-dir>/shader-watch/config.toml`)
//! 5. Built-in defaults (lowest priority)
//!
//! Everything collapses into one immutable [`WatchConfig`] before any
//! monitoring starts.

mod loader;
mod types;
mod watch_config;

pub use loader::{
    load_or_default, load_with_warnings, with_env_overrides, ConfigWarning, LoadedSettings,
    PROJECT_CONFIG_FILE,
};
pub use types::{ColorMode, CompilerSettings, OutputSettings, Settings, DEFAULT_TIMEOUT_SECS};
pub use watch_config::{default_watch_dir, resolve_watch_root, WatchConfig, DEFAULT_SHADER_DIR};
