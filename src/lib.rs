//! shader-watch - incremental shader compilation service
//!
//! Watches a tree of GLSL sources and keeps a mirrored tree of SPIR-V
//! artifacts up to date by driving an external compiler (`glslc` or
//! `glslangValidator`). Existing sources are reconciled once at startup;
//! afterwards every create, modify, delete or rename is handled as it happens.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{WatchEvent, WatchUseCase};
pub use config::{Settings, WatchConfig};
pub use domain::services::{is_stale, is_stale_at, CompilerInvocation, InvocationFlags};
pub use domain::value_objects::{Compiler, CompilerKind, CompilerLocation, ShaderPath, ShaderStage};
pub use error::{ShaderWatchError, ShaderWatchResult};
