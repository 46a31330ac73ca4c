//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod compiler;
mod fs_event;
mod shader_path;
mod shader_stage;

pub use compiler::{Compiler, CompilerKind, CompilerLocation};
pub use fs_event::FsEvent;
pub use shader_path::{ShaderPath, ShaderPathError, DEFAULT_ARTIFACT_EXTENSION};
pub use shader_stage::{is_shader_source, ShaderStage};
