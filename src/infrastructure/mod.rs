//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `process` - Subprocess runner (implements `CommandRunner`)
//! - `compiler` - Compiler discovery and version probe
//! - `monitor` - Recursive file system monitor
//! - `walk` - Shader source enumeration

pub mod compiler;
pub mod monitor;
pub mod process;
pub mod walk;

pub use compiler::{detect_compiler, find_on_path, probe_compiler, resolve_location};
pub use monitor::{translate_event, MonitorPoll, ShaderMonitor};
pub use process::ProcessRunner;
pub use walk::find_shader_sources;
