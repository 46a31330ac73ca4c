//! Domain Layer
//!
//! The core of shader-watch: what a shader source is, when its artifact is
//! stale, and how the compiler is invoked.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (ShaderPath, ShaderStage, Compiler)
//! - `services/` - Staleness rule and invocation construction
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **Minimal I/O** - The only file system access is the staleness metadata read
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - Subprocesses go through trait-defined ports

pub mod ports;
pub mod services;
pub mod value_objects;
