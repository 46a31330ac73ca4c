//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Command-line definition
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use shader_watch::presentation::factory;
//!
//! let compiler = factory::detect_compiler(config.compiler.as_deref())?;
//! let use_case = factory::create_watch_use_case(&config, &compiler);
//! use_case.start(running, |event| { ... })?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen};
pub use factory::{build_watch_config, create_watch_use_case, detect_compiler, startup_warnings};
