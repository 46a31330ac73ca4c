//! Watch Use Case
//!
//! Keeps compiled artifacts in step with their shader sources.
//! It orchestrates:
//! - File system monitoring (via `notify` crate)
//! - Debouncing (100ms default)
//! - A startup sweep over every existing source
//! - Compilation and artifact cleanup through the dispatcher
//!
//! ## Usage
//!
//! ```ignore
//! let use_case = WatchUseCase::new(&config, &compiler, ProcessRunner::new());
//! use_case.start(running, |event| { ... });
//! ```

mod dispatcher;
mod event;
mod state;
mod sweep;
mod use_case;


pub use dispatcher::{plan, CompilationDispatcher, CompileOutcome};
pub use event::WatchEvent;
pub use state::{ShaderAction, WatcherState, DEBOUNCE_MS, MAX_DEBOUNCE_WAIT_MS};
pub use sweep::{run_sweep, SweepSummary};
pub use use_case::WatchUseCase;
