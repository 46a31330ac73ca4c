//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (value objects, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `WatchUseCase` - Startup sweep plus continuous recompilation

pub mod watch;

pub use watch::{
    run_sweep, CompilationDispatcher, CompileOutcome, ShaderAction, SweepSummary, WatchEvent,
    WatchUseCase, WatcherState, DEBOUNCE_MS, MAX_DEBOUNCE_WAIT_MS,
};
