//! Domain Services
//!
//! Stateless decision logic shared by the sweep and the live watcher.

mod invocation;
mod staleness;

pub use invocation::{CompilerInvocation, InvocationFlags};
pub use staleness::{is_stale, is_stale_at};
