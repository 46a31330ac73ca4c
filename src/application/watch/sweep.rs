//! Startup sweep
//!
//! Reconciles everything that changed while the service was not running.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::domain::ports::CommandRunner;
use crate::infrastructure::find_shader_sources;

use super::dispatcher::{CompilationDispatcher, CompileOutcome};
use super::event::WatchEvent;

/// Tally of one sweep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepSummary {
    pub found: usize,
    pub compiled: usize,
    pub failed: usize,
    pub up_to_date: usize,
}

impl SweepSummary {
    fn record(&mut self, outcome: CompileOutcome) {
        match outcome {
            CompileOutcome::Compiled => self.compiled += 1,
            CompileOutcome::UpToDate => self.up_to_date += 1,
            CompileOutcome::Vanished => {}
            o if o.is_failure() => self.failed += 1,
            _ => {}
        }
    }
}

/// Compile every stale source under the watch root, one at a time.
///
/// Stops early (without a summary) once `running` is cleared.
pub fn run_sweep<R: CommandRunner>(
    dispatcher: &CompilationDispatcher<'_, R>,
    running: &AtomicBool,
    on_event: &impl Fn(WatchEvent),
) -> SweepSummary {
    let sources = find_shader_sources(&dispatcher.config().watch_root);
    let mut summary = SweepSummary {
        found: sources.len(),
        ..SweepSummary::default()
    };

    if sources.is_empty() {
        on_event(WatchEvent::NoShadersFound);
    } else {
        on_event(WatchEvent::SweepStarted {
            found: sources.len(),
        });
    }

    for source in &sources {
        if !running.load(Ordering::SeqCst) {
            return summary;
        }
        summary.record(dispatcher.compile(source, on_event));
    }

    on_event(WatchEvent::SweepComplete {
        found: summary.found,
        compiled: summary.compiled,
        failed: summary.failed,
        up_to_date: summary.up_to_date,
    });
    summary
}
