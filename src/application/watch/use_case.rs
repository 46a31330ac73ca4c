//! Watch Use Case implementation

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::config::WatchConfig;
use crate::domain::ports::CommandRunner;
use crate::domain::value_objects::Compiler;
use crate::error::ShaderWatchResult;
use crate::infrastructure::{MonitorPoll, ShaderMonitor};

use super::dispatcher::{plan, CompilationDispatcher};
use super::event::WatchEvent;
use super::state::WatcherState;
use super::sweep::run_sweep;

/// How long one poll of the monitor blocks; bounds Ctrl-C latency
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Watch Use Case
///
/// Orchestrates the startup sweep and continuous recompilation.
/// This is the main entry point behind the `shader-watch` binary.
pub struct WatchUseCase<'a, R> {
    dispatcher: CompilationDispatcher<'a, R>,
}

impl<'a, R: CommandRunner> WatchUseCase<'a, R> {
    pub fn new(config: &'a WatchConfig, compiler: &'a Compiler, runner: R) -> Self {
        Self {
            dispatcher: CompilationDispatcher::new(config, compiler, runner),
        }
    }

    /// Start watching (blocking)
    ///
    /// This method blocks until the running flag is set to false.
    /// Use the callback to receive events.
    pub fn start<F>(&self, running: Arc<AtomicBool>, on_event: F) -> ShaderWatchResult<()>
    where
        F: Fn(WatchEvent),
    {
        let config = self.dispatcher.config();
        let compiler = self.dispatcher.compiler();

        on_event(WatchEvent::WatchStarted {
            watch_root: config.watch_root.display().to_string(),
            output_root: config.output_root.display().to_string(),
            compiler: compiler.location.to_string(),
            version: compiler.version.clone(),
        });

        // Registered before the sweep so edits made during it are queued.
        let monitor = ShaderMonitor::start(&config.watch_root)?;

        if config.sweep {
            run_sweep(&self.dispatcher, &running, &on_event);
        }

        if running.load(Ordering::SeqCst) {
            on_event(WatchEvent::Watching);
        }

        let mut state = WatcherState::new();
        while running.load(Ordering::SeqCst) {
            match monitor.poll(POLL_INTERVAL) {
                MonitorPoll::Events(events) => {
                    for event in &events {
                        for (path, action) in plan(event) {
                            state.record(path, action);
                        }
                    }
                }
                MonitorPoll::Error(message) => on_event(WatchEvent::Error { message }),
                MonitorPoll::Idle => {}
                MonitorPoll::Closed => {
                    on_event(WatchEvent::Error {
                        message: "file system monitor stopped unexpectedly".to_string(),
                    });
                    break;
                }
            }

            if state.is_ready() {
                for (path, action) in state.take() {
                    self.dispatcher.apply(&path, action, &on_event);
                }
            }
        }

        on_event(WatchEvent::Shutdown);
        Ok(())
    }
}
