//! Debounce state for the watch loop

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Debounce duration in milliseconds
pub const DEBOUNCE_MS: u64 = 100;

/// Longest a pending action waits while events keep arriving
pub const MAX_DEBOUNCE_WAIT_MS: u64 = 1000;

/// What to do with one shader path once the burst settles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderAction {
    Compile,
    Remove,
}

/// Watcher state for debouncing
///
/// Keeps only the latest action per path, so a create/modify/delete burst
/// collapses to whatever the file system looks like at the end.
#[derive(Debug, Default)]
pub struct WatcherState {
    pending: HashMap<PathBuf, ShaderAction>,
    first_change: Option<Instant>,
    last_change: Option<Instant>,
}

impl WatcherState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an action, replacing any earlier one for the same path
    pub fn record(&mut self, path: PathBuf, action: ShaderAction) {
        let now = Instant::now();
        self.pending.insert(path, action);
        self.first_change.get_or_insert(now);
        self.last_change = Some(now);
    }

    /// Ready once events have paused for the debounce period, or once the
    /// oldest pending action has waited too long for a pause.
    pub fn is_ready(&self) -> bool {
        self.is_ready_after(
            Duration::from_millis(DEBOUNCE_MS),
            Duration::from_millis(MAX_DEBOUNCE_WAIT_MS),
        )
    }

    pub(crate) fn is_ready_after(&self, quiet: Duration, max_wait: Duration) -> bool {
        if self.pending.is_empty() {
            return false;
        }
        let settled = self.last_change.is_some_and(|last| last.elapsed() >= quiet);
        let overdue = self.first_change.is_some_and(|first| first.elapsed() >= max_wait);
        settled || overdue
    }

    /// Take all pending actions, sorted by path
    pub fn take(&mut self) -> Vec<(PathBuf, ShaderAction)> {
        let mut actions: Vec<_> = self.pending.drain().collect();
        actions.sort_by(|a, b| a.0.cmp(&b.0));
        self.first_change = None;
        self.last_change = None;
        actions
    }
}
