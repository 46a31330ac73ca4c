//! Recursive file system monitor
//!
//! Wraps a `notify` watcher behind a channel and translates its raw events
//! into [`FsEvent`]s. Directory events are dropped here so nothing downstream
//! ever sees them.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};
use std::time::Duration;

use notify::event::{CreateKind, ModifyKind, RemoveKind, RenameMode};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::domain::value_objects::FsEvent;
use crate::error::{ShaderWatchError, ShaderWatchResult};

/// Result of one [`ShaderMonitor::poll`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonitorPoll {
    Events(Vec<FsEvent>),
    /// The backend reported a problem; monitoring continues
    Error(String),
    /// Nothing arrived within the timeout
    Idle,
    /// The backend went away
    Closed,
}

/// Live, recursive monitor of one directory.
///
/// Events are queued from the moment [`ShaderMonitor::start`] returns, so
/// changes made while the caller is busy are not lost.
pub struct ShaderMonitor {
    // Dropping the watcher stops monitoring.
    _watcher: RecommendedWatcher,
    rx: Receiver<Result<Event, notify::Error>>,
}

impl ShaderMonitor {
    pub fn start(root: &Path) -> ShaderWatchResult<Self> {
        let (tx, rx) = channel();

        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                let _ = tx.send(res);
            },
            Config::default(),
        )
        .map_err(|e| watch_error(root, e))?;

        watcher
            .watch(root, RecursiveMode::Recursive)
            .map_err(|e| watch_error(root, e))?;

        Ok(Self {
            _watcher: watcher,
            rx,
        })
    }

    /// Wait up to `timeout` for the next backend event.
    pub fn poll(&self, timeout: Duration) -> MonitorPoll {
        match self.rx.recv_timeout(timeout) {
            Ok(Ok(event)) => MonitorPoll::Events(translate_event(&event, |p| p.is_dir())),
            Ok(Err(e)) => MonitorPoll::Error(e.to_string()),
            Err(RecvTimeoutError::Timeout) => MonitorPoll::Idle,
            Err(RecvTimeoutError::Disconnected) => MonitorPoll::Closed,
        }
    }
}

fn watch_error(root: &Path, e: notify::Error) -> ShaderWatchError {
    ShaderWatchError::Watch {
        path: root.to_path_buf(),
        message: e.to_string(),
    }
}

/// Map one backend event onto zero or more [`FsEvent`]s.
///
/// `is_dir` is consulted for paths that still exist; deleted paths cannot be
/// checked and are forwarded unless the backend itself tagged them as folders.
pub fn translate_event(event: &Event, is_dir: impl Fn(&Path) -> bool) -> Vec<FsEvent> {
    let files = |paths: &[PathBuf]| -> Vec<PathBuf> {
        paths.iter().filter(|p| !is_dir(p.as_path())).cloned().collect()
    };

    match &event.kind {
        EventKind::Create(CreateKind::Folder) => Vec::new(),
        EventKind::Create(_) => files(&event.paths)
            .into_iter()
            .map(FsEvent::Created)
            .collect(),

        EventKind::Modify(ModifyKind::Name(mode)) => translate_rename(*mode, &event.paths, &is_dir),
        EventKind::Modify(_) => files(&event.paths)
            .into_iter()
            .map(FsEvent::Modified)
            .collect(),

        EventKind::Remove(RemoveKind::Folder) => Vec::new(),
        EventKind::Remove(_) => event.paths.iter().cloned().map(FsEvent::Deleted).collect(),

        EventKind::Access(_) | EventKind::Any | EventKind::Other => Vec::new(),
    }
}

fn translate_rename(
    mode: RenameMode,
    paths: &[PathBuf],
    is_dir: &impl Fn(&Path) -> bool,
) -> Vec<FsEvent> {
    match (mode, paths) {
        (RenameMode::Both, [from, to]) => {
            if is_dir(to.as_path()) {
                Vec::new()
            } else {
                vec![FsEvent::Moved {
                    from: from.clone(),
                    to: to.clone(),
                }]
            }
        }
        (RenameMode::From, _) => paths.iter().cloned().map(FsEvent::Deleted).collect(),
        (RenameMode::To, _) => paths
            .iter()
            .filter(|p| !is_dir(p.as_path()))
            .cloned()
            .map(FsEvent::Created)
            .collect(),
        // Backend could not say which side this is; the file system can.
        _ => paths
            .iter()
            .filter_map(|p| {
                if !p.exists() {
                    Some(FsEvent::Deleted(p.clone()))
                } else if is_dir(p.as_path()) {
                    None
                } else {
                    Some(FsEvent::Created(p.clone()))
                }
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{AccessKind, DataChange};
    use std::time::Instant;
    use tempfile::tempdir;

    fn event(kind: EventKind, paths: &[&str]) -> Event {
        let mut event = Event::new(kind);
        for path in paths {
            event = event.add_path(PathBuf::from(path));
        }
        event
    }

    fn no_dirs(_: &Path) -> bool {
        false
    }

    #[test]
    fn create_becomes_created() {
        let events = translate_event(
            &event(EventKind::Create(CreateKind::File), &["/s/a.frag"]),
            no_dirs,
        );
        assert_eq!(events, vec![FsEvent::Created(PathBuf::from("/s/a.frag"))]);
    }

    #[test]
    fn data_change_becomes_modified() {
        let events = translate_event(
            &event(
                EventKind::Modify(ModifyKind::Data(DataChange::Content)),
                &["/s/a.vert"],
            ),
            no_dirs,
        );
        assert_eq!(events, vec![FsEvent::Modified(PathBuf::from("/s/a.vert"))]);
    }

    #[test]
    fn remove_becomes_deleted() {
        let events = translate_event(
            &event(EventKind::Remove(RemoveKind::File), &["/s/a.comp"]),
            no_dirs,
        );
        assert_eq!(events, vec![FsEvent::Deleted(PathBuf::from("/s/a.comp"))]);
    }

    #[test]
    fn paired_rename_becomes_moved() {
        let events = translate_event(
            &event(
                EventKind::Modify(ModifyKind::Name(RenameMode::Both)),
                &["/s/old.frag", "/s/new.frag"],
            ),
            no_dirs,
        );
        assert_eq!(
            events,
            vec![FsEvent::Moved {
                from: PathBuf::from("/s/old.frag"),
                to: PathBuf::from("/s/new.frag"),
            }]
        );
    }

    #[test]
    fn rename_halves_become_delete_and_create() {
        let from = translate_event(
            &event(
                EventKind::Modify(ModifyKind::Name(RenameMode::From)),
                &["/s/old.frag"],
            ),
            no_dirs,
        );
        let to = translate_event(
            &event(
                EventKind::Modify(ModifyKind::Name(RenameMode::To)),
                &["/s/new.frag"],
            ),
            no_dirs,
        );
        assert_eq!(from, vec![FsEvent::Deleted(PathBuf::from("/s/old.frag"))]);
        assert_eq!(to, vec![FsEvent::Created(PathBuf::from("/s/new.frag"))]);
    }

    #[test]
    fn ambiguous_rename_of_missing_path_is_deleted() {
        let events = translate_event(
            &event(
                EventKind::Modify(ModifyKind::Name(RenameMode::Any)),
                &["/definitely/not/here.frag"],
            ),
            no_dirs,
        );
        assert_eq!(
            events,
            vec![FsEvent::Deleted(PathBuf::from("/definitely/not/here.frag"))]
        );
    }

    #[test]
    fn directories_are_dropped() {
        let is_dir = |p: &Path| p.extension().is_none();
        assert!(translate_event(
            &event(EventKind::Create(CreateKind::Folder), &["/s/sub"]),
            is_dir
        )
        .is_empty());
        assert!(translate_event(
            &event(EventKind::Create(CreateKind::Any), &["/s/sub"]),
            is_dir
        )
        .is_empty());
        assert!(translate_event(
            &event(
                EventKind::Modify(ModifyKind::Name(RenameMode::Both)),
                &["/s/a", "/s/b"]
            ),
            is_dir
        )
        .is_empty());
    }

    #[test]
    fn access_events_are_ignored() {
        let events = translate_event(
            &event(EventKind::Access(AccessKind::Any), &["/s/a.frag"]),
            no_dirs,
        );
        assert!(events.is_empty());
    }

    #[test]
    fn start_fails_for_missing_root() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing");
        assert!(matches!(
            ShaderMonitor::start(&missing),
            Err(ShaderWatchError::Watch { .. })
        ));
    }

    #[test]
    fn reports_new_file() {
        let dir = tempdir().unwrap();
        let root = dir.path().canonicalize().unwrap();
        let monitor = ShaderMonitor::start(&root).unwrap();

        std::fs::write(root.join("fresh.frag"), "void main() {}").unwrap();

        let deadline = Instant::now() + Duration::from_secs(5);
        let mut seen = false;
        while Instant::now() < deadline && !seen {
            if let MonitorPoll::Events(events) = monitor.poll(Duration::from_millis(50)) {
                seen = events
                    .iter()
                    .any(|e| e.paths().iter().any(|p| p.ends_with("fresh.frag")));
            }
        }
        assert!(seen, "expected an event for fresh.frag");
    }
}
