//! Compilation dispatcher
//!
//! Turns one shader path into at most one compiler run (or one artifact
//! removal) and reports the result as a [`WatchEvent`]. Every failure is
//! contained here: nothing returned from this module is an `Err`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::WatchConfig;
use crate::domain::ports::CommandRunner;
use crate::domain::services::{is_stale, CompilerInvocation};
use crate::domain::value_objects::{is_shader_source, Compiler, FsEvent, ShaderPath};

use super::event::WatchEvent;
use super::state::ShaderAction;

/// How a single compile request ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileOutcome {
    UpToDate,
    Compiled,
    Failed,
    TimedOut,
    /// Path, IO or spawn problem
    Errored,
    /// Source disappeared before it could be compiled
    Vanished,
}

impl CompileOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            CompileOutcome::Failed | CompileOutcome::TimedOut | CompileOutcome::Errored
        )
    }
}

/// Drives the compiler for paths under one watch root
pub struct CompilationDispatcher<'a, R> {
    config: &'a WatchConfig,
    compiler: &'a Compiler,
    runner: R,
}

impl<'a, R: CommandRunner> CompilationDispatcher<'a, R> {
    pub fn new(config: &'a WatchConfig, compiler: &'a Compiler, runner: R) -> Self {
        Self {
            config,
            compiler,
            runner,
        }
    }

    pub fn config(&self) -> &'a WatchConfig {
        self.config
    }

    pub fn compiler(&self) -> &'a Compiler {
        self.compiler
    }

    /// Compile `source` if its artifact is missing or stale.
    pub fn compile(&self, source: &Path, on_event: &impl Fn(WatchEvent)) -> CompileOutcome {
        let shader = match self.resolve(source) {
            Ok(shader) => shader,
            Err(message) => {
                on_event(WatchEvent::Error { message });
                return CompileOutcome::Errored;
            }
        };

        let source_path = shader.source_in(&self.config.watch_root);
        if !source_path.is_file() {
            return CompileOutcome::Vanished;
        }

        let artifact = shader.artifact_in(&self.config.output_root, &self.config.artifact_extension);
        if !is_stale(&source_path, &artifact) {
            on_event(WatchEvent::UpToDate {
                source: shader.to_string(),
            });
            return CompileOutcome::UpToDate;
        }

        if let Some(parent) = artifact.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                on_event(WatchEvent::Error {
                    message: format!("cannot create {}: {}", parent.display(), e),
                });
                return CompileOutcome::Errored;
            }
        }

        let output_arg = self.output_arg(&artifact);
        let invocation = CompilerInvocation::build(
            self.compiler,
            shader.relative(),
            &output_arg,
            &self.config.flags,
            &self.config.watch_root,
            self.config.timeout,
        );

        let output = match self.runner.run(&invocation) {
            Ok(output) => output,
            Err(e) => {
                on_event(WatchEvent::Error {
                    message: format!(
                        "failed to run {} for {}: {}",
                        self.compiler.location, shader, e
                    ),
                });
                return CompileOutcome::Errored;
            }
        };

        if output.timed_out {
            on_event(WatchEvent::CompileTimedOut {
                source: shader.to_string(),
                timeout_secs: self.config.timeout.as_secs(),
            });
            self.discard_artifact(&artifact, on_event);
            CompileOutcome::TimedOut
        } else if output.is_success() {
            let stdout = output.stdout.trim();
            on_event(WatchEvent::Compiled {
                source: shader.to_string(),
                artifact: output_arg.display().to_string(),
                output: (!stdout.is_empty()).then(|| stdout.to_string()),
            });
            CompileOutcome::Compiled
        } else {
            on_event(WatchEvent::CompileFailed {
                source: shader.to_string(),
                exit_code: output.exit_code,
                diagnostics: output
                    .combined_output()
                    .lines()
                    .map(str::to_string)
                    .collect(),
            });
            self.discard_artifact(&artifact, on_event);
            CompileOutcome::Failed
        }
    }

    /// Drop whatever a failed or killed compiler left at `artifact`.
    ///
    /// A partial file would be newer than its source and pass as up to date.
    fn discard_artifact(&self, artifact: &Path, on_event: &impl Fn(WatchEvent)) {
        match fs::remove_file(artifact) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => on_event(WatchEvent::Error {
                message: format!("cannot remove partial {}: {}", artifact.display(), e),
            }),
        }
    }

    /// Delete the artifact derived from `source`, if there is one.
    ///
    /// Returns true when a file was removed.
    pub fn remove_artifact(&self, source: &Path, on_event: &impl Fn(WatchEvent)) -> bool {
        let shader = match self.resolve(source) {
            Ok(shader) => shader,
            Err(message) => {
                on_event(WatchEvent::Error { message });
                return false;
            }
        };

        let artifact = shader.artifact_in(&self.config.output_root, &self.config.artifact_extension);
        match fs::remove_file(&artifact) {
            Ok(()) => {
                on_event(WatchEvent::ArtifactRemoved {
                    source: shader.to_string(),
                    artifact: self.output_arg(&artifact).display().to_string(),
                });
                true
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => false,
            Err(e) => {
                on_event(WatchEvent::Error {
                    message: format!("cannot remove {}: {}", artifact.display(), e),
                });
                false
            }
        }
    }

    /// Handle one file system event immediately.
    pub fn dispatch(&self, event: &FsEvent, on_event: &impl Fn(WatchEvent)) {
        for (path, action) in plan(event) {
            self.apply(&path, action, on_event);
        }
    }

    pub fn apply(&self, path: &Path, action: ShaderAction, on_event: &impl Fn(WatchEvent)) {
        match action {
            ShaderAction::Compile => {
                self.compile(path, on_event);
            }
            ShaderAction::Remove => {
                self.remove_artifact(path, on_event);
            }
        }
    }

    /// Map an event path onto a shader path under the watch root.
    ///
    /// Event paths may not be canonical (symlinked temp dirs); deleted files
    /// can only be canonicalized through their parent.
    fn resolve(&self, path: &Path) -> Result<ShaderPath, String> {
        let root = &self.config.watch_root;
        if let Ok(shader) = ShaderPath::within_root(path, root) {
            return Ok(shader);
        }

        let canonical = path.canonicalize().ok().or_else(|| {
            let parent = path.parent()?.canonicalize().ok()?;
            Some(parent.join(path.file_name()?))
        });

        canonical
            .ok_or_else(|| format!("cannot resolve {}", path.display()))
            .and_then(|p| ShaderPath::within_root(p, root).map_err(|e| e.to_string()))
    }

    /// Artifact path as passed to the compiler (cwd = watch root)
    fn output_arg(&self, artifact: &Path) -> PathBuf {
        artifact
            .strip_prefix(&self.config.watch_root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| artifact.to_path_buf())
    }
}

/// Decompose an event into per-path actions, dropping non-shader paths.
///
/// A move is a removal at the old location plus a compile at the new one,
/// each side filtered on its own.
pub fn plan(event: &FsEvent) -> Vec<(PathBuf, ShaderAction)> {
    let actions = match event {
        FsEvent::Created(path) | FsEvent::Modified(path) => {
            vec![(path.clone(), ShaderAction::Compile)]
        }
        FsEvent::Deleted(path) => vec![(path.clone(), ShaderAction::Remove)],
        FsEvent::Moved { from, to } => vec![
            (from.clone(), ShaderAction::Remove),
            (to.clone(), ShaderAction::Compile),
        ],
    };

    actions
        .into_iter()
        .filter(|(path, _)| is_shader_source(path))
        .collect()
}
