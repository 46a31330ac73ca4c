//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::application::WatchUseCase;
use crate::config::{Settings, WatchConfig};
use crate::domain::value_objects::Compiler;
use crate::error::ShaderWatchResult;
use crate::infrastructure::{self, ProcessRunner};

use super::cli::Cli;

/// Type alias for the watch use case backed by real subprocesses
pub type ConcreteWatchUseCase<'a> = WatchUseCase<'a, ProcessRunner>;

/// Create a watch use case with all dependencies wired up
pub fn create_watch_use_case<'a>(
    config: &'a WatchConfig,
    compiler: &'a Compiler,
) -> ConcreteWatchUseCase<'a> {
    WatchUseCase::new(config, compiler, ProcessRunner::new())
}

/// Locate and verify the compiler using real processes
pub fn detect_compiler(explicit: Option<&str>) -> ShaderWatchResult<Compiler> {
    infrastructure::detect_compiler(explicit, &ProcessRunner::new())
}

/// Layer CLI flags over loaded settings.
///
/// A relative `--output` is taken from `cwd`, unlike `output.dir` in a config
/// file, which is relative to the watch root.
pub fn build_watch_config(
    cli: &Cli,
    watch_root: PathBuf,
    settings: &Settings,
    cwd: &Path,
) -> WatchConfig {
    let mut settings = settings.clone();
    if let Some(compiler) = &cli.compiler {
        // Compiles run from the watch root, so a relative path must be pinned now.
        let path = Path::new(compiler);
        let compiler = if path.is_relative() && path.components().count() > 1 {
            cwd.join(path).display().to_string()
        } else {
            compiler.clone()
        };
        settings.compiler.path = Some(compiler);
    }
    if let Some(env) = &cli.target_env {
        settings.compiler.target_env = Some(env.clone());
    }
    if let Some(ext) = &cli.extension {
        settings.output.extension = ext.clone();
    }
    settings.compiler.debug |= cli.debug;
    settings.compiler.optimize |= cli.optimize;

    let mut config = WatchConfig::from_settings(watch_root, &settings).with_sweep(!cli.no_sweep);
    if let Some(output) = &cli.output {
        config = config.with_output_root(cwd.join(output));
    }
    if let Some(secs) = cli.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    config
}

/// Non-fatal problems with the resolved setup, reported once at startup
pub fn startup_warnings(config: &WatchConfig, compiler: &Compiler) -> Vec<String> {
    let mut warnings = Vec::new();
    if config.flags.optimize && compiler.kind.optimize_flag().is_none() {
        warnings.push(format!(
            "{} has no optimization flag; --optimize is ignored",
            compiler.kind
        ));
    }
    if compiler.version.is_none() {
        warnings.push(format!(
            "{} did not report a version; continuing anyway",
            compiler.location
        ));
    }
    warnings
}
