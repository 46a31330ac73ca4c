//! Compiler discovery
//!
//! Resolves the shader compiler once at startup: explicit override first,
//! then the known binary names on the search path, then the bare `glslc`
//! name as a last resort. The result is verified with `--version`.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::ports::CommandRunner;
use crate::domain::services::CompilerInvocation;
use crate::domain::value_objects::{Compiler, CompilerKind, CompilerLocation};
use crate::error::{ShaderWatchError, ShaderWatchResult};

/// Time allowed for the `--version` probe
pub const VERSION_PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Look `name` up in a `PATH`-style list of directories.
pub fn find_on_path(
    name: &str,
    search_path: Option<&OsStr>,
    is_file: impl Fn(&Path) -> bool,
) -> Option<PathBuf> {
    let search_path = search_path?;
    std::env::split_paths(search_path).find_map(|dir| {
        executable_names(name)
            .into_iter()
            .map(|candidate| dir.join(candidate))
            .find(|candidate| is_file(candidate))
    })
}

fn executable_names(name: &str) -> Vec<String> {
    if cfg!(windows) && Path::new(name).extension().is_none() {
        vec![format!("{name}.exe"), name.to_string()]
    } else {
        vec![name.to_string()]
    }
}

/// Decide where the compiler lives without running it.
pub fn resolve_location(
    explicit: Option<&str>,
    search_path: Option<&OsStr>,
    is_file: impl Fn(&Path) -> bool,
) -> CompilerLocation {
    if let Some(explicit) = explicit {
        let path = Path::new(explicit);
        // Anything with a directory component is taken as a path as-is.
        if path.is_absolute() || path.components().count() > 1 {
            return CompilerLocation::Resolved(path.to_path_buf());
        }
        return find_on_path(explicit, search_path, &is_file)
            .map(CompilerLocation::Resolved)
            .unwrap_or_else(|| CompilerLocation::Unqualified(explicit.to_string()));
    }

    CompilerKind::KNOWN
        .iter()
        .find_map(|kind| find_on_path(kind.binary_name(), search_path, &is_file))
        .map(CompilerLocation::Resolved)
        .unwrap_or_else(|| {
            CompilerLocation::Unqualified(CompilerKind::Glslc.binary_name().to_string())
        })
}

/// Verify a location by running `<compiler> --version`.
///
/// A compiler that starts but exits non-zero is still usable; its version is
/// left unknown. Failing to start or hanging is fatal.
pub fn probe_compiler(
    location: CompilerLocation,
    runner: &impl CommandRunner,
) -> ShaderWatchResult<Compiler> {
    let compiler = Compiler::new(location);
    let invocation = CompilerInvocation {
        program: compiler.location.program().to_path_buf(),
        args: vec!["--version".into()],
        working_dir: std::env::current_dir()?,
        timeout: VERSION_PROBE_TIMEOUT,
    };

    let output = runner.run(&invocation).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ShaderWatchError::CompilerNotFound {
            tried: vec![compiler.location.program().display().to_string()],
        },
        _ => ShaderWatchError::CompilerUnusable {
            compiler: compiler.location.to_string(),
            message: e.to_string(),
        },
    })?;

    if output.timed_out {
        return Err(ShaderWatchError::CompilerUnusable {
            compiler: compiler.location.to_string(),
            message: format!(
                "version query timed out after {}s",
                VERSION_PROBE_TIMEOUT.as_secs()
            ),
        });
    }

    if !output.is_success() {
        return Ok(compiler);
    }

    let version = output
        .stdout
        .lines()
        .chain(output.stderr.lines())
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default()
        .to_string();
    Ok(compiler.with_version(version))
}

/// Resolve and verify the compiler against the real environment.
pub fn detect_compiler(
    explicit: Option<&str>,
    runner: &impl CommandRunner,
) -> ShaderWatchResult<Compiler> {
    let search_path = std::env::var_os("PATH");
    let location = resolve_location(explicit, search_path.as_deref(), Path::is_file);
    let unqualified_default = explicit.is_none() && !location.is_resolved();

    probe_compiler(location, runner).map_err(|e| match e {
        ShaderWatchError::CompilerNotFound { .. } if unqualified_default => {
            ShaderWatchError::CompilerNotFound {
                tried: CompilerKind::KNOWN
                    .iter()
                    .map(|k| k.binary_name().to_string())
                    .collect(),
            }
        }
        other => other,
    })
}
