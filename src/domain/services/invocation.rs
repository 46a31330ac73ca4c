//! Compiler invocation construction
//!
//! Builds the deterministic argument list for one source -> artifact compile.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::value_objects::{Compiler, CompilerKind};

/// Feature flags forwarded to the compiler
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationFlags {
    pub debug: bool,
    pub optimize: bool,
    /// Target environment, e.g. `vulkan1.3`
    pub target_env: Option<String>,
}

/// One fully-specified compiler run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerInvocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    pub working_dir: PathBuf,
    pub timeout: Duration,
}

impl CompilerInvocation {
    /// Build the invocation for `source` -> `output`.
    ///
    /// Paths are passed through verbatim; callers decide whether they are
    /// relative to `working_dir`.
    pub fn build(
        compiler: &Compiler,
        source: &Path,
        output: &Path,
        flags: &InvocationFlags,
        working_dir: &Path,
        timeout: Duration,
    ) -> Self {
        let kind = compiler.kind;
        let mut args: Vec<OsString> = Vec::new();

        if kind == CompilerKind::GlslangValidator {
            // Emit SPIR-V instead of only validating.
            args.push("-V".into());
        }
        args.push(source.as_os_str().to_owned());
        args.push("-o".into());
        args.push(output.as_os_str().to_owned());

        if let Some(env) = &flags.target_env {
            match kind {
                CompilerKind::Glslc => args.push(format!("--target-env={}", env).into()),
                CompilerKind::GlslangValidator => {
                    args.push("--target-env".into());
                    args.push(env.into());
                }
            }
        }
        if flags.debug {
            args.push(kind.debug_flag().into());
        }
        if flags.optimize {
            if let Some(flag) = kind.optimize_flag() {
                args.push(flag.into());
            }
        }

        Self {
            program: compiler.location.program().to_path_buf(),
            args,
            working_dir: working_dir.to_path_buf(),
            timeout,
        }
    }

    /// Program followed by its arguments, lossily converted for display
    pub fn argv(&self) -> Vec<String> {
        std::iter::once(self.program.as_os_str())
            .chain(self.args.iter().map(OsString::as_os_str))
            .map(|s| s.to_string_lossy().into_owned())
            .collect()
    }
}
