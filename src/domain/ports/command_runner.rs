//! CommandRunner port - abstraction over subprocess execution
//!
//! The dispatcher never spawns processes directly, so tests can record
//! invocations and script outcomes without a real compiler.

use crate::domain::services::CompilerInvocation;

/// Captured outcome of one subprocess run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code; `None` when killed by a signal or by the timeout
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
    /// The timeout elapsed and the process was killed
    pub timed_out: bool,
}

impl CommandOutput {
    /// Successful run with the given stdout
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            exit_code: Some(0),
            stdout: stdout.into(),
            ..Self::default()
        }
    }

    /// Failed run with the given exit code and stderr
    pub fn failure(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self {
            exit_code: Some(exit_code),
            stderr: stderr.into(),
            ..Self::default()
        }
    }

    /// Run killed after exceeding its timeout
    pub fn timeout() -> Self {
        Self {
            timed_out: true,
            ..Self::default()
        }
    }

    pub fn is_success(&self) -> bool {
        !self.timed_out && self.exit_code == Some(0)
    }

    /// stderr followed by stdout, trimmed
    pub fn combined_output(&self) -> String {
        let mut combined = String::new();
        combined.push_str(&self.stderr);
        if !self.stderr.is_empty() && !self.stderr.ends_with('\n') && !self.stdout.is_empty() {
            combined.push('\n');
        }
        combined.push_str(&self.stdout);
        combined.trim().to_string()
    }
}

/// Runs a compiler invocation to completion or timeout.
///
/// `Err` is reserved for failures to run at all (missing binary, permission
/// denied); a non-zero exit or timeout is a successful `CommandOutput`.
pub trait CommandRunner {
    fn run(&self, invocation: &CompilerInvocation) -> std::io::Result<CommandOutput>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, invocation: &CompilerInvocation) -> std::io::Result<CommandOutput> {
        (**self).run(invocation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_runner_trait_is_object_safe() {
        fn _assert_object_safe(_: &dyn CommandRunner) {}
    }

    #[test]
    fn combined_output_puts_stderr_first() {
        let output = CommandOutput {
            exit_code: Some(1),
            stdout: "1 error generated.".to_string(),
            stderr: "lit.frag:3: error: 'x' : undeclared identifier".to_string(),
            timed_out: false,
        };
        assert_eq!(
            output.combined_output(),
            "lit.frag:3: error: 'x' : undeclared identifier\n1 error generated."
        );
    }

    #[test]
    fn timeout_is_never_success() {
        let mut output = CommandOutput::timeout();
        output.exit_code = Some(0);
        assert!(!output.is_success());
    }
}
