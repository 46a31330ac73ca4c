//! Watch event types

/// Watch event types for NDJSON output
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    /// Watch started
    WatchStarted {
        watch_root: String,
        output_root: String,
        compiler: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        version: Option<String>,
    },
    /// Startup sweep found sources to check
    SweepStarted { found: usize },
    /// Startup sweep found nothing to compile
    NoShadersFound,
    /// Startup sweep finished
    SweepComplete {
        found: usize,
        compiled: usize,
        failed: usize,
        up_to_date: usize,
    },
    /// Live monitoring began
    Watching,
    /// Artifact already newer than its source
    UpToDate { source: String },
    /// Compiler exited 0
    Compiled {
        source: String,
        artifact: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        output: Option<String>,
    },
    /// Compiler exited non-zero
    CompileFailed {
        source: String,
        exit_code: Option<i32>,
        diagnostics: Vec<String>,
    },
    /// Compiler was killed after the timeout
    CompileTimedOut { source: String, timeout_secs: u64 },
    /// Artifact deleted after its source went away
    ArtifactRemoved { source: String, artifact: String },
    /// Non-fatal notice
    Warning { message: String },
    /// Error occurred
    Error { message: String },
    /// Watch stopped
    Shutdown,
}

impl WatchEvent {
    /// Convert to JSON string with "command": "watch" field included
    pub fn to_json(&self) -> String {
        let mut value =
            serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({"event": "error"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert("command".to_string(), serde_json::json!("watch"));
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Failures and errors belong on stderr
    pub fn is_problem(&self) -> bool {
        matches!(
            self,
            WatchEvent::CompileFailed { .. }
                | WatchEvent::CompileTimedOut { .. }
                | WatchEvent::Error { .. }
        )
    }
}
