//! Error types for shader-watch
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.
//! Only configuration errors ever leave the library: everything that happens
//! while compiling a single shader is reported as a watch event instead.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for shader-watch operations
pub type ShaderWatchResult<T> = Result<T, ShaderWatchError>;

/// Main error type for shader-watch operations
#[derive(Error, Debug)]
pub enum ShaderWatchError {
    /// Watch root does not exist
    #[error("directory '{}' does not exist", path.display())]
    WatchRootNotFound { path: PathBuf },

    /// Watch root exists but is a file
    #[error("'{}' is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    /// None of the known compiler binaries could be started
    #[error("no shader compiler found (tried: {}); install the Vulkan SDK or pass --compiler", tried.join(", "))]
    CompilerNotFound { tried: Vec<String> },

    /// Compiler was found but its version query failed
    #[error("shader compiler '{compiler}' is not responding: {message}")]
    CompilerUnusable { compiler: String, message: String },

    /// Malformed configuration file
    #[error("invalid config in {}: {message}", file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// File system monitor could not be set up
    #[error("failed to watch '{}': {message}", path.display())]
    Watch { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_watch_root_not_found() {
        let err = ShaderWatchError::WatchRootNotFound {
            path: PathBuf::from("assets/shaders"),
        };
        assert_eq!(err.to_string(), "directory 'assets/shaders' does not exist");
    }

    #[test]
    fn test_error_display_compiler_not_found() {
        let err = ShaderWatchError::CompilerNotFound {
            tried: vec!["glslc".to_string(), "glslangValidator".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "no shader compiler found (tried: glslc, glslangValidator); install the Vulkan SDK or pass --compiler"
        );
    }

    #[test]
    fn test_error_display_invalid_config() {
        let err = ShaderWatchError::InvalidConfig {
            file: PathBuf::from("shader-watch.toml"),
            message: "expected a boolean".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid config in shader-watch.toml: expected a boolean"
        );
    }
}
