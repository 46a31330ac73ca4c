//! Compiler identity: which executable runs and which argument dialect it speaks

use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};

/// Argument dialect of the external shader compiler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompilerKind {
    /// `glslc` from shaderc
    Glslc,
    /// `glslangValidator` from the Khronos reference front-end
    GlslangValidator,
}

impl CompilerKind {
    /// Binary names probed at startup, in preference order.
    pub const KNOWN: [CompilerKind; 2] = [CompilerKind::Glslc, CompilerKind::GlslangValidator];

    /// Unqualified binary name
    pub fn binary_name(&self) -> &'static str {
        match self {
            CompilerKind::Glslc => "glslc",
            CompilerKind::GlslangValidator => "glslangValidator",
        }
    }

    /// Infer the dialect from an executable path or name.
    ///
    /// Anything that does not look like glslangValidator is driven with the
    /// glslc argument shape.
    pub fn infer(program: &Path) -> Self {
        let stem = program
            .file_stem()
            .and_then(OsStr::to_str)
            .unwrap_or_default()
            .to_ascii_lowercase();
        if stem.starts_with("glslangvalidator") || stem == "glslang" {
            CompilerKind::GlslangValidator
        } else {
            CompilerKind::Glslc
        }
    }

    /// Flag requesting debug symbols
    pub fn debug_flag(&self) -> &'static str {
        match self {
            CompilerKind::Glslc => "-g",
            CompilerKind::GlslangValidator => "-gVS",
        }
    }

    /// Flag requesting performance optimization, if the dialect has one
    pub fn optimize_flag(&self) -> Option<&'static str> {
        match self {
            CompilerKind::Glslc => Some("-O"),
            CompilerKind::GlslangValidator => None,
        }
    }
}

impl fmt::Display for CompilerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.binary_name())
    }
}

/// Where the compiler executable lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompilerLocation {
    /// Verified file on the search path (or given explicitly)
    Resolved(PathBuf),
    /// Bare name handed to the OS for its own lookup
    Unqualified(String),
}

impl CompilerLocation {
    /// Program to pass to `Command::new`
    pub fn program(&self) -> &Path {
        match self {
            CompilerLocation::Resolved(path) => path,
            CompilerLocation::Unqualified(name) => Path::new(name),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, CompilerLocation::Resolved(_))
    }
}

impl fmt::Display for CompilerLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompilerLocation::Resolved(path) => write!(f, "{}", path.display()),
            CompilerLocation::Unqualified(name) => write!(f, "{} (via PATH)", name),
        }
    }
}

/// Compiler resolved once at startup and shared read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compiler {
    pub location: CompilerLocation,
    pub kind: CompilerKind,
    /// First line of the `--version` output, when probed
    pub version: Option<String>,
}

impl Compiler {
    pub fn new(location: CompilerLocation) -> Self {
        let kind = CompilerKind::infer(location.program());
        Self {
            location,
            kind,
            version: None,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        let version = version.into();
        self.version = if version.trim().is_empty() {
            None
        } else {
            Some(version)
        };
        self
    }
}
