//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//! Every flag is optional; unset flags fall back to environment, config
//! files and defaults, in that order.

use std::path::PathBuf;

use clap::Parser;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// shader-watch - recompile GLSL shaders to SPIR-V as they change
#[derive(Parser, Debug)]
#[command(name = "shader-watch")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Press Ctrl+C to stop watching.")]
pub struct Cli {
    /// Directory to watch [default: ./shaders next to the executable, else the current directory]
    #[arg(value_name = "WATCH_DIR")]
    pub watch_dir: Option<PathBuf>,

    /// Directory for compiled artifacts [default: alongside the sources]
    #[arg(short, long, value_name = "OUTPUT_DIR")]
    pub output: Option<PathBuf>,

    /// Include debug information in compiled shaders
    #[arg(short = 'g', long)]
    pub debug: bool,

    /// Optimize compiled shaders for performance
    #[arg(short = 'O', long)]
    pub optimize: bool,

    /// Shader compiler executable (glslc or glslangValidator)
    #[arg(long, value_name = "PATH")]
    pub compiler: Option<String>,

    /// Target environment, e.g. vulkan1.3
    #[arg(long, value_name = "ENV")]
    pub target_env: Option<String>,

    /// Seconds before a compiler run is killed
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Extension appended to compiled artifacts
    #[arg(long, value_name = "EXT")]
    pub extension: Option<String>,

    /// Skip the startup sweep over existing shaders
    #[arg(long)]
    pub no_sweep: bool,

    /// Output format for CI
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v shows up-to-date shaders)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
