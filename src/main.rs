//! shader-watch CLI - recompile GLSL shaders to SPIR-V as they change
//!
//! Usage: shader-watch [WATCH_DIR] [OPTIONS]

use clap::Parser;

use shader_watch::presentation::Cli;

mod commands;
mod ui;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = commands::watch::cmd_watch(&cli) {
        ui::error::print_error(&err, cli.json);
        std::process::exit(1);
    }
}
