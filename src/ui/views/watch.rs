use std::path::Path;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use shader_watch::config::ConfigWarning;
use shader_watch::{Compiler, WatchConfig, WatchEvent};

pub fn render_watch_header(
    config: &WatchConfig,
    compiler: &Compiler,
    config_source: Option<&Path>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Watch, "Shader Watch");
    header.add("Source", config.watch_root.display().to_string());
    header.add("Output", config.output_root.display().to_string());

    let compiler_line = match &compiler.version {
        Some(version) => format!("{} ({})", compiler.location, version),
        None => compiler.location.to_string(),
    };
    header.add("Compiler", compiler_line);

    let mut flags = Vec::new();
    if config.flags.debug {
        flags.push("debug".to_string());
    }
    if config.flags.optimize {
        flags.push("optimize".to_string());
    }
    if let Some(env) = &config.flags.target_env {
        flags.push(format!("target-env={}", env));
    }
    if !flags.is_empty() {
        header.add("Flags", flags.join(", "));
    }

    if let Some(path) = config_source {
        header.add("Config", path.display().to_string());
    }
    header.add("Hint", "Press Ctrl+C to stop");
    header.render(supports_color, supports_unicode)
}

/// Whether an event is worth a line at the given verbosity
pub fn is_visible(event: &WatchEvent, verbose: u8) -> bool {
    match event {
        WatchEvent::UpToDate { .. } => verbose > 0,
        // Already shown in the header
        WatchEvent::WatchStarted { .. } => false,
        _ => true,
    }
}

pub fn render_watch_event(
    timestamp: &str,
    event: &WatchEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let prefix = format!("[{}]", timestamp);
    let icon = |icon: Icon| icon.colored(supports_color, supports_unicode);

    match event {
        WatchEvent::WatchStarted { watch_root, .. } => {
            format!("{} {} Watching: {}\n", prefix, icon(Icon::Watch), watch_root)
        }
        WatchEvent::SweepStarted { found } => format!(
            "{} {} Checking {} shader{}...\n",
            prefix,
            icon(Icon::Progress),
            found,
            plural(*found)
        ),
        WatchEvent::NoShadersFound => {
            format!("{} {} No shaders found\n", prefix, icon(Icon::Warning))
        }
        WatchEvent::SweepComplete {
            found,
            compiled,
            failed,
            up_to_date,
        } => {
            if *failed > 0 {
                format!(
                    "{} {} Sweep: {} compiled, {} failed, {} up to date ({} found)\n",
                    prefix,
                    icon(Icon::Warning),
                    compiled,
                    failed,
                    up_to_date,
                    found
                )
            } else {
                format!(
                    "{} {} Sweep: {} compiled, {} up to date ({} found)\n",
                    prefix,
                    icon(Icon::Success),
                    compiled,
                    up_to_date,
                    found
                )
            }
        }
        WatchEvent::Watching => format!(
            "{} {} Watching for changes...\n",
            prefix,
            icon(Icon::Watch)
        ),
        WatchEvent::UpToDate { source } => format!(
            "{} {} {}\n",
            prefix,
            icon(Icon::Pending),
            ColoredText::dim(format!("Up to date: {}", source)).render(supports_color)
        ),
        WatchEvent::Compiled {
            source,
            artifact,
            output,
        } => {
            let mut out = format!(
                "{} {} Compiled: {} -> {}\n",
                prefix,
                icon(Icon::Success),
                source,
                artifact
            );
            if let Some(output) = output {
                push_detail_lines(&mut out, output.lines(), supports_color, supports_unicode);
            }
            out
        }
        WatchEvent::CompileFailed {
            source,
            exit_code,
            diagnostics,
        } => {
            let status = match exit_code {
                Some(code) => format!("exit code {}", code),
                None => "terminated".to_string(),
            };
            let mut out = format!(
                "{} {} {} {} ({})\n",
                prefix,
                icon(Icon::Error),
                ColoredText::error("Failed:").bold().render(supports_color),
                source,
                status
            );
            push_detail_lines(
                &mut out,
                diagnostics.iter().map(String::as_str),
                supports_color,
                supports_unicode,
            );
            out
        }
        WatchEvent::CompileTimedOut {
            source,
            timeout_secs,
        } => format!(
            "{} {} {} {} (no result after {}s)\n",
            prefix,
            icon(Icon::Timeout),
            ColoredText::error("Timed out:").bold().render(supports_color),
            source,
            timeout_secs
        ),
        WatchEvent::ArtifactRemoved { artifact, .. } => {
            format!("{} {} Removed: {}\n", prefix, icon(Icon::Trash), artifact)
        }
        WatchEvent::Warning { message } => format!(
            "{} {} Warning: {}\n",
            prefix,
            icon(Icon::Warning),
            message
        ),
        WatchEvent::Error { message } => format!(
            "{} {} Error: {}\n",
            prefix,
            icon(Icon::Error),
            message
        ),
        WatchEvent::Shutdown => format!(
            "\n{} {} Watch stopped.\n",
            prefix,
            icon(Icon::Watch)
        ),
    }
}

pub fn render_config_warnings(warnings: &[ConfigWarning], supports_color: bool) -> String {
    let mut out = String::new();
    for w in warnings {
        let location = match w.line {
            Some(line) => format!("{}:{}", w.file.display(), line),
            None => w.file.display().to_string(),
        };
        out.push_str(&format!(
            "{} Unknown config key '{}' in {}\n",
            ColoredText::warning("warning:").render(supports_color),
            w.key,
            location
        ));
        if let Some(suggestion) = &w.suggestion {
            out.push_str(&format!("   Did you mean '{}'?\n", suggestion));
        }
    }
    out
}

fn push_detail_lines<'a>(
    out: &mut String,
    lines: impl Iterator<Item = &'a str>,
    supports_color: bool,
    supports_unicode: bool,
) {
    let gutter = Icon::Gutter.colored(supports_color, supports_unicode);
    for line in lines {
        out.push_str(&format!("    {} {}\n", gutter, line));
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
