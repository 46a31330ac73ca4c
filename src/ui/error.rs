use shader_watch::ShaderWatchError;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn format_error(err: &anyhow::Error) -> String {
    let caps = crate::ui::terminal::detect_capabilities();
    format_error_with(err, caps.supports_color, caps.supports_unicode)
}

fn format_error_with(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error("Error:").bold().render(supports_color),
        err
    );
    if let Some(hint) = err.downcast_ref::<ShaderWatchError>().and_then(hint_for) {
        out.push_str(&format!(
            "  {} {}\n",
            ColoredText::dim("hint:").render(supports_color),
            hint
        ));
    }
    out
}

fn hint_for(err: &ShaderWatchError) -> Option<&'static str> {
    match err {
        ShaderWatchError::WatchRootNotFound { .. } | ShaderWatchError::NotADirectory { .. } => {
            Some("pass the shader directory as the first argument")
        }
        ShaderWatchError::CompilerNotFound { .. } => {
            Some("put glslc on PATH, or set --compiler / compiler.path in shader-watch.toml")
        }
        ShaderWatchError::CompilerUnusable { .. } => {
            Some("check that the compiler runs on its own with --version")
        }
        ShaderWatchError::InvalidConfig { .. } => Some("fix or remove the config file"),
        ShaderWatchError::Watch { .. } | ShaderWatchError::Io(_) => None,
    }
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "command": "watch",
            "message": err.to_string(),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    eprint!("{}", format_error(err));
}
