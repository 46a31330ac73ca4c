use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Local;

use shader_watch::config::{default_watch_dir, load_or_default, resolve_watch_root};
use shader_watch::presentation::{factory, Cli};
use shader_watch::WatchEvent;

use crate::ui::context::UiContext;
use crate::ui::views::watch::{
    is_visible, render_config_warnings, render_watch_event, render_watch_header,
};

pub fn cmd_watch(cli: &Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to read the current directory")?;
    let requested = match &cli.watch_dir {
        Some(dir) => cwd.join(dir),
        None => {
            let exe_dir = std::env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(Path::to_path_buf));
            default_watch_dir(exe_dir.as_deref(), &cwd)
        }
    };
    let watch_root = resolve_watch_root(&requested)?;

    let loaded = load_or_default(&watch_root)?;
    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &loaded.settings.output);

    let config = factory::build_watch_config(cli, watch_root, &loaded.settings, &cwd);
    let compiler = factory::detect_compiler(config.compiler.as_deref())?;

    let emit = |event: WatchEvent| emit_event(&ui, &event);

    if ui.json {
        for warning in &loaded.warnings {
            emit(WatchEvent::Warning {
                message: format!(
                    "unknown config key '{}' in {}",
                    warning.key,
                    warning.file.display()
                ),
            });
        }
    } else {
        print!(
            "{}",
            render_watch_header(
                &config,
                &compiler,
                loaded.source.as_deref(),
                ui.color,
                ui.unicode
            )
        );
        eprint!("{}", render_config_warnings(&loaded.warnings, ui.color));
    }
    for message in factory::startup_warnings(&config, &compiler) {
        emit(WatchEvent::Warning { message });
    }

    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("failed to install Ctrl+C handler")?;

    factory::create_watch_use_case(&config, &compiler).start(running, emit)?;
    Ok(())
}

fn emit_event(ui: &UiContext, event: &WatchEvent) {
    if ui.json {
        let _ = crate::ui::json::emit_watch_event(event);
        return;
    }
    if !is_visible(event, ui.verbose) {
        return;
    }

    let timestamp = Local::now().format("%H:%M:%S").to_string();
    let rendered = render_watch_event(&timestamp, event, ui.color, ui.unicode);
    if event.is_problem() {
        eprint!("{rendered}");
    } else {
        let mut out = std::io::stdout().lock();
        let _ = out.write_all(rendered.as_bytes());
        let _ = out.flush();
    }
}
