use std::io::{self, Write};

use shader_watch::WatchEvent;

/// Write a single NDJSON line (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}

/// Convenience helper that writes to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

/// Emit a watch event as its NDJSON line on stdout.
pub fn emit_watch_event(event: &WatchEvent) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{}", event.to_json())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_event_appends_newline() {
        let mut buf = Vec::new();
        write_event(
            &mut buf,
            &serde_json::json!({"event": "error", "command": "watch"}),
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "{\"command\":\"watch\",\"event\":\"error\"}\n"
        );
    }
}
