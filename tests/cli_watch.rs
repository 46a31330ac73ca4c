//! E2E tests for the watch loop
//!
//! Startup failures run everywhere. The live tests drive a tiny shell script
//! standing in for glslc, so they are Unix-only.

use std::process::Command;

use serde_json::Value;
use tempfile::tempdir;

#[test]
fn missing_watch_dir_exits_with_error() {
    let temp = tempdir().unwrap();
    let missing = temp.path().join("no-such-dir");

    let output = Command::new(env!("CARGO_BIN_EXE_shader-watch"))
        .arg(&missing)
        .env("NO_COLOR", "1")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("does not exist"),
        "expected a missing-directory message; got:\n{stderr}"
    );
}

#[test]
fn watch_dir_that_is_a_file_exits_with_error() {
    let temp = tempdir().unwrap();
    let file = temp.path().join("triangle.frag");
    std::fs::write(&file, "void main() {}\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_shader-watch"))
        .arg(&file)
        .arg("--json")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let line: Value = serde_json::from_str(stdout.lines().next().unwrap_or("{}")).unwrap();
    assert_eq!(line["event"], "error");
    assert_eq!(line["command"], "watch");
    assert!(line["message"]
        .as_str()
        .is_some_and(|m| m.contains("not a directory")));
}

#[test]
fn missing_compiler_exits_with_error() {
    let temp = tempdir().unwrap();
    let compiler = temp.path().join("bin").join("glslc");

    let output = Command::new(env!("CARGO_BIN_EXE_shader-watch"))
        .arg(temp.path())
        .arg("--compiler")
        .arg(&compiler)
        .env("NO_COLOR", "1")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("no shader compiler found"),
        "expected a missing-compiler message; got:\n{stderr}"
    );
}

#[cfg(unix)]
mod live {
    use std::fs;
    use std::io::{BufRead, BufReader};
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};
    use std::process::{Child, Command, Stdio};
    use std::sync::mpsc::{self, Receiver};
    use std::thread;
    use std::time::{Duration, Instant};

    use serde_json::Value;
    use tempfile::tempdir;

    /// Stand-in for glslc: copies the source to the `-o` path.
    const FAKE_GLSLC: &str = r#"#!/bin/sh
if [ "$1" = "--version" ]; then
  echo "fake glslc 1.0"
  exit 0
fi
case "$1" in
  *broken*) echo "$1:1: error: syntax error" >&2; exit 1 ;;
esac
mkdir -p "$(dirname "$3")"
cp "$1" "$3"
"#;

    fn install_fake_compiler(dir: &Path) -> PathBuf {
        let bin = dir.join("bin");
        fs::create_dir_all(&bin).unwrap();
        let script = bin.join("glslc");
        fs::write(&script, FAKE_GLSLC).unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        script
    }

    fn spawn_watch(shaders: &Path, compiler: &Path) -> (Child, Receiver<Value>) {
        let mut child = Command::new(env!("CARGO_BIN_EXE_shader-watch"))
            .arg(shaders)
            .arg("--json")
            .arg("--compiler")
            .arg(compiler)
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .expect("failed to start shader-watch");

        let stdout = child.stdout.take().unwrap();
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            for line in BufReader::new(stdout).lines().map_while(Result::ok) {
                if let Ok(value) = serde_json::from_str::<Value>(&line) {
                    if tx.send(value).is_err() {
                        break;
                    }
                }
            }
        });
        (child, rx)
    }

    fn wait_for(rx: &Receiver<Value>, seen: &mut Vec<Value>, pred: impl Fn(&Value) -> bool) -> bool {
        let deadline = Instant::now() + Duration::from_secs(15);
        while let Some(left) = deadline.checked_duration_since(Instant::now()) {
            match rx.recv_timeout(left) {
                Ok(event) => {
                    let hit = pred(&event);
                    seen.push(event);
                    if hit {
                        return true;
                    }
                }
                Err(_) => return false,
            }
        }
        false
    }

    #[test]
    fn sweep_compiles_existing_shaders() {
        let temp = tempdir().unwrap();
        let compiler = install_fake_compiler(temp.path());
        let shaders = temp.path().join("shaders");
        fs::create_dir_all(shaders.join("post")).unwrap();
        fs::write(shaders.join("triangle.frag"), "void main() {}\n").unwrap();
        fs::write(shaders.join("post").join("blur.comp"), "void main() {}\n").unwrap();
        fs::write(shaders.join("notes.txt"), "not a shader\n").unwrap();

        let (mut child, rx) = spawn_watch(&shaders, &compiler);
        let mut seen = Vec::new();
        let watching = wait_for(&rx, &mut seen, |e| e["event"] == "watching");
        let _ = child.kill();
        let _ = child.wait();

        assert!(watching, "never reached the watching state; saw {seen:?}");
        assert_eq!(seen[0]["event"], "watch_started");
        assert!(seen.iter().all(|e| e["command"] == "watch"));

        let complete = seen
            .iter()
            .find(|e| e["event"] == "sweep_complete")
            .expect("sweep_complete event");
        assert_eq!(complete["found"], 2);
        assert_eq!(complete["compiled"], 2);

        assert!(shaders.join("triangle.frag.spv").is_file());
        assert!(shaders.join("post").join("blur.comp.spv").is_file());
        assert!(!shaders.join("notes.txt.spv").exists());
    }

    #[test]
    fn live_changes_compile_and_deletions_clean_up() {
        let temp = tempdir().unwrap();
        let compiler = install_fake_compiler(temp.path());
        let shaders = temp.path().join("shaders");
        fs::create_dir_all(&shaders).unwrap();

        let (mut child, rx) = spawn_watch(&shaders, &compiler);
        let mut seen = Vec::new();
        assert!(
            wait_for(&rx, &mut seen, |e| e["event"] == "watching"),
            "never reached the watching state; saw {seen:?}"
        );
        assert!(seen.iter().any(|e| e["event"] == "no_shaders_found"));

        fs::write(shaders.join("sky.vert"), "void main() {}\n").unwrap();
        let compiled = wait_for(&rx, &mut seen, |e| {
            e["event"] == "compiled" && e["source"] == "sky.vert"
        });
        let artifact_written = shaders.join("sky.vert.spv").is_file();

        fs::remove_file(shaders.join("sky.vert")).unwrap();
        let removed = wait_for(&rx, &mut seen, |e| e["event"] == "artifact_removed");

        fs::write(shaders.join("broken.frag"), "void main( {\n").unwrap();
        let failed = wait_for(&rx, &mut seen, |e| e["event"] == "compile_failed");

        let _ = child.kill();
        let _ = child.wait();

        assert!(compiled, "live edit was not compiled; saw {seen:?}");
        assert!(artifact_written);
        assert!(removed, "deletion did not remove the artifact; saw {seen:?}");
        assert!(!shaders.join("sky.vert.spv").exists());
        assert!(failed, "broken shader did not report a failure; saw {seen:?}");
        let failure = seen.iter().rev().find(|e| e["event"] == "compile_failed").unwrap();
        assert_eq!(failure["exit_code"], 1);
        assert!(failure["diagnostics"][0]
            .as_str()
            .is_some_and(|d| d.contains("syntax error")));
    }
}
