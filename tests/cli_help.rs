use std::process::Command;

#[test]
fn test_help_mentions_how_to_stop() {
    let bin = env!("CARGO_BIN_EXE_shader-watch");

    let output = Command::new(bin).arg("--help").output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Press Ctrl+C to stop watching."),
        "help output should explain how to stop; got:\n{}",
        stdout
    );
    for flag in ["--output", "--debug", "--optimize", "--compiler", "--json"] {
        assert!(stdout.contains(flag), "help should list {flag}; got:\n{stdout}");
    }
}

#[test]
fn test_zero_timeout_is_rejected() {
    let bin = env!("CARGO_BIN_EXE_shader-watch");

    let output = Command::new(bin)
        .args(["--timeout", "0"])
        .output()
        .unwrap();

    assert!(!output.status.success());
}
