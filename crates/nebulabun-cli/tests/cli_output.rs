//! Integration tests for nebulabun exit codes and messages.
//!
//! Every run happens in an empty temporary directory, so the bundled native
//! library path never resolves and no user config is picked up.

use std::path::Path;
use std::process::{Command, Output};

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nebulabun"))
        .args(args)
        .current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute nebulabun")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_help_lists_flags() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["--help"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--file", "--url", "--click-through", "--transparency"] {
        assert!(stdout.contains(flag), "help should mention {flag}: {stdout}");
    }
    assert!(stdout.contains("Examples:"));
}

#[test]
fn test_version_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["--version"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("nebulabun"));
}

#[test]
fn test_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["--file", "nope.html"]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("file not found"), "stderr: {err}");
    assert!(err.contains("nope.html"), "stderr: {err}");
}

#[test]
fn test_missing_file_fails_even_with_url() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(
        dir.path(),
        &["-f", "nope.html", "-u", "https://example.com"],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("file not found"));
}

#[test]
fn test_missing_native_library_fails() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("app.html"), "<h1>hi</h1>").unwrap();

    let output = run_in(dir.path(), &["--file", "app.html"]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("native library not found"), "stderr: {err}");
    assert!(err.contains("nebulabun_webview"), "stderr: {err}");
}

#[test]
fn test_settings_are_logged_before_loading() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(
        dir.path(),
        &["--url", "http://localhost:3000", "--title", "Demo", "-w", "640"],
    );

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("Title: Demo"), "stderr: {err}");
    assert!(err.contains("Size: 640x600"), "stderr: {err}");
    assert!(err.contains("local URL"), "stderr: {err}");
}

#[test]
fn test_debug_dumps_settings() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["--debug", "--transparency", "128"]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("Native library:"), "stderr: {err}");
    assert!(err.contains("\"transparency\": 128"), "stderr: {err}");
}

#[test]
fn test_explicit_config_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["--config", "missing.toml"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("config file not found"));
}

#[test]
fn test_invalid_width_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["--width", "0"]);

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_zero_size_in_config_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[window]\nwidth = 0\nheight = 0\n",
    )
    .unwrap();

    let output = run_in(dir.path(), &["--config", "config.toml", "--debug"]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("zero window size"), "stderr: {err}");
    assert!(err.contains("Size: 800x600"), "stderr: {err}");
    assert!(err.contains("\"width\": 800"), "stderr: {err}");
}

#[test]
fn test_invalid_log_level_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["--log-level", "nebulabun=loud"]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("ignoring invalid --log-level"), "stderr: {err}");
    assert!(err.contains("Title: Nebulabun App"), "stderr: {err}");
}

#[cfg(target_os = "linux")]
#[test]
fn test_library_without_entry_points_names_symbol() {
    let Some(libc) = [
        "/lib/x86_64-linux-gnu/libc.so.6",
        "/usr/lib/x86_64-linux-gnu/libc.so.6",
        "/lib/aarch64-linux-gnu/libc.so.6",
        "/usr/lib/aarch64-linux-gnu/libc.so.6",
        "/lib64/libc.so.6",
        "/usr/lib64/libc.so.6",
        "/usr/lib/libc.so.6",
        "/lib/libc.so.6",
    ]
    .into_iter()
    .find(|p| Path::new(p).exists()) else {
        return;
    };

    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["--library", libc]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(
        err.contains("missing symbol `create_webview_window`"),
        "stderr: {err}"
    );
}
