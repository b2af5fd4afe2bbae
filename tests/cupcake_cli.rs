use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output, Stdio},
    thread,
    time::{Duration, Instant},
};

fn write_config(dir: &Path, file_name: &str, content: &str) -> PathBuf {
    let config_path = dir.join(file_name);
    fs::write(&config_path, content).expect("write config");
    config_path
}

/// Command with the user config directory pointed at `home`
fn cupcake_command(args: &[&str], current_dir: Option<&Path>, home: &Path) -> Command {
    let mut cmd = Command::new(PathBuf::from(env!("CARGO_BIN_EXE_cupcake")));
    cmd.args(args);
    cmd.env_remove("RUST_LOG");
    cmd.env("HOME", home);
    cmd.env("XDG_CONFIG_HOME", home.join(".config"));
    if let Some(dir) = current_dir {
        cmd.current_dir(dir);
    }
    cmd
}

fn run_cupcake_with_home(args: &[&str], current_dir: Option<&Path>, home: &Path) -> Output {
    cupcake_command(args, current_dir, home)
        .output()
        .expect("run cupcake command")
}

fn run_cupcake(args: &[&str], current_dir: Option<&Path>) -> Output {
    let home = tempfile::tempdir().expect("temp home");
    run_cupcake_with_home(args, current_dir, home.path())
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn run_full_order_reaches_summary() {
    let temp = tempfile::tempdir().expect("temp dir");
    let output = run_cupcake(
        &[
            "run",
            "--script",
            "one-cupcake,flavor:chocolate,next,date:+1,next",
            "--expect",
            "Summary",
        ],
        Some(temp.path()),
    );

    assert!(
        output.status.success(),
        "command should succeed, stderr: {}",
        stderr(&output)
    );
    let out = stdout(&output);
    assert!(out.contains("Final route: Summary"), "stdout: {out}");
    assert!(out.contains("stack=[Start, Flavor, Pickup]"), "stdout: {out}");
}

#[test]
fn run_cancel_from_summary_returns_to_start() {
    let temp = tempfile::tempdir().expect("temp dir");
    let output = run_cupcake(
        &[
            "run",
            "-s",
            "one-cupcake,flavor:chocolate,next,date:+1,next,cancel",
            "--json",
        ],
        Some(temp.path()),
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let reports: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("json step reports");
    let reports = reports.as_array().expect("array of reports");
    assert_eq!(reports.len(), 6);

    let routes: Vec<&str> = reports
        .iter()
        .map(|r| r["route"].as_str().expect("route"))
        .collect();
    assert_eq!(
        routes,
        vec!["Flavor", "Flavor", "Pickup", "Pickup", "Summary", "Start"]
    );
    assert_eq!(reports[5]["back_stack"], serde_json::json!([]));
    assert_eq!(reports[5]["back_button_visible"], false);
}

#[test]
fn run_next_without_selection_is_ignored() {
    let temp = tempfile::tempdir().expect("temp dir");
    let output = run_cupcake(
        &["run", "-s", "one-cupcake,next", "--expect", "Flavor"],
        Some(temp.path()),
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("ignored"));
}

#[test]
fn run_fails_when_expected_route_differs() {
    let temp = tempfile::tempdir().expect("temp dir");
    let output = run_cupcake(
        &["run", "-s", "one-cupcake,up", "--expect", "Flavor"],
        Some(temp.path()),
    );

    assert!(!output.status.success(), "command should fail");
    let err = stderr(&output);
    assert_eq!(
        err.matches("Expected route 'Flavor'").count(),
        1,
        "unexpected stderr: {err}"
    );
    assert!(!err.contains("UnexpectedRoute"), "unexpected stderr: {err}");
}

#[test]
fn run_rejects_malformed_script() {
    let temp = tempfile::tempdir().expect("temp dir");
    let output = run_cupcake(&["run", "-s", "one-cupcake,dance"], Some(temp.path()));

    assert!(!output.status.success(), "command should fail");
    assert!(
        stderr(&output).contains("unknown step 'dance'"),
        "unexpected stderr: {}",
        stderr(&output)
    );
    assert!(stdout(&output).is_empty());
}

#[test]
fn run_uses_config_from_current_directory() {
    let temp = tempfile::tempdir().expect("temp dir");
    write_config(
        temp.path(),
        "cupcake.toml",
        "[order]\nflavors = [\"vanilla\"]\n",
    );

    let output = run_cupcake(
        &["run", "-s", "one-cupcake,flavor:chocolate,next", "--expect", "Flavor"],
        Some(temp.path()),
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("not offered"));
}

#[cfg(target_os = "linux")]
#[test]
fn run_uses_config_from_user_config_directory() {
    let temp = tempfile::tempdir().expect("temp dir");
    let home = tempfile::tempdir().expect("temp home");
    let config_dir = home.path().join(".config").join("cupcake");
    fs::create_dir_all(&config_dir).expect("create config dir");
    write_config(&config_dir, "config.toml", "[order]\nflavors = [\"coffee\"]\n");

    let output = run_cupcake_with_home(
        &["run", "-s", "one-cupcake,flavor:chocolate", "--expect", "Flavor"],
        Some(temp.path()),
        home.path(),
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("not offered"));
}

#[test]
fn menu_without_terminal_exits_with_error() {
    let temp = tempfile::tempdir().expect("temp dir");
    let home = tempfile::tempdir().expect("temp home");
    let mut child = cupcake_command(&["menu"], Some(temp.path()), home.path())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn cupcake menu");

    let deadline = Instant::now() + Duration::from_secs(10);
    while child.try_wait().expect("poll cupcake menu").is_none() {
        if Instant::now() > deadline {
            child.kill().ok();
            panic!("menu kept running without a terminal");
        }
        thread::sleep(Duration::from_millis(50));
    }

    let output = child.wait_with_output().expect("collect menu output");
    assert!(!output.status.success(), "command should fail");
    assert!(
        stderr(&output).contains("needs a terminal"),
        "unexpected stderr: {}",
        stderr(&output)
    );
}

#[test]
fn test_command_accepts_explicit_valid_config() {
    let temp = tempfile::tempdir().expect("temp dir");
    let config_path = write_config(
        temp.path(),
        "valid.toml",
        r#"
[order]
quantities = [1, 6, 12]
flavors = ["vanilla", "chocolate"]
pickup_days = 4

[observability]
filter_level = "info"
"#,
    );

    let output = run_cupcake(&["test", config_path.to_str().expect("utf8 path")], None);
    assert!(
        output.status.success(),
        "command should succeed, stderr: {}",
        stderr(&output)
    );
}

#[test]
fn test_command_finds_default_config_in_current_directory() {
    let temp = tempfile::tempdir().expect("temp dir");
    write_config(temp.path(), "cupcake.toml", "[order]\npickup_days = 2\n");

    let output = run_cupcake(&["test"], Some(temp.path()));
    assert!(output.status.success(), "stderr: {}", stderr(&output));
}

#[test]
fn test_command_fails_for_missing_custom_config_path() {
    let temp = tempfile::tempdir().expect("temp dir");
    let missing_path = temp.path().join("missing.toml");

    let output = run_cupcake(&["test", missing_path.to_str().expect("utf8 path")], None);
    assert!(!output.status.success(), "command should fail");
    assert!(
        stderr(&output).contains("Config file not found"),
        "unexpected stderr: {}",
        stderr(&output)
    );
}

#[test]
fn test_command_fails_for_invalid_config_content() {
    let temp = tempfile::tempdir().expect("temp dir");
    let bad_path = write_config(temp.path(), "bad.toml", "[order]\nflavors = [\n");

    let output = run_cupcake(&["test", bad_path.to_str().expect("utf8 path")], None);
    assert!(!output.status.success(), "command should fail");
    assert!(
        stderr(&output).contains("parse"),
        "unexpected stderr: {}",
        stderr(&output)
    );
}

#[test]
fn test_command_fails_for_validation_errors() {
    let temp = tempfile::tempdir().expect("temp dir");
    let config_path = write_config(temp.path(), "invalid.toml", "[order]\npickup_days = 0\n");

    let output = run_cupcake(&["test", config_path.to_str().expect("utf8 path")], None);
    assert!(!output.status.success(), "command should fail");
    assert!(
        stderr(&output).contains("pickup_days"),
        "unexpected stderr: {}",
        stderr(&output)
    );
}
