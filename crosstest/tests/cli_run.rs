//! CLI tests for the `crosstest` binary.
//!
//! Every run uses a temporary working directory with a pre-populated mirror,
//! so no network access or real Tester is needed.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use crosstest::exit_codes;

const CONFIG: &str = r#"
storage_root = "repos"

[tester]
command = ["sh", "-c", "exit 3"]
timeout_secs = 30

[[repos]]
owner = "Ivan Petrov"
group = "321"
url = "https://github.com/ipetrov/pythonprac"
"#;

fn crosstest(workdir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_crosstest"))
        .current_dir(workdir)
        .env_remove("RUST_LOG")
        .args(["--nocolors", "--config", "crosstest.toml"])
        .args(args)
        .output()
        .expect("run crosstest")
}

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    fs::write(path, contents).expect("write");
}

#[test]
fn invalid_subject_exits_fatal() {
    let temp = tempfile::tempdir().expect("tempdir");
    write(&temp.path().join("crosstest.toml"), CONFIG);

    let output = crosstest(temp.path(), &["--who", "petrov", "no-such-dir"]);
    assert_eq!(output.status.code(), Some(exit_codes::FATAL));
    assert!(String::from_utf8_lossy(&output.stderr).contains("not valid"));
}

#[test]
fn storage_root_file_exits_fatal() {
    let temp = tempfile::tempdir().expect("tempdir");
    write(&temp.path().join("crosstest.toml"), CONFIG);
    write(&temp.path().join("repos"), "not a directory");
    fs::create_dir_all(temp.path().join("subject")).expect("subject");

    let output = crosstest(temp.path(), &["--who", "petrov", "subject"]);
    assert_eq!(output.status.code(), Some(exit_codes::FATAL));
    assert!(String::from_utf8_lossy(&output.stderr).contains("already exists"));
}

#[test]
fn list_prints_configured_registry() {
    let temp = tempfile::tempdir().expect("tempdir");
    write(&temp.path().join("crosstest.toml"), CONFIG);

    let output = crosstest(temp.path(), &["--list"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Ivan Petrov\t321\thttps://github.com/ipetrov/pythonprac"));
}

#[cfg(unix)]
#[test]
fn offline_run_reports_mismatch_and_writes_json() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();
    write(&root.join("crosstest.toml"), CONFIG);
    write(&root.join("subject/20210923/1/prog.py"), "print(input())\n");
    write(&root.join("repos/ipetrov/20210923/1/tests/1.in"), "1\n");
    write(&root.join("repos/ipetrov/20210923/1/tests/1.out"), "1\n");

    let output = crosstest(
        root,
        &["--who", "petrov", "--report-json", "report.json", "subject"],
    );
    assert_eq!(output.status.code(), Some(exit_codes::OK));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("mismatch:  1"));
    assert!(stdout.contains("total:     1"));
    assert!(stdout.contains("Ivan Petrov: 20210923/1"));

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(root.join("report.json")).expect("report"))
            .expect("json");
    assert_eq!(report["mismatch"], 1);
    assert_eq!(report["ok"], 0);
}
