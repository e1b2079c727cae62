//! Tests for the `bril2json` and `bril2txt` binaries
//!
//! Each command runs in an empty temporary directory so a stray
//! `briltxt.toml` cannot change the output.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

const EXAMPLE: &str = "main { v0: int = const 4; print v0; }";
const EXAMPLE_TEXT: &str = "main {\n  v0: int = const 4;\n  print v0;\n}\n";

fn bril2json(dir: &TempDir, args: &[&str], stdin: &str) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("bril2json");
    cmd.current_dir(dir.path()).args(args).write_stdin(stdin);
    cmd.assert()
}

fn bril2txt(dir: &TempDir, args: &[&str], stdin: &str) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("bril2txt");
    cmd.current_dir(dir.path()).args(args).write_stdin(stdin);
    cmd.assert()
}

fn stdout_of(assert: assert_cmd::assert::Assert) -> String {
    String::from_utf8(assert.get_output().stdout.clone()).expect("stdout should be UTF-8")
}

#[test]
fn bril2json_converts_text() {
    let dir = TempDir::new().unwrap();
    let stdout = stdout_of(bril2json(&dir, &[], EXAMPLE).success());

    let value: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(
        value,
        json!({
            "functions": [{
                "args": [],
                "instrs": [
                    {"dest": "v0", "op": "const", "type": "int", "value": 4},
                    {"args": ["v0"], "op": "print"}
                ],
                "name": "main"
            }]
        })
    );
    assert!(stdout.contains("\n  "), "default output is indented: {stdout}");
}

#[test]
fn bril2json_rejects_malformed_text() {
    let dir = TempDir::new().unwrap();
    bril2json(&dir, &[], "main { print x }")
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("error:").and(predicate::str::contains("line 1")));
}

#[test]
fn bril2json_compact_writes_one_line() {
    let dir = TempDir::new().unwrap();
    bril2json(&dir, &["--compact"], "main { ret; }")
        .success()
        .stdout(
            "{\"functions\":[{\"args\":[],\"instrs\":[{\"args\":[],\"op\":\"ret\"}],\"name\":\"main\"}]}\n",
        );
}

#[test]
fn bril2txt_round_trips_bril2json_output() {
    let dir = TempDir::new().unwrap();
    let document = stdout_of(bril2json(&dir, &[], EXAMPLE).success());

    bril2txt(&dir, &[], &document)
        .success()
        .stdout(EXAMPLE_TEXT);
}

#[test]
fn bril2txt_rejects_malformed_document() {
    let dir = TempDir::new().unwrap();
    bril2txt(&dir, &[], r#"{"functions":[{"name":"main","instrs":[{"dest":"x"}]}]}"#)
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("error:").and(predicate::str::contains("missing field `op`")));

    bril2txt(&dir, &[], "not json")
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("error:"));
}

#[test]
fn bril2txt_indent_flag() {
    let dir = TempDir::new().unwrap();
    let document = stdout_of(bril2json(&dir, &["--compact"], EXAMPLE).success());

    bril2txt(&dir, &["--indent", "\t"], &document)
        .success()
        .stdout("main {\n\tv0: int = const 4;\n\tprint v0;\n}\n");
}

#[test]
fn config_file_sets_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("briltxt.toml"),
        "[json]\npretty = false\n\n[text]\nindent = \"    \"\n",
    )
    .unwrap();

    let document = stdout_of(bril2json(&dir, &[], "main { ret; }").success());
    assert_eq!(document.lines().count(), 1);

    bril2txt(&dir, &[], &document)
        .success()
        .stdout("main {\n    ret;\n}\n");
}

#[test]
fn explicit_config_file_must_exist() {
    let dir = TempDir::new().unwrap();
    bril2json(&dir, &["--config", "missing.toml"], EXAMPLE)
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("error: configuration error"));
}

#[test]
fn both_binaries_report_version() {
    let dir = TempDir::new().unwrap();
    let version = env!("CARGO_PKG_VERSION");
    bril2json(&dir, &["--version"], "")
        .success()
        .stdout(predicate::str::contains(version));
    bril2txt(&dir, &["--version"], "")
        .success()
        .stdout(predicate::str::contains(version));
}
