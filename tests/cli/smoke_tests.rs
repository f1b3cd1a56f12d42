use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

use crate::fixtures::TempWorkspace;

fn visualiser() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_repo_visualiser"));
    cmd.env_remove("GITHUB_STEP_SUMMARY").env_remove("RUST_LOG");
    cmd
}

fn sample_repo() -> TempWorkspace {
    let mut ws = TempWorkspace::new("repo_visualiser_cli");
    ws.create_lines("a/x.go", 100);
    ws.create_lines("a/y.go", 50);
    ws.create_lines("b/z.py", 10);
    ws.create_lines("web/index.html", 300);
    ws
}

#[test]
fn shows_help() {
    visualiser()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("repo_visualiser"))
        .stdout(predicate::str::contains("--ignore"));
}

#[test]
fn writes_diagram_to_output_file() {
    let repo = sample_repo();
    let out = TempWorkspace::new("repo_visualiser_out");
    let target = out.join("diagram.svg");

    visualiser().arg(repo.path()).arg("--output").arg(&target).assert().success();

    let svg = fs::read_to_string(&target).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r#"width="800" height="600""#));
    assert!(svg.contains("lightblue"));
    assert!(svg.contains("orange"));
    assert!(svg.contains(">web</text>"));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn stdout_prints_svg_without_writing_default_file() {
    let repo = sample_repo();
    visualiser()
        .current_dir(repo.path())
        .arg("--stdout")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<svg"));
    assert!(!repo.join("diagram.svg").exists());
}

#[test]
fn ignore_flag_removes_folder() {
    let repo = sample_repo();
    visualiser()
        .arg(repo.path())
        .args(["--stdout", "--ignore", "web"])
        .assert()
        .success()
        .stdout(predicate::str::contains(">web</text>").not())
        .stdout(predicate::str::contains(">a</text>"));
}

#[test]
fn summary_env_appends_markdown() {
    let repo = sample_repo();
    let out = TempWorkspace::new("repo_visualiser_summary");
    let summary = out.join("summary.md");

    visualiser()
        .arg(repo.path())
        .arg("--stdout")
        .env("GITHUB_STEP_SUMMARY", &summary)
        .assert()
        .success();

    let text = fs::read_to_string(&summary).unwrap();
    assert!(text.starts_with("## Repository Visualiser\n![SVG Image](data:image/svg+xml;base64,"));
    assert!(text.contains("|         | Go | HTML | Python |"));
    assert!(text.contains("| Files   | 2 | 1 | 1 |"));
}

#[test]
fn broken_config_warns_and_continues() {
    let mut repo = sample_repo();
    let config = repo.create_file("viz.json", "{ nope");
    visualiser()
        .arg(repo.path())
        .arg("--stdout")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stderr(predicate::str::contains("could not load configuration"));
}

#[test]
fn missing_root_fails() {
    let out = TempWorkspace::new("repo_visualiser_missing");
    visualiser()
        .arg(out.join("absent"))
        .arg("--stdout")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn double_quiet_silences_warnings() {
    let mut repo = sample_repo();
    let config = repo.create_file("viz.json", "{ nope");
    visualiser()
        .arg(repo.path())
        .args(["--stdout", "-qq", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn brace_pattern_is_literal() {
    let repo = sample_repo();
    visualiser()
        .arg(repo.path())
        .args(["--stdout", "--ignore", "*/*.{go,py}"])
        .assert()
        .success()
        .stdout(predicate::str::contains(">a</text>"))
        .stdout(predicate::str::contains(">b</text>"));
}
