use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn run_ctestgen(args: &[&str]) -> Output {
    Command::new("cargo")
        .args(["run", "--quiet", "--"])
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn write_alpha_c(dir: &Path) {
    fs::write(
        dir.join("alpha.c"),
        "static char *test_foo(void) { return NULL; }\n\
         static char *test_bar_baz(void) { return NULL; }\n",
    )
    .unwrap();
}

#[test]
fn test_cli_help() {
    let output = run_ctestgen(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("ctestgen"));
    assert!(stdout.contains("--test-dir"));
    assert!(stdout.contains("--additional-include"));
    assert!(stdout.contains("--include-prefix"));
    assert!(stdout.contains("-o"));
}

#[test]
fn test_cli_missing_required_flags() {
    let output = run_ctestgen(&[]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("required"));
    assert!(stderr.contains("--test-dir"));
}

#[test]
fn test_cli_generates_runner_for_test_tree() {
    let temp_dir = TempDir::new().unwrap();
    write_alpha_c(temp_dir.path());
    let out_path = temp_dir.path().join("tests.c");

    let output = run_ctestgen(&[
        "--test-dir",
        temp_dir.path().to_str().unwrap(),
        "-o",
        out_path.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    let document = fs::read_to_string(&out_path).unwrap();
    assert!(document.starts_with("// this is a generated file, DO NOT MODIFY!!"));
    assert!(document.contains("alpha.c\""));

    let foo = document.find("tt_run_test(test_foo,").unwrap();
    let bar = document.find("tt_run_test(test_bar_baz,").unwrap();
    assert!(foo < bar);
    assert_eq!(document.matches("tt_run_test(").count(), 2);
    assert!(document.ends_with("}\n"));
}

#[test]
fn test_cli_additional_include_with_prefix_comes_first() {
    let temp_dir = TempDir::new().unwrap();
    write_alpha_c(temp_dir.path());
    let out_path = temp_dir.path().join("tests.c");

    let output = run_ctestgen(&[
        "-i",
        "helpers.h",
        "-p",
        "src/",
        "--test-dir",
        temp_dir.path().to_str().unwrap(),
        "-o",
        out_path.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    let document = fs::read_to_string(&out_path).unwrap();
    let first_include = document
        .lines()
        .find(|l| l.starts_with("#include"))
        .unwrap();
    assert_eq!(first_include, "#include \"src/helpers.h\"");
}

#[test]
fn test_cli_empty_tree_exits_zero() {
    let temp_dir = TempDir::new().unwrap();
    let out_path = temp_dir.path().join("tests.c");

    let output = run_ctestgen(&[
        "--test-dir",
        temp_dir.path().to_str().unwrap(),
        "-o",
        out_path.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    let document = fs::read_to_string(&out_path).unwrap();
    assert!(document.contains("int main(int argc, char **argv) {"));
    assert!(!document.contains("tt_run_test("));
}

#[test]
fn test_cli_rerun_produces_byte_identical_output() {
    let temp_dir = TempDir::new().unwrap();
    write_alpha_c(temp_dir.path());
    let out_path = temp_dir.path().join("tests.c");
    let args = [
        "-i",
        "testlib.h",
        "--test-dir",
        temp_dir.path().to_str().unwrap(),
        "-o",
        out_path.to_str().unwrap(),
    ];

    assert!(run_ctestgen(&args).status.success());
    let first = fs::read(&out_path).unwrap();
    assert!(run_ctestgen(&args).status.success());
    let second = fs::read(&out_path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_cli_overwrites_stale_output() {
    let temp_dir = TempDir::new().unwrap();
    write_alpha_c(temp_dir.path());
    let out_path = temp_dir.path().join("tests.c");
    fs::write(&out_path, "stale hand-written contents").unwrap();

    let output = run_ctestgen(&[
        "--test-dir",
        temp_dir.path().to_str().unwrap(),
        "-o",
        out_path.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    let document = fs::read_to_string(&out_path).unwrap();
    assert!(document.starts_with("// this is a generated file"));
}

#[test]
fn test_cli_missing_output_parent_fails() {
    let temp_dir = TempDir::new().unwrap();
    write_alpha_c(temp_dir.path());
    let out_path = temp_dir.path().join("no/such/dir/tests.c");

    let output = run_ctestgen(&[
        "--test-dir",
        temp_dir.path().to_str().unwrap(),
        "-o",
        out_path.to_str().unwrap(),
    ]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Failed to write"));
}
