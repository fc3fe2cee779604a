use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const NESTED: &str = "\tconsole.log(\"hi\")\n\t\tconsole.log(\"nested\")\n\tdone();\n";

#[test]
fn test_convert_whole_file() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("log.js");
    fs::write(&input_path, NESTED).unwrap();

    let mut cmd = cargo_bin_cmd!("fastsnip");
    cmd.arg("convert").arg(input_path.as_os_str());

    let output = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    assert!(stdout.starts_with("\t\"your description\": {\r\n"));
    assert!(stdout.contains("\t\t\"body\": [\r\n\t\t\t\"console.log(\\\"hi\\\")\",\r\n"));
    assert!(stdout.contains("\r\n\t\t\t\t\"console.log(\\\"nested\\\")\",\r\n"));
    assert!(stdout.contains("\r\n\t\t\t\"done();\"\r\n\t\t],\r\n"));
    assert!(stdout.ends_with("\t}"));
}

#[test]
fn test_convert_is_the_default_command() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("log.js");
    fs::write(&input_path, NESTED).unwrap();

    let mut cmd = cargo_bin_cmd!("fastsnip");
    cmd.arg(input_path.as_os_str());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"done();\""));
}

#[test]
fn test_convert_reads_stdin() {
    let mut cmd = cargo_bin_cmd!("fastsnip");
    cmd.arg("-").write_stdin("a();\nb();\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\t\t\t\"a();\",\r\n\t\t\t\"b();\"\r\n"));
}

#[test]
fn test_convert_selection_by_position() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("app.js");
    fs::write(
        &input_path,
        "function main() {\n\tif (ready) {\n\t\tstart();\n\t}\n}\n",
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("fastsnip");
    cmd.arg("convert")
        .arg(input_path.as_os_str())
        .arg("--start")
        .arg("2")
        .arg("--end")
        .arg("4");

    let output = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    assert!(stdout.contains(
        "\t\t\"body\": [\r\n\t\t\t\"if (ready) {\",\r\n\t\t\t\t\"start();\",\r\n\t\t\t\"}\"\r\n\t\t],"
    ));
    assert!(!stdout.contains("function main"));
}

#[test]
fn test_convert_rejects_inconsistent_indentation() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("app.js");
    fs::write(&input_path, "\tif (ready) {\n\t\tstart();\n").unwrap();

    let mut cmd = cargo_bin_cmd!("fastsnip");
    cmd.arg("convert").arg(input_path.as_os_str());

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("must share the same indentation"));
}

#[test]
fn test_convert_indent_overrides() {
    let mut cmd = cargo_bin_cmd!("fastsnip");
    cmd.arg("convert")
        .arg("-")
        .arg("--first-indent")
        .arg("1")
        .arg("--last-indent")
        .arg("2")
        .write_stdin("x();\n");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("first line: 1 tabs"));
}

#[test]
fn test_convert_first_indent_below_first_line_keeps_alignment() {
    let mut cmd = cargo_bin_cmd!("fastsnip");
    cmd.arg("-")
        .arg("--first-indent")
        .arg("1")
        .arg("--last-indent")
        .arg("1")
        .write_stdin("\t\ta();\n\t\tb();\n");

    cmd.assert().success().stdout(predicate::str::contains(
        "\t\t\"body\": [\r\n\t\t\t\t\"a();\",\r\n\t\t\t\t\"b();\"\r\n\t\t],",
    ));
}

#[test]
fn test_convert_empty_input_has_no_selection() {
    let mut cmd = cargo_bin_cmd!("fastsnip");
    cmd.arg("convert").arg("-").write_stdin("\n");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no active selection"));
}

#[test]
fn test_convert_reject_dedent() {
    let mut cmd = cargo_bin_cmd!("fastsnip");
    cmd.arg("convert")
        .arg("-")
        .arg("--dedent")
        .arg("reject")
        .write_stdin("\t\ta();\n\tb();\n\t\tc();\n");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("line 2 is indented 1 tabs"));
}

#[test]
fn test_convert_writes_output_file() {
    let dir = tempdir().unwrap();
    let output_path = dir.path().join("snippet.txt");

    let mut cmd = cargo_bin_cmd!("fastsnip");
    cmd.arg("convert")
        .arg("-")
        .arg("-o")
        .arg(output_path.as_os_str())
        .write_stdin("x();\n");

    cmd.assert().success().stdout(predicate::str::is_empty());
    let written = fs::read_to_string(output_path).unwrap();
    assert!(written.contains("\t\t\t\"x();\"\r\n"));
}

#[test]
fn test_convert_missing_file() {
    let mut cmd = cargo_bin_cmd!("fastsnip");
    cmd.arg("convert").arg("does-not-exist.js");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error reading"));
}

#[test]
fn test_template_prints_skeleton() {
    let mut cmd = cargo_bin_cmd!("fastsnip");
    cmd.arg("template");

    cmd.assert().success().stdout(
        "\t\"your description\": {\r\n\
         \t\t\"scope\": \"\",\r\n\
         \t\t\"prefix\": \"your prefix\",\r\n\
         \t\t\"body\": [\r\n\
         \t\t],\r\n\
         \t\t\"description\": \"Log output to console\"\r\n\
         \t}",
    );
}
