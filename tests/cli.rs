use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("wordlist-gen").unwrap()
}

#[test]
fn test_stdin_to_stdout() {
    cmd()
        .args(["-q", "--progress", "never"])
        .write_stdin("a\nb\n")
        .assert()
        .success()
        .stdout("\na\nb\nab\nba\n");
}

#[test]
fn test_charset_file_to_output_file() {
    let dir = TempDir::new().unwrap();
    let charset = dir.path().join("charset.txt");
    let output = dir.path().join("wordlist.txt");
    fs::write(&charset, "a\n\nb\nc\n").unwrap();

    cmd()
        .arg("-c")
        .arg(&charset)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout("");

    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(content.lines().count(), 16);
    assert!(content.starts_with("\na\nb\nc\nab\nba\n"));
    assert!(content.ends_with("cab\ncba\n"));
}

#[test]
fn test_empty_charset() {
    cmd()
        .arg("-q")
        .write_stdin("\n\n")
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn test_add_space() {
    let output = cmd()
        .args(["-q", "--trim", "--add-space"])
        .write_stdin("  hi  \n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(String::from_utf8(output).unwrap(), "\nhi\n \nhi \n hi\n");
}

#[test]
fn test_missing_charset_exit_1() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("wordlist.txt");

    cmd()
        .arg("-c")
        .arg(dir.path().join("missing.txt"))
        .arg("-o")
        .arg(&output)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Cannot open charset file"));

    assert!(!output.exists());
}

#[test]
fn test_unwritable_output_exit_1() {
    let dir = TempDir::new().unwrap();

    cmd()
        .arg("-o")
        .arg(dir.path().join("no-such-dir").join("out.txt"))
        .write_stdin("a\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Cannot open output file"));
}

#[test]
fn test_dry_run_reports_count() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("wordlist.txt");

    cmd()
        .arg("--dry-run")
        .arg("-o")
        .arg(&output)
        .write_stdin("0\n1\n2\n3\n4\n5\n6\n7\n8\n9\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("9,864,101"));

    assert!(!output.exists());
}

#[test]
fn test_invalid_buffer_size() {
    cmd()
        .args(["--buffer-size", "huge"])
        .write_stdin("a\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid size format"));
}

#[test]
fn test_dry_run_quiet_still_reports_count() {
    cmd()
        .args(["--dry-run", "-q"])
        .write_stdin("a\nb\nc\n")
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("16 words from 3 tokens"));
}

#[cfg(unix)]
#[test]
fn test_sigint_exit_2_keeps_whole_lines() {
    use std::process::{Command as StdCommand, Stdio};
    use std::thread;
    use std::time::{Duration, Instant};

    let dir = TempDir::new().unwrap();
    let charset = dir.path().join("charset.txt");
    let output = dir.path().join("wordlist.txt");
    let tokens = "0123456789ab";
    let lines: Vec<String> = tokens.chars().map(|c| c.to_string()).collect();
    fs::write(&charset, lines.join("\n")).unwrap();

    let mut child = StdCommand::new(assert_cmd::cargo::cargo_bin("wordlist-gen"))
        .arg("-q")
        .args(["--progress", "never", "--buffer-size", "4KB"])
        .arg("-c")
        .arg(&charset)
        .arg("-o")
        .arg(&output)
        .stdin(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // The output file is opened after the Ctrl-C handler is installed
    let deadline = Instant::now() + Duration::from_secs(10);
    while fs::metadata(&output).map(|m| m.len() == 0).unwrap_or(true) {
        assert!(Instant::now() < deadline, "no output produced");
        thread::sleep(Duration::from_millis(20));
    }

    let status = StdCommand::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(status.success());

    let result = child.wait_with_output().unwrap();
    assert_eq!(result.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&result.stderr).contains("User interrupted with ^C"));

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.ends_with('\n'));
    for line in content.lines() {
        assert!(line.len() <= tokens.len(), "line too long: {:?}", line);
        assert!(line.chars().all(|c| tokens.contains(c)), "bad line: {:?}", line);
        let mut seen: Vec<char> = line.chars().collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), line.len(), "repeated token in {:?}", line);
    }
}
