use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

fn run_bin(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_int-set"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start int-set");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("failed to write stdin");
    child.wait_with_output().expect("failed to wait for int-set")
}

#[test]
fn test_members_of_empty_set_exits_with_diagnostic() {
    let output = run_bin(&["members"], "0\n");
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.ends_with("Error: Cannot retrieve members from an empty set.\n"));
}

#[test]
fn test_members_prints_distinct_values() {
    let output = run_bin(&["members"], "4\n9 8 9 7\n");
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.ends_with("9 8 7\n"));
}

#[test]
fn test_default_command_runs_demo() {
    let output = run_bin(&[], "3\n1 2 1\nx\n");
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("For Set A: "));
    assert!(stdout.contains("\nSet A: {1, 2}"));
    assert!(stdout.contains("\nA union D = {1, 2, 11, 18, 7, 5}"));
    assert!(stdout.ends_with("Enter any letter to end the program.\n"));
}

#[test]
fn test_eval_prints_rendering() {
    let output = run_bin(&["eval", "{1, 2, 3} - {2}"], "");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "{1, 3}\n");
}

#[test]
fn test_malformed_input_fails() {
    let output = run_bin(&["eval", "{1} ^ {2}"], "");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr).unwrap().contains("Unexpected character: ^"));

    let output = run_bin(&["members"], "two\n");
    assert_eq!(output.status.code(), Some(1));
}
