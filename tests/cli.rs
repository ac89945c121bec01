//! End-to-end tests that drive the built binary the way a shell user would.

use std::process::{Command, Output};

fn hashpass(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hashpass"))
        .args(args)
        .output()
        .expect("binary should run")
}

fn stdout_line(output: &Output) -> String {
    String::from_utf8(output.stdout.clone())
        .expect("stdout should be utf-8")
        .trim_end()
        .to_string()
}

// Light work factors keep the suite fast; the defaults are for real use.
const FAST_COST: [&str; 4] = ["--memory-kib", "1024", "--iterations", "1"];

fn hash_fast(password: &str) -> String {
    let mut args = vec!["hash", password];
    args.extend_from_slice(&FAST_COST);
    let output = hashpass(&args);
    assert!(output.status.success());
    stdout_line(&output)
}

#[test]
fn hash_then_check_round_trips() {
    let record = hash_fast("correct horse battery staple");
    assert!(record.starts_with("$argon2id$"));

    let output = hashpass(&["check", "correct horse battery staple", &record]);
    assert!(output.status.success());
    assert_eq!(stdout_line(&output), "true");
}

#[test]
fn wrong_password_prints_false() {
    let record = hash_fast("right-password");

    let output = hashpass(&["check", "wrong-password", &record]);
    assert!(output.status.success());
    assert_eq!(stdout_line(&output), "false");
}

#[test]
fn repeated_hashes_differ_but_both_check() {
    let first = hash_fast("same-secret");
    let second = hash_fast("same-secret");
    assert_ne!(first, second);

    for record in [&first, &second] {
        let output = hashpass(&["check", "same-secret", record]);
        assert_eq!(stdout_line(&output), "true");
    }
}

#[test]
fn garbage_record_prints_false_without_crashing() {
    let output = hashpass(&["check", "anything", "not-a-valid-record"]);
    assert!(output.status.success());
    assert_eq!(stdout_line(&output), "false");
}

#[test]
fn missing_arguments_exit_nonzero() {
    for args in [&["hash"][..], &["check", "only-password"][..], &[][..]] {
        let output = hashpass(args);
        assert!(!output.status.success());
        assert!(!output.stderr.is_empty());
    }
}

#[test]
fn invalid_cost_flags_exit_nonzero() {
    let output = hashpass(&["hash", "secret", "--memory-kib", "1024", "--iterations", "0"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid cost parameters"));
}
