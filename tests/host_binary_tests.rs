//! End-to-end tests for the provider host binary
//!
//! The binary is driven over stdin/stdout the same way a host would drive it.

use serde_json::Value;
use std::io::{BufRead, BufReader, Write};
use std::process::{Child, Command, Stdio};
use std::time::Duration;

// ============================================================================
// Test Helpers
// ============================================================================

fn spawn_host() -> Child {
    Command::new(env!("CARGO_BIN_EXE_strimzi-crd-provider"))
        .env("RUST_LOG", "error")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap()
}

fn parse_lines(stdout: &[u8]) -> Vec<Value> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

// ============================================================================
// Request Loop
// ============================================================================

#[test]
fn test_host_answers_each_line_and_exits_when_input_closes() {
    let mut child = spawn_host();
    {
        let stdin = child.stdin.as_mut().unwrap();
        stdin.write_all(b"{\"op\":\"schema\"}\n").unwrap();
        stdin.write_all(b"\n").unwrap();
        stdin.write_all(b"not json\n").unwrap();
    }
    drop(child.stdin.take());

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let responses = parse_lines(&output.stdout);
    assert_eq!(responses.len(), 2);
    assert!(responses[0]["schema"].is_object());
    assert_eq!(responses[1]["diagnostics"][0]["severity"], "error");
    assert_eq!(responses[1]["diagnostics"][0]["summary"], "Malformed request");
}

// ============================================================================
// Shutdown
// ============================================================================

#[cfg(unix)]
#[test]
fn test_host_stops_cleanly_on_sigterm() {
    let mut child = spawn_host();
    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(b"{\"op\":\"schema\"}\n")
        .unwrap();

    // One answered request means the request loop and signal handlers are running
    let mut line = String::new();
    BufReader::new(child.stdout.as_mut().unwrap())
        .read_line(&mut line)
        .unwrap();
    assert!(line.contains("\"schema\""));
    std::thread::sleep(Duration::from_millis(200));

    let killed = Command::new("kill")
        .args(["-TERM", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(killed.success());

    let status = child.wait().unwrap();
    assert!(status.success());
}
