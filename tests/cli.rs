//! Tests for the command-line binary: exit codes and output file.
//!
//! Inputs only use special-purpose addresses, which the WHOIS client rejects
//! before any network traffic, so these tests run offline.

use std::process::Command;

use tempfile::TempDir;

#[path = "helpers.rs"]
mod helpers;

use helpers::write_input;

fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_whois_enrich"));
    cmd.env_remove("RUST_LOG")
        .env_remove("WHOIS_ENRICH_SERVER")
        .env_remove("WHOIS_ENRICH_TIMEOUT_SECS");
    cmd
}

#[test]
fn test_cli_writes_results_file_and_exits_zero() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_input(
        dir.path(),
        "report.csv",
        "host,IPs\nlocal,\"['127.0.0.1','8.8.8.8']\"\nlan,\"['10.0.0.1']\"\n",
    );

    let output = bin()
        .arg(&input)
        .args(["--log-level", "error"])
        .output()
        .expect("Failed to run binary");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Enriched 2 rows"), "stdout: {stdout}");

    let results = std::fs::read_to_string(dir.path().join("report_results.csv"))
        .expect("results file written");
    let mut lines = results.lines();
    assert_eq!(
        lines.next(),
        Some("host,IPs,sample_ip,whois_desc,whois_cidr")
    );
    assert_eq!(
        lines.next(),
        Some("local,\"['127.0.0.1','8.8.8.8']\",127.0.0.1,\"IPv4 address 127.0.0.1 is already defined as Loopback via RFC 1122, Section 3.2.1.3.\",0.0.0.0")
    );
    assert_eq!(
        lines.next(),
        Some("lan,['10.0.0.1'],10.0.0.1,IPv4 address 10.0.0.1 is already defined as Private-Use Networks via RFC 1918.,0.0.0.0")
    );
    assert_eq!(lines.next(), None);
}

#[test]
fn test_cli_empty_ips_exits_nonzero() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_input(dir.path(), "bad.csv", "IPs\n[]\n");

    let output = bin().arg(&input).output().expect("Failed to run binary");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Empty address list in row 1"), "stderr: {stderr}");
    assert!(!dir.path().join("bad_results.csv").exists());
}

#[test]
fn test_cli_missing_input_exits_nonzero() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let output = bin()
        .arg(dir.path().join("nope.csv"))
        .output()
        .expect("Failed to run binary");
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_cli_requires_file_argument() {
    let output = bin().output().expect("Failed to run binary");
    assert!(!output.status.success());
}
