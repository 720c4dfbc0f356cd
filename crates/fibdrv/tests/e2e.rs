//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn fibdrv() -> Command {
    let mut cmd = Command::cargo_bin("fibdrv").expect("binary not found");
    cmd.env_remove("FIBDRV_OFFSET").env_remove("FIBDRV_ALGO");
    cmd
}

#[test]
fn help_flag() {
    fibdrv()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fibonacci"));
}

#[test]
fn version_flag() {
    fibdrv()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fibdrv"));
}

#[test]
fn default_sweep_reads_forward_and_back() {
    let output = fibdrv().assert().success().get_output().stdout.clone();
    let text = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 202);
    assert_eq!(
        lines[0],
        "Reading from /dev/fibonacci at offset 0, returned the sequence 0."
    );
    assert_eq!(
        lines[100],
        "Reading from /dev/fibonacci at offset 100, returned the sequence 354224848179261915075."
    );
    assert_eq!(lines[101], lines[100]);
    assert_eq!(lines[201], lines[0]);
}

#[test]
fn sweep_up_to_device_limit() {
    fibdrv()
        .args(["--offset", "1000", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "43466557686937456435688527675040625802564",
        ));
}

#[test]
fn sweep_offset_from_env() {
    fibdrv()
        .env("FIBDRV_OFFSET", "3")
        .arg("-q")
        .assert()
        .success()
        .stdout("0\n1\n1\n2\n2\n1\n1\n0\n");
}

#[test]
fn sweep_past_device_limit_is_config_error() {
    fibdrv().args(["--offset", "1001"]).assert().code(4);
}

#[test]
fn sweep_with_verify() {
    for algo in ["doubling", "doubling-karatsuba", "linear", "decimal"] {
        fibdrv()
            .args(["--offset", "300", "--verify", "-q", "--algo", algo])
            .assert()
            .success();
    }
}

#[test]
fn sweep_with_fixed_overflows() {
    fibdrv()
        .args(["--offset", "100", "--algo", "fixed"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("overflows"));
}

#[test]
fn timing_lines() {
    let output = fibdrv()
        .args(["--offset", "5", "--timing"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 12);
    for (line, offset) in lines.iter().zip((0..=5).chain((0..=5).rev())) {
        let mut fields = line.split(' ');
        assert_eq!(fields.next(), Some(offset.to_string().as_str()));
        assert!(fields.next().unwrap().parse::<u64>().is_ok());
    }
}

#[test]
fn sweep_json() {
    let output = fibdrv()
        .args(["--offset", "10", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let reads = parsed.as_array().unwrap();
    assert_eq!(reads.len(), 22);
    assert_eq!(reads[10]["offset"], 10);
    assert_eq!(reads[10]["value"], "55");
}

#[test]
fn compute_f100() {
    fibdrv()
        .args(["-n", "100", "-q"])
        .assert()
        .success()
        .stdout("354224848179261915075\n");
}

#[test]
fn compute_f0_and_f1() {
    fibdrv().args(["-n", "0", "-q"]).assert().success().stdout("0\n");
    fibdrv().args(["-n", "1", "-q"]).assert().success().stdout("1\n");
}

#[test]
fn compute_all_algorithms_agree() {
    fibdrv()
        .args(["-n", "50", "--algo", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FastDoubling: F(50) = 12586269025"))
        .stdout(predicate::str::contains("DecimalString: F(50) = 12586269025"));
}

#[test]
fn compute_all_past_fixed_width() {
    fibdrv()
        .args(["-n", "200", "--algo", "all", "--verify"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FixedWidth: error"))
        .stdout(predicate::str::contains(
            "280571172992510140037611932413038677189525",
        ));
}

#[test]
fn compute_json() {
    let output = fibdrv()
        .args(["-n", "20", "--algo", "linear", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed[0]["algorithm"], "LinearIteration");
    assert_eq!(parsed[0]["value"], "6765");
    assert_eq!(parsed[0]["digits"], 4);
}

#[test]
fn long_values_truncate_unless_verbose() {
    fibdrv()
        .args(["-n", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(209 digits)"));
    fibdrv()
        .args(["-n", "1000", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(209 digits)").not());
}

#[test]
fn unknown_algorithm_is_config_error() {
    fibdrv()
        .args(["-n", "10", "--algo", "bogus"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("unknown calculator"));
}

#[test]
fn output_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("f90.txt");
    fibdrv()
        .args(["-n", "90", "-q", "-o", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout("");
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written.trim(), "2880067194370816120");
}

#[test]
fn completion_bash() {
    fibdrv()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fibdrv"));
}
