//! End-to-end integration tests for the pendulum CLI.
//!
//! These tests run the real binary and check what lands on stdout and
//! stderr, covering each subcommand, the config file layer and error exits.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

/// Get a Command for the pendulum binary.
#[allow(deprecated)]
fn pendulum_cmd() -> Command {
    let mut cmd = Command::cargo_bin("pendulum").unwrap();
    for var in [
        "PENDULUM_CONFIG",
        "PENDULUM_MASS",
        "PENDULUM_LENGTH",
        "PENDULUM_GRAVITY",
        "PENDULUM_ANGLE",
        "PENDULUM_TIME_STEP",
        "PENDULUM_MAX_FRAME_DELTA",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

// =============================================================================
// run
// =============================================================================

mod run {
    use super::*;

    #[test]
    fn test_run_table_defaults() {
        pendulum_cmd()
            .args(["run", "--duration", "1"])
            .assert()
            .success()
            .stdout(predicate::str::contains("frame"))
            .stdout(predicate::str::contains("30.000"))
            .stdout(predicate::str::contains("61 frames"))
            .stdout(predicate::str::contains("stop event: none"));
    }

    #[test]
    fn test_run_pause_at_bottom_stops_early() {
        pendulum_cmd()
            .args(["run", "--mode", "pause-at-bottom", "--duration", "5"])
            .assert()
            .success()
            .stdout(predicate::str::contains("<- reached bottom"))
            .stdout(predicate::str::contains("stop event: reached bottom"));
    }

    #[test]
    fn test_run_json_lines() {
        let output = pendulum_cmd()
            .args(["run", "--duration", "0.5", "--every", "10", "--format", "json"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let stdout = String::from_utf8(output.stdout).unwrap();
        let lines: Vec<&str> = stdout.lines().collect();
        assert_eq!(lines.len(), 4);
        for line in lines {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(value["theta_deg"].is_number());
            assert!(value["energy"].is_number());
        }
    }

    #[test]
    fn test_run_pause_at_top_json_event() {
        pendulum_cmd()
            .args(["run", "--mode", "top", "--format", "json", "--every", "1000"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"event\":\"reached-top\""));
    }

    #[test]
    fn test_run_paused_does_not_advance() {
        pendulum_cmd()
            .args(["run", "--mode", "paused", "--duration", "0.2"])
            .assert()
            .success()
            .stdout(predicate::str::contains("0 steps"));
    }

    #[test]
    fn test_run_rejects_negative_duration() {
        pendulum_cmd()
            .args(["run", "--duration=-1"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("duration"));
    }

    #[test]
    fn test_run_rejects_invalid_length() {
        pendulum_cmd()
            .args(["run", "--length", "0"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("length"));
    }

    #[test]
    fn test_run_rejects_inverted_release() {
        pendulum_cmd()
            .args(["run", "--angle", "180"])
            .assert()
            .failure();
    }
}

// =============================================================================
// period
// =============================================================================

mod period {
    use super::*;

    #[test]
    fn test_period_single() {
        pendulum_cmd()
            .args(["period", "--angle", "60"])
            .assert()
            .success()
            .stdout(predicate::str::contains("60.00"))
            .stdout(predicate::str::contains("1.073"));
    }

    #[test]
    fn test_period_sweep_json() {
        let output = pendulum_cmd()
            .args(["period", "--angle", "40", "--sweep", "--format", "json"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let stdout = String::from_utf8(output.stdout).unwrap();
        assert_eq!(stdout.lines().count(), 5);
        let last: serde_json::Value =
            serde_json::from_str(stdout.lines().last().unwrap()).unwrap();
        assert_eq!(last["amplitude_deg"], 40.0);
    }

    #[test]
    fn test_period_rejects_zero_sweep_step() {
        pendulum_cmd()
            .args(["period", "--sweep", "--sweep-step", "0"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("sweep step"));
    }

    #[test]
    fn test_period_rejects_tiny_sweep_step() {
        pendulum_cmd()
            .args(["period", "--sweep", "--sweep-step", "1e-9"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("sweep step must be at least 0.01"));
    }
}

// =============================================================================
// config
// =============================================================================

mod config {
    use super::*;

    #[test]
    fn test_config_shows_defaults() {
        pendulum_cmd()
            .arg("config")
            .assert()
            .success()
            .stdout(predicate::str::contains("Mass: 1 kg"))
            .stdout(predicate::str::contains("Gravity: 9.81 m/s²"));
    }

    #[test]
    fn test_config_file_is_loaded() {
        pendulum_cmd()
            .args(["--config", "tests/fixtures/moon.toml", "config"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Gravity: 1.62 m/s²"))
            .stdout(predicate::str::contains("Time step: 0.002 s"));
    }

    #[test]
    fn test_flags_override_config_file() {
        pendulum_cmd()
            .args(["--config", "tests/fixtures/moon.toml", "config", "--mass", "3"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Mass: 3 kg"))
            .stdout(predicate::str::contains("Length: 2 m"));
    }

    #[test]
    fn test_env_overrides_default() {
        pendulum_cmd()
            .env("PENDULUM_LENGTH", "0.25")
            .arg("config")
            .assert()
            .success()
            .stdout(predicate::str::contains("Length: 0.25 m"));
    }

    #[test]
    fn test_unknown_config_key_fails() {
        pendulum_cmd()
            .args(["--config", "tests/fixtures/unknown_key.toml", "config"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to parse config file"));
    }

    #[test]
    fn test_missing_config_file_fails() {
        pendulum_cmd()
            .args(["--config", "tests/fixtures/does_not_exist.toml", "config"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to read config file"));
    }

    #[test]
    fn test_temp_config_with_invalid_gravity() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "gravity = -9.81").unwrap();

        pendulum_cmd()
            .arg("--config")
            .arg(file.path())
            .arg("config")
            .assert()
            .failure()
            .stderr(predicate::str::contains("gravity"));
    }
}

// =============================================================================
// Logging and help
// =============================================================================

mod misc {
    use super::*;

    #[test]
    fn test_verbose_logs_go_to_stderr() {
        pendulum_cmd()
            .args(["-vv", "run", "--mode", "bottom", "--format", "json"])
            .assert()
            .success()
            .stderr(predicate::str::contains("stop condition reached"))
            .stdout(predicate::str::contains("stop condition reached").not());
    }

    #[test]
    fn test_help_lists_subcommands() {
        pendulum_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("run"))
            .stdout(predicate::str::contains("period"))
            .stdout(predicate::str::contains("config"));
    }

    #[test]
    fn test_missing_subcommand_fails() {
        pendulum_cmd().assert().failure();
    }
}
