//! # CLI Tests
//!
//! Runs the `es` binary and checks that output is plain, one value per line,
//! with diagnostics on stderr.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

mod common;

use common::{GlobalConfigBuilder, TestEnv};
use predicates::prelude::*;

// =============================================================================
// string
// =============================================================================

#[test]
fn test_string_default_is_session_id() {
    let env = TestEnv::new();

    let output = env.es().arg("string").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let line = stdout.trim_end();
    assert_eq!(line.len(), 26);
    assert!(line
        .chars()
        .all(|c| "2346789bdfghjmnpqrtBDFGHJLMNPQRT".contains(c)));
}

#[test]
fn test_string_from_bytes() {
    let env = TestEnv::new();

    env.es()
        .args(["string", "--bits", "72", "--charset", "64"])
        .args(["--bytes", "9d994ea5d23f8c8680"])
        .assert()
        .success()
        .stdout("nZlOpdI_jIaA\n");
}

#[test]
fn test_string_from_risk() {
    let env = TestEnv::new();

    env.es()
        .args(["string", "--total", "10^10", "--risk", "10^9", "-c", "base64"])
        .assert()
        .success()
        .stdout(predicate::str::is_match("^[A-Za-z0-9_-]{16}\n$").unwrap());
}

#[test]
fn test_string_count() {
    let env = TestEnv::new();

    let output = env
        .es()
        .args(["string", "--preset", "small", "-n", "4"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines.iter().all(|line| line.len() == 6));
}

#[test]
fn test_string_uses_config() {
    let env = TestEnv::new();
    env.write_global_config(&GlobalConfigBuilder::new().symbols("01").build());

    env.es()
        .args(["string", "--bits", "8", "--bytes", "27"])
        .assert()
        .success()
        .stdout("00100111\n");
}

#[test]
fn test_string_too_few_bytes() {
    let env = TestEnv::new();

    env.es()
        .args(["string", "--bits", "46", "--charset", "32", "--bytes", "010203040506"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("too few bytes: need 7, got 6"));
}

#[test]
fn test_string_duplicate_symbols() {
    let env = TestEnv::new();

    env.es()
        .args(["string", "--symbols", "abca"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not unique"));

    env.es()
        .args(["string", "--symbols", "abca", "--force", "--bits", "4"])
        .assert()
        .success()
        .stderr(predicate::str::contains("warning:"));
}

#[test]
fn test_string_rejects_non_finite_bits() {
    let env = TestEnv::new();

    for bits in ["--bits=inf", "--bits=nan", "--bits=-inf"] {
        env.es()
            .args(["string", bits])
            .assert()
            .failure()
            .stdout("")
            .stderr(predicate::str::contains("invalid bits"));
    }
}

#[test]
fn test_string_rejects_huge_bits() {
    let env = TestEnv::new();

    env.es()
        .args(["string", "--bits=1e13"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("entropy out of range"));
}

#[test]
fn test_string_conflicting_entropy() {
    let env = TestEnv::new();

    env.es()
        .args(["string", "--bits", "10", "--preset", "small"])
        .assert()
        .failure();

    env.es()
        .args(["string", "--total", "1000"])
        .assert()
        .failure();
}

// =============================================================================
// bits / charsets
// =============================================================================

#[test]
fn test_bits() {
    let env = TestEnv::new();

    env.es()
        .args(["bits", "--total", "10000", "--risk", "1e6"])
        .assert()
        .success()
        .stdout("45.51\n");

    env.es()
        .args(["bits", "--total", "30", "--risk", "10^6", "--charset", "32"])
        .assert()
        .success()
        .stdout("28.70\n6\n");
}

#[test]
fn test_charsets() {
    let env = TestEnv::new();

    env.es()
        .arg("charsets")
        .assert()
        .success()
        .stdout(predicate::str::contains("base16  4 bits"))
        .stdout(predicate::str::contains("ATCG"))
        .stdout(predicate::str::ends_with("01\n"));
}

// =============================================================================
// setup / completions
// =============================================================================

#[test]
fn test_setup_creates_config() {
    let env = TestEnv::new();

    env.es()
        .arg("setup")
        .assert()
        .success()
        .stderr(predicate::str::contains("Created global config"));
    assert!(env.read_global_config().contains("preset = \"session\""));

    env.es()
        .arg("setup")
        .assert()
        .success()
        .stderr(predicate::str::contains("Global config already exists"));
}

#[test]
fn test_completions() {
    let env = TestEnv::new();

    env.es()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_es"));
}
