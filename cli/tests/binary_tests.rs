// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use closest_pair_core::generator::generate;
use closest_pair_core::search::closest_pair_full;
use std::process::Command;

#[test]
fn test_process_strategy_end_to_end_matches_reference() {
    // Arrange: the reference answer for the same (count, seed)
    let points = generate(60, 0);
    let expected = closest_pair_full(&points).unwrap();
    let (a, b) = expected.endpoints(&points);

    // Act: full coordinator -> child processes -> reduce path
    let output = Command::new(env!("CARGO_BIN_EXE_closest-pair"))
        .args(["--strategy", "process", "--points", "60", "--seed", "0"])
        .output()
        .unwrap();

    // Assert
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    let expected_line = format!(
        "Closest pair: {} and {} (distance {:.4})",
        a, b, expected.distance
    );
    assert!(stdout.contains(&expected_line), "stdout: {}", stdout);
}

#[test]
fn test_process_strategy_is_seed_deterministic() {
    // Act: two identical runs
    let run = || {
        Command::new(env!("CARGO_BIN_EXE_closest-pair"))
            .args(["--strategy", "process", "--points", "80", "--seed", "7"])
            .output()
            .unwrap()
    };
    let first = run();
    let second = run();

    // Assert: the reported pair line is identical across runs
    let pair_line = |out: &std::process::Output| {
        String::from_utf8_lossy(&out.stdout)
            .lines()
            .find(|l| l.starts_with("Closest pair:"))
            .map(str::to_owned)
    };
    assert!(first.status.success() && second.status.success());
    let line = pair_line(&first);
    assert!(line.is_some());
    assert_eq!(line, pair_line(&second));
}

#[test]
fn test_fewer_than_two_points_is_rejected() {
    for points in ["0", "1"] {
        // Act
        let output = Command::new(env!("CARGO_BIN_EXE_closest-pair"))
            .args(["--strategy", "thread", "--points", points])
            .output()
            .unwrap();

        // Assert: rejected before any worker is dispatched
        assert!(!output.status.success(), "--points {} must fail", points);
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(
            stderr.contains("at least two points are required"),
            "stderr: {}",
            stderr
        );
    }
}
