use assert_cmd::Command;
use predicates::prelude::*;

fn solver() -> Command {
    let mut cmd = Command::cargo_bin("solver").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn first_board_alone_combines_its_modes() {
    solver()
        .args(["--catalog-size", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("UBPe1p (Cost: $10.00):\n  Mode 1: 3L + 3N\n  Mode 2: 6L + 2D\n"))
        .stdout(predicate::str::contains("Possible solutions (capped at 1):"))
        .stdout(predicate::str::contains("Solution 1: UBPe1pm1 + UBPe1pm2 (Total Cost: $10.00)"))
        .stdout(predicate::str::contains("Rank 1: UBPe1pm1 + UBPe1pm2 (Total Cost: $10.00)"));
}

#[test]
fn exclusive_modes_rule_out_the_pair() {
    solver()
        .args(["--catalog-size", "1", "--exclusive-modes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No solutions found."))
        .stdout(predicate::str::contains("Rank").not());
}

#[test]
fn custom_boards_join_the_catalog() {
    solver()
        .args(["--catalog-size", "2", "-r", "6L + 3N + 2D", "-b", "3L + 3N", "-c", "10"])
        .args(["--custom", "Big=6L + 2D@8.00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Solution 1: Bigm1 + UBPe1pm1 (Total Cost: $18.00)"));
}

#[test]
fn bad_requirement_is_reported() {
    solver()
        .args(["--catalog-size", "1", "-r", "6L + 3X"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid character entered in the requirements"))
        .stderr(predicate::str::contains("invalid category 'X'"));
}

#[test]
fn cost_out_of_range_is_reported() {
    solver()
        .args(["--catalog-size", "1", "-c", "25"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be between $5.00 and $20.00"));
}

#[test]
fn seeded_runs_repeat() {
    let run = || solver()
        .args(["--seed", "1234", "--randomize", "--max-solutions", "20"])
        .output()
        .unwrap()
        .stdout;
    assert_eq!(run(), run());
}
