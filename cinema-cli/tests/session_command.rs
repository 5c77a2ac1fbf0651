//! Integration tests for the interactive session.

mod common;

use common::{TestEnv, SMALL_ROOM_SCRIPT};
use predicates::prelude::*;

#[test]
fn test_small_room_scenario() {
    let env = TestEnv::new();

    env.session(&[], SMALL_ROOM_SCRIPT)
        .assert()
        .success()
        .stdout(predicate::str::contains("Ticket price: $10"))
        .stdout(predicate::str::contains(
            "That ticket has already been purchased!",
        ))
        .stdout(predicate::str::contains("Number of purchased tickets: 2"))
        .stdout(predicate::str::contains("Percentage: 33.33%"))
        .stdout(predicate::str::contains("Current income: $20"))
        .stdout(predicate::str::contains("Potential total income: $60"));
}

#[test]
fn test_run_subcommand_matches_default() {
    let env = TestEnv::new();

    env.session(&["run"], SMALL_ROOM_SCRIPT)
        .assert()
        .success()
        .stdout(predicate::str::contains("Current income: $20"));
}

#[test]
fn test_seat_map_after_purchase() {
    let env = TestEnv::new();

    env.session(&["run", "--rows", "2", "--seats-per-row", "3"], "2\n2\n3\n1\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current availability of seats:"))
        .stdout(predicate::str::contains(" 'A' 'A' 'A'\n 'A' 'A' 'R'"))
        .stdout(predicate::str::contains("ROOM DETAILS").not());
}

#[test]
fn test_ten_by_ten_room_has_no_premium_rows() {
    let env = TestEnv::new();

    env.session(&["run", "--rows", "10", "--seats-per-row", "10"], "2\n10\n10\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ticket price: $10"));
}

#[test]
fn test_back_half_of_large_room_is_premium() {
    let env = TestEnv::new();

    env.session(&["run", "--rows", "60", "--seats-per-row", "1"], "2\n30\n1\n2\n31\n1\n3\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ticket price: $10"))
        .stdout(predicate::str::contains("Ticket price: $12"))
        .stdout(predicate::str::contains("Current income: $22"))
        .stdout(predicate::str::contains("Potential total income: $660"));
}

#[test]
fn test_invalid_dimensions_are_prompted_again() {
    let env = TestEnv::new();

    env.session(&[], "0\n5\n-2\n3\nrows\n1\n1\n0\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Wrong input! Rows and seats must be positive numbers.")
                .count(2),
        )
        .stdout(predicate::str::contains("This is not a whole number."));
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let env = TestEnv::new();

    env.session(&[], "").assert().success();
    env.session(&[], "4\n").assert().success();
    env.session(&["run", "--rows", "3", "--seats-per-row", "3"], "2\n1\n")
        .assert()
        .success();
}

#[test]
fn test_four_also_exits() {
    let env = TestEnv::new();

    env.session(&["run", "--rows", "1", "--seats-per-row", "1"], "4\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("CURRENT STATUS").not());
}

#[test]
fn test_json_statistics() {
    let env = TestEnv::new();

    let output = env
        .session(
            &["--format", "json", "run", "--rows", "2", "--seats-per-row", "3"],
            "3\n0\n",
        )
        .output()
        .expect("Failed to run session");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("Invalid UTF-8 in output");
    let start = stdout.find('{').expect("No JSON document in output");
    let end = stdout.rfind('}').expect("No JSON document in output");
    let metrics: serde_json::Value =
        serde_json::from_str(&stdout[start..=end]).expect("Invalid JSON metrics");

    assert_eq!(metrics["tickets_sold"], 0);
    assert_eq!(metrics["total_seats"], 6);
    assert_eq!(metrics["potential_total_income"], 60);
}

#[test]
fn test_room_from_project_config() {
    let env = TestEnv::new();
    env.write_file("cinema.yaml", "room:\n  rows: 1\n  seats_per_row: 2\n");

    env.session(&[], "1\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter the number of rows:").not())
        .stdout(predicate::str::contains(" 'A' 'A'"));
}

#[test]
fn test_pricing_from_environment() {
    let env = TestEnv::new();

    env.session(&["run", "--rows", "1", "--seats-per-row", "1"], "2\n1\n1\n0\n")
        .env("CINEMA_STANDARD_PRICE", "8")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ticket price: $8"));
}

#[test]
fn test_verbose_logs_sales_to_stderr() {
    let env = TestEnv::new();

    env.session(
        &["--verbose", "run", "--rows", "1", "--seats-per-row", "1"],
        "2\n1\n1\n0\n",
    )
    .assert()
    .success()
    .stdout(predicate::str::contains("sold row").not())
    .stderr(predicate::str::contains("INFO: sold row 1 seat 1 for $10"));
}

#[test]
fn test_unaddressable_room_is_prompted_again() {
    let env = TestEnv::new();

    env.session(&[], "4000000000\n4000000000\n1\n1\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Wrong input! Rows and seats must be positive numbers.",
        ));
}

#[test]
fn test_non_utf8_answer_is_prompted_again() {
    let env = TestEnv::new();

    let mut cmd = env.command();
    cmd.write_stdin(b"\xff\xfe\n1\n1\n\xff\n2\n1\n1\n0\n".to_vec())
        .assert()
        .success()
        .stdout(predicate::str::contains("This is not a whole number."))
        .stdout(predicate::str::contains(
            "Wrong input. Please choose a valid option.",
        ))
        .stdout(predicate::str::contains("Ticket price: $10"));
}
