use assert_cmd::{Command, cargo::cargo_bin_cmd};
use predicates::prelude::*;

fn flight_network() -> Command {
    cargo_bin_cmd!("flight-network")
}

#[test]
fn headless_prints_reference_network() {
    flight_network()
        .arg("--headless")
        .assert()
        .success()
        .stdout(predicate::str::contains("V: 1 | E: [1, 5], [1, 4], [1, 2], \n"))
        .stdout(predicate::str::contains(
            "Minimum spanning tree from 1: [[1, 4], [1, 2], [2, 3], [1, 5], [2, 6]] (total distance 17)",
        ));
}

#[test]
fn headless_grows_tree_from_requested_city() {
    flight_network()
        .args(["--headless", "--mst-start", "5"])
        .args(["-f", "1,5,4", "-f", "1,4,1", "-f", "1,2,2", "-f", "4,5,9", "-f", "2,4,3"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Minimum spanning tree from 5: [[5, 1], [1, 4], [1, 2]] (total distance 7)",
        ));
}

#[test]
fn rejected_flights_are_skipped() {
    flight_network()
        .args(["--headless", "-f", "A,B,3", "-f", "B,A,1", "-f", "B,C,-2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("V: A | E: [A, B], \nV: B | E: [B, A], \n"))
        .stdout(predicate::str::contains("V: C").not());
}

#[test]
fn malformed_flight_is_a_usage_error() {
    flight_network()
        .args(["--headless", "-f", "A-B-3"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid flight"));
}
