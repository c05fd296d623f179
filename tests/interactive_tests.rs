//! Integration tests for the interactive navigator session

mod support;

use predicates::prelude::*;
use support::{setup_graph, with_graph};

#[test]
fn test_session_answers_until_exit() {
    let (_dir, graph) = setup_graph();

    with_graph(&graph)
        .arg("--quiet")
        .write_stdin("1 Solar System, Alpha Centauri, Sirius\n4 Sirius, Sirius\n6\n")
        .assert()
        .success()
        .stdout("9 hours\n9 hours\n");
}

#[test]
fn test_session_prints_banner_and_prompt() {
    let (_dir, graph) = setup_graph();

    with_graph(&graph)
        .write_stdin("6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Starting Navigation..."))
        .stdout(predicate::str::contains("[Directed weighted graph: "))
        .stdout(predicate::str::contains(
            "Please enter your mode with corresponding and appropriate parameters: ",
        ));
}

#[test]
fn test_session_survives_bad_commands() {
    let (_dir, graph) = setup_graph();

    with_graph(&graph)
        .arg("--quiet")
        .write_stdin("7 Sirius, Vega\n2\n2 Sirius, Vega, 1\n")
        .assert()
        .success()
        .stdout("1 routes: \n[[Vertex: sirius], [Vertex: vega]]\n");
}

#[test]
fn test_session_reports_errors_on_stderr() {
    let (_dir, graph) = setup_graph();

    with_graph(&graph)
        .write_stdin("5 Sirius, Vega, 0\n6\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("error: Please provide max time >0."));
}

#[test]
fn test_session_ends_at_end_of_input() {
    let (_dir, graph) = setup_graph();

    with_graph(&graph)
        .args(["--format", "json"])
        .write_stdin("4 Solar System, Sirius\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"mode\":\"shortest-route\""));
}

#[test]
fn test_banner_disabled_in_config() {
    let (dir, graph) = setup_graph();
    let config = support::write_file(dir.path(), "navigator.toml", "banner = false\n");

    with_graph(&graph)
        .arg("--config")
        .arg(&config)
        .write_stdin("6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Starting Navigation..."))
        .stdout(predicate::str::contains("[Directed weighted graph: ").not());
}
