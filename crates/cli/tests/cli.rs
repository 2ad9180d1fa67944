// ABOUTME: Integration tests for the gridstats-cli binary.
// ABOUTME: Tests JSON output against a mock server, circuit statistics, and failure exit codes.

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo::CommandCargoExt;
use httpmock::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn gridstats_cmd() -> Command {
    Command::cargo_bin("gridstats-cli").unwrap()
}

const SEASON_HTML: &str = r#"<!DOCTYPE html>
<html>
<body>
<div class="blocks blocks">
  <table>
    <tr><th>#</th><th>Date</th><th>Grand Prix</th><th>Circuit</th><th></th><th>Winner</th><th>Team</th><th>Laps</th><th>Time</th></tr>
    <tr><td>1</td><td>Mar 20</td><td>Bahrain Grand Prix</td><td>Bahrain International Circuit</td><td></td><td>C. Leclerc</td><td>Ferrari</td><td>57</td><td>1:37:33.584</td></tr>
  </table>
</div>
<div class="blocks blocks2">
  <table>
    <tr><th>#</th><th></th><th>Driver</th><th></th><th>Team</th><th>Points</th></tr>
    <tr><td>1</td><td></td><td>M. Verstappen</td><td></td><td>Red Bull</td><td>454</td></tr>
    <tr><td>2</td><td></td><td>K. Magnussen</td><td></td><td>Haas F1 Team</td><td>25</td></tr>
  </table>
</div>
</body>
</html>"#;

#[test]
fn season_outputs_json_document() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/en/seasons/2022");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(SEASON_HTML);
    });

    gridstats_cmd()
        .arg("2022")
        .arg("--base-url")
        .arg(server.base_url())
        .arg("--compact")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"constructors\""))
        .stdout(predicate::str::contains("M. Verstappen"))
        .stdout(predicate::str::contains("\"Haas\""));
}

#[test]
fn circuits_flag_adds_stats() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/en/seasons/2022");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(SEASON_HTML);
    });

    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("circuits.csv");
    fs::write(
        &csv_path,
        "name,grand_prix,date,circuit_length,number_of_turns,number_of_laps,lat,lon\n\
         Circuit de Monaco,Monaco Grand Prix,29 May 2022,3.337,19,78,43.7347,7.42056\n\
         Silverstone Circuit,British Grand Prix,3 Jul 2022,5.891,18,52,52.0786,-1.01694\n",
    )
    .unwrap();

    gridstats_cmd()
        .arg("2022")
        .arg("--base-url")
        .arg(server.base_url())
        .arg("--circuits")
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"circuit_stats\""))
        .stdout(predicate::str::contains(
            "Silverstone Circuit is the longest circuit",
        ))
        .stdout(predicate::str::contains("\"mean_turns\""));
}

#[test]
fn output_flag_writes_file() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/en/seasons/2022");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(SEASON_HTML);
    });

    let temp_dir = TempDir::new().unwrap();
    let out_path = temp_dir.path().join("season.json");

    gridstats_cmd()
        .arg("2022")
        .arg("--base-url")
        .arg(server.base_url())
        .arg("--output")
        .arg(&out_path)
        .assert()
        .success();

    let written = fs::read_to_string(&out_path).unwrap();
    assert!(written.contains("\"season\": \"2022\""));
}

#[test]
fn http_failure_exits_nonzero() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/en/seasons/2022");
        then.status(503).body("maintenance");
    });

    gridstats_cmd()
        .arg("2022")
        .arg("--base-url")
        .arg(server.base_url())
        .assert()
        .failure()
        .stderr(predicate::str::contains("fetch error"));
}

#[test]
fn invalid_season_exits_nonzero() {
    gridstats_cmd()
        .arg("notayear")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid season"));
}
