use std::path::{Path, PathBuf};

use clap::Parser;
use railnav::{Cli, CliError, run};
use railnav_core::Error;
use tempfile::TempDir;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("railnav-core/tests/data/sample_network.json")
}

fn run_args(args: &[&str]) -> Result<String, CliError> {
    let cli = Cli::try_parse_from(std::iter::once("railnav").chain(args.iter().copied())).unwrap();
    let mut out = Vec::new();
    run(cli, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

fn build_fixture(dir: &TempDir) -> PathBuf {
    let output = dir.path().join("network.bin");
    run_args(&[
        "build",
        "--input",
        fixture_path().to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ])
    .unwrap();
    output
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn build_reports_and_saves_the_network() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("network.bin");

    let report = run_args(&[
        "build",
        "--input",
        path_arg(&fixture_path()),
        "--output",
        path_arg(&output),
    ])
    .unwrap();

    assert!(output.exists());
    assert!(report.contains("stations:              10"));
    assert!(report.contains("edges:                 17"));
    assert!(report.contains("1 inspected, 0 split"));
}

#[test]
fn info_reads_a_saved_network() {
    let dir = tempfile::tempdir().unwrap();
    let network = build_fixture(&dir);

    let info = run_args(&["info", "--network", path_arg(&network)]).unwrap();
    assert!(info.contains("nodes:                 18"));
    assert!(info.contains("connected components:  1"));
    assert!(info.contains("junction: 1"));
}

#[test]
fn route_lists_waypoints_and_writes_geojson() {
    let dir = tempfile::tempdir().unwrap();
    let network = build_fixture(&dir);
    let geojson = dir.path().join("route.json");

    let text = run_args(&[
        "route",
        "--network",
        path_arg(&network),
        "--from",
        "New York Penn Station",
        "--to",
        "jamaica station",
        "--geojson",
        path_arg(&geojson),
    ])
    .unwrap();

    assert!(text.starts_with("New York Penn Station -> Jamaica Station: "));
    assert!(text.contains("Herald Square (station)"));
    assert!(text.contains("nodes on path: 5"));

    let written = std::fs::read_to_string(&geojson).unwrap();
    assert!(written.contains("FeatureCollection"));
    assert!(written.contains("Herald Square"));
}

#[test]
fn unknown_station_fails() {
    let dir = tempfile::tempdir().unwrap();
    let network = build_fixture(&dir);

    let result = run_args(&[
        "route",
        "--network",
        path_arg(&network),
        "--from",
        "Zzyzx Depot",
        "--to",
        "Jamaica Station",
    ]);
    assert!(matches!(
        result,
        Err(CliError::Core(Error::StationNotFound(_)))
    ));
}

#[test]
fn disconnected_stations_fail_with_no_route() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("islands.json");
    std::fs::write(
        &input,
        r#"{
            "points": [
                {"id": 1, "lat": 41.0473, "lon": -71.9540, "name": "Montauk", "kind": "station"},
                {"id": 2, "lat": 40.9807, "lon": -72.1326, "name": "Amagansett", "kind": "halt"},
                {"id": 3, "lat": 40.7589, "lon": -73.9851, "name": "Penn", "kind": "station"},
                {"id": 4, "lat": 40.7505, "lon": -73.9934, "name": "Herald Square", "kind": "station"}
            ],
            "segments": [
                {"id": 10, "nodes": [1, 2], "kind": "rail"},
                {"id": 11, "nodes": [3, 4], "kind": "subway"}
            ]
        }"#,
    )
    .unwrap();
    let network = dir.path().join("islands.bin");
    run_args(&[
        "build",
        "--input",
        path_arg(&input),
        "--output",
        path_arg(&network),
    ])
    .unwrap();

    let result = run_args(&[
        "route",
        "--network",
        path_arg(&network),
        "--from",
        "Montauk",
        "--to",
        "Herald Square",
    ]);
    assert!(matches!(result, Err(CliError::NoRoute { .. })));
}

#[test]
fn stations_search_nearby_and_listing() {
    let dir = tempfile::tempdir().unwrap();
    let network = build_fixture(&dir);
    let network = path_arg(&network);

    let found = run_args(&["stations", "--network", network, "--query", "penn"]).unwrap();
    assert!(found.lines().next().unwrap().contains("New York Penn Station"));

    let nearby = run_args(&[
        "stations", "--network", network, "--lat", "40.7505", "--lon", "-73.9934", "--radius",
        "0",
    ])
    .unwrap();
    assert_eq!(nearby.lines().count(), 1);
    assert!(nearby.contains("0.00 km  Herald Square"));

    let listing = run_args(&["stations", "--network", network]).unwrap();
    assert!(listing.contains("station (8)"));
    assert!(listing.contains("halt (1)\n  Park Slope"));
    assert!(!listing.contains("more"));
}

#[test]
fn missing_network_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let result = run_args(&[
        "info",
        "--network",
        path_arg(&dir.path().join("absent.bin")),
    ]);
    assert!(matches!(result, Err(CliError::Core(Error::Persistence(_)))));
}
