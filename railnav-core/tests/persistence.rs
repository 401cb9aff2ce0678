mod common;

use common::fixture_network;
use railnav_core::{
    Error, PersistenceError, find_alternative_routes, find_route, load_network, save_network,
};
use tempfile::tempdir;

#[test]
fn saved_network_answers_the_same_queries() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("network.bin");
    let network = fixture_network();

    save_network(network.graph(), &path).unwrap();
    let loaded = load_network(&path).unwrap();

    assert_eq!(loaded.statistics(), network.statistics());
    assert_eq!(loaded.station_count(), network.station_count());

    let before = find_route(&network, "Hoboken Terminal", "White Plains").unwrap();
    let after = find_route(&loaded, "Hoboken Terminal", "White Plains").unwrap();
    assert_eq!(before, after);

    assert_eq!(
        find_alternative_routes(&network, "Park Slope", "Jamaica Station", 2),
        find_alternative_routes(&loaded, "Park Slope", "Jamaica Station", 2)
    );
}

#[test]
fn overwriting_replaces_the_previous_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("network.bin");
    let network = fixture_network();

    save_network(network.graph(), &path).unwrap();
    save_network(network.graph(), &path).unwrap();
    assert_eq!(load_network(&path).unwrap().graph().node_count(), 18);
}

#[test]
fn truncated_file_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("network.bin");
    save_network(fixture_network().graph(), &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    std::fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();

    assert!(matches!(
        load_network(&path),
        Err(Error::Persistence(PersistenceError::Decode(_)))
    ));
}
