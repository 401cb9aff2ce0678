mod common;

use common::fixture_network;
use railnav_core::search::{FuzzyMatcher, JaroWinklerRatio, resolve_exact};
use railnav_core::{
    EXACT_MATCH_SCORE, Error, MIN_MATCH_SCORE, NodeKind, RailNetwork, resolve_station,
    search_stations,
};

#[test]
fn penn_finds_penn_station_first() {
    let network = fixture_network();
    let matches = search_stations(&network, "Penn", 3);

    assert!(!matches.is_empty());
    assert_eq!(matches[0].station.name, "New York Penn Station");
    assert!(matches[0].score > MIN_MATCH_SCORE);
    assert!(matches.len() <= 3);
}

#[test]
fn search_results_are_above_threshold_and_sorted() {
    let network = fixture_network();
    let matches = search_stations(&network, "terminal", 10);

    let names: Vec<&str> = matches.iter().map(|m| m.station.name.as_str()).collect();
    assert!(names.contains(&"Atlantic Terminal"));
    assert!(names.contains(&"Hoboken Terminal"));
    assert!(matches.iter().all(|m| m.score > MIN_MATCH_SCORE));
    assert!(matches.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn nonsense_matches_nothing() {
    let network = fixture_network();
    assert!(search_stations(&network, "qqqq", 5).is_empty());
}

#[test]
fn exact_names_always_resolve() {
    let network = fixture_network();
    for station in network.stations().iter() {
        let upper = station.name.to_uppercase();
        assert_eq!(resolve_station(&network, &upper).unwrap().id, station.id);
    }
}

#[test]
fn confident_fuzzy_match_resolves() {
    let network = fixture_network();
    let station = resolve_station(&network, "Hoboken").unwrap();
    assert_eq!(station.name, "Hoboken Terminal");
}

#[test]
fn weak_fuzzy_match_does_not_resolve() {
    let network = fixture_network();
    // Best candidate scores 67
    let best = search_stations(&network, "nyc penn", 1);
    assert!(best[0].score < EXACT_MATCH_SCORE);
    assert!(resolve_exact(&network, "nyc penn").is_none());
    assert!(matches!(
        resolve_station(&network, "nyc penn"),
        Err(Error::StationNotFound(_))
    ));
}

#[test]
fn stations_grouped_by_kind() {
    let network = fixture_network();
    let by_kind = network.stations_by_kind();

    assert_eq!(by_kind[&NodeKind::Station].len(), 8);
    assert_eq!(by_kind[&NodeKind::Junction][0].name, "East New York");
    assert_eq!(by_kind[&NodeKind::Halt][0].name, "Park Slope");
    assert_eq!(by_kind[&NodeKind::Station][0].name, "125th Street");
    assert!(!by_kind.contains_key(&NodeKind::TrackPoint));
}

#[test]
fn custom_scorer_changes_ranking_inputs() {
    let graph = fixture_network().into_graph();
    let network =
        RailNetwork::with_matcher(graph, FuzzyMatcher::empty().with_scorer(JaroWinklerRatio));

    let matches = search_stations(&network, "white plans", 1);
    assert_eq!(matches[0].station.name, "White Plains");
    assert!(matches[0].score >= EXACT_MATCH_SCORE);
}
