mod common;

use common::{add_point, fixture_path, fixture_raw, segment, station};
use railnav_core::loading::{BuildReport, PointKind, build_graph, create_rail_graph};
use railnav_core::{NetworkConfig, NodeId, NodeKind, SubdivisionConfig, TrackKind};

#[test]
fn fixture_builds_expected_graph() {
    let (graph, report) = create_rail_graph(&NetworkConfig::new(fixture_path())).unwrap();

    assert_eq!(
        report,
        BuildReport {
            stations: 10,
            track_points: 8,
            edges_written: 17,
            edges_replaced: 0,
            skipped_references: 0,
            malformed_segments: 0,
            long_edges_inspected: 1,
            edges_split: 0,
        }
    );

    let stats = graph.statistics();
    assert_eq!(stats.total_nodes, 18);
    assert_eq!(stats.total_edges, 17);
    assert_eq!(stats.stations, 10);
    assert_eq!(stats.track_points, 8);
    assert_eq!(stats.total_length_km, 167.67);
    assert_eq!(stats.connected_components, 1);

    assert_eq!(graph.count_kind(NodeKind::Junction), 1);
    assert_eq!(graph.count_kind(NodeKind::Halt), 1);
}

#[test]
fn edge_weights_match_endpoint_distance() {
    let (graph, _) = create_rail_graph(&NetworkConfig::new(fixture_path())).unwrap();

    for (a, b, edge) in graph.edges() {
        let expected = graph
            .node(a)
            .unwrap()
            .coordinate
            .distance_km(graph.node(b).unwrap().coordinate);
        assert_eq!(edge.distance_km, expected);
        assert!(edge.distance_km >= 0.0);
    }
}

#[test]
fn raw_statistics_by_kind() {
    let stats = fixture_raw().statistics();
    assert_eq!(stats.total_points, 10);
    assert_eq!(stats.total_segments, 8);
    assert_eq!(stats.point_kinds["station"], 8);
    assert_eq!(stats.point_kinds["junction"], 1);
    assert_eq!(stats.point_kinds["halt"], 1);
    assert_eq!(stats.segment_kinds["rail"], 7);
    assert_eq!(stats.segment_kinds["subway"], 1);
}

#[test]
fn unknown_references_are_tolerated() {
    let mut raw = fixture_raw();
    raw.segments
        .push(segment(3100, &[1006, 9999, 1009], TrackKind::LightRail));

    let (graph, report) = build_graph(&raw, &SubdivisionConfig::default()).unwrap();

    assert_eq!(report.malformed_segments, 1);
    assert_eq!(report.skipped_references, 1);
    let hoboken = graph.node_index(&NodeId::station(1006)).unwrap();
    let wtc = graph.node_index(&NodeId::station(1009)).unwrap();
    assert_eq!(
        graph.edge_between(hoboken, wtc).unwrap().track_kind,
        TrackKind::LightRail
    );
}

#[test]
fn overlapping_segments_keep_the_last_attributes() {
    let mut raw = fixture_raw();
    raw.segments
        .push(segment(3200, &[1002, 2001], TrackKind::Tram));

    let (graph, report) = build_graph(&raw, &SubdivisionConfig::default()).unwrap();

    assert_eq!(report.edges_replaced, 1);
    assert_eq!(graph.edge_count(), 17);
    let herald = graph.node_index(&NodeId::station(1002)).unwrap();
    let track = graph.node_index(&NodeId::track(2001)).unwrap();
    let edge = graph.edge_between(track, herald).unwrap();
    assert_eq!(edge.segment_id, 3200);
    assert_eq!(edge.track_kind, TrackKind::Tram);
}

#[test]
fn very_long_edges_are_split_once() {
    let mut raw = fixture_raw();
    add_point(
        &mut raw,
        station(1012, "Albany-Rensselaer", PointKind::Station, 42.6415, -73.7414),
    );
    raw.segments
        .push(segment(3300, &[1007, 1012], TrackKind::Rail));

    let (graph, report) = build_graph(&raw, &SubdivisionConfig::default()).unwrap();
    assert_eq!(report.long_edges_inspected, 2);
    assert_eq!(report.edges_split, 1);

    let white_plains = graph.node_index(&NodeId::station(1007)).unwrap();
    let albany = graph.node_index(&NodeId::station(1012)).unwrap();
    assert!(graph.edge_between(white_plains, albany).is_none());

    let mid = graph
        .node_index(&NodeId::new("intermediate_station_1007_station_1012"))
        .unwrap();
    let node = graph.node(mid).unwrap();
    assert_eq!(node.kind, NodeKind::Intermediate);
    assert!(!node.is_station());

    for end in [white_plains, albany] {
        let half = graph.edge_between(end, mid).unwrap();
        assert_eq!(half.segment_id, 3300);
        assert_eq!(
            half.distance_km,
            graph
                .node(end)
                .unwrap()
                .coordinate
                .distance_km(node.coordinate)
        );
    }
}

#[test]
fn custom_thresholds_split_more() {
    let subdivision = SubdivisionConfig {
        long_edge_km: 10.0,
        split_edge_km: 12.0,
    };
    let (graph, report) = build_graph(&fixture_raw(), &subdivision).unwrap();

    // 15.66, 13.467, 55.982 and 12.162 km edges
    assert_eq!(report.edges_split, 4);
    assert_eq!(graph.count_kind(NodeKind::Intermediate), 4);
    assert_eq!(graph.edge_count(), 21);
}

#[test]
fn disconnected_islands_are_preserved() {
    let mut raw = fixture_raw();
    add_point(
        &mut raw,
        station(1020, "Montauk", PointKind::Station, 41.0473, -71.9540),
    );
    add_point(
        &mut raw,
        station(1021, "Amagansett", PointKind::Halt, 40.9807, -72.1326),
    );
    raw.segments
        .push(segment(3400, &[1020, 1021], TrackKind::Rail));

    let (graph, _) = build_graph(&raw, &SubdivisionConfig::default()).unwrap();
    assert_eq!(graph.statistics().connected_components, 2);
}
