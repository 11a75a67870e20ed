//! End-to-end checks on a dictionary loaded from disk.

use std::collections::{BTreeSet, HashSet};
use std::fs;

use tempfile::TempDir;
use track_graph::tracking::{Dictionary, Endpoint, Link, Node, NodeIdx};
use track_graph::util::{parse_track_id, parse_track_length};
use track_graph::{
    FilterState, GraphConfig, InitialFilter, TrackingGraph, TraversalPolicy, load_dictionary,
};

// Tracks 7 and 8 have length 2, track 9 has length 5. Track 7 splits into
// track 8 at step 2; track 9 is independent but loops back onto itself.
const DICTIONARY: &str = r#"{
    "spatial_range": ["y", "x"],
    "value_range": ["RX"],
    "number_of_tracks": 3,
    "tracks": [
        {"id": 7, "length": 2, "clusters": [
            {"uuid": 1, "size": 40, "sourcefile": "t0.nc", "geometrical_center": [1.0, 2.0],
             "mode": [1.0, 2.0], "min": [5.0], "max": [40.0], "median": [20.0], "has_margin_points": false},
            {"uuid": 2, "size": 42, "sourcefile": "t1.nc", "geometrical_center": [1.5, 2.5],
             "mode": [1.5, 2.5], "min": [6.0], "max": [41.0], "median": [21.0], "has_margin_points": true}
        ]},
        {"id": 8, "length": 2, "clusters": [
            {"uuid": 3, "size": 12, "sourcefile": "t2.nc"},
            {"uuid": 4, "size": 10, "sourcefile": "t3.nc"}
        ]},
        {"id": 9, "length": 5, "clusters": [
            {"uuid": 10, "size": 5}, {"uuid": 11, "size": 5}, {"uuid": 12, "size": 5},
            {"uuid": 13, "size": 5}, {"uuid": 14, "size": 5}
        ]}
    ],
    "tree": {
        "nodes": [
            {"uuid": 1, "id": 7, "size": 40, "step": 0},
            {"uuid": 2, "id": 7, "size": 42, "step": 1},
            {"uuid": 3, "id": 8, "size": 12, "step": 2},
            {"uuid": 4, "id": 8, "size": 10, "step": 3},
            {"uuid": 10, "id": 9, "size": 5, "step": 10},
            {"uuid": 11, "id": 9, "size": 5, "step": 11},
            {"uuid": 12, "id": 9, "size": 5, "step": 12},
            {"uuid": 13, "id": 9, "size": 5, "step": 13},
            {"uuid": 14, "id": 9, "size": 5, "step": 14}
        ],
        "links": [
            {"source": 1, "target": 2, "type": 0, "id": 7},
            {"source": 2, "target": 3, "type": 1, "id": 7},
            {"source": 3, "target": 4, "type": 0, "id": 8},
            {"source": 10, "target": 11, "type": 0, "id": 9},
            {"source": 11, "target": 12, "type": 0, "id": 9},
            {"source": 12, "target": 13, "type": 0, "id": 9},
            {"source": 13, "target": 14, "type": 0, "id": 9},
            {"source": 14, "target": 10, "type": 2, "id": 9},
            {"source": 4, "target": 500, "type": 1, "id": 8}
        ]
    }
}"#;

fn load(config: GraphConfig, initial: InitialFilter) -> TrackingGraph {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("track-dictionary.json");
    fs::write(&path, DICTIONARY).unwrap();

    let dictionary = load_dictionary(&path).unwrap();
    TrackingGraph::with_filter(dictionary, config, initial)
}

fn uuids(graph: &TrackingGraph) -> Vec<String> {
    graph
        .filtered_nodes()
        .into_iter()
        .map(|node| node.uuid.clone())
        .collect()
}

#[test]
fn links_point_at_the_nodes_with_matching_uuid() {
    let graph = load(GraphConfig::default(), InitialFilter::none());

    for link in graph.links() {
        for endpoint in [&link.source, &link.target] {
            match endpoint {
                Endpoint::Resolved(index) => {
                    let node = graph.node(*index).unwrap();
                    let first = graph
                        .nodes()
                        .iter()
                        .position(|candidate| candidate.uuid == node.uuid)
                        .unwrap();
                    assert_eq!(first, index.0);
                }
                Endpoint::Unresolved(uuid) => {
                    assert_eq!(uuid, "500");
                    assert!(graph.nodes().iter().all(|node| &node.uuid != uuid));
                }
            }
        }
    }
    assert_eq!(graph.dangling_endpoints(), 1);
}

#[test]
fn indexes_are_sorted_and_distinct() {
    let graph = load(GraphConfig::default(), InitialFilter::none());

    assert_eq!(graph.steps(), &[0, 1, 2, 3, 10, 11, 12, 13, 14]);
    assert_eq!(graph.ids(), &[7, 8, 9]);

    let index = graph.track_length_index();
    assert_eq!(index.values(), &[2, 5]);
    for track in graph.tracks() {
        let buckets = index
            .map()
            .iter()
            .filter(|(_, ids)| ids.contains(&track.id))
            .map(|(length, _)| *length)
            .collect::<Vec<_>>();
        assert_eq!(buckets, vec![track.length]);
    }
}

#[test]
fn default_selection_uses_the_smallest_length_class() {
    let graph = load(GraphConfig::default(), InitialFilter::default());

    assert_eq!(graph.filter_state(), FilterState::ByLength { length: 2 });
    let expected = graph
        .linked_nodes_by_id(7)
        .union(&graph.linked_nodes_by_id(8))
        .copied()
        .collect::<HashSet<_>>();
    assert_eq!(graph.linked_nodes(), &expected);
    assert_eq!(uuids(&graph), vec!["1", "2", "3", "4"]);
}

#[test]
fn id_filter_then_clear() {
    let mut graph = load(GraphConfig::default(), InitialFilter::default());

    graph.set_id(Some(7));
    assert_eq!(graph.filter_state(), FilterState::ById { id: 7 });
    assert_eq!(
        graph.filtered_node_indices().into_iter().collect::<HashSet<_>>(),
        graph.linked_nodes_by_id(7)
    );

    graph.set_id(None);
    assert_eq!(graph.filter_state(), FilterState::Unfiltered);
    assert!(graph.linked_nodes().is_empty());
    assert_eq!(uuids(&graph).len(), graph.nodes().len());
}

#[test]
fn looping_track_terminates_and_is_stable() {
    let config = GraphConfig {
        traversal: TraversalPolicy::Unbounded,
        ..GraphConfig::default()
    };
    let graph = load(config, InitialFilter::none());

    let first = graph.linked_nodes_by_id(9);
    let second = graph.linked_nodes_by_id(9);
    assert_eq!(first, second);
    assert_eq!(
        first.iter().map(|index| index.0).collect::<BTreeSet<_>>(),
        (4..9).collect::<BTreeSet<_>>()
    );
}

#[test]
fn links_show_when_either_end_is_linked() {
    let mut graph = load(GraphConfig::default(), InitialFilter::none());
    graph.set_id(Some(8));

    // Track 8 reaches back across the split to track 7, and its dangling
    // link still shows because the resolved end is included.
    let linked = graph.linked_nodes();
    assert!(linked.contains(&NodeIdx(2)));
    assert!(linked.contains(&NodeIdx(1)));

    let shown = graph.filtered_links();
    assert!(shown.iter().any(|link| link.target == Endpoint::Unresolved("500".to_owned())));
    assert!(shown.iter().all(|link| link.id != Some(9)));
}

#[test]
fn uuid_search_and_cluster_details() {
    let mut graph = load(GraphConfig::default(), InitialFilter::none());

    assert_eq!(graph.search(None, Some("13")), Some(9));
    assert_eq!(uuids(&graph), vec!["10", "11", "12", "13", "14"]);

    let node = graph.nodes()[1].clone();
    let cluster = graph.cluster_for_node(&node).unwrap();
    assert_eq!(cluster.sourcefile, "t1.nc");
    assert!(cluster.has_margin_points);
    assert_eq!(cluster.median, vec![21.0]);
}

#[test]
fn malformed_filter_input_means_no_filter() {
    let mut graph = load(GraphConfig::default(), InitialFilter::default());
    assert_eq!(graph.filter_state(), FilterState::ByLength { length: 2 });

    graph.set_id(parse_track_id("abc"));
    assert_eq!(graph.filter_state(), FilterState::Unfiltered);
    assert_eq!(uuids(&graph).len(), graph.nodes().len());

    graph.set_id(Some(9));
    graph.set_track_length(parse_track_length("0"));
    assert_eq!(graph.filter_state(), FilterState::Unfiltered);
    assert_eq!(uuids(&graph).len(), graph.nodes().len());
    assert_eq!(graph.filtered_links().len(), graph.links().len());
}

#[test]
fn out_of_range_handles_are_treated_as_dangling() {
    let dictionary = Dictionary {
        nodes: vec![Node {
            uuid: "a".to_owned(),
            id: 1,
            step: 0,
            size: 1.0,
        }],
        links: vec![Link {
            source: Endpoint::Resolved(NodeIdx(0)),
            target: Endpoint::Resolved(NodeIdx(5)),
            link_type: 1,
            id: None,
        }],
        ..Dictionary::default()
    };

    let graph = TrackingGraph::with_filter(dictionary, GraphConfig::default(), InitialFilter::id(1));

    assert_eq!(graph.dangling_endpoints(), 1);
    assert_eq!(
        graph.linked_nodes_by_id(1).into_iter().collect::<Vec<_>>(),
        vec![NodeIdx(0)]
    );
    assert_eq!(graph.filtered_links().len(), 1);
}
