//! Serializable snapshot of the filtered graph for rendering front ends.

use serde::Serialize;

use crate::graph::{FilterState, LengthClass, TrackingGraph};
use crate::tracking::{Endpoint, Link, Node, Step, TrackId};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LinkView {
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub link_type: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<TrackId>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphView {
    pub filter: FilterState,
    pub selected_id: Option<TrackId>,
    pub selected_track_length: Option<u32>,
    pub steps: Vec<Step>,
    pub ids: Vec<TrackId>,
    pub track_lengths: Vec<LengthClass>,
    pub nodes: Vec<Node>,
    pub links: Vec<LinkView>,
    pub dangling_endpoints: usize,
}

impl GraphView {
    pub fn from_graph(graph: &TrackingGraph) -> Self {
        let links = graph
            .filtered_links()
            .into_iter()
            .map(|link| link_view(graph, link))
            .collect();

        Self {
            filter: graph.filter_state(),
            selected_id: graph.selected_id(),
            selected_track_length: graph.selected_track_length(),
            steps: graph.steps().to_vec(),
            ids: graph.ids().to_vec(),
            track_lengths: graph.track_length_classes(),
            nodes: graph.filtered_nodes().into_iter().cloned().collect(),
            links,
            dangling_endpoints: graph.dangling_endpoints(),
        }
    }
}

fn link_view(graph: &TrackingGraph, link: &Link) -> LinkView {
    LinkView {
        source: endpoint_uuid(graph, &link.source),
        target: endpoint_uuid(graph, &link.target),
        link_type: link.link_type,
        id: link.id,
    }
}

fn endpoint_uuid(graph: &TrackingGraph, endpoint: &Endpoint) -> String {
    match endpoint {
        Endpoint::Resolved(index) => graph
            .node(*index)
            .map(|node| node.uuid.clone())
            .unwrap_or_default(),
        Endpoint::Unresolved(uuid) => uuid.clone(),
    }
}
