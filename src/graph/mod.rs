//! The tracking graph: link resolution, navigation indexes and the
//! connectivity filter built on top of them.

use std::collections::HashSet;

use tracing::debug;

use crate::config::GraphConfig;
use crate::tracking::{Dictionary, Link, Node, NodeIdx, Step, Track, TrackId};

mod filter;
mod index;
mod linked;
mod resolve;

pub use filter::FilterState;
pub use index::{LengthClass, TrackLengthIndex};

/// Which selection to apply while the graph is being constructed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InitialFilter {
    /// Select the smallest track-length class that is not larger than
    /// `GraphConfig::max_initial_class_size`.
    #[default]
    SmallestClass,
    Select {
        id: Option<TrackId>,
        length: Option<u32>,
    },
}

impl InitialFilter {
    pub fn none() -> Self {
        Self::Select {
            id: None,
            length: None,
        }
    }

    pub fn id(id: TrackId) -> Self {
        Self::Select {
            id: Some(id),
            length: None,
        }
    }

    pub fn length(length: u32) -> Self {
        Self::Select {
            id: None,
            length: Some(length),
        }
    }
}

#[derive(Clone, Debug)]
pub struct TrackingGraph {
    dictionary: Dictionary,
    config: GraphConfig,
    incident: Vec<Vec<usize>>,
    steps: Vec<Step>,
    ids: Vec<TrackId>,
    track_length_index: TrackLengthIndex,
    dangling_endpoints: usize,
    selected_id: Option<TrackId>,
    selected_track_length: Option<u32>,
    linked_nodes: HashSet<NodeIdx>,
}

impl TrackingGraph {
    pub fn new(dictionary: Dictionary, config: GraphConfig) -> Self {
        Self::with_filter(dictionary, config, InitialFilter::default())
    }

    pub fn with_filter(mut dictionary: Dictionary, config: GraphConfig, initial: InitialFilter) -> Self {
        let resolution = resolve::resolve_links(&dictionary.nodes, &mut dictionary.links);
        let incident = resolve::incident_links(dictionary.nodes.len(), &dictionary.links);

        let (steps, ids) = index::index_nodes(&dictionary.nodes);
        let track_length_index = TrackLengthIndex::build(&dictionary.tracks);
        debug!(
            steps = steps.len(),
            ids = ids.len(),
            length_classes = track_length_index.values().len(),
            "indexed tracking graph"
        );

        let mut graph = Self {
            dictionary,
            config,
            incident,
            steps,
            ids,
            track_length_index,
            dangling_endpoints: resolution.dangling,
            selected_id: None,
            selected_track_length: None,
            linked_nodes: HashSet::new(),
        };
        graph.apply_initial_filter(initial);
        graph
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn nodes(&self) -> &[Node] {
        &self.dictionary.nodes
    }

    pub fn node(&self, index: NodeIdx) -> Option<&Node> {
        self.dictionary.nodes.get(index.0)
    }

    pub fn links(&self) -> &[Link] {
        &self.dictionary.links
    }

    pub fn tracks(&self) -> &[Track] {
        &self.dictionary.tracks
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn ids(&self) -> &[TrackId] {
        &self.ids
    }

    pub fn track_length_index(&self) -> &TrackLengthIndex {
        &self.track_length_index
    }

    pub fn track_length_classes(&self) -> Vec<LengthClass> {
        self.track_length_index.classes()
    }

    /// Number of link endpoints whose uuid matched no node.
    pub fn dangling_endpoints(&self) -> usize {
        self.dangling_endpoints
    }

    pub fn selected_id(&self) -> Option<TrackId> {
        self.selected_id
    }

    pub fn selected_track_length(&self) -> Option<u32> {
        self.selected_track_length
    }

    pub fn linked_nodes(&self) -> &HashSet<NodeIdx> {
        &self.linked_nodes
    }
}
