use std::collections::HashSet;

use serde::Serialize;
use tracing::info;

use crate::config::{FilterCombination, LinkMatch};
use crate::tracking::{Cluster, Endpoint, Link, Node, NodeIdx, TrackId, normalize_key};

use super::{InitialFilter, TrackingGraph};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FilterState {
    Unfiltered,
    ById { id: TrackId },
    ByLength { length: u32 },
    Combined { id: TrackId, length: u32 },
}

impl TrackingGraph {
    pub(super) fn apply_initial_filter(&mut self, initial: InitialFilter) {
        let (id, length) = match initial {
            InitialFilter::SmallestClass => (
                None,
                self.track_length_index
                    .default_length(self.config.max_initial_class_size),
            ),
            InitialFilter::Select { id, length } => (id, length),
        };

        match self.config.combination {
            // An explicit id outranks a length when only one may be active.
            FilterCombination::Exclusive if id.is_some() => self.set_id(id),
            FilterCombination::Exclusive => self.set_track_length(length),
            FilterCombination::Union | FilterCombination::Intersection => {
                self.selected_id = id;
                self.selected_track_length = length;
                self.recompute_linked_nodes();
            }
        }
    }

    /// Filters by track id. `None` leaves id filtering; in exclusive mode it
    /// also drops any length selection.
    pub fn set_id(&mut self, id: Option<TrackId>) {
        self.selected_id = id;
        if self.config.combination == FilterCombination::Exclusive {
            self.selected_track_length = None;
        }
        self.recompute_linked_nodes();
        info!(
            id = ?self.selected_id,
            linked = self.linked_nodes.len(),
            "filter by id"
        );
    }

    /// Filters by track length. `None` leaves length filtering; in exclusive
    /// mode it also drops any id selection.
    pub fn set_track_length(&mut self, length: Option<u32>) {
        self.selected_track_length = length;
        if self.config.combination == FilterCombination::Exclusive {
            self.selected_id = None;
        }
        self.recompute_linked_nodes();
        info!(
            length = ?self.selected_track_length,
            linked = self.linked_nodes.len(),
            "filter by track length"
        );
    }

    /// Filters by `id` when given, otherwise by the track of the node with
    /// `uuid`. Returns the id that ended up selected. When neither names a
    /// track, including a uuid that matches no node, the current selection
    /// is left as it is and `None` is returned.
    pub fn search(&mut self, id: Option<TrackId>, uuid: Option<&str>) -> Option<TrackId> {
        let id = id.or_else(|| uuid.and_then(|uuid| self.find_id_for_uuid(uuid)))?;
        self.set_id(Some(id));
        Some(id)
    }

    fn recompute_linked_nodes(&mut self) {
        let by_id = self.selected_id.map(|id| self.linked_nodes_by_id(id));
        let by_length = self
            .selected_track_length
            .map(|length| self.linked_nodes_by_length(length));

        self.linked_nodes = match (by_id, by_length) {
            (Some(by_id), Some(by_length))
                if self.config.combination == FilterCombination::Intersection =>
            {
                by_id.intersection(&by_length).copied().collect()
            }
            (Some(mut by_id), Some(by_length)) => {
                by_id.extend(by_length);
                by_id
            }
            (Some(linked), None) | (None, Some(linked)) => linked,
            (None, None) => HashSet::new(),
        };
    }

    pub fn filter_state(&self) -> FilterState {
        match (self.selected_id, self.selected_track_length) {
            (None, None) => FilterState::Unfiltered,
            (Some(id), None) => FilterState::ById { id },
            (None, Some(length)) => FilterState::ByLength { length },
            (Some(id), Some(length)) => FilterState::Combined { id, length },
        }
    }

    pub fn is_filter_active(&self) -> bool {
        self.selected_id.is_some() || self.selected_track_length.is_some()
    }

    pub fn node_filter(&self, index: NodeIdx) -> bool {
        !self.is_filter_active() || self.linked_nodes.contains(&index)
    }

    pub fn link_filter(&self, link: &Link) -> bool {
        if !self.is_filter_active() {
            return true;
        }

        let included = |endpoint: &Endpoint| {
            endpoint
                .resolved()
                .is_some_and(|index| self.linked_nodes.contains(&index))
        };
        match self.config.link_match {
            LinkMatch::Either => included(&link.source) || included(&link.target),
            LinkMatch::Both => included(&link.source) && included(&link.target),
        }
    }

    pub fn filtered_node_indices(&self) -> Vec<NodeIdx> {
        (0..self.dictionary.nodes.len())
            .map(NodeIdx)
            .filter(|index| self.node_filter(*index))
            .collect()
    }

    pub fn filtered_nodes(&self) -> Vec<&Node> {
        self.dictionary
            .nodes
            .iter()
            .enumerate()
            .filter(|(index, _)| self.node_filter(NodeIdx(*index)))
            .map(|(_, node)| node)
            .collect()
    }

    pub fn filtered_links(&self) -> Vec<&Link> {
        self.dictionary
            .links
            .iter()
            .filter(|link| self.link_filter(link))
            .collect()
    }

    pub fn find_id_for_uuid(&self, uuid: &str) -> Option<TrackId> {
        let uuid = normalize_key(uuid);
        self.dictionary
            .nodes
            .iter()
            .find(|node| node.uuid == uuid)
            .map(|node| node.id)
    }

    /// Detail record for `node`, looked up through the tracks sharing its id.
    pub fn cluster_for_node(&self, node: &Node) -> Option<&Cluster> {
        self.dictionary
            .tracks
            .iter()
            .filter(|track| track.id == node.id)
            .flat_map(|track| track.clusters.iter())
            .find(|cluster| cluster.uuid == node.uuid)
    }
}
