use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::tracking::{Node, Step, Track, TrackId};

/// Distinct steps and track ids, each ascending without duplicates.
pub(super) fn index_nodes(nodes: &[Node]) -> (Vec<Step>, Vec<TrackId>) {
    let mut steps = Vec::with_capacity(nodes.len());
    let mut ids = Vec::with_capacity(nodes.len());
    for node in nodes {
        steps.push(node.step);
        ids.push(node.id);
    }

    steps.sort_unstable();
    steps.dedup();
    ids.sort_unstable();
    ids.dedup();
    (steps, ids)
}

/// One bar of the track-length histogram.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LengthClass {
    pub length: u32,
    pub count: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrackLengthIndex {
    values: Vec<u32>,
    map: BTreeMap<u32, BTreeSet<TrackId>>,
}

impl TrackLengthIndex {
    pub fn build(tracks: &[Track]) -> Self {
        let mut map: BTreeMap<u32, BTreeSet<TrackId>> = BTreeMap::new();
        for track in tracks {
            map.entry(track.length).or_default().insert(track.id);
        }
        let values = map.keys().copied().collect();
        Self { values, map }
    }

    /// Distinct track lengths, ascending.
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn map(&self) -> &BTreeMap<u32, BTreeSet<TrackId>> {
        &self.map
    }

    pub fn ids_for_length(&self, length: u32) -> Option<&BTreeSet<TrackId>> {
        self.map.get(&length)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn classes(&self) -> Vec<LengthClass> {
        self.map
            .iter()
            .map(|(length, ids)| LengthClass {
                length: *length,
                count: ids.len(),
            })
            .collect()
    }

    /// The shortest length whose bucket holds at most `max_class_size` tracks,
    /// or the shortest length overall when every bucket is larger.
    pub fn default_length(&self, max_class_size: usize) -> Option<u32> {
        self.map
            .iter()
            .find(|(_, ids)| ids.len() <= max_class_size)
            .map(|(length, _)| *length)
            .or_else(|| self.values.first().copied())
    }
}
