use std::collections::HashSet;

use tracing::debug;

use crate::config::TraversalPolicy;
use crate::tracking::{NodeIdx, TrackId};

use super::TrackingGraph;

struct Frame {
    node: NodeIdx,
    level: usize,
    cursor: usize,
}

impl TrackingGraph {
    pub fn nodes_with_id(&self, id: TrackId) -> Vec<NodeIdx> {
        self.dictionary
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.id == id)
            .map(|(index, _)| NodeIdx(index))
            .collect()
    }

    /// All nodes connected to any node of track `id`, following links in
    /// both directions under the configured traversal policy.
    pub fn linked_nodes_by_id(&self, id: TrackId) -> HashSet<NodeIdx> {
        let mut linked = HashSet::new();
        for root in self.nodes_with_id(id) {
            self.collect_linked_nodes(root, &mut linked);
        }
        debug!(id, linked = linked.len(), "collected linked nodes");
        linked
    }

    pub fn linked_nodes_by_length(&self, length: u32) -> HashSet<NodeIdx> {
        let mut linked = HashSet::new();
        if let Some(ids) = self.track_length_index.ids_for_length(length) {
            for &id in ids {
                linked.extend(self.linked_nodes_by_id(id));
            }
        }
        linked
    }

    // Depth-first in stored link order with an explicit stack. A node that is
    // already in `linked` is never expanded again, even when reached later at
    // a lower level.
    fn collect_linked_nodes(&self, root: NodeIdx, linked: &mut HashSet<NodeIdx>) {
        let policy = self.config.traversal;
        if !linked.insert(root) || !policy.expands(0) {
            return;
        }

        let mut stack = vec![Frame {
            node: root,
            level: 0,
            cursor: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let Some(&link_index) = self.incident[frame.node.0].get(frame.cursor) else {
                stack.pop();
                continue;
            };
            frame.cursor += 1;
            let (node, level) = (frame.node, frame.level);

            let link = &self.dictionary.links[link_index];
            let Some(next) = link.far_end(node) else {
                continue;
            };

            let next_level = match policy {
                TraversalPolicy::DepthLimited { .. } if !link.is_continuation() => level + 1,
                _ => level,
            };

            if linked.insert(next) && policy.expands(next_level) {
                stack.push(Frame {
                    node: next,
                    level: next_level,
                    cursor: 0,
                });
            }
        }
    }
}
