use std::collections::HashMap;

use tracing::{debug, warn};

use crate::tracking::{Endpoint, Link, Node, NodeIdx};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(super) struct Resolution {
    pub(super) resolved: usize,
    pub(super) dangling: usize,
}

/// Replaces uuid references with node handles. When several nodes share a
/// uuid the first one in stored order wins.
pub(super) fn resolve_links(nodes: &[Node], links: &mut [Link]) -> Resolution {
    let mut index_by_uuid: HashMap<&str, NodeIdx> = HashMap::with_capacity(nodes.len());
    for (index, node) in nodes.iter().enumerate() {
        index_by_uuid
            .entry(node.uuid.as_str())
            .or_insert(NodeIdx(index));
    }

    let mut resolution = Resolution::default();
    for (link_index, link) in links.iter_mut().enumerate() {
        for endpoint in [&mut link.source, &mut link.target] {
            let uuid = match &*endpoint {
                Endpoint::Resolved(index) if index.0 < nodes.len() => {
                    resolution.resolved += 1;
                    continue;
                }
                // A handle past the node list cannot be followed.
                Endpoint::Resolved(index) => {
                    warn!(
                        link = link_index,
                        node = index.0,
                        "link endpoint points past the node list"
                    );
                    resolution.dangling += 1;
                    *endpoint = Endpoint::Unresolved(String::new());
                    continue;
                }
                Endpoint::Unresolved(uuid) => uuid,
            };

            if let Some(&index) = index_by_uuid.get(uuid.as_str()) {
                *endpoint = Endpoint::Resolved(index);
                resolution.resolved += 1;
            } else {
                warn!(link = link_index, uuid = %uuid, "link endpoint matches no node");
                resolution.dangling += 1;
            }
        }
    }

    debug!(
        resolved = resolution.resolved,
        dangling = resolution.dangling,
        "resolved link endpoints"
    );
    resolution
}

/// Per node, the links touching it in stored link order. A self loop is
/// listed once.
pub(super) fn incident_links(node_count: usize, links: &[Link]) -> Vec<Vec<usize>> {
    let mut incident = vec![Vec::new(); node_count];
    for (link_index, link) in links.iter().enumerate() {
        let source = link.source.resolved();
        let target = link.target.resolved();

        if let Some(source) = source {
            incident[source.0].push(link_index);
        }
        if let Some(target) = target
            && source != Some(target)
        {
            incident[target.0].push(link_index);
        }
    }
    incident
}
