use serde::Serialize;

pub type TrackId = u64;
pub type Step = u32;

/// Link type written for a plain continuation of a track.
pub const CONTINUATION: i32 = 0;
pub const SPLIT: i32 = 1;
pub const MERGE: i32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeIdx(pub usize);

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Node {
    pub uuid: String,
    pub id: TrackId,
    pub step: Step,
    pub size: f64,
}

/// One end of a link. Every endpoint starts out `Unresolved` and becomes
/// `Resolved` once a node with the same uuid is found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Unresolved(String),
    Resolved(NodeIdx),
}

impl Endpoint {
    pub fn resolved(&self) -> Option<NodeIdx> {
        match self {
            Self::Resolved(index) => Some(*index),
            Self::Unresolved(_) => None,
        }
    }

    pub fn is_node(&self, index: NodeIdx) -> bool {
        self.resolved() == Some(index)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    Continuation,
    Split,
    Merge,
    Other(i32),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Link {
    pub source: Endpoint,
    pub target: Endpoint,
    pub link_type: i32,
    pub id: Option<TrackId>,
}

impl Link {
    pub fn kind(&self) -> LinkKind {
        match self.link_type {
            CONTINUATION => LinkKind::Continuation,
            SPLIT => LinkKind::Split,
            MERGE => LinkKind::Merge,
            other => LinkKind::Other(other),
        }
    }

    pub fn is_continuation(&self) -> bool {
        self.link_type == CONTINUATION
    }

    /// The node on the other side of this link as seen from `node`, if that
    /// side resolved to a node at all.
    pub fn far_end(&self, node: NodeIdx) -> Option<NodeIdx> {
        if self.source.is_node(node) {
            self.target.resolved()
        } else if self.target.is_node(node) {
            self.source.resolved()
        } else {
            None
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Cluster {
    pub uuid: String,
    pub size: f64,
    pub sourcefile: String,
    pub geometrical_center: Vec<f64>,
    pub mode: Vec<f64>,
    pub min: Vec<f64>,
    pub max: Vec<f64>,
    pub median: Vec<f64>,
    pub has_margin_points: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    pub id: TrackId,
    pub length: u32,
    pub clusters: Vec<Cluster>,
    pub min: Vec<f64>,
    pub max: Vec<f64>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dictionary {
    pub spatial_range: Vec<String>,
    pub value_range: Vec<String>,
    pub number_of_tracks: Option<usize>,
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
    pub tracks: Vec<Track>,
}

impl Dictionary {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }
}
