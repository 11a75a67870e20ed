mod load;
mod model;
mod parse;

pub use load::{load_dictionary, parse_dictionary};
pub(crate) use parse::normalize_key;
pub use model::{
    CONTINUATION, Cluster, Dictionary, Endpoint, Link, LinkKind, MERGE, Node, NodeIdx, SPLIT, Step,
    Track, TrackId,
};
