//! Indexing and connectivity filtering for cluster tracking graphs.
//!
//! A [`TrackingGraph`] is built once from a tracking dictionary. It resolves
//! link endpoints to nodes, indexes steps, track ids and track lengths, and
//! answers "which nodes are connected to this track" queries that drive the
//! node and link filters of a graph view.

pub mod config;
pub mod graph;
pub mod logging;
pub mod shared;
pub mod tracking;
pub mod util;
pub mod view;

pub use config::{FilterCombination, GraphConfig, LinkMatch, TraversalPolicy};
pub use graph::{FilterState, InitialFilter, LengthClass, TrackLengthIndex, TrackingGraph};
pub use shared::SharedTrackingGraph;
pub use tracking::{Dictionary, load_dictionary, parse_dictionary};
pub use view::GraphView;
