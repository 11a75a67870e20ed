//! Policies that decide how connectivity queries and filters behave.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_RECURSION_LEVEL: usize = 1;
pub const DEFAULT_MAX_INITIAL_CLASS_SIZE: usize = 20;

/// How far a connectivity query may wander away from its seed track.
///
/// With `DepthLimited`, crossing a continuation link is free and crossing any
/// other link type costs one level. Nodes past `max_depth` are still included
/// in the result but are not expanded further.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TraversalPolicy {
    DepthLimited { max_depth: usize },
    Unbounded,
}

impl Default for TraversalPolicy {
    fn default() -> Self {
        Self::DepthLimited {
            max_depth: DEFAULT_MAX_RECURSION_LEVEL,
        }
    }
}

impl TraversalPolicy {
    pub fn expands(self, level: usize) -> bool {
        match self {
            Self::DepthLimited { max_depth } => level <= max_depth,
            Self::Unbounded => true,
        }
    }
}

/// Which endpoints of a link must be in the linked set for the link to show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum LinkMatch {
    #[default]
    Either,
    Both,
}

/// How an id selection and a track-length selection interact.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum FilterCombination {
    /// Setting one selection clears the other.
    #[default]
    Exclusive,
    /// Both selections stay active and their linked sets are merged.
    Union,
    /// Both selections stay active and only nodes linked to both remain.
    Intersection,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub traversal: TraversalPolicy,
    pub link_match: LinkMatch,
    pub combination: FilterCombination,
    pub max_initial_class_size: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            traversal: TraversalPolicy::default(),
            link_match: LinkMatch::default(),
            combination: FilterCombination::default(),
            max_initial_class_size: DEFAULT_MAX_INITIAL_CLASS_SIZE,
        }
    }
}
