use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use serde_json::Value;

use super::model::{Step, TrackId};

/// Uuids are written as bare numbers by the tracker but may arrive as
/// strings from other producers; both are normalized to a string key.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum RawKey {
    Number(serde_json::Number),
    Text(String),
}

impl RawKey {
    pub(super) fn into_key(self) -> String {
        match self {
            Self::Number(number) => number.to_string(),
            Self::Text(text) => normalize_key(&text),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub(super) struct RawNode {
    pub(super) uuid: RawKey,
    pub(super) id: TrackId,
    pub(super) step: Step,
    #[serde(default)]
    pub(super) size: f64,
}

#[derive(Clone, Debug, Deserialize)]
pub(super) struct RawLink {
    pub(super) source: RawKey,
    pub(super) target: RawKey,
    #[serde(default, rename = "type")]
    pub(super) link_type: i32,
    #[serde(default)]
    pub(super) id: Option<TrackId>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub(super) struct RawTree {
    #[serde(default)]
    pub(super) nodes: Vec<RawNode>,
    #[serde(default)]
    pub(super) links: Vec<RawLink>,
}

#[derive(Clone, Debug, Deserialize)]
pub(super) struct RawCluster {
    pub(super) uuid: RawKey,
    #[serde(default)]
    pub(super) size: f64,
    #[serde(default)]
    pub(super) sourcefile: String,
    #[serde(default)]
    pub(super) geometrical_center: Vec<f64>,
    #[serde(default)]
    pub(super) mode: Vec<f64>,
    #[serde(default)]
    pub(super) min: Vec<f64>,
    #[serde(default)]
    pub(super) max: Vec<f64>,
    #[serde(default)]
    pub(super) median: Vec<f64>,
    #[serde(default)]
    pub(super) has_margin_points: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub(super) struct RawTrack {
    pub(super) id: TrackId,
    pub(super) length: u32,
    #[serde(default)]
    pub(super) clusters: Vec<RawCluster>,
    #[serde(default)]
    pub(super) min: Vec<f64>,
    #[serde(default)]
    pub(super) max: Vec<f64>,
}

#[derive(Clone, Debug, Deserialize)]
pub(super) struct RawDictionary {
    #[serde(default)]
    pub(super) spatial_range: Vec<String>,
    #[serde(default)]
    pub(super) value_range: Vec<String>,
    #[serde(default)]
    pub(super) number_of_tracks: Option<usize>,
    #[serde(default)]
    pub(super) tracks: Vec<RawTrack>,
    pub(super) tree: RawTree,
}

pub(super) fn parse_dictionary_json(raw: &str) -> Result<RawDictionary> {
    let parsed: Value = serde_json::from_str(raw).context("invalid JSON in tracking dictionary")?;
    let object = parsed
        .as_object()
        .ok_or_else(|| anyhow!("unexpected JSON type for tracking dictionary"))?;

    let tree = object
        .get("tree")
        .ok_or_else(|| anyhow!("tracking dictionary has no `tree` entry"))?;
    if !tree.is_object() {
        return Err(anyhow!("`tree` entry in tracking dictionary is not an object"));
    }

    RawDictionary::deserialize(&parsed).context("invalid tracking dictionary layout")
}

pub(crate) fn normalize_key(value: &str) -> String {
    value.trim().to_string()
}
