use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use super::model::{Cluster, Dictionary, Endpoint, Link, Node, Track};
use super::parse::parse_dictionary_json;

pub fn load_dictionary(path: &Path) -> Result<Dictionary> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read tracking dictionary {}", path.display()))?;

    parse_dictionary(&raw)
        .with_context(|| format!("failed to parse tracking dictionary {}", path.display()))
}

pub fn parse_dictionary(raw: &str) -> Result<Dictionary> {
    let raw = parse_dictionary_json(raw)?;

    let nodes = raw
        .tree
        .nodes
        .into_iter()
        .map(|node| Node {
            uuid: node.uuid.into_key(),
            id: node.id,
            step: node.step,
            size: node.size,
        })
        .collect::<Vec<_>>();

    let links = raw
        .tree
        .links
        .into_iter()
        .map(|link| Link {
            source: Endpoint::Unresolved(link.source.into_key()),
            target: Endpoint::Unresolved(link.target.into_key()),
            link_type: link.link_type,
            id: link.id,
        })
        .collect::<Vec<_>>();

    let tracks = raw
        .tracks
        .into_iter()
        .map(|track| Track {
            id: track.id,
            length: track.length,
            clusters: track
                .clusters
                .into_iter()
                .map(|cluster| Cluster {
                    uuid: cluster.uuid.into_key(),
                    size: cluster.size,
                    sourcefile: cluster.sourcefile,
                    geometrical_center: cluster.geometrical_center,
                    mode: cluster.mode,
                    min: cluster.min,
                    max: cluster.max,
                    median: cluster.median,
                    has_margin_points: cluster.has_margin_points,
                })
                .collect(),
            min: track.min,
            max: track.max,
        })
        .collect::<Vec<_>>();

    // Degenerate tracks may be left out of the list while still counted.
    if let Some(declared) = raw.number_of_tracks
        && declared != tracks.len()
    {
        debug!(
            declared,
            listed = tracks.len(),
            "track count in dictionary header differs from track list"
        );
    }

    debug!(
        nodes = nodes.len(),
        links = links.len(),
        tracks = tracks.len(),
        "parsed tracking dictionary"
    );

    Ok(Dictionary {
        spatial_range: raw.spatial_range,
        value_range: raw.value_range,
        number_of_tracks: raw.number_of_tracks,
        nodes,
        links,
        tracks,
    })
}
