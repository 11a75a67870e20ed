use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use track_graph::config::{DEFAULT_MAX_INITIAL_CLASS_SIZE, DEFAULT_MAX_RECURSION_LEVEL};
use track_graph::util::{parse_track_id, parse_track_length};
use track_graph::{
    FilterCombination, GraphConfig, GraphView, InitialFilter, LinkMatch, TrackingGraph,
    TraversalPolicy, load_dictionary, logging,
};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    #[arg(long, default_value = "track-dictionary.json")]
    dictionary: PathBuf,

    /// Track id to filter by.
    #[arg(long)]
    id: Option<String>,

    /// Filter by the track of the node with this uuid (ignored when --id is given).
    #[arg(long)]
    uuid: Option<String>,

    /// Track length to filter by.
    #[arg(long)]
    length: Option<String>,

    #[arg(long, default_value_t = DEFAULT_MAX_RECURSION_LEVEL)]
    max_recursion_level: usize,

    /// Follow every link regardless of type.
    #[arg(long)]
    unbounded: bool,

    #[arg(long, default_value_t = DEFAULT_MAX_INITIAL_CLASS_SIZE)]
    max_initial_class_size: usize,

    #[arg(long, value_enum, default_value_t = LinkMatch::Either)]
    link_match: LinkMatch,

    #[arg(long, value_enum, default_value_t = FilterCombination::Exclusive)]
    combine: FilterCombination,

    #[arg(long)]
    pretty: bool,

    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    fn config(&self) -> GraphConfig {
        let traversal = if self.unbounded {
            TraversalPolicy::Unbounded
        } else {
            TraversalPolicy::DepthLimited {
                max_depth: self.max_recursion_level,
            }
        };

        GraphConfig {
            traversal,
            link_match: self.link_match,
            combination: self.combine,
            max_initial_class_size: self.max_initial_class_size,
        }
    }

    // Any filter argument, even a malformed one, replaces the default
    // selection; malformed values then simply select nothing.
    fn initial_filter(&self) -> InitialFilter {
        if self.id.is_none() && self.length.is_none() && self.uuid.is_none() {
            return InitialFilter::SmallestClass;
        }

        InitialFilter::Select {
            id: self.id.as_deref().and_then(parse_track_id),
            length: self.length.as_deref().and_then(parse_track_length),
        }
    }

    fn uuid_query(&self) -> Option<&str> {
        if self.id.is_some() {
            return None;
        }
        self.uuid.as_deref()
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(&args.log_level);

    let dictionary = load_dictionary(&args.dictionary)?;
    let mut graph = TrackingGraph::with_filter(dictionary, args.config(), args.initial_filter());

    if let Some(uuid) = args.uuid_query() {
        graph.search(None, Some(uuid));
    }

    info!(
        state = ?graph.filter_state(),
        nodes = graph.filtered_nodes().len(),
        links = graph.filtered_links().len(),
        "filtered tracking graph"
    );

    let view = GraphView::from_graph(&graph);
    let output = if args.pretty {
        serde_json::to_string_pretty(&view)
    } else {
        serde_json::to_string(&view)
    }
    .context("failed to serialize graph view")?;

    println!("{output}");
    Ok(())
}
