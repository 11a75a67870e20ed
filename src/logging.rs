//! Log output for the command-line front end.
//!
//! Logs go to stderr so stdout carries only the JSON view. `RUST_LOG`
//! takes precedence over the level passed on the command line:
//! ```bash
//! RUST_LOG=track_graph=debug track-graph --dictionary track-dictionary.json
//! ```

use std::sync::Once;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: Once = Once::new();

/// Installs the global subscriber. Only the first call has an effect.
pub fn init(default_level: &str) {
    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(default_level)
        };

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_level(true)
            .with_writer(std::io::stderr)
            .with_filter(filter);

        tracing_subscriber::registry().with(fmt_layer).init();
    });
}
