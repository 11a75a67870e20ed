use std::sync::Arc;

use parking_lot::Mutex;

use crate::graph::TrackingGraph;
use crate::tracking::TrackId;
use crate::view::GraphView;

/// A graph handle for hosts that drive filters and queries from several
/// threads. Every filter change and every read runs under the same lock.
#[derive(Clone)]
pub struct SharedTrackingGraph {
    inner: Arc<Mutex<TrackingGraph>>,
}

impl SharedTrackingGraph {
    pub fn new(graph: TrackingGraph) -> Self {
        Self {
            inner: Arc::new(Mutex::new(graph)),
        }
    }

    pub fn with_graph<R>(&self, read: impl FnOnce(&TrackingGraph) -> R) -> R {
        let guard = self.inner.lock();
        read(&*guard)
    }

    pub fn update<R>(&self, change: impl FnOnce(&mut TrackingGraph) -> R) -> R {
        let mut guard = self.inner.lock();
        change(&mut *guard)
    }

    pub fn set_id(&self, id: Option<TrackId>) {
        self.update(|graph| graph.set_id(id));
    }

    pub fn set_track_length(&self, length: Option<u32>) {
        self.update(|graph| graph.set_track_length(length));
    }

    pub fn view(&self) -> GraphView {
        self.with_graph(GraphView::from_graph)
    }
}
