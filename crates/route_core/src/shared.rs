//! Road graph shared between threads.
//!
//! Searches hold the read lock for their whole duration and may run in
//! parallel. Inserting a road takes the write lock, so no search ever sees a
//! road that is only present in one direction.
use std::sync::Arc;

use parking_lot::RwLock;

use crate::{
    constants::Weight,
    error::{GraphError, RouteError},
    graph::{EdgeIndex, RoadGraph},
    search::{dijkstra::Dijkstra, shortest_path::Route},
};

#[derive(Debug, Clone, Default)]
pub struct SharedRoadGraph {
    inner: Arc<RwLock<RoadGraph>>,
}

impl SharedRoadGraph {
    pub fn new(graph: RoadGraph) -> Self {
        Self {
            inner: Arc::new(RwLock::new(graph)),
        }
    }

    pub fn add_road(&self, u: &str, v: &str, weight: Weight) -> Result<EdgeIndex, GraphError> {
        self.inner.write().add_road(u, v, weight)
    }

    pub fn find_shortest_path(&self, start: &str, end: &str) -> Result<Route, RouteError> {
        let g = self.inner.read();
        Dijkstra::new(&*g).search(start, end)
    }

    pub fn locations(&self) -> Vec<String> {
        self.inner.read().locations().map(str::to_string).collect()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.inner.read().contains(label)
    }

    /// Runs `f` with shared access to the graph.
    pub fn read<T>(&self, f: impl FnOnce(&RoadGraph) -> T) -> T {
        f(&self.inner.read())
    }
}

impl From<RoadGraph> for SharedRoadGraph {
    fn from(graph: RoadGraph) -> Self {
        Self::new(graph)
    }
}
