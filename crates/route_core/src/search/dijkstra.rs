use std::collections::BinaryHeap;

use crate::constants::Weight;
use crate::error::RouteError;
use crate::graph::{NodeIndex, RoadGraph, RoadNetwork};
use crate::search::shortest_path::{Route, ShortestPath};
use crate::statistics::SearchStats;
use log::{debug, info};
use rustc_hash::{FxHashMap, FxHashSet};

/// Frontier entry. Ordered so that `BinaryHeap` pops the lowest weight first
/// and, among equal weights, the entry pushed first.
#[derive(Debug)]
pub(crate) struct Candidate {
    pub(crate) node_idx: NodeIndex,
    pub(crate) weight: Weight,
    seq: usize,
}

impl Candidate {
    pub(crate) fn new(node_idx: NodeIndex, weight: Weight, seq: usize) -> Self {
        Self {
            node_idx,
            weight,
            seq,
        }
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Dijkstra search over any [`RoadNetwork`].
///
/// Weights must be non-negative, which [`RoadGraph::add_road`] guarantees.
pub struct Dijkstra<'a, G = RoadGraph> {
    pub stats: SearchStats,
    g: &'a G,
}

impl<'a, G: RoadNetwork> Dijkstra<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        Dijkstra {
            g: graph,
            stats: SearchStats::default(),
        }
    }

    /// Cheapest route from `start` to `end`.
    ///
    /// Fails with [`RouteError::UnknownLocation`] if either label is not part of
    /// the graph (`start` is checked first) and with [`RouteError::NoPath`] if
    /// both are known but not connected.
    pub fn search(&mut self, start: &str, end: &str) -> Result<Route, RouteError> {
        let source = self
            .g
            .location_index(start)
            .ok_or_else(|| RouteError::UnknownLocation(start.to_string()))?;
        let target = self
            .g
            .location_index(end)
            .ok_or_else(|| RouteError::UnknownLocation(end.to_string()))?;

        match self.search_indices(source, target) {
            Some(sp) => Ok(sp.resolve(self.g)),
            None => Err(RouteError::NoPath {
                start: start.to_string(),
                end: end.to_string(),
            }),
        }
    }

    /// Index based search, `None` if `target` cannot be reached from `source`.
    ///
    /// **Panics** if `source` or `target` was not handed out by the searched graph
    pub fn search_indices(&mut self, source: NodeIndex, target: NodeIndex) -> Option<ShortestPath> {
        self.stats.init();

        if source == target {
            self.stats.nodes_settled += 1;
            self.stats.finish();
            return Some(ShortestPath::new(vec![source], 0.0));
        }

        let mut node_data: FxHashMap<NodeIndex, (Weight, Option<NodeIndex>)> = FxHashMap::default();
        node_data.insert(source, (0.0, None));

        let mut settled: FxHashSet<NodeIndex> = FxHashSet::default();

        let mut queue = BinaryHeap::new();
        let mut seq = 0;

        queue.push(Candidate::new(source, 0.0, seq));

        let mut found = false;
        while let Some(Candidate {
            weight, node_idx, ..
        }) = queue.pop()
        {
            // Stale entry, a cheaper one was settled before
            if !settled.insert(node_idx) {
                continue;
            }
            self.stats.nodes_settled += 1;

            if node_idx == target {
                found = true;
                break;
            }

            for (neighbor, edge_weight) in self.g.neighbors_of(node_idx) {
                if settled.contains(&neighbor) {
                    continue;
                }

                let new_distance = weight + edge_weight;
                // Sums of large finite weights may overflow to infinity and
                // must still reach unvisited locations
                let improves = match node_data.get(&neighbor) {
                    None => true,
                    Some((distance, _)) => new_distance < *distance,
                };
                if improves {
                    node_data.insert(neighbor, (new_distance, Some(node_idx)));
                    seq += 1;
                    queue.push(Candidate::new(neighbor, new_distance, seq));
                }
            }
        }
        self.stats.finish();

        let sp = if found {
            super::reconstruct_path(target, &node_data)
        } else {
            None
        };

        if sp.is_some() {
            debug!("Path found: {:?}", sp);
            info!(
                "Path found: {:?}/{} locations settled",
                self.stats.duration.unwrap_or_default(),
                self.stats.nodes_settled
            );
        } else {
            info!(
                "No path found: {:?}/{} locations settled",
                self.stats.duration.unwrap_or_default(),
                self.stats.nodes_settled
            );
        }

        sp
    }
}

/// Runs a single [`Dijkstra`] search on `graph`.
pub fn find_shortest_path<G: RoadNetwork>(
    graph: &G,
    start: &str,
    end: &str,
) -> Result<Route, RouteError> {
    Dijkstra::new(graph).search(start, end)
}
