use crate::constants::Weight;
use crate::error::GraphError;
use log::{debug, info};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::{io::Read, path::Path};

/// Default integer type for node and edge indices
pub type DefaultIdx = u32;

/// Location identifier. Dense index into the location arena of a [`RoadGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(DefaultIdx);

impl NodeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(x as DefaultIdx)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn end() -> Self {
        NodeIndex(DefaultIdx::MAX)
    }
}

impl From<DefaultIdx> for NodeIndex {
    fn from(ix: DefaultIdx) -> Self {
        NodeIndex(ix)
    }
}

/// Short version of `NodeIndex::new`
pub fn node_index(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}

/// Road identifier.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct EdgeIndex(DefaultIdx);

impl EdgeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        EdgeIndex(x as DefaultIdx)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn end() -> Self {
        EdgeIndex(DefaultIdx::MAX)
    }
}

/// A road as it appears in a road file: `source,target,weight`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Road {
    pub source: String,
    pub target: String,
    pub weight: Weight,
}

impl Road {
    pub fn new(source: impl Into<String>, target: impl Into<String>, weight: Weight) -> Self {
        Road {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }
}

/// Bidirectional edge between two interned locations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub source: NodeIndex,
    pub target: NodeIndex,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: NodeIndex, target: NodeIndex, weight: Weight) -> Self {
        Edge {
            source,
            target,
            weight,
        }
    }

    pub(crate) fn reverse(&self) -> Self {
        Edge {
            source: self.target,
            target: self.source,
            weight: self.weight,
        }
    }
}

/// Read access the search engine needs from a road network.
pub trait RoadNetwork {
    /// Index of the location with the given label, `None` if unknown.
    fn location_index(&self, label: &str) -> Option<NodeIndex>;

    /// Label of a location index handed out by this network.
    fn label(&self, node: NodeIndex) -> &str;

    /// Neighbors of `node` with the weight of the connecting road, in insertion order.
    fn neighbors_of(&self, node: NodeIndex) -> impl Iterator<Item = (NodeIndex, Weight)> + '_;
}

/// Undirected, weighted delivery network.
///
/// Locations are interned on first use and never removed. Every road is stored
/// once in `edges` and referenced from the adjacency list of both endpoints,
/// so a neighbor relation always holds in both directions with the same weight.
#[derive(Debug, Clone, Default)]
pub struct RoadGraph {
    pub(crate) adjacency: Vec<Vec<EdgeIndex>>,
    pub(crate) labels: Vec<String>,
    pub(crate) edges: Vec<Edge>,
    index: FxHashMap<String, NodeIndex>,
}

impl RoadGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(num_locations: usize, num_roads: usize) -> Self {
        Self {
            adjacency: Vec::with_capacity(num_locations),
            labels: Vec::with_capacity(num_locations),
            edges: Vec::with_capacity(num_roads),
            index: FxHashMap::with_capacity_and_hasher(num_locations, Default::default()),
        }
    }

    /// Add a bidirectional road between `u` and `v`.
    ///
    /// Unknown endpoints are created. Adding the same road twice keeps both
    /// copies; the search will always settle over the cheaper one.
    ///
    /// Returns [`GraphError::InvalidWeight`] for a negative or non-finite
    /// weight, in which case the graph is left untouched.
    ///
    /// **Panics** if the graph is at the maximum number of roads or locations
    /// for its index type
    pub fn add_road(&mut self, u: &str, v: &str, weight: Weight) -> Result<EdgeIndex, GraphError> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight {
                from: u.to_string(),
                to: v.to_string(),
                weight,
            });
        }

        let edge_idx = EdgeIndex::new(self.edges.len());
        assert!(
            EdgeIndex::end() != edge_idx,
            "Maximum number of roads for index type {} exceeded",
            std::any::type_name::<DefaultIdx>()
        );

        let source = self.add_location(u);
        let target = self.add_location(v);

        self.adjacency[source.index()].push(edge_idx);
        // A self-loop is listed once
        if source != target {
            self.adjacency[target.index()].push(edge_idx);
        }

        self.edges.push(Edge::new(source, target, weight));

        Ok(edge_idx)
    }

    /// Adds all `roads`, stopping at the first invalid one.
    pub fn add_roads(&mut self, roads: impl IntoIterator<Item = Road>) -> Result<(), GraphError> {
        for Road {
            source,
            target,
            weight,
        } in roads
        {
            self.add_road(&source, &target, weight)?;
        }
        Ok(())
    }

    fn add_location(&mut self, label: &str) -> NodeIndex {
        if let Some(idx) = self.index.get(label) {
            return *idx;
        }

        let node_idx = NodeIndex::new(self.labels.len());
        assert!(
            NodeIndex::end() != node_idx,
            "Maximum number of locations for index type {} exceeded",
            std::any::type_name::<DefaultIdx>()
        );

        self.adjacency.push(Vec::new());
        self.labels.push(label.to_string());
        self.index.insert(label.to_string(), node_idx);

        node_idx
    }

    pub fn location_index(&self, label: &str) -> Option<NodeIndex> {
        self.index.get(label).copied()
    }

    /// **Panics** if `node` was not handed out by this graph
    pub fn label(&self, node: NodeIndex) -> &str {
        &self.labels[node.index()]
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Returns an iterator over all locations in the order they were first seen
    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    pub fn num_locations(&self) -> usize {
        self.labels.len()
    }

    pub fn num_roads(&self) -> usize {
        self.edges.len()
    }

    /// Returns an iterator over all roads of the graph
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Neighbors of the location `label`. Empty for an unknown location.
    pub fn neighbors(&self, label: &str) -> Vec<(&str, Weight)> {
        match self.location_index(label) {
            Some(node_idx) => self
                .neighbors_of(node_idx)
                .map(|(neighbor, weight)| (self.label(neighbor), weight))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Roads leaving `node_idx`, oriented so that `source == node_idx`.
    pub fn roads_from(&self, node_idx: NodeIndex) -> impl Iterator<Item = (EdgeIndex, Edge)> + '_ {
        self.adjacency[node_idx.index()].iter().map(move |edge_idx| {
            let edge = &self.edges[edge_idx.index()];
            if edge.source == node_idx {
                (*edge_idx, *edge)
            } else {
                (*edge_idx, edge.reverse())
            }
        })
    }

    pub fn neighbors_of(&self, node_idx: NodeIndex) -> impl Iterator<Item = (NodeIndex, Weight)> + '_ {
        self.roads_from(node_idx)
            .map(|(_, edge)| (edge.target, edge.weight))
    }

    pub fn print_info(&self) {
        println!(
            "RoadGraph:\t#Locations: {}, #Roads: {}",
            self.num_locations(),
            self.num_roads()
        );
    }

    /// Reads a road file with the header `source,target,weight`.
    pub fn from_csv(path: &Path) -> Result<Self, GraphError> {
        info!("Reading roads from {:?}", path);
        let reader = csv::Reader::from_path(path)?;
        Self::read_roads(reader)
    }

    pub fn from_reader<R: Read>(rdr: R) -> Result<Self, GraphError> {
        Self::read_roads(csv::Reader::from_reader(rdr))
    }

    fn read_roads<R: Read>(mut reader: csv::Reader<R>) -> Result<Self, GraphError> {
        let mut g = RoadGraph::new();

        debug!("BEGIN reading roads");
        for result in reader.deserialize() {
            let Road {
                source,
                target,
                weight,
            } = result?;
            g.add_road(&source, &target, weight)?;
        }
        debug!("FINISHED reading roads");

        info!(
            "Graph has {} locations and {} roads",
            g.num_locations(),
            g.num_roads()
        );
        Ok(g)
    }
}

impl RoadNetwork for RoadGraph {
    fn location_index(&self, label: &str) -> Option<NodeIndex> {
        RoadGraph::location_index(self, label)
    }

    fn label(&self, node: NodeIndex) -> &str {
        RoadGraph::label(self, node)
    }

    fn neighbors_of(&self, node: NodeIndex) -> impl Iterator<Item = (NodeIndex, Weight)> + '_ {
        RoadGraph::neighbors_of(self, node)
    }
}

/// Macro to create a road between source and target with a weight
///
/// road!("A", "B", 3.0)
#[macro_export]
macro_rules! road {
    ($source:expr , $target:expr, $weight:expr) => {
        $crate::graph::Road::new($source, $target, $weight)
    };
}

#[cfg(test)]
mod tests {
    use crate::util::test_graphs::city_map;

    use super::*;

    fn assert_symmetric(g: &RoadGraph) {
        for u in g.locations() {
            for (v, w) in g.neighbors(u) {
                assert!(
                    g.neighbors(v).contains(&(u, w)),
                    "{} -> {} ({}) has no reverse",
                    u,
                    v,
                    w
                );
            }
        }
    }

    #[test]
    fn add_road_creates_locations() {
        let mut g = RoadGraph::new();
        g.add_road("Warehouse", "Airport", 15.0).unwrap();

        assert_eq!(g.num_locations(), 2);
        assert_eq!(g.num_roads(), 1);
        assert!(g.contains("Warehouse"));
        assert!(g.contains("Airport"));
        assert_eq!(g.neighbors("Warehouse"), vec![("Airport", 15.0)]);
        assert_eq!(g.neighbors("Airport"), vec![("Warehouse", 15.0)]);
    }

    #[test]
    fn reject_negative_weight() {
        let mut g = RoadGraph::new();
        g.add_road("a", "b", 1.0).unwrap();

        let err = g.add_road("b", "c", -1.0).unwrap_err();
        assert!(matches!(
            err,
            GraphError::InvalidWeight { ref from, ref to, weight }
                if from == "b" && to == "c" && weight == -1.0
        ));

        // Nothing changed
        assert_eq!(g.num_locations(), 2);
        assert_eq!(g.num_roads(), 1);
        assert!(!g.contains("c"));
        assert_eq!(g.neighbors("b"), vec![("a", 1.0)]);
    }

    #[test]
    fn reject_non_finite_weight() {
        let mut g = RoadGraph::new();
        assert!(g.add_road("a", "b", f64::NAN).is_err());
        assert!(g.add_road("a", "b", f64::INFINITY).is_err());
        assert_eq!(g.num_locations(), 0);
    }

    #[test]
    fn zero_weight_is_valid() {
        let mut g = RoadGraph::new();
        assert!(g.add_road("a", "b", 0.0).is_ok());
    }

    #[test]
    fn keep_parallel_roads() {
        let mut g = RoadGraph::new();
        let first = g.add_road("a", "b", 2.0).unwrap();
        let second = g.add_road("a", "b", 1.0).unwrap();

        assert_ne!(first, second);
        assert_eq!(g.num_roads(), 2);
        assert_eq!(g.neighbors("a"), vec![("b", 2.0), ("b", 1.0)]);
        assert_eq!(g.neighbors("b"), vec![("a", 2.0), ("a", 1.0)]);
    }

    #[test]
    fn self_loop_listed_once() {
        let mut g = RoadGraph::new();
        g.add_road("a", "a", 3.0).unwrap();

        assert_eq!(g.num_locations(), 1);
        assert_eq!(g.neighbors("a"), vec![("a", 3.0)]);
    }

    #[test]
    fn unknown_location_has_no_neighbors() {
        let g = city_map();
        assert!(g.neighbors("Moon_Base").is_empty());
        assert!(RoadGraph::new().neighbors("anything").is_empty());
    }

    #[test]
    fn locations_in_first_seen_order() {
        let mut g = RoadGraph::new();
        g.add_roads(vec![road!("c", "a", 1.0), road!("a", "b", 1.0)])
            .unwrap();

        assert_eq!(g.locations().collect::<Vec<_>>(), vec!["c", "a", "b"]);
    }

    #[test]
    fn add_roads_stops_at_invalid() {
        let mut g = RoadGraph::new();
        let res = g.add_roads(vec![
            road!("a", "b", 1.0),
            road!("b", "c", -4.0),
            road!("c", "d", 1.0),
        ]);

        assert!(res.is_err());
        assert_eq!(g.num_roads(), 1);
        assert!(!g.contains("d"));
    }

    #[test]
    fn city_map_is_symmetric() {
        let g = city_map();

        assert_eq!(g.num_locations(), 11);
        assert_eq!(g.num_roads(), 14);
        assert_symmetric(&g);
    }

    #[test]
    fn read_from_csv() {
        let g = RoadGraph::from_csv(
            &Path::new(env!("CARGO_MANIFEST_DIR")).join("test_data/city_roads.csv"),
        )
        .unwrap();

        assert_eq!(g.num_locations(), 11);
        assert_eq!(g.num_roads(), 14);
        assert_eq!(
            g.neighbors("Metro_Station"),
            vec![("Warehouse", 5.0), ("Shopping_Mall", 3.0), ("Point_A", 2.0)]
        );
        assert_symmetric(&g);
    }

    #[test]
    fn read_from_csv_with_negative_weight() {
        let res = RoadGraph::from_csv(
            &Path::new(env!("CARGO_MANIFEST_DIR")).join("test_data/negative_road.csv"),
        );

        assert!(matches!(res, Err(GraphError::InvalidWeight { .. })));
    }

    #[test]
    fn read_from_missing_file() {
        let res = RoadGraph::from_csv(Path::new("does/not/exist.csv"));
        assert!(matches!(res, Err(GraphError::Csv(_))));
    }

    #[test]
    fn read_from_reader() {
        let data = "source,target,weight\na,b,1.5\nb,c,2\n";
        let g = RoadGraph::from_reader(data.as_bytes()).unwrap();

        assert_eq!(g.neighbors("b"), vec![("a", 1.5), ("c", 2.0)]);
    }

    #[test]
    fn read_malformed_weight() {
        let data = "source,target,weight\na,b,fast\n";
        assert!(matches!(
            RoadGraph::from_reader(data.as_bytes()),
            Err(GraphError::Csv(_))
        ));
    }
}
