use std::fmt;

use crate::{
    constants::Weight,
    graph::{NodeIndex, RoadNetwork},
};

#[derive(Debug, PartialEq, Clone)]
pub struct ShortestPath {
    pub nodes: Vec<NodeIndex>,
    pub weight: Weight,
}

impl ShortestPath {
    pub fn new(nodes: Vec<NodeIndex>, weight: Weight) -> Self {
        ShortestPath { nodes, weight }
    }

    /// Translates the location indices back into labels of `g`.
    pub fn resolve<G: RoadNetwork>(&self, g: &G) -> Route {
        Route {
            path: self
                .nodes
                .iter()
                .map(|node| g.label(*node).to_string())
                .collect(),
            total_cost: self.weight,
        }
    }
}

/// Cheapest route between two locations, start and end inclusive.
#[derive(Debug, PartialEq, Clone)]
pub struct Route {
    pub path: Vec<String>,
    pub total_cost: Weight,
}

impl Route {
    pub fn start(&self) -> &str {
        &self.path[0]
    }

    pub fn end(&self) -> &str {
        &self.path[self.path.len() - 1]
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.join(" -> "))
    }
}
