//! Re-exports of the most commonly used items in `route_core`.
pub use crate::error::{GraphError, RouteError};

pub use crate::search;
pub use crate::search::dijkstra::{find_shortest_path, Dijkstra};
pub use crate::search::shortest_path::Route;

pub use crate::graph::{Road, RoadGraph, RoadNetwork};
pub use crate::road;
pub use crate::shared::SharedRoadGraph;
pub use crate::util::test_graphs::city_map;
