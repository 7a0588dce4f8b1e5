use rustc_hash::FxHashMap;

use crate::{constants::Weight, graph::NodeIndex};

use self::shortest_path::ShortestPath;

pub mod dijkstra;
pub mod shortest_path;

/// Walks the predecessor chain stored in `node_data` back from `target`.
///
/// `node_data` maps each reached location to its best known cost and the
/// location it was reached from; the start has no predecessor.
pub fn reconstruct_path(
    target: NodeIndex,
    node_data: &FxHashMap<NodeIndex, (Weight, Option<NodeIndex>)>,
) -> Option<ShortestPath> {
    let (weight, mut previous_node) = *node_data.get(&target)?;
    let mut path = vec![target];

    while let Some(prev_node) = previous_node {
        path.push(prev_node);
        previous_node = node_data.get(&prev_node)?.1;
    }
    path.reverse();
    Some(ShortestPath::new(path, weight))
}

#[cfg(test)]
pub(crate) fn assert_path(
    expected_path: Vec<&str>,
    expected_weight: Weight,
    route: Result<shortest_path::Route, crate::error::RouteError>,
) {
    let route = route.expect("expected a route");
    assert_eq!(expected_path, route.path);
    approx::assert_relative_eq!(expected_weight, route.total_cost);
}

#[cfg(test)]
pub(crate) fn assert_no_path(route: Result<shortest_path::Route, crate::error::RouteError>) {
    assert!(
        matches!(route, Err(crate::error::RouteError::NoPath { .. })),
        "expected no path, got {:?}",
        route
    );
}

#[cfg(test)]
pub(crate) fn assert_unknown(label: &str, route: Result<shortest_path::Route, crate::error::RouteError>) {
    assert_eq!(Err(crate::error::RouteError::UnknownLocation(label.to_string())), route);
}
