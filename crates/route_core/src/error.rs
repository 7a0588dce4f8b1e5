use thiserror::Error;

use crate::constants::Weight;

/// Errors raised while building a [`RoadGraph`](crate::graph::RoadGraph).
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("invalid weight {weight} for road {from} <=> {to}: must be finite and >= 0")]
    InvalidWeight {
        from: String,
        to: String,
        weight: Weight,
    },
    #[error("failed to read road file: {0}")]
    Csv(#[from] csv::Error),
}

/// Reasons a route search ends without a path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("unknown location '{0}'")]
    UnknownLocation(String),
    #[error("no path from '{start}' to '{end}'")]
    NoPath { start: String, end: String },
}
