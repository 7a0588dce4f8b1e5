//! Crate to plan delivery routes on a road network.
//!
//! # Basic usage
//! ```
//! use route_core::prelude::*;
//!
//! // Create a new graph
//! let mut g = RoadGraph::new();
//! g.add_road("Warehouse", "Metro_Station", 5.0).unwrap();
//! g.add_road("Metro_Station", "Customer_Home", 7.0).unwrap();
//!
//! // Negative travel times are rejected
//! assert!(g.add_road("Warehouse", "Customer_Home", -1.0).is_err());
//!
//! // Search
//! let route = find_shortest_path(&g, "Warehouse", "Customer_Home").unwrap();
//! assert_eq!(route.total_cost, 12.0);
//! assert_eq!(route.to_string(), "Warehouse -> Metro_Station -> Customer_Home");
//!
//! assert!(matches!(
//!     find_shortest_path(&g, "Warehouse", "Airport"),
//!     Err(RouteError::UnknownLocation(_))
//! ));
//!```
//! [`RoadGraph`]: crate::graph::RoadGraph
pub mod constants;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod search;
pub mod shared;
pub mod statistics;
pub mod util;
