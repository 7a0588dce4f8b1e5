use crate::{graph::RoadGraph, road};

/// Sample city map with eleven locations.
///
/// Shortest route Warehouse -> Customer_Home costs 12 via
/// Metro_Station, Point_A and Point_B.
pub fn city_map() -> RoadGraph {
    let mut g = RoadGraph::with_capacity(12, 14);

    g.add_roads(vec![
        road!("Warehouse", "Metro_Station", 5.0),
        road!("Warehouse", "Airport", 15.0),
        road!("Metro_Station", "Shopping_Mall", 3.0),
        road!("Metro_Station", "Point_A", 2.0),
        road!("Airport", "Luxury_Hotel", 10.0),
        road!("Airport", "Tech_Park", 12.0),
        road!("Shopping_Mall", "Residential_Zone_1", 4.0),
        road!("Shopping_Mall", "Point_B", 6.0),
        road!("Point_A", "Point_B", 1.0),
        road!("Point_B", "Customer_Home", 4.0),
        road!("Tech_Park", "Customer_Home", 5.0),
        road!("Luxury_Hotel", "Point_C", 5.0),
        road!("Point_C", "Customer_Home", 2.0),
        road!("Residential_Zone_1", "Customer_Home", 8.0),
    ])
    .expect("sample roads have non-negative weights");

    g
}

pub fn generate_disconnected_graph() -> RoadGraph {
    // A - B - C
    // D - E - F
    let mut g = RoadGraph::new();

    g.add_roads(vec![
        road!("A", "B", 1.0),
        road!("B", "C", 1.0),
        road!("D", "E", 3.0),
        road!("E", "F", 1.0),
    ])
    .expect("sample roads have non-negative weights");

    g
}

/// Label of the grid location in row `row` and column `col`.
pub fn grid_label(row: usize, col: usize) -> String {
    format!("{}_{}", row, col)
}

/// `rows` x `cols` grid where every location is connected to its right and
/// lower neighbor. `weight` yields the weight of each road in insertion order.
pub fn generate_grid(rows: usize, cols: usize, mut weight: impl FnMut() -> f64) -> RoadGraph {
    let mut g = RoadGraph::with_capacity(rows * cols, 2 * rows * cols);

    for row in 0..rows {
        for col in 0..cols {
            let here = grid_label(row, col);
            if col + 1 < cols {
                g.add_road(&here, &grid_label(row, col + 1), weight())
                    .expect("grid weights must be non-negative");
            }
            if row + 1 < rows {
                g.add_road(&here, &grid_label(row + 1, col), weight())
                    .expect("grid weights must be non-negative");
            }
        }
    }

    g
}
