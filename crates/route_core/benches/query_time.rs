use std::time::Instant;

use indicatif::ProgressBar;
use rand::{rngs::StdRng, Rng};
use route_core::{
    search::dijkstra::Dijkstra,
    util::test_graphs::{generate_grid, grid_label},
};

fn main() {
    env_logger::init();
    const ITERATIONS: usize = 1_000;
    const ROWS: usize = 100;
    const COLS: usize = 100;

    let mut rng: StdRng = rand::SeedableRng::seed_from_u64(187);

    let g = generate_grid(ROWS, COLS, || rng.gen_range(1.0..10.0));
    g.print_info();

    let mut dijkstra = Dijkstra::new(&g);

    // (time in μs, locations settled)
    let mut data = Vec::with_capacity(ITERATIONS);

    let pb = ProgressBar::new(ITERATIONS as u64);

    for _ in 0..ITERATIONS {
        let start = grid_label(rng.gen_range(0..ROWS), rng.gen_range(0..COLS));
        let end = grid_label(rng.gen_range(0..ROWS), rng.gen_range(0..COLS));

        let now = Instant::now();
        let route = dijkstra.search(&start, &end);
        let elapsed = now.elapsed().as_micros();

        assert!(route.is_ok(), "grid is connected");
        data.push((elapsed, dijkstra.stats.nodes_settled));
        pb.inc(1);
    }
    pb.finish();

    let avg_time = data.iter().map(|(t, _)| *t).sum::<u128>() / ITERATIONS as u128;
    let avg_settled = data.iter().map(|(_, n)| *n).sum::<usize>() / ITERATIONS;

    println!("Avg. query time: {} μs", avg_time);
    println!("Avg. locations settled: {}", avg_settled);
}
