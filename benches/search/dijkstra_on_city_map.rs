use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use route_core::{
    search::dijkstra::Dijkstra,
    util::test_graphs::{city_map, generate_grid, grid_label},
};

criterion_group!(benches, city_map_benchmark, grid_benchmark);
criterion_main!(benches);

pub fn city_map_benchmark(c: &mut Criterion) {
    let g = city_map();

    c.bench_with_input(
        BenchmarkId::new("dijkstra_on_city_map", "Warehouse->Customer_Home"),
        &g,
        |b, g| {
            b.iter(|| {
                let mut dijkstra = Dijkstra::new(g);
                dijkstra
                    .search(black_box("Warehouse"), black_box("Customer_Home"))
                    .ok()
            })
        },
    );
}

pub fn grid_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra_on_grid");
    for size in [10, 50, 100].iter() {
        let mut rng = StdRng::seed_from_u64(187);
        let g = generate_grid(*size, *size, || rng.gen_range(1.0..10.0));
        let start = grid_label(0, 0);
        let end = grid_label(size - 1, size - 1);

        group.bench_with_input(BenchmarkId::from_parameter(size), &g, |b, g| {
            b.iter(|| Dijkstra::new(g).search(&start, &end).ok());
        });
    }
    group.finish();
}
