use criterion::{
    Criterion,
    criterion_group,
    criterion_main
};
use maze_carver::cells::Cell;
use maze_carver::generators;
use maze_carver::maze::Maze;
use maze_carver::pathing;
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

type CellDistances = pathing::Distances<u32>;

fn large_maze() -> Maze {
    let mut rng = XorShiftRng::seed_from_u64(350);
    generators::generate(350, 350, &mut rng).unwrap()
}

fn bench_distances(c: &mut Criterion) {
    c.bench_function("distances", |b| {
        let maze = large_maze();
        let start_coord = Cell::new(250, 250);
        b.iter(|| CellDistances::new(&maze, start_coord))
    });
}

fn bench_furthest_points(c: &mut Criterion) {
    c.bench_function("furthest_points", |b| {
        let maze = large_maze();
        let start_coord = Cell::new(250, 250);
        let distances = CellDistances::new(&maze, start_coord).unwrap();
        b.iter(|| distances.furthest_points_on_grid())
    });
}

fn bench_shortest_path(c: &mut Criterion) {
    c.bench_function("shortest_path", |b| {
        let maze = large_maze();
        let start_coord = Cell::new(250, 250);
        let distances = CellDistances::new(&maze, start_coord).unwrap();
        let end_coord = Cell::new(0, 0);
        b.iter(|| pathing::shortest_path(&maze, &distances, end_coord))
    });
}

fn bench_passage_graph(c: &mut Criterion) {
    c.bench_function("passage_graph", |b| {
        let maze = large_maze();
        b.iter(|| maze.is_perfect())
    });
}

criterion_group!(benches,
    bench_distances,
    bench_furthest_points,
    bench_shortest_path,
    bench_passage_graph
);
criterion_main!(benches);
