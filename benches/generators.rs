use criterion::{criterion_group, criterion_main, Criterion};
use maze_carver::{
    generators,
    grid_dimensions::GridDimensions,
    layout::{LayoutOptions, MazeLayout},
    units::{ColumnsCount, RowsCount},
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

fn bench_recursive_backtracker_maze_32(c: &mut Criterion) {
    let dimensions = GridDimensions::new(RowsCount(32), ColumnsCount(32)).unwrap();
    let mut rng = XorShiftRng::seed_from_u64(32);
    c.bench_function("recursive_backtracker_maze_32", move |b| {
        b.iter(|| generators::recursive_backtracker(&dimensions, &mut rng))
    });
}

fn bench_recursive_backtracker_maze_350(c: &mut Criterion) {
    let dimensions = GridDimensions::new(RowsCount(350), ColumnsCount(350)).unwrap();
    let mut rng = XorShiftRng::seed_from_u64(350);
    c.bench_function("recursive_backtracker_maze_350", move |b| {
        b.iter(|| generators::recursive_backtracker(&dimensions, &mut rng))
    });
}

fn bench_maze_layout_32(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(33);
    let maze = generators::generate(32, 32, &mut rng).unwrap();
    let options = LayoutOptions::default();
    c.bench_function("maze_layout_32", move |b| {
        b.iter(|| MazeLayout::new(&maze, &options))
    });
}

criterion_group!(
    benches,
    bench_recursive_backtracker_maze_32,
    bench_recursive_backtracker_maze_350,
    bench_maze_layout_32
);
criterion_main!(benches);
