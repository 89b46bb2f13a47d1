use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockfall::core::{drop_distance, GameState, Grid, PieceKind};
use blockfall::types::{BlockColor, GRID_WIDTH};

fn bench_update(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start(0.0);
    let mut now = 0.0;

    c.bench_function("frame_update", |b| {
        b.iter(|| {
            now += 0.016;
            state.update(black_box(now));
        })
    });
}

fn bench_clear_rows(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut grid = Grid::new();
            for y in 16..20 {
                for x in 0..GRID_WIDTH {
                    grid.set_cell(x, y, Some(BlockColor::Cyan));
                }
            }
            grid.clear_rows(black_box(&[16, 17, 18, 19]));
            grid
        })
    });
}

fn bench_drop_projection(c: &mut Criterion) {
    let grid = Grid::new();
    let shape = PieceKind::I.base_shape();

    c.bench_function("drop_distance", |b| {
        b.iter(|| drop_distance(black_box(&grid), black_box(&shape), 3, 0))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start(0.0);
    state.update(0.016);

    c.bench_function("snapshot", |b| b.iter(|| state.snapshot(black_box(0.032))));
}

criterion_group!(
    benches,
    bench_update,
    bench_clear_rows,
    bench_drop_projection,
    bench_snapshot
);
criterion_main!(benches);
