use criterion::{Criterion, criterion_group, criterion_main};
use infsweep_core::*;
use std::hint::black_box;

fn bench_viewport(c: &mut Criterion) {
    let style = DisplayStyle::default();
    let mut group = c.benchmark_group("viewport");

    for (width, height) in [(21, 6), (80, 24), (200, 60)] {
        let viewport = Viewport::new((0, 0), width, height).unwrap();

        group.bench_function(format!("recompute {width}x{height}"), |b| {
            let mut cache = BombCache::new();
            let oracle = SeededOracle::new(12345, 5).unwrap();
            b.iter(|| {
                cache.invalidate();
                black_box(cache.bombs_in(&oracle, black_box(viewport)).len())
            })
        });

        group.bench_function(format!("materialize cached {width}x{height}"), |b| {
            let mut board = new_board(12345, 5, true).unwrap();
            board.check_tile((width as i64 / 2, height as i64 / 2));
            b.iter(|| black_box(board.materialize(black_box(viewport), &style, false)))
        });
    }

    group.finish();
}

fn bench_auto_reveal(c: &mut Criterion) {
    c.bench_function("auto reveal empty field", |b| {
        b.iter(|| {
            let mut board =
                Board::new(BoardConfig::new(1, 0, true).unwrap().with_reveal_limit(2_500)).unwrap();
            board.check_tile((0, 0));
            black_box(board.checked_count())
        })
    });
}

criterion_group!(benches, bench_viewport, bench_auto_reveal);
criterion_main!(benches);
