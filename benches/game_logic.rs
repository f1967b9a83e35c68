use criterion::{black_box, criterion_group, criterion_main, Criterion};
use water_2048::core::{apply_move, has_any_move, slide_line, GameSession, Grid, MemoryStore, Mode};
use water_2048::types::{Direction, BLOCKER};

fn sample_grid() -> Grid {
    Grid::from_rows([
        [2, 2, 4, 8],
        [0, 4, 4, BLOCKER],
        [16, 0, 16, 2],
        [2, 4, 8, 0],
    ])
    .unwrap_or_default()
}

fn bench_slide_line(c: &mut Criterion) {
    c.bench_function("slide_line", |b| {
        b.iter(|| slide_line(black_box([2, 2, 4, 4])))
    });
}

fn bench_apply_move(c: &mut Criterion) {
    let grid = sample_grid();

    c.bench_function("apply_move_all_directions", |b| {
        b.iter(|| {
            for dir in Direction::ALL {
                black_box(apply_move(black_box(&grid), dir));
            }
        })
    });
}

fn bench_has_any_move(c: &mut Criterion) {
    let stuck = Grid::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]])
        .unwrap_or_default();

    c.bench_function("has_any_move_stuck", |b| {
        b.iter(|| has_any_move(black_box(&stuck)))
    });
}

fn bench_session_move(c: &mut Criterion) {
    let mut session = GameSession::new(Mode::Hard, 12345, MemoryStore::default());
    let mut i = 0usize;

    c.bench_function("session_move", |b| {
        b.iter(|| {
            if session.game_over() {
                session.reset(Mode::Hard);
            }
            i = i.wrapping_add(1);
            let _ = session.apply_move(Direction::ALL[i % 4]);
        })
    });
}

criterion_group!(
    benches,
    bench_slide_line,
    bench_apply_move,
    bench_has_any_move,
    bench_session_move
);
criterion_main!(benches);
