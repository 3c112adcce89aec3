use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tui_2048::core::{apply_move, evaluate, spawn_tile, Board, GameSession, SimpleRng};
use tui_2048::types::Direction;

fn mid_game_board() -> Board {
    Board::from_rows([
        [2, 4, 8, 16],
        [32, 0, 2, 4],
        [2, 64, 0, 2],
        [128, 2, 4, 0],
    ])
    .unwrap()
}

fn bench_apply_move(c: &mut Criterion) {
    let board = mid_game_board();
    c.bench_function("apply_move", |b| {
        b.iter(|| {
            for dir in Direction::ALL {
                black_box(apply_move(black_box(&board), dir));
            }
        })
    });
}

fn bench_evaluate(c: &mut Criterion) {
    let board = mid_game_board();
    c.bench_function("evaluate", |b| b.iter(|| black_box(evaluate(black_box(&board)))));
}

fn bench_spawn_tile(c: &mut Criterion) {
    c.bench_function("spawn_tile", |b| {
        let mut rng = SimpleRng::new(42);
        b.iter(|| {
            let mut board = mid_game_board();
            black_box(spawn_tile(&mut board, &mut rng));
        })
    });
}

fn bench_session_step(c: &mut Criterion) {
    c.bench_function("session_step", |b| {
        let mut driver = SimpleRng::new(7);
        b.iter(|| {
            let mut session = GameSession::new(driver.next_u32());
            for _ in 0..8 {
                let dir = Direction::ALL[driver.next_range(4) as usize];
                black_box(session.apply(dir));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_apply_move,
    bench_evaluate,
    bench_spawn_tile,
    bench_session_step
);
criterion_main!(benches);
