use criterion::{Criterion, criterion_group, criterion_main};

use tictactoe_core::bot_controller::{BotInput, calculate_move};
use tictactoe_core::{Board, Mark, SessionRng};

fn bench_move_empty_board() {
    let input = BotInput::new(Board::new(), Mark::O);
    let mut session_rng = SessionRng::from_random();
    calculate_move(&input, &mut session_rng);
}

fn bench_move_mid_game() {
    let mut board = Board::new();
    for (index, mark) in [(0, Mark::X), (4, Mark::O), (1, Mark::X), (8, Mark::O)] {
        board.place(index, mark).unwrap();
    }

    let input = BotInput::new(board, Mark::O);
    let mut session_rng = SessionRng::from_random();
    calculate_move(&input, &mut session_rng);
}

fn bot_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("bot_move");

    group.bench_function("empty_board", |b| b.iter(bench_move_empty_board));

    group.bench_function("mid_game", |b| b.iter(bench_move_mid_game));

    group.finish();
}

criterion_group!(benches, bot_bench);
criterion_main!(benches);
