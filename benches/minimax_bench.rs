use criterion::{Criterion, criterion_group, criterion_main};

use tictactoe_engine::{
    Board, BotInput, Difficulty, GameState, Mark, SessionRng, calculate_minimax_move,
    calculate_move,
};

fn bench_minimax_first_reply() {
    let mut board = Board::new();
    board.place(4, Mark::X);
    let input = BotInput {
        board,
        current_mark: Mark::O,
    };
    calculate_minimax_move(&input);
}

fn bench_minimax_full_game() {
    let mut state = GameState::new();
    let mut rng = SessionRng::new(99);

    while state.status == tictactoe_engine::GameResult::InProgress {
        let difficulty = if state.current_mark == Mark::X {
            Difficulty::Normal
        } else {
            Difficulty::Hard
        };
        let input = BotInput::from_game_state(&state);
        match calculate_move(difficulty, &input, &mut rng) {
            Some(index) => state.place_mark(index).unwrap(),
            None => break,
        }
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.bench_function("first_reply", |b| b.iter(bench_minimax_first_reply));

    group.bench_function("full_game_normal_vs_hard", |b| {
        b.iter(bench_minimax_full_game)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
