use super::board::Board;
use super::game_state::GameState;
use super::session_rng::SessionRng;
use super::types::{Difficulty, GameResult, Mark};
use super::win_detector::{evaluate, find_winning_move};

const CENTER: usize = 4;
const CORNERS: [usize; 4] = [0, 2, 6, 8];
const WIN_SCORE: i32 = 10;

/// Snapshot handed to the AI policies; the live game state is never touched
/// during search.
pub struct BotInput {
    pub board: Board,
    pub current_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &GameState) -> Self {
        Self {
            board: state.board.clone(),
            current_mark: state.current_mark,
        }
    }
}

/// Strategy selector. Returns `None` only when the board has no empty cell,
/// which a well-behaved turn controller never asks about.
pub fn calculate_move(
    difficulty: Difficulty,
    input: &BotInput,
    rng: &mut SessionRng,
) -> Option<usize> {
    match difficulty {
        Difficulty::Easy => calculate_random_move(&input.board, rng),
        Difficulty::Normal => calculate_normal_move(input, rng),
        Difficulty::Hard => calculate_minimax_move(input),
    }
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    let moves = board.available_moves();
    rng.pick(&moves).copied()
}

/// Heuristic tier, in strict priority order: complete an own line, block the
/// opponent, take the center, take a random empty corner, else play randomly.
/// Offense is deliberately checked before defense.
fn calculate_normal_move(input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    let bot_mark = input.current_mark;
    let opponent_mark = bot_mark.opponent()?;

    if let Some(index) = find_winning_move(&input.board, bot_mark) {
        return Some(index);
    }

    if let Some(index) = find_winning_move(&input.board, opponent_mark) {
        return Some(index);
    }

    if input.board.is_empty(CENTER) {
        return Some(CENTER);
    }

    let empty_corners: Vec<usize> = CORNERS
        .iter()
        .copied()
        .filter(|&index| input.board.is_empty(index))
        .collect();
    if let Some(&index) = rng.pick(&empty_corners) {
        return Some(index);
    }

    calculate_random_move(&input.board, rng)
}

/// Exhaustive tier: the immediate win/block checks short-circuit, then every
/// remaining cell is scored by minimax. Strictly greater score wins, so equal
/// scores resolve to the lowest index in scan order.
pub fn calculate_minimax_move(input: &BotInput) -> Option<usize> {
    let bot_mark = input.current_mark;
    let opponent_mark = bot_mark.opponent()?;
    let moves = input.board.available_moves();

    if moves.is_empty() {
        return None;
    }

    if let Some(index) = find_winning_move(&input.board, bot_mark) {
        return Some(index);
    }

    if let Some(index) = find_winning_move(&input.board, opponent_mark) {
        return Some(index);
    }

    let mut board = input.board.clone();
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in moves {
        board.place(index, bot_mark);
        // Each root child is searched with a full window, so pruning deeper
        // down never changes which move is returned.
        let score = minimax(&mut board, bot_mark, 0, false, i32::MIN, i32::MAX);
        board.clear(index);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

/// Zero-sum search with the bot as maximizer. Wins score `10 - depth`, losses
/// `depth - 10`, draws 0, so faster wins and slower losses are preferred.
fn minimax(
    board: &mut Board,
    bot_mark: Mark,
    depth: i32,
    is_maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    match evaluate(board) {
        GameResult::Won { mark, .. } => {
            return if mark == bot_mark {
                WIN_SCORE - depth
            } else {
                depth - WIN_SCORE
            };
        }
        GameResult::Draw => return 0,
        GameResult::InProgress => {}
    }

    let moves = board.available_moves();

    if is_maximizing {
        let mut best = i32::MIN;
        for index in moves {
            board.place(index, bot_mark);
            let score = minimax(board, bot_mark, depth + 1, false, alpha, beta);
            board.clear(index);

            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let opponent_mark = bot_mark.opponent().unwrap_or(Mark::X);
        let mut best = i32::MAX;
        for index in moves {
            board.place(index, opponent_mark);
            let score = minimax(board, bot_mark, depth + 1, true, alpha, beta);
            board.clear(index);

            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}
