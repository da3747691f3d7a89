use super::board::Board;
use super::types::{GameResult, Mark, WIN_PATTERNS};

/// Classifies a board. Patterns are scanned in `WIN_PATTERNS` order and the
/// first completed line wins, which makes the result deterministic even on
/// boards no legal game can reach.
pub fn evaluate(board: &Board) -> GameResult {
    for pattern in &WIN_PATTERNS {
        let [a, b, c] = pattern.cells;
        let mark = board.get(a);
        if mark != Mark::Empty && mark == board.get(b) && mark == board.get(c) {
            return GameResult::Won {
                mark,
                pattern: *pattern,
            };
        }
    }

    if board.is_full() {
        GameResult::Draw
    } else {
        GameResult::InProgress
    }
}

/// Finds a cell that completes a line for `mark` this move: the first pattern
/// in scan order holding exactly two of `mark` plus one empty cell.
pub fn find_winning_move(board: &Board, mark: Mark) -> Option<usize> {
    for pattern in &WIN_PATTERNS {
        let mut own = 0;
        let mut empty = None;
        for &index in &pattern.cells {
            let cell = board.get(index);
            if cell == mark {
                own += 1;
            } else if cell == Mark::Empty {
                empty = Some(index);
            }
        }
        if own == 2 {
            if let Some(index) = empty {
                return Some(index);
            }
        }
    }
    None
}
