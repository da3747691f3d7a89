use super::board::{Board, CELL_COUNT};
use super::scores::ScoreBoard;
use super::types::{GameResult, Mark};
use super::win_detector::evaluate;

/// One game plus the session counters that outlive it. X always moves first.
#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameResult,
    pub last_move: Option<usize>,
    pub scores: ScoreBoard,
    /// Bumped on every board reset; a deferred bot move computed against an
    /// older generation must be discarded.
    pub generation: u64,
}

impl GameState {
    pub fn new() -> Self {
        Self::with_scores(ScoreBoard::default())
    }

    pub fn with_scores(scores: ScoreBoard) -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: GameResult::InProgress,
            last_move: None,
            scores,
            generation: 0,
        }
    }

    /// Applies a move for the mark whose turn it is. A rejected move leaves
    /// every field untouched; the caller may log the reason and move on.
    pub fn place_mark(&mut self, index: usize) -> Result<(), String> {
        if self.status != GameResult::InProgress {
            return Err("Game is already over".to_string());
        }

        if index >= CELL_COUNT {
            return Err(format!("Cell index {} is out of bounds", index));
        }

        if !self.board.is_empty(index) {
            return Err("Cell is already marked".to_string());
        }

        self.board.place(index, self.current_mark);
        self.last_move = Some(index);

        self.status = evaluate(&self.board);
        match self.status {
            GameResult::InProgress => self.switch_turn(),
            _ => self.scores.record(&self.status),
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        if self.current_mark == Mark::X {
            self.current_mark = Mark::O;
        } else {
            self.current_mark = Mark::X;
        }
    }

    /// Starts the next game of the session, keeping the score counters.
    pub fn reset_board(&mut self) {
        self.board = Board::new();
        self.current_mark = Mark::X;
        self.status = GameResult::InProgress;
        self.last_move = None;
        self.generation += 1;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
