mod board;
mod bot_controller;
mod game_state;
mod scores;
mod session;
mod session_rng;
mod types;
mod win_detector;

pub use board::{Board, CELL_COUNT};
pub use bot_controller::{BotInput, calculate_minimax_move, calculate_move};
pub use game_state::GameState;
pub use scores::{FileScoreStore, ScoreBoard, ScoreStore};
pub use session::{BOT_MOVE_DELAY, GameBroadcaster, GameSession};
pub use session_rng::SessionRng;
pub use types::{
    Difficulty, GameMode, GameResult, LineOrientation, LinePosition, Mark, WIN_PATTERNS, WinPattern,
};
pub use win_detector::{evaluate, find_winning_move};
