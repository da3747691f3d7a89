pub mod config;
pub mod game;
pub mod logger;

pub use config::{
    ConfigContentProvider, FileContentConfigProvider, GameConfig, GameConfigFile, PlayerNames,
    Validate, load_config,
};
pub use game::{
    BOT_MOVE_DELAY, Board, BotInput, CELL_COUNT, Difficulty, FileScoreStore, GameBroadcaster,
    GameMode, GameResult, GameSession, GameState, Mark, ScoreBoard, ScoreStore, SessionRng,
    WIN_PATTERNS, WinPattern, calculate_minimax_move, calculate_move, evaluate, find_winning_move,
};
