use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use crate::config::GameConfig;
use crate::log;

use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::game_state::GameState;
use super::scores::{ScoreBoard, ScoreStore};
use super::session_rng::SessionRng;
use super::types::{GameMode, GameResult, Mark};

/// Cosmetic pause before the computer's reply lands, so the UI can show the
/// human's move first. Not a timeout; correctness never depends on it.
pub const BOT_MOVE_DELAY: Duration = Duration::from_millis(500);

/// Sink for the engine's outbound notifications. The rendering collaborator
/// implements this; the engine never draws anything itself.
pub trait GameBroadcaster: Send + Sync {
    /// Emitted after every accepted move and after a board reset.
    fn board_changed(&self, board: &Board);
    /// Emitted after every non-terminal move.
    fn turn_changed(&self, next_mark: Mark);
    /// Emitted exactly once per game, when a terminal state is entered.
    fn game_ended(&self, result: &GameResult);
}

/// One running game session: the state machine plus its collaborators. All
/// transitions run to completion under the state lock; no two moves ever
/// apply concurrently.
pub struct GameSession<B: GameBroadcaster, S: ScoreStore + Send + Sync> {
    pub config: GameConfig,
    pub game_state: Arc<Mutex<GameState>>,
    pub rng: Arc<Mutex<SessionRng>>,
    broadcaster: Arc<B>,
    score_store: Arc<S>,
}

impl<B: GameBroadcaster, S: ScoreStore + Send + Sync> Clone for GameSession<B, S> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            game_state: Arc::clone(&self.game_state),
            rng: Arc::clone(&self.rng),
            broadcaster: Arc::clone(&self.broadcaster),
            score_store: Arc::clone(&self.score_store),
        }
    }
}

impl<B: GameBroadcaster, S: ScoreStore + Send + Sync> GameSession<B, S> {
    /// Starts a new session from `config`, rehydrating the score counters
    /// from the store when it has anything usable.
    pub fn start_new_game(config: GameConfig, broadcaster: B, score_store: S) -> Self {
        Self::with_rng(config, broadcaster, score_store, SessionRng::from_random())
    }

    pub fn with_rng(config: GameConfig, broadcaster: B, score_store: S, rng: SessionRng) -> Self {
        let scores = score_store.load().unwrap_or_default();
        Self {
            config,
            game_state: Arc::new(Mutex::new(GameState::with_scores(scores))),
            rng: Arc::new(Mutex::new(rng)),
            broadcaster: Arc::new(broadcaster),
            score_store: Arc::new(score_store),
        }
    }

    /// Applies a human move. Rejected submissions (occupied cell, finished
    /// game) are logged no-ops. In AI mode an accepted move that leaves the
    /// game open hands the turn to the computer, whose reply lands after
    /// `BOT_MOVE_DELAY`.
    pub async fn submit_move(&self, index: usize) {
        let bot_generation = {
            let mut state = self.game_state.lock().await;
            if let Err(err) = state.place_mark(index) {
                log!("Rejected move at {}: {}", index, err);
                return;
            }
            self.after_move(&state)
        };

        if let Some(generation) = bot_generation {
            self.play_bot_turn(generation).await;
        }
    }

    /// Discards the current board and starts the next game; the score
    /// counters survive. Any bot reply still pending against the old board
    /// is invalidated by the generation bump.
    pub async fn reset_board(&self) {
        let mut state = self.game_state.lock().await;
        state.reset_board();
        self.broadcaster.board_changed(&state.board);
        self.broadcaster.turn_changed(state.current_mark);
    }

    pub async fn status(&self) -> GameResult {
        self.game_state.lock().await.status
    }

    pub async fn scores(&self) -> ScoreBoard {
        self.game_state.lock().await.scores
    }

    /// Broadcasts the outcome of an accepted move and persists scores on
    /// terminal transitions. Returns the generation to reply against when
    /// the computer moves next.
    fn after_move(&self, state: &GameState) -> Option<u64> {
        self.broadcaster.board_changed(&state.board);

        match &state.status {
            GameResult::InProgress => {
                self.broadcaster.turn_changed(state.current_mark);
                if self.config.mode == GameMode::Ai && state.current_mark == Mark::O {
                    return Some(state.generation);
                }
            }
            result => {
                self.broadcaster.game_ended(result);
                if let Err(err) = self.score_store.save(&state.scores) {
                    log!("Failed to save scores: {}", err);
                }
            }
        }

        None
    }

    async fn play_bot_turn(&self, generation: u64) {
        let input = {
            let state = self.game_state.lock().await;
            if state.generation != generation || state.status != GameResult::InProgress {
                return;
            }
            BotInput::from_game_state(&state)
        };

        let chosen = {
            let mut rng = self.rng.lock().await;
            calculate_move(self.config.ai_difficulty, &input, &mut rng)
        };
        let Some(index) = chosen else {
            return;
        };

        tokio::time::sleep(BOT_MOVE_DELAY).await;

        let mut state = self.game_state.lock().await;
        if state.generation != generation {
            // The board was reset while the reply was pending.
            return;
        }
        if let Err(err) = state.place_mark(index) {
            log!("Bot move at {} rejected: {}", index, err);
            return;
        }
        // The computer plays O, so the next mover is always the human.
        self.after_move(&state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlayerNames;
    use crate::game::Difficulty;
    use std::sync::Mutex as StdMutex;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        Board(Vec<Mark>),
        Turn(Mark),
        Ended(Mark),
        EndedDraw,
    }

    #[derive(Default)]
    struct RecordingBroadcaster {
        events: StdMutex<Vec<Event>>,
    }

    impl RecordingBroadcaster {
        fn events(&self) -> Vec<Event> {
            self.events.lock().unwrap().clone()
        }
    }

    impl GameBroadcaster for RecordingBroadcaster {
        fn board_changed(&self, board: &crate::game::Board) {
            self.events
                .lock()
                .unwrap()
                .push(Event::Board(board.cells().to_vec()));
        }

        fn turn_changed(&self, next_mark: Mark) {
            self.events.lock().unwrap().push(Event::Turn(next_mark));
        }

        fn game_ended(&self, result: &GameResult) {
            let event = match result {
                GameResult::Won { mark, .. } => Event::Ended(*mark),
                _ => Event::EndedDraw,
            };
            self.events.lock().unwrap().push(event);
        }
    }

    #[derive(Default)]
    struct MemoryScoreStore {
        saved: StdMutex<Option<ScoreBoard>>,
        initial: Option<ScoreBoard>,
    }

    impl ScoreStore for MemoryScoreStore {
        fn load(&self) -> Option<ScoreBoard> {
            self.initial
        }

        fn save(&self, scores: &ScoreBoard) -> Result<(), String> {
            *self.saved.lock().unwrap() = Some(*scores);
            Ok(())
        }
    }

    fn local_config() -> GameConfig {
        GameConfig {
            mode: GameMode::Local,
            ai_difficulty: Difficulty::Easy,
            player_names: PlayerNames::default(),
        }
    }

    fn ai_config(difficulty: Difficulty) -> GameConfig {
        GameConfig {
            mode: GameMode::Ai,
            ai_difficulty: difficulty,
            player_names: PlayerNames::default(),
        }
    }

    #[tokio::test]
    async fn test_local_game_emits_events_and_saves_scores() {
        let session = GameSession::start_new_game(
            local_config(),
            RecordingBroadcaster::default(),
            MemoryScoreStore::default(),
        );

        // X wins on the top row.
        for index in [0, 3, 1, 4, 2] {
            session.submit_move(index).await;
        }

        let events = session.broadcaster.events();
        assert_eq!(events.len(), 10); // 5 boards + 4 turns + 1 ended
        assert_eq!(events.last(), Some(&Event::Ended(Mark::X)));
        assert_eq!(
            events.iter().filter(|e| matches!(e, Event::Turn(_))).count(),
            4
        );

        let saved = session.score_store.saved.lock().unwrap().unwrap();
        assert_eq!(saved.wins_x, 1);
        assert_eq!(saved.total, 1);
    }

    #[tokio::test]
    async fn test_rehydrated_scores_keep_counting() {
        let store = MemoryScoreStore {
            initial: Some(ScoreBoard {
                wins_x: 2,
                wins_o: 1,
                draws: 0,
                total: 3,
            }),
            ..Default::default()
        };
        let session =
            GameSession::start_new_game(local_config(), RecordingBroadcaster::default(), store);

        for index in [0, 3, 1, 4, 2] {
            session.submit_move(index).await;
        }

        let scores = session.scores().await;
        assert_eq!(scores.wins_x, 3);
        assert_eq!(scores.total, 4);
    }

    #[tokio::test]
    async fn test_rejected_moves_are_silent_noops() {
        let session = GameSession::start_new_game(
            local_config(),
            RecordingBroadcaster::default(),
            MemoryScoreStore::default(),
        );

        session.submit_move(4).await;
        let events_before = session.broadcaster.events();

        session.submit_move(4).await; // occupied
        session.submit_move(42).await; // out of bounds

        assert_eq!(session.broadcaster.events(), events_before);
        assert_eq!(session.status().await, GameResult::InProgress);
    }

    #[tokio::test]
    async fn test_ai_mode_bot_replies_after_human_move() {
        let session = GameSession::with_rng(
            ai_config(Difficulty::Hard),
            RecordingBroadcaster::default(),
            MemoryScoreStore::default(),
            SessionRng::new(1),
        );

        session.submit_move(4).await;

        let state = session.game_state.lock().await;
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.board.available_moves().len(), 7);
        // Hard play against a center opening answers in a corner.
        assert_eq!(state.board.get(0), Mark::O);
    }

    #[tokio::test]
    async fn test_reset_invalidates_pending_bot_move() {
        let session = GameSession::with_rng(
            ai_config(Difficulty::Hard),
            RecordingBroadcaster::default(),
            MemoryScoreStore::default(),
            SessionRng::new(1),
        );

        let worker = session.clone();
        let pending = tokio::spawn(async move { worker.submit_move(4).await });

        // Let the human move land and the bot reply go to sleep, then reset.
        tokio::time::sleep(Duration::from_millis(100)).await;
        session.reset_board().await;
        pending.await.unwrap();

        // The stale reply must have been dropped on the fresh board.
        let state = session.game_state.lock().await;
        assert_eq!(state.board.available_moves().len(), 9);
        assert_eq!(state.current_mark, Mark::X);
    }

    #[tokio::test]
    async fn test_full_ai_game_never_lost_by_bot() {
        let session = GameSession::with_rng(
            ai_config(Difficulty::Hard),
            RecordingBroadcaster::default(),
            MemoryScoreStore::default(),
            SessionRng::new(7),
        );

        // Human plays greedily: first empty cell each turn.
        loop {
            if session.status().await != GameResult::InProgress {
                break;
            }
            let index = {
                let state = session.game_state.lock().await;
                state.board.available_moves()[0]
            };
            session.submit_move(index).await;
        }

        match session.status().await {
            GameResult::Won { mark, .. } => assert_eq!(mark, Mark::O),
            GameResult::Draw => {}
            GameResult::InProgress => panic!("game did not finish"),
        }
    }
}
