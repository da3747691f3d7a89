use std::io::ErrorKind;

use serde::{Deserialize, Serialize};

use super::types::{GameResult, Mark};

/// Result counters for the whole session. Increment-only; a fresh session
/// starts from `Default`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub wins_x: u32,
    pub wins_o: u32,
    pub draws: u32,
    pub total: u32,
}

impl ScoreBoard {
    pub fn record(&mut self, result: &GameResult) {
        match result {
            GameResult::Won { mark: Mark::X, .. } => {
                self.wins_x += 1;
                self.total += 1;
            }
            GameResult::Won { mark: Mark::O, .. } => {
                self.wins_o += 1;
                self.total += 1;
            }
            GameResult::Draw => {
                self.draws += 1;
                self.total += 1;
            }
            GameResult::Won { .. } | GameResult::InProgress => {}
        }
    }
}

pub trait ScoreStore {
    /// `None` when nothing usable is stored; game start must not block on it.
    fn load(&self) -> Option<ScoreBoard>;
    fn save(&self, scores: &ScoreBoard) -> Result<(), String>;
}

pub struct FileScoreStore {
    file_path: String,
}

impl FileScoreStore {
    pub fn new(file_path: String) -> Self {
        Self { file_path }
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&self) -> Option<ScoreBoard> {
        let content = match std::fs::read_to_string(&self.file_path) {
            Ok(content) => content,
            Err(err) => {
                if err.kind() != ErrorKind::NotFound {
                    crate::log!("Failed to read score file {}: {}", self.file_path, err);
                }
                return None;
            }
        };

        match serde_yaml_ng::from_str(&content) {
            Ok(scores) => Some(scores),
            Err(err) => {
                crate::log!("Ignoring corrupt score file {}: {}", self.file_path, err);
                None
            }
        }
    }

    fn save(&self, scores: &ScoreBoard) -> Result<(), String> {
        let content = serde_yaml_ng::to_string(scores)
            .map_err(|e| format!("Failed to serialize scores: {}", e))?;
        std::fs::write(&self.file_path, content)
            .map_err(|e| format!("Failed to write score file {}: {}", self.file_path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::WIN_PATTERNS;

    fn won(mark: Mark) -> GameResult {
        GameResult::Won {
            mark,
            pattern: WIN_PATTERNS[0],
        }
    }

    fn temp_score_path(name: &str) -> String {
        std::env::temp_dir()
            .join(format!("ttt_scores_{}_{}.yaml", name, std::process::id()))
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn test_record_updates_counters() {
        let mut scores = ScoreBoard::default();
        scores.record(&won(Mark::X));
        scores.record(&won(Mark::O));
        scores.record(&won(Mark::O));
        scores.record(&GameResult::Draw);
        scores.record(&GameResult::InProgress);

        assert_eq!(scores.wins_x, 1);
        assert_eq!(scores.wins_o, 2);
        assert_eq!(scores.draws, 1);
        assert_eq!(scores.total, 4);
    }

    #[test]
    fn test_file_store_roundtrip() {
        let path = temp_score_path("roundtrip");
        let store = FileScoreStore::new(path.clone());

        let scores = ScoreBoard {
            wins_x: 3,
            wins_o: 1,
            draws: 2,
            total: 6,
        };
        store.save(&scores).unwrap();
        assert_eq!(store.load(), Some(scores));

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_missing_file_loads_none() {
        let store = FileScoreStore::new(temp_score_path("missing"));
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_corrupt_file_loads_none() {
        let path = temp_score_path("corrupt");
        std::fs::write(&path, "wins_x: [not a number").unwrap();

        let store = FileScoreStore::new(path.clone());
        assert_eq!(store.load(), None);

        std::fs::remove_file(path).unwrap();
    }
}
