use std::io::ErrorKind;

use serde::{Deserialize, Serialize};

use crate::game::{Difficulty, GameMode};

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

pub trait ConfigContentProvider {
    fn get_config_content(&self) -> Result<Option<String>, String>;
}

pub struct FileContentConfigProvider {
    file_path: String,
}

impl FileContentConfigProvider {
    pub fn new(file_path: String) -> Self {
        Self { file_path }
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(self.file_path.as_str()) {
            Ok(content) => Ok(Some(content)),
            Err(err) => match err.kind() {
                ErrorKind::NotFound => Ok(None),
                _ => Err(format!("Failed to read config file: {}", err)),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerNames {
    pub x: String,
    pub o: String,
}

impl Default for PlayerNames {
    fn default() -> Self {
        Self {
            x: "Player 1".to_string(),
            o: "Player 2".to_string(),
        }
    }
}

/// Raw on-disk shape; every field is optional so a partial file still loads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameConfigFile {
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub ai_difficulty: Option<String>,
    #[serde(default)]
    pub player_names: Option<PlayerNames>,
}

impl Validate for GameConfigFile {
    fn validate(&self) -> Result<(), String> {
        if let Some(mode) = self.mode.as_deref() {
            if !matches!(mode, "local" | "ai") {
                return Err(format!("Unknown game mode '{}'", mode));
            }
        }
        if let Some(difficulty) = self.ai_difficulty.as_deref() {
            if !matches!(difficulty, "easy" | "normal" | "hard") {
                return Err(format!("Unknown AI difficulty '{}'", difficulty));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub mode: GameMode,
    pub ai_difficulty: Difficulty,
    pub player_names: PlayerNames,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::Local,
            ai_difficulty: Difficulty::Easy,
            player_names: PlayerNames::default(),
        }
    }
}

impl From<&GameConfigFile> for GameConfig {
    fn from(file: &GameConfigFile) -> Self {
        let defaults = PlayerNames::default();
        let mut player_names = file.player_names.clone().unwrap_or_default();
        if player_names.x.trim().is_empty() {
            player_names.x = defaults.x;
        }
        if player_names.o.trim().is_empty() {
            player_names.o = defaults.o;
        }

        Self {
            mode: GameMode::from_name(file.mode.as_deref().unwrap_or("local")),
            ai_difficulty: Difficulty::from_name(file.ai_difficulty.as_deref().unwrap_or("easy")),
            player_names,
        }
    }
}

/// Loads the game configuration, failing closed to `GameConfig::default()`
/// on missing files, unreadable content, and unrecognized values.
pub fn load_config<P: ConfigContentProvider>(provider: &P) -> GameConfig {
    let content = match provider.get_config_content() {
        Ok(Some(content)) => content,
        Ok(None) => return GameConfig::default(),
        Err(err) => {
            crate::log!("Using default config: {}", err);
            return GameConfig::default();
        }
    };

    let file: GameConfigFile = match serde_yaml_ng::from_str(&content) {
        Ok(file) => file,
        Err(err) => {
            crate::log!("Ignoring malformed config: {}", err);
            return GameConfig::default();
        }
    };

    if let Err(err) = file.validate() {
        crate::log!("Config validation: {}, falling back to safe defaults", err);
    }

    GameConfig::from(&file)
}
