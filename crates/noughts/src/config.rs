//! Game configuration loaded from TOML.

use derive_more::{Display, Error};
use noughts_engine::{GameEngine, Player, StrategyKind};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Game configuration.
///
/// Every section is optional; a missing section falls back to the classic
/// 3×3 game between two human players using minimax when switched to AI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the random strategy; drawn from the OS when absent.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Board settings.
    #[serde(default)]
    pub board: BoardConfig,

    /// Roster in turn order.
    #[serde(default = "default_players")]
    pub players: Vec<PlayerConfig>,
}

/// Board settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of rows and columns.
    #[serde(default = "default_size")]
    pub size: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
        }
    }
}

/// One roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Symbol placed on the board.
    pub symbol: char,

    /// Display name.
    pub name: String,

    /// Display color (`#rrggbb`).
    #[serde(default = "default_color")]
    pub color: String,

    /// Whether the computer moves for this player.
    #[serde(default)]
    pub ai: bool,

    /// Strategy used when the player is computer-controlled.
    #[serde(default)]
    pub strategy: StrategyKind,
}

fn default_size() -> usize {
    3
}

fn default_color() -> String {
    "#ffffff".to_string()
}

fn default_players() -> Vec<PlayerConfig> {
    Player::defaults()
        .into_iter()
        .map(|p| PlayerConfig {
            symbol: p.symbol().as_char(),
            name: p.name().clone(),
            color: p.color().clone(),
            ai: p.is_ai(),
            strategy: StrategyKind::default(),
        })
        .collect()
}

impl GameConfig {
    /// The classic game: 3×3, Red (X) against Blue (O).
    pub fn classic() -> Self {
        Self {
            seed: None,
            board: BoardConfig::default(),
            players: default_players(),
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            size = config.board.size,
            players = config.players.len(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Applies command-line overrides on top of the file values.
    ///
    /// Each index in `ai` switches that player to computer control.
    pub fn with_overrides(
        mut self,
        size: Option<usize>,
        seed: Option<u64>,
        ai: &[usize],
    ) -> Result<Self, ConfigError> {
        if let Some(size) = size {
            self.board.size = size;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        for &index in ai {
            let player = self.players.get_mut(index).ok_or_else(|| {
                ConfigError::new(format!("No player at index {} to make AI", index))
            })?;
            player.ai = true;
        }
        Ok(self)
    }

    /// Builds an engine with this roster and strategy assignments.
    #[instrument(skip(self), fields(size = self.board.size, seed = ?self.seed))]
    pub fn build_engine(&self) -> Result<GameEngine, ConfigError> {
        let size = self.board.size;
        let players: Vec<Player> = self
            .players
            .iter()
            .map(|p| Player::new(p.symbol, p.name.clone(), p.color.clone()).with_ai(p.ai))
            .collect();

        let mut engine = match self.seed {
            Some(seed) => GameEngine::with_seed(size, size, players, seed),
            None => GameEngine::new(size, size, players),
        }
        .map_err(|e| ConfigError::new(format!("Invalid game setup: {}", e)))?;

        for (index, player) in self.players.iter().enumerate() {
            engine
                .set_strategy(index, player.strategy)
                .map_err(|e| ConfigError::new(format!("Invalid strategy assignment: {}", e)))?;
        }
        Ok(engine)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
