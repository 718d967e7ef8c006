//! Front end settings
//!
//! Settings come from an optional JSON file and are then overridden by
//! whichever command line flags were given. Every field has a default, so an
//! empty file (`{}`) is valid.
//!
//! ```json
//! {
//!   "mode": "human-vs-ai",
//!   "ai_color": "black",
//!   "difficulty": "hard",
//!   "ai": { "promotion": "queen" }
//! }
//! ```

use crate::cli::Args;
use anyhow::{Context, Result};
use chess_engine::{AiConfig, AiDifficulty, AiPlayer, Color, Game, Player};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_LOG_FILTER: &str = "info";

/// Seating arrangement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    #[default]
    HumanVsAi,
    AiVsAi,
    HumanVsHuman,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub mode: GameMode,
    /// Seat taken by the computer in human-vs-ai mode
    pub ai_color: Color,
    pub difficulty: AiDifficulty,
    /// Search settings; `depth` here wins over `difficulty` when set
    pub ai: Option<AiConfig>,
    /// Ply limit for unattended ai-vs-ai games
    pub max_plies: Option<u32>,
    pub log: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            ai_color: Color::Black,
            difficulty: AiDifficulty::default(),
            ai: None,
            max_plies: None,
            log: None,
        }
    }
}

impl AppConfig {
    /// Read settings from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// File settings (when `--config` is given) overlaid with the flags
    pub fn from_args(args: &Args) -> Result<Self> {
        let base = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        Ok(base.merge(args))
    }

    /// Apply the flags that were given on top of these settings
    pub fn merge(mut self, args: &Args) -> Self {
        if let Some(mode) = args.mode {
            self.mode = mode;
        }
        if let Some(color) = args.ai_color {
            self.ai_color = color;
        }
        if let Some(difficulty) = args.difficulty {
            // A difficulty flag beats a depth from the file
            self.difficulty = difficulty;
            if let Some(ai) = self.ai.as_mut() {
                ai.depth = difficulty.depth();
            }
        }
        if let Some(depth) = args.depth {
            self.ai = Some(self.ai_config().with_depth(depth));
        }
        if args.max_plies.is_some() {
            self.max_plies = args.max_plies;
        }
        if args.log.is_some() {
            self.log = args.log.clone();
        }
        self
    }

    /// Search settings for the computer's seats
    pub fn ai_config(&self) -> AiConfig {
        self.ai
            .unwrap_or_else(|| AiConfig::from_difficulty(self.difficulty))
    }

    pub fn log_filter(&self) -> &str {
        self.log.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Seat the players for the configured mode, white first
    pub fn players(&self) -> (Player, Player) {
        let config = self.ai_config();
        let seat = |color: Color, is_ai: bool| {
            if is_ai {
                Player::Ai(AiPlayer::new(color, config))
            } else {
                Player::human(color)
            }
        };

        match self.mode {
            GameMode::HumanVsHuman => (seat(Color::White, false), seat(Color::Black, false)),
            GameMode::AiVsAi => (seat(Color::White, true), seat(Color::Black, true)),
            GameMode::HumanVsAi => (
                seat(Color::White, self.ai_color == Color::White),
                seat(Color::Black, self.ai_color == Color::Black),
            ),
        }
    }

    /// A new game from the standard layout
    pub fn new_game(&self) -> Result<Game> {
        let (white, black) = self.players();
        Game::new(white, black).context("Failed to set up the game")
    }
}
