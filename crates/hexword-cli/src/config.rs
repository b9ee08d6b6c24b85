//! Settings read from the environment.

use anyhow::Context;
use hexword_core::GameConfig;
use std::path::PathBuf;

/// Everything needed to start a game
#[derive(Debug, Clone)]
pub struct Settings {
    /// Word list, one word per line
    pub dictionary_path: PathBuf,
    /// Fixed seed for reproducible games
    pub seed: Option<u64>,
    pub game: GameConfig,
}

impl Settings {
    /// Read `HEXWORD_DICT`, `HEXWORD_SEED` and `HEXWORD_CONFIG`
    pub fn from_env() -> anyhow::Result<Self> {
        let dictionary_path: PathBuf = std::env::var("HEXWORD_DICT")
            .unwrap_or_else(|_| "sowpods.txt".into())
            .into();

        let seed = match std::env::var("HEXWORD_SEED") {
            Ok(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .with_context(|| format!("HEXWORD_SEED is not a number: {raw}"))?,
            ),
            Err(_) => None,
        };

        let game = match std::env::var("HEXWORD_CONFIG") {
            Ok(path) => {
                let text = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read game config {path}"))?;
                parse_game_config(&text).with_context(|| format!("Invalid game config {path}"))?
            }
            Err(_) => GameConfig::default(),
        };

        Ok(Self {
            dictionary_path,
            seed,
            game,
        })
    }
}

/// Parse a JSON `GameConfig` and reject rules no game can be played under
pub fn parse_game_config(text: &str) -> anyhow::Result<GameConfig> {
    let config = serde_json::from_str::<GameConfig>(text)?;
    config.validate()?;
    Ok(config)
}
