use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::{
    board::BoardSize,
    generator::{AlignmentConfig, LayoutConfig},
    letters::DirectionMode,
    render::{RenderStyle, DEFAULT_PLACEHOLDER},
    shape::ShapeFlags,
};

/// Environment variable that overrides the seed from the config file.
pub const SEED_ENV: &str = "WORD_GRID_SEED";

/// Settings for the `word_grid` binary, usually read from a JSON file.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub board_size: BoardSize,
    pub words: Vec<String>,
    pub alignment: AlignmentConfig,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub style: RenderStyle,
    #[serde(default = "default_placeholder")]
    pub placeholder: char,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_placeholder() -> char {
    DEFAULT_PLACEHOLDER
}

fn default_log_level() -> String {
    String::from("info")
}

impl Default for Config {
    fn default() -> Self {
        let words = [
            "nap", "sleep", "pillow", "eggplant", "sandwich", "anklet", "rats", "skater",
        ];

        Self {
            board_size: BoardSize::new(15, 15),
            words: words.iter().map(|word| word.to_string()).collect(),
            alignment: AlignmentConfig {
                lines: ShapeFlags {
                    horizontal: true,
                    vertical: true,
                    diagonal: true,
                    bends_straight: true,
                    ..Default::default()
                },
                direction: DirectionMode::ForwardBackward,
            },
            seed: None,
            style: RenderStyle::default(),
            placeholder: DEFAULT_PLACEHOLDER,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Reads the config at `path`, or the built-in demo config when no path is given, then applies
    /// environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file {}", path.display()))?;
                Self::from_json(&text)
                    .with_context(|| format!("Invalid config file {}", path.display()))?
            }
            None => Self::default(),
        };

        if let Ok(seed) = std::env::var(SEED_ENV) {
            config.seed = Some(
                seed.parse::<u64>()
                    .with_context(|| format!("{SEED_ENV} must be an unsigned integer"))?,
            );
        }

        Ok(config)
    }

    /// Parses a config from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// The layout settings borrowed from this config.
    pub fn layout(&self) -> LayoutConfig<'_> {
        LayoutConfig {
            size: self.board_size,
            words: &self.words,
            alignment: self.alignment,
        }
    }
}
