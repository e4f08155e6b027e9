//! Game presets and environment overrides.
//!
//! Built-in presets can be extended or overridden by a YAML file:
//!
//! ```yaml
//! games:
//!   - name: lotto-6-49
//!     pool_size: 49
//!     draw_size: 6
//!     has_bonus: true
//! ```

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::combinatorics::{DomainError, LotteryConfiguration};

pub const DEFAULT_GAMES_PATH: &str = "data/games.yaml";
pub const GAMES_PATH_ENV: &str = "LOTTO_ODDS_GAMES";
pub const WORKERS_ENV: &str = "LOTTO_ODDS_WORKERS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamePreset {
    pub name: String,
    pub pool_size: u32,
    pub draw_size: u32,
    #[serde(default)]
    pub has_bonus: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bonus_pool_size: Option<u32>,
}

impl GamePreset {
    fn new(name: &str, pool_size: u32, draw_size: u32, has_bonus: bool) -> Self {
        Self {
            name: name.to_string(),
            pool_size,
            draw_size,
            has_bonus,
            bonus_pool_size: None,
        }
    }

    pub fn configuration(&self) -> Result<LotteryConfiguration, DomainError> {
        match (self.has_bonus, self.bonus_pool_size) {
            (false, _) => LotteryConfiguration::new(self.pool_size, self.draw_size),
            (true, None) => LotteryConfiguration::with_bonus(self.pool_size, self.draw_size),
            (true, Some(bonus_pool)) => {
                LotteryConfiguration::with_bonus_pool(self.pool_size, self.draw_size, bonus_pool)
            }
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct GamesFile {
    #[serde(default)]
    games: Vec<GamePreset>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read games file '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse games file '{path}': {source}")]
    Parse {
        path: String,
        source: serde_yaml::Error,
    },

    #[error("unknown game '{0}' (use a preset name or POOL/DRAW[+bonus])")]
    UnknownGame(String),

    #[error("invalid game '{name}': {source}")]
    InvalidGame { name: String, source: DomainError },
}

pub fn builtin_games() -> Vec<GamePreset> {
    vec![
        GamePreset::new("lotto-6-49", 49, 6, true),
        GamePreset::new("oz-lotto", 47, 7, false),
        GamePreset::new("saturday-lotto", 45, 6, false),
        GamePreset::new("powerball-main", 35, 7, false),
    ]
}

pub fn load_games_file(path: impl AsRef<Path>) -> Result<Vec<GamePreset>, ConfigError> {
    let path = path.as_ref();
    let display = path.display().to_string();
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: display.clone(),
        source,
    })?;
    let parsed: GamesFile = serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: display,
        source,
    })?;
    Ok(parsed.games)
}

/// Built-ins merged with the games file. A file named by [GAMES_PATH_ENV] must load; the
/// default file is optional.
pub fn load_games() -> Result<Vec<GamePreset>, ConfigError> {
    let from_file = match env::var(GAMES_PATH_ENV) {
        Ok(path) => load_games_file(path)?,
        Err(_) if Path::new(DEFAULT_GAMES_PATH).exists() => load_games_file(DEFAULT_GAMES_PATH)?,
        Err(_) => Vec::new(),
    };
    Ok(merge_games(builtin_games(), from_file))
}

/// File entries replace built-ins of the same name and are appended otherwise.
pub fn merge_games(mut games: Vec<GamePreset>, overrides: Vec<GamePreset>) -> Vec<GamePreset> {
    for preset in overrides {
        match games.iter_mut().find(|g| g.name.eq_ignore_ascii_case(&preset.name)) {
            Some(existing) => *existing = preset,
            None => games.push(preset),
        }
    }
    games
}

/// A preset name, or `POOL/DRAW` with an optional `+bonus` suffix.
pub fn resolve_game(
    spec: &str,
    games: &[GamePreset],
) -> Result<LotteryConfiguration, ConfigError> {
    let spec = spec.trim();
    if let Some(preset) = games.iter().find(|g| g.name.eq_ignore_ascii_case(spec)) {
        return preset
            .configuration()
            .map_err(|source| ConfigError::InvalidGame {
                name: preset.name.clone(),
                source,
            });
    }

    let (shape, has_bonus) = match spec.strip_suffix("+bonus") {
        Some(shape) => (shape, true),
        None => (spec, false),
    };
    let (pool, draw) = shape
        .split_once('/')
        .and_then(|(pool, draw)| Some((pool.trim().parse().ok()?, draw.trim().parse().ok()?)))
        .ok_or_else(|| ConfigError::UnknownGame(spec.to_string()))?;
    let adhoc = GamePreset::new(spec, pool, draw, has_bonus);
    adhoc
        .configuration()
        .map_err(|source| ConfigError::InvalidGame {
            name: adhoc.name,
            source,
        })
}

/// Default simulation worker count; 0 means all cores.
pub fn workers_from_env() -> usize {
    match env::var(WORKERS_ENV) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(value = %raw, "invalid {WORKERS_ENV}, using all cores");
            0
        }),
        Err(_) => 0,
    }
}
