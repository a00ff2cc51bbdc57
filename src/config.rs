//! Runtime configuration from `TETRIS_*` environment variables.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::FALL_SPEED;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// RNG seed for the piece sequence.
    pub seed: u32,
    /// Rows per second.
    pub fall_speed: f32,
    /// Where logs go. Logging is off when unset: the terminal is in raw mode.
    pub log_path: Option<PathBuf>,
}

impl Config {
    /// Read `TETRIS_SEED`, `TETRIS_FALL_SPEED` and `TETRIS_LOG_PATH`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`Config::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("TETRIS_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(time_seed);

        let fall_speed = lookup("TETRIS_FALL_SPEED")
            .and_then(|s| s.trim().parse::<f32>().ok())
            .filter(|v| v.is_finite() && *v > 0.0)
            .unwrap_or(FALL_SPEED);

        let log_path = lookup("TETRIS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Self {
            seed,
            fall_speed,
            log_path,
        }
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
