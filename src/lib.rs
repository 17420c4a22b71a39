//! Cartoon Boxing - a side-scrolling reaction game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (characters, spawning, hits, game state)
//! - `frame`: Per-frame draw commands and HUD text for the host renderer
//! - `audio`: Sound cues and volume mixing
//! - `highscores`: In-memory leaderboard
//! - `settings`: Player preferences
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod frame;
pub mod highscores;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use highscores::HighScores;
pub use settings::Settings;
pub use tuning::Tuning;

use thiserror::Error;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Display size used until the host reports a real one (portrait phone)
    pub const DEFAULT_LEVEL_WIDTH: f32 = 1080.0;
    pub const DEFAULT_LEVEL_HEIGHT: f32 = 1920.0;

    /// Y of every character's feet
    pub const GROUND_Y: f32 = 0.0;

    /// HUD text inset from the top-left corner
    pub const HUD_MARGIN: f32 = 50.0;
}

/// Failure loading or saving a JSON config file (tuning or settings)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid config in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Read and deserialize a JSON config file
pub(crate) fn read_json<T: serde::de::DeserializeOwned>(
    path: &std::path::Path,
) -> Result<T, ConfigError> {
    let display = path.display().to_string();
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: display.clone(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
        path: display,
        source,
    })
}

/// Serialize and write a JSON config file
pub(crate) fn write_json<T: serde::Serialize>(
    path: &std::path::Path,
    value: &T,
) -> Result<(), ConfigError> {
    let display = path.display().to_string();
    let json = serde_json::to_string_pretty(value).map_err(|source| ConfigError::Parse {
        path: display.clone(),
        source,
    })?;
    std::fs::write(path, json).map_err(|source| ConfigError::Io {
        path: display,
        source,
    })
}
