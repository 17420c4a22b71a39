//! Data-driven game balance
//!
//! Every gameplay number the simulation reads lives here so a build can be
//! rebalanced from a JSON file without recompiling.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Gameplay balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Pixels per second a speed-1.0 character walks
    pub global_speed_px: f32,
    /// Default character width as a fraction of level width
    pub character_width_ratio: f32,
    /// Character height as a multiple of its width
    pub character_height_ratio: f32,
    /// Seconds between spawns at score 0
    pub spawn_interval_secs: f32,
    /// Seconds shaved off the spawn interval per point scored
    pub spawn_interval_step_secs: f32,
    /// Shortest allowed spawn interval
    pub spawn_interval_floor_secs: f32,
    /// Minimum time on the game-over screen before a tap resumes
    pub game_over_cooldown_secs: f32,
    /// Points per unit of max hostile speed (whole-number division, so the
    /// ceiling jumps from 0 to 1 at this score)
    pub difficulty_speed_ratio: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            global_speed_px: 1000.0,
            character_width_ratio: 0.15,
            character_height_ratio: 1.5,
            spawn_interval_secs: 1.0,
            spawn_interval_step_secs: 0.01,
            spawn_interval_floor_secs: 0.35,
            game_over_cooldown_secs: 1.0,
            difficulty_speed_ratio: 100,
        }
    }
}

impl Tuning {
    /// Seconds that must pass between hostile spawns at the given score
    pub fn spawn_interval(&self, score: u32) -> f32 {
        let shrunk = self.spawn_interval_secs - self.spawn_interval_step_secs * score as f32;
        shrunk.max(self.spawn_interval_floor_secs)
    }

    /// Fastest archetype speed a hostile may have at the given score
    pub fn max_hostile_speed(&self, score: u32) -> f32 {
        score.checked_div(self.difficulty_speed_ratio).unwrap_or(0) as f32
    }

    /// Load tuning from a JSON file; missing fields keep their defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let tuning: Self = crate::read_json(path)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }
}
