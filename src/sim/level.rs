//! Level themes: which backdrop the fight happens in front of

use serde::{Deserialize, Serialize};

/// Backdrop theme for the current session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    #[default]
    Hills,
    Mountains,
    City,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Hills, Level::Mountains, Level::City];

    pub const DEFAULT: Level = Level::Hills;

    /// 1-based level number
    pub fn number(self) -> u8 {
        match self {
            Level::Hills => 1,
            Level::Mountains => 2,
            Level::City => 3,
        }
    }

    pub fn by_number(number: u8) -> Option<Level> {
        Self::ALL.into_iter().find(|level| level.number() == number)
    }

    pub fn name(self) -> &'static str {
        match self {
            Level::Hills => "Hills",
            Level::Mountains => "Mountains",
            Level::City => "City",
        }
    }

    /// Whether the host should drift clouds over the backdrop
    pub fn has_clouds(self) -> bool {
        !matches!(self, Level::City)
    }

    /// Backdrop image; every theme shares the mountain art for now
    pub fn background(self) -> &'static str {
        "backgrounds/background-mountains.jpg"
    }
}
