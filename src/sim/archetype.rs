//! Character archetypes (speed classes) and facing

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Horizontal direction a character faces and walks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    pub fn opposite(self) -> Self {
        match self {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }

    /// Either direction with equal probability
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Facing::Right
        } else {
            Facing::Left
        }
    }

    /// -1.0 for left, +1.0 for right
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Fixed speed/visual classes a character can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterArchetype {
    VerySlow,
    Slow,
    Mediocre,
    Brisk,
    Quick,
    Fast,
}

impl CharacterArchetype {
    /// Every archetype, slowest first
    pub const ALL: [CharacterArchetype; 6] = [
        CharacterArchetype::VerySlow,
        CharacterArchetype::Slow,
        CharacterArchetype::Mediocre,
        CharacterArchetype::Brisk,
        CharacterArchetype::Quick,
        CharacterArchetype::Fast,
    ];

    /// Fallback when no archetype fits a speed ceiling
    pub const DEFAULT: CharacterArchetype = CharacterArchetype::VerySlow;

    /// Archetype the player boxes as
    pub const PLAYER_DEFAULT: CharacterArchetype = CharacterArchetype::Fast;

    pub fn id(self) -> u8 {
        match self {
            CharacterArchetype::VerySlow => 0,
            CharacterArchetype::Slow => 1,
            CharacterArchetype::Mediocre => 2,
            CharacterArchetype::Brisk => 3,
            CharacterArchetype::Quick => 4,
            CharacterArchetype::Fast => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterArchetype::VerySlow => "Very slow boi",
            CharacterArchetype::Slow => "Slow boi",
            CharacterArchetype::Mediocre => "Mediocre boi",
            CharacterArchetype::Brisk => "Brisk boi",
            CharacterArchetype::Quick => "Quick boi",
            CharacterArchetype::Fast => "Fast boi",
        }
    }

    /// Speed scalar in (0, 1], unique per archetype
    pub fn speed(self) -> f32 {
        match self {
            CharacterArchetype::VerySlow => 0.1,
            CharacterArchetype::Slow => 0.15,
            CharacterArchetype::Mediocre => 0.3,
            CharacterArchetype::Brisk => 0.5,
            CharacterArchetype::Quick => 0.7,
            CharacterArchetype::Fast => 0.9,
        }
    }

    /// Sprite asset the host draws for this archetype
    pub fn asset(self) -> &'static str {
        match self {
            CharacterArchetype::VerySlow
            | CharacterArchetype::Slow
            | CharacterArchetype::Mediocre => "characters/boxer-dude.png",
            CharacterArchetype::Brisk | CharacterArchetype::Quick => "characters/boxer-dude-red.png",
            CharacterArchetype::Fast => "characters/boxer-dude-gold.png",
        }
    }

    /// Direction the sprite art faces when drawn unmirrored
    pub fn art_facing(self) -> Facing {
        Facing::Right
    }

    /// Uniform pick among archetypes no faster than `max_speed`
    ///
    /// Falls back to [`CharacterArchetype::DEFAULT`] when none qualify.
    pub fn random_type<R: Rng>(max_speed: f32, rng: &mut R) -> Self {
        let eligible: Vec<CharacterArchetype> = Self::ALL
            .iter()
            .copied()
            .filter(|a| a.speed() <= max_speed)
            .collect();
        if eligible.is_empty() {
            return Self::DEFAULT;
        }
        eligible[rng.random_range(0..eligible.len())]
    }

    /// Uniform pick among all archetypes
    pub fn random_any<R: Rng>(rng: &mut R) -> Self {
        Self::random_type(1.0, rng)
    }
}
