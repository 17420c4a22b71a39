//! Rectangle overlap and contact resolution between the player and hostiles

use glam::Vec2;

use super::character::Character;

/// Axis-aligned rectangle (origin at the bottom-left corner)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// True when the interiors intersect; touching edges do not count
    pub fn overlaps(&self, other: &Rect) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x && a_max.x > other.min.x && self.min.y < b_max.y && a_max.y > other.min.y
    }
}

/// Outcome of a hostile touching the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Player was facing the hostile: point scored, hostile knocked out
    Dodge,
    /// Hostile caught the player from behind: game over
    Hit,
}

/// Resolve an overlap between `hostile` and `player`, or `None` if they don't touch
pub fn resolve_contact(hostile: &Character, player: &Character) -> Option<Contact> {
    if !hostile.rect().overlaps(&player.rect()) {
        return None;
    }
    if hostile.in_front_of(player) {
        Some(Contact::Dodge)
    } else {
        Some(Contact::Hit)
    }
}
