//! Layout geometry derived from the display size

use crate::tuning::Tuning;

/// Level size plus the default character size and spawn positions
///
/// Recompute with [`Dimensions::update`] whenever the display changes size.
/// Zero or negative sizes are accepted and simply give degenerate geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    level_width: f32,
    level_height: f32,
    character_width: f32,
    character_height: f32,
    width_ratio: f32,
    height_ratio: f32,
}

impl Dimensions {
    pub fn new(level_width: f32, level_height: f32, tuning: &Tuning) -> Self {
        let mut dims = Self {
            level_width: 0.0,
            level_height: 0.0,
            character_width: 0.0,
            character_height: 0.0,
            width_ratio: tuning.character_width_ratio,
            height_ratio: tuning.character_height_ratio,
        };
        dims.update(level_width, level_height);
        dims
    }

    /// Recompute all derived values for a new display size
    pub fn update(&mut self, level_width: f32, level_height: f32) {
        self.level_width = level_width;
        self.level_height = level_height;
        self.character_width = (self.width_ratio * level_width).floor();
        self.character_height = self.character_width * self.height_ratio;
    }

    pub fn level_width(&self) -> f32 {
        self.level_width
    }

    pub fn level_height(&self) -> f32 {
        self.level_height
    }

    pub fn character_width(&self) -> f32 {
        self.character_width
    }

    pub fn character_height(&self) -> f32 {
        self.character_height
    }

    /// X that horizontally centers a default-sized character
    pub fn middle_spawn_x(&self) -> f32 {
        (self.level_width - self.character_width) / 2.0
    }

    pub fn leftmost_spawn_x(&self) -> f32 {
        0.0
    }

    /// X where a default-sized character touches the right edge
    pub fn rightmost_spawn_x(&self) -> f32 {
        self.level_width - self.character_width
    }

    /// Just past the right edge, for hostiles walking left
    pub fn offscreen_right_x(&self) -> f32 {
        self.level_width
    }

    /// Just past the left edge, for hostiles of the given width walking right
    pub fn offscreen_left_x(&self, width: f32) -> f32 {
        -width
    }
}
