//! Web Climb - a spider climbing webs that wear out underneath it
//!
//! Core modules:
//! - `sim`: Deterministic simulation (webs, contact, avatar motion, world step)
//! - `platform`: Key mapping and the browser binding
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod sim;
pub mod tuning;

pub use tuning::{ConfigError, Tuning};

/// Game configuration constants
pub mod consts {
    /// Collision radius of the spider
    pub const SPIDER_RADIUS: f32 = 5.0;
    /// Horizontal distance moved per tick
    pub const X_SPEED: f32 = 4.0;
    /// Vertical distance climbed or fallen per tick
    pub const Y_SPEED: f32 = 4.0;
    /// Height gained before a jump turns into a fall
    pub const MAX_JUMP_HEIGHT: f32 = 80.0;
    /// Strength a web loses per tick while occupied
    pub const DISAPPEARANCE_SPEED: f32 = 0.01;

    /// Smallest vertical rise of a generated web
    pub const WEB_RISE_MIN: f32 = 50.0;
    /// Random extra rise on top of the minimum
    pub const WEB_RISE_SPAN: f32 = 90.0;

    /// Legs reach this many radii to each side
    pub const LEG_SPAN_FACTOR: f32 = 8.0;

    /// Visible area
    pub const VIEW_WIDTH: f32 = 300.0;
    pub const VIEW_HEIGHT: f32 = 480.0;
}

/// Convert a world y (up is positive) to a screen y (down is positive)
#[inline]
pub fn world_to_screen_y(y: f32, camera_bottom: f32, view_height: f32) -> f32 {
    camera_bottom + (view_height - y)
}

/// Camera offset that keeps the spider vertically centered
#[inline]
pub fn camera_bottom_for(avatar_y: f32, view_height: f32) -> f32 {
    avatar_y - view_height / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_lands_mid_screen() {
        let bottom = camera_bottom_for(300.0, 480.0);
        assert_eq!(world_to_screen_y(300.0, bottom, 480.0), 240.0);
    }

    #[test]
    fn test_ground_at_bottom_edge_at_start() {
        let bottom = camera_bottom_for(240.0, 480.0);
        assert_eq!(world_to_screen_y(0.0, bottom, 480.0), 480.0);
    }
}
