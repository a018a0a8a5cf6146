//! World state
//!
//! Everything a tick reads or writes lives in [`World`]; there is no ambient
//! state.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::avatar::Avatar;
use super::web::WebStore;
use crate::camera_bottom_for;
use crate::tuning::Tuning;

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct World {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    /// Webs, bottom to top
    pub webs: WebStore,
    pub avatar: Avatar,
    /// Highest y the spider has reached
    pub score: f32,
    /// Top of the highest web spun so far
    pub watermark: f32,
    /// Render offset following the spider
    pub camera_bottom: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub(crate) rng: Pcg32,
}

impl World {
    /// Fresh world with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Fresh world: a floor across the view and the spider centered on it
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let webs = WebStore::with_floor(tuning.view_width);
        let start = Vec2::new(tuning.view_width / 2.0, tuning.spider_radius);
        let avatar = Avatar::new(start, tuning.spider_radius);
        log::info!(
            "New world (seed {}, view {}x{})",
            seed,
            tuning.view_width,
            tuning.view_height
        );
        Self::from_parts(seed, tuning, webs, avatar)
    }

    /// Assemble a world around an existing store and spider
    pub fn from_parts(seed: u64, tuning: Tuning, webs: WebStore, avatar: Avatar) -> Self {
        let camera_bottom = camera_bottom_for(avatar.pos.y, tuning.view_height);
        Self {
            seed,
            tuning,
            webs,
            avatar,
            score: 0.0,
            watermark: 0.0,
            camera_bottom,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Score as shown to the player
    pub fn display_score(&self) -> u64 {
        self.score.max(0.0).floor() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::web::WebKind;

    #[test]
    fn test_new_world_layout() {
        let world = World::new(1);
        assert_eq!(world.webs.len(), 1);
        let floor = &world.webs.as_slice()[0];
        assert_eq!(floor.kind, WebKind::Floor);
        assert_eq!(floor.p1, Vec2::ZERO);
        assert_eq!(floor.p2, Vec2::new(300.0, 0.0));

        assert_eq!(world.avatar.pos, Vec2::new(150.0, 5.0));
        assert_eq!(world.avatar.attached, None);
        assert_eq!(world.score, 0.0);
        assert_eq!(world.watermark, 0.0);
    }

    #[test]
    fn test_display_score_floors() {
        let mut world = World::new(1);
        world.score = 87.9;
        assert_eq!(world.display_score(), 87);
    }
}
