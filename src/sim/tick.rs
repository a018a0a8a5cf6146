//! Per-frame world step
//!
//! Core game loop that advances the simulation by one frame. The caller owns
//! the frame cadence and calls [`tick`] once per frame.

use serde::Serialize;

use super::avatar::Walk;
use super::state::World;
use super::web::Web;
use crate::camera_bottom_for;

/// Held keys for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

/// What a renderer needs after a tick
#[derive(Debug, Clone, Serialize)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub avatar_x: f32,
    pub avatar_y: f32,
    /// Leg rotation matching the web underfoot
    pub avatar_angle: f32,
    pub jumping: bool,
    pub falling: bool,
    /// Bottom to top; strength doubles as draw opacity
    pub webs: Vec<Web>,
    pub score: f32,
    pub camera_bottom: f32,
}

impl WorldSnapshot {
    pub fn capture(world: &World) -> Self {
        Self {
            tick: world.time_ticks,
            avatar_x: world.avatar.pos.x,
            avatar_y: world.avatar.pos.y,
            avatar_angle: world.avatar.angle,
            jumping: world.avatar.jumping,
            falling: world.avatar.falling,
            webs: world.webs.as_slice().to_vec(),
            score: world.score,
            camera_bottom: world.camera_bottom,
        }
    }
}

/// Advance the world by one frame
pub fn tick(world: &mut World, input: &TickInput) -> WorldSnapshot {
    let World {
        tuning,
        webs,
        avatar,
        rng,
        ..
    } = world;
    world.time_ticks += 1;

    // Camera follows the spider
    world.camera_bottom = camera_bottom_for(avatar.pos.y, tuning.view_height);
    avatar.update_angle(webs);

    // Gravity takes over when nothing is underfoot
    avatar.settle(webs, tuning);

    if input.right {
        avatar.walk(Walk::Right, webs, tuning);
    } else if input.left {
        avatar.walk(Walk::Left, webs, tuning);
    }
    avatar.apply_vertical_input(input.down, input.up, webs);
    avatar.advance(webs, tuning);

    if let Err(e) = webs.generate(rng, avatar.pos.y, &mut world.watermark, tuning) {
        log::error!("Web generation skipped: {}", e);
    }

    if avatar.pos.y > world.score {
        world.score = avatar.pos.y;
    }

    // Only the web being stood on wears out
    if let Some(id) = avatar.attached {
        webs.decay(id, tuning.disappearance_speed);
    }
    webs.prune_expired(tuning.disappearance_speed);

    WorldSnapshot::capture(world)
}
