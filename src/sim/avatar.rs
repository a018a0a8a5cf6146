//! Spider motion: walking along webs, jumping, and falling until caught
//!
//! Motion is flag-driven (`jumping`, `falling`) with an optional attached web.
//! Walking follows the attached web's incline. Falling is resolved one unit
//! at a time so the first web met on the way down always wins.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{angle_of, slope_of};
use super::web::{Web, WebId, WebKind, WebStore};
use crate::tuning::Tuning;

/// Coarse motion state, derived from the flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionState {
    /// Standing on a web (or resting where contact holds it)
    Grounded,
    Jumping,
    Falling,
}

/// Horizontal intent for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walk {
    Left,
    Right,
}

/// The spider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Avatar {
    pub pos: Vec2,
    pub radius: f32,
    pub jumping: bool,
    pub falling: bool,
    /// Height climbed so far in the current jump
    pub jump_height: f32,
    /// Web the spider is standing on, if any
    pub attached: Option<WebId>,
    /// Incline of the attached web; 0 when detached
    pub slope: f32,
    /// Leg rotation for drawing
    pub angle: f32,
}

impl Avatar {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            radius,
            jumping: false,
            falling: false,
            jump_height: 0.0,
            attached: None,
            slope: 0.0,
            angle: 0.0,
        }
    }

    pub fn state(&self) -> MotionState {
        if self.jumping {
            MotionState::Jumping
        } else if self.falling {
            MotionState::Falling
        } else {
            MotionState::Grounded
        }
    }

    fn land_on(&mut self, web: &Web) {
        self.attached = Some(web.id);
        self.slope = slope_of(web);
        self.falling = false;
        log::debug!(
            "Landed on web {:?} at ({:.1}, {:.1})",
            web.id,
            self.pos.x,
            self.pos.y
        );
    }

    pub fn detach(&mut self) {
        self.attached = None;
        self.slope = 0.0;
    }

    /// Refresh the cosmetic leg angle from the attached web
    pub fn update_angle(&mut self, webs: &WebStore) {
        self.angle = self
            .attached
            .and_then(|id| webs.get(id))
            .map(angle_of)
            .unwrap_or(0.0);
    }

    /// Legs must stay inside the side walls
    pub fn can_move_x(&self, dx: f32, tuning: &Tuning) -> bool {
        let leg_span = tuning.leg_span();
        if dx < 0.0 {
            self.pos.x + dx - leg_span >= 0.0
        } else if dx > 0.0 {
            self.pos.x + dx + leg_span <= tuning.view_width
        } else {
            true
        }
    }

    /// Downward steps may not take the body below the ground line
    pub fn can_move_y(&self, dy: f32) -> bool {
        if dy < 0.0 {
            self.pos.y + dy - self.radius >= 0.0
        } else {
            true
        }
    }

    /// Move by (dx, dy). A falling spider resolves the vertical part as a
    /// fall and slides sideways independently of it.
    pub fn move_by(&mut self, dx: f32, dy: f32, webs: &WebStore, tuning: &Tuning) {
        if !self.falling {
            if self.can_move_y(dy) && self.can_move_x(dx, tuning) {
                self.pos.x += dx;
                self.pos.y += dy;
            }
        } else {
            self.fall(dy, webs, tuning);
            if self.can_move_x(dx, tuning) {
                self.pos.x += dx;
            }
        }
    }

    /// Drop by up to `-distance`, one unit at a time, stopping on the first
    /// web touched. Non-negative distances do nothing.
    pub fn fall(&mut self, distance: f32, webs: &WebStore, tuning: &Tuning) {
        let rate = tuning.disappearance_speed;
        let mut offset = -1.0;
        while offset >= distance {
            let y = self.pos.y + offset;
            if let Some(web) = webs.first_contact(self.pos.x, y, self.radius, rate) {
                self.pos.y = y;
                self.land_on(web);
                return;
            }
            offset -= 1.0;
        }
        if distance < 0.0 {
            self.pos.y += distance;
        }
    }

    /// Nothing underfoot and not jumping: start falling
    pub fn settle(&mut self, webs: &WebStore, tuning: &Tuning) {
        if !self.jumping
            && !webs.touching_any(
                self.pos.x,
                self.pos.y,
                self.radius,
                tuning.disappearance_speed,
            )
        {
            self.falling = true;
            self.detach();
        }
    }

    pub fn walk(&mut self, dir: Walk, webs: &WebStore, tuning: &Tuning) {
        let dx = match dir {
            Walk::Right => tuning.x_speed,
            Walk::Left => -tuning.x_speed,
        };
        self.move_by(dx, dx * self.slope, webs, tuning);
    }

    /// Down drops off the current web (never the floor); otherwise up starts
    /// a jump when standing.
    pub fn apply_vertical_input(&mut self, down: bool, up: bool, webs: &WebStore) {
        if down && !self.falling {
            let droppable = self
                .attached
                .is_some_and(|id| webs.get(id).is_none_or(|w| w.kind != WebKind::Floor));
            if droppable {
                self.falling = true;
            }
        } else if up && !self.jumping && !self.falling {
            self.jump_height = 0.0;
            self.jumping = true;
            self.detach();
        }
    }

    /// Climb while a jump lasts, otherwise keep falling
    pub fn advance(&mut self, webs: &WebStore, tuning: &Tuning) {
        if self.jumping {
            if self.jump_height < tuning.max_jump_height {
                self.jump_height += tuning.y_speed;
                self.move_by(0.0, tuning.y_speed, webs, tuning);
            } else {
                self.jumping = false;
                self.falling = true;
                self.jump_height = 0.0;
            }
        } else if self.falling {
            self.move_by(0.0, -tuning.y_speed, webs, tuning);
        }
    }
}
