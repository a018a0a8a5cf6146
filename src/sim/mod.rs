//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per frame, driven from outside
//! - Seeded RNG only
//! - Stable iteration order (store order = generation order)
//! - No rendering or platform dependencies

pub mod avatar;
pub mod geometry;
pub mod state;
pub mod tick;
pub mod web;

pub use avatar::{Avatar, MotionState, Walk};
pub use geometry::{angle_of, contact_y, is_contacting, is_expired, slope_of};
pub use state::World;
pub use tick::{TickInput, WorldSnapshot, tick};
pub use web::{SimError, Web, WebId, WebKind, WebStore};
