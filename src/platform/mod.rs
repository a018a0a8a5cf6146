//! Platform abstraction layer
//!
//! Handles the outside world's side of the loop:
//! - Key events to held-key intents
//! - The browser binding (wasm32 only)

pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use input::KeyState;
