//! Browser binding
//!
//! The page owns the canvas and the `requestAnimationFrame` loop. It forwards
//! key events here and calls `tick` once per frame, drawing from the JSON
//! snapshot it gets back.

use wasm_bindgen::prelude::*;

use super::input::KeyState;
use crate::sim::{World, tick};
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Logger already installed by an earlier module instance
        return;
    }
    log::info!("Web Climb starting...");
}

/// Game handle exported to JavaScript
#[wasm_bindgen]
pub struct WebClimb {
    world: World,
    keys: KeyState,
}

#[wasm_bindgen]
impl WebClimb {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> WebClimb {
        Self {
            world: World::new(seed as u64),
            keys: KeyState::new(),
        }
    }

    /// Start a run with JSON tuning overrides
    pub fn with_tuning(seed: u32, tuning_json: &str) -> Result<WebClimb, JsValue> {
        let tuning = Tuning::from_json(tuning_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            world: World::with_tuning(seed as u64, tuning),
            keys: KeyState::new(),
        })
    }

    /// Returns whether the key is one the game uses (so the page can
    /// suppress scrolling)
    pub fn key_down(&mut self, code: u32) -> bool {
        self.keys.key_down(code)
    }

    pub fn key_up(&mut self, code: u32) -> bool {
        self.keys.key_up(code)
    }

    pub fn release_keys(&mut self) {
        self.keys.clear();
    }

    /// Step one frame and return the snapshot as JSON
    pub fn tick(&mut self) -> Result<String, JsValue> {
        let input = self.keys.intents();
        let snapshot = tick(&mut self.world, &input);
        serde_json::to_string(&snapshot).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn score(&self) -> f64 {
        self.world.display_score() as f64
    }

    pub fn view_width(&self) -> f32 {
        self.world.tuning.view_width
    }

    pub fn view_height(&self) -> f32 {
        self.world.tuning.view_height
    }
}
