//! Webs and the ordered store that holds them
//!
//! Store order is generation order, which is also bottom-to-top order: every
//! new web is chained above the last one. Removal always cuts the sequence at
//! the first worn-out web, dropping it and everything spun after it.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::geometry::{is_contacting, is_expired};
use crate::tuning::Tuning;

/// Stable handle for a web; survives appends and removals of other webs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WebId(pub u32);

/// Web types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WebKind {
    /// Ground line, never wears out
    Floor,
    /// Ceiling line, never wears out
    Roof,
    #[default]
    Normal,
}

impl WebKind {
    /// Floor and roof are permanent
    #[inline]
    pub fn decays(&self) -> bool {
        *self == WebKind::Normal
    }
}

/// A line segment the spider can stand on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Web {
    pub id: WebId,
    pub p1: Vec2,
    pub p2: Vec2,
    /// Remaining life, 1 = fresh
    pub strength: f32,
    pub kind: WebKind,
}

impl Web {
    pub fn new(id: WebId, p1: Vec2, p2: Vec2, kind: WebKind) -> Self {
        Self {
            id,
            p1,
            p2,
            strength: 1.0,
            kind,
        }
    }

    /// Wear the web down by `rate`.
    ///
    /// A step that would take strength below zero is skipped entirely, so the
    /// web parks just above zero and is then reported expired by
    /// [`is_expired`]. Returns whether strength changed.
    pub fn decay(&mut self, rate: f32) -> bool {
        if !self.kind.decays() {
            return false;
        }
        if self.strength - rate >= 0.0 {
            self.strength -= rate;
            true
        } else {
            false
        }
    }

    /// Highest endpoint
    #[inline]
    pub fn top(&self) -> f32 {
        self.p1.y.max(self.p2.y)
    }
}

/// Simulation precondition failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("web store is empty; it must always hold at least the floor")]
    EmptyStore,
}

/// Ordered collection of webs
#[derive(Debug, Clone, Default)]
pub struct WebStore {
    webs: Vec<Web>,
    next_id: u32,
}

impl WebStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding just the ground line across the view
    pub fn with_floor(width: f32) -> Self {
        let mut store = Self::new();
        store.push(Vec2::ZERO, Vec2::new(width, 0.0), WebKind::Floor);
        store
    }

    /// Append a fresh web on top of the sequence
    pub fn push(&mut self, p1: Vec2, p2: Vec2, kind: WebKind) -> WebId {
        let id = WebId(self.next_id);
        self.next_id += 1;
        self.webs.push(Web::new(id, p1, p2, kind));
        id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.webs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.webs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Web> {
        self.webs.iter()
    }

    pub fn as_slice(&self) -> &[Web] {
        &self.webs
    }

    pub fn last(&self) -> Option<&Web> {
        self.webs.last()
    }

    pub fn get(&self, id: WebId) -> Option<&Web> {
        self.webs.iter().find(|w| w.id == id)
    }

    pub fn get_mut(&mut self, id: WebId) -> Option<&mut Web> {
        self.webs.iter_mut().find(|w| w.id == id)
    }

    /// First web in store order that a spider at (x, y) touches
    pub fn first_contact(&self, x: f32, y: f32, radius: f32, rate: f32) -> Option<&Web> {
        self.webs
            .iter()
            .find(|w| is_contacting(w, x, y, radius, rate))
    }

    pub fn touching_any(&self, x: f32, y: f32, radius: f32, rate: f32) -> bool {
        self.first_contact(x, y, radius, rate).is_some()
    }

    /// Spin one new web above the last one if the watermark has fallen
    /// within half a screen of the spider.
    ///
    /// The new web shares the last web's horizontal extent. A coin flip picks
    /// whether it rises to the right (chained from the last web's left end)
    /// or to the left (chained from its right end). The watermark moves to the
    /// new web's top.
    pub fn generate<R: Rng>(
        &mut self,
        rng: &mut R,
        avatar_y: f32,
        watermark: &mut f32,
        tuning: &Tuning,
    ) -> Result<Option<WebId>, SimError> {
        let last = self.webs.last().ok_or(SimError::EmptyStore)?;
        if *watermark >= avatar_y + tuning.view_height / 2.0 {
            return Ok(None);
        }

        let rises_right = rng.random::<f32>() < 0.5;
        let gap = (rng.random::<f32>() * tuning.max_web_gap()).floor();
        let rise = (tuning.web_rise_min + rng.random::<f32>() * tuning.web_rise_span).floor();

        let (x1, x2) = (last.p1.x, last.p2.x);
        let (p1, p2, top) = if rises_right {
            let base = last.p1.y + gap;
            (Vec2::new(x1, base), Vec2::new(x2, base + rise), base + rise)
        } else {
            let base = last.p2.y + gap;
            (Vec2::new(x1, base + rise), Vec2::new(x2, base), base + rise)
        };

        let id = self.push(p1, p2, WebKind::Normal);
        *watermark = top;
        log::debug!(
            "Spun web {:?} ({:.0},{:.0})-({:.0},{:.0}), watermark {:.0}",
            id,
            p1.x,
            p1.y,
            p2.x,
            p2.y,
            top
        );
        Ok(Some(id))
    }

    /// Wear down one web. Unknown ids and permanent webs are left alone.
    pub fn decay(&mut self, id: WebId, rate: f32) -> bool {
        self.get_mut(id).is_some_and(|w| w.decay(rate))
    }

    /// Remove the first worn-out web together with every web after it.
    ///
    /// Only one cascade is resolved per call. Returns how many webs were
    /// removed.
    pub fn prune_expired(&mut self, rate: f32) -> usize {
        let Some(index) = self.webs.iter().position(|w| is_expired(w, rate)) else {
            return 0;
        };
        let removed = self.webs.len() - index;
        log::debug!(
            "Web {:?} collapsed, taking {} web(s) with it",
            self.webs[index].id,
            removed
        );
        self.webs.truncate(index);
        removed
    }
}
