//! Line math over web segments
//!
//! Contact is a vertical-proximity test against the web's infinite line, not
//! a segment intersection: the segment's horizontal extent is never checked.

use super::web::Web;

/// Slope of the web's line. Zero-width webs report 0 rather than dividing
/// by zero.
#[inline]
pub fn slope_of(web: &Web) -> f32 {
    let dx = web.p2.x - web.p1.x;
    if dx == 0.0 {
        return 0.0;
    }
    (web.p2.y - web.p1.y) / dx
}

/// Rotation for drawing something that rests on the web (screen space, so
/// the sign is flipped)
#[inline]
pub fn angle_of(web: &Web) -> f32 {
    -slope_of(web).atan()
}

/// Whether one more decay step would take the web below zero
#[inline]
pub fn is_expired(web: &Web, rate: f32) -> bool {
    web.strength - rate < 0.0
}

/// Height of the web's line at `x`
#[inline]
pub fn contact_y(web: &Web, x: f32) -> f32 {
    let slope = slope_of(web);
    let intercept = web.p1.y - slope * web.p1.x;
    slope * x + intercept
}

/// Whether a spider centered at (x, y) is touching the web
pub fn is_contacting(web: &Web, x: f32, y: f32, radius: f32, rate: f32) -> bool {
    if is_expired(web, rate) {
        return false;
    }
    (y - contact_y(web, x)).abs() <= radius
}
