//! Gallery carousel motion state.
//!
//! DESIGN
//! ======
//! The strip renders the gallery three times back to back and scrolls left at
//! a fixed rate per elapsed millisecond. Once the offset has travelled one
//! full copy (a third of the strip) it jumps forward by exactly that distance,
//! which lands on an identical frame, so the loop is seamless.
//!
//! All motion is derived from measured timestamps passed to [`CarouselState::tick`],
//! never from frame counts, so irregular frame pacing does not drift. Hovering
//! and dragging pause the clock; a drag writes the offset directly.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use crate::content::gallery::STRIP_REPEATS;

/// Auto-scroll speed.
pub const AUTO_SCROLL_PX_PER_MS: f64 = 0.15;

/// Largest tile skew, reached at `SKEW_FULL_VELOCITY_PX_PER_S` and above.
pub const SKEW_MAX_DEG: f64 = 3.0;

/// Drag velocity mapped to full skew.
pub const SKEW_FULL_VELOCITY_PX_PER_S: f64 = 1000.0;

/// Time constant of the exponential decay of drag velocity.
pub const VELOCITY_DECAY_MS: f64 = 120.0;

#[allow(clippy::cast_precision_loss)]
const REPEATS: f64 = STRIP_REPEATS as f64;

#[derive(Clone, Copy, Debug, PartialEq)]
struct DragAnchor {
    pointer_x: f64,
    offset: f64,
    last_offset: f64,
    last_ms: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CarouselState {
    offset: f64,
    hovering: bool,
    drag: Option<DragAnchor>,
    strip_width: f64,
    viewport_width: f64,
    last_tick_ms: Option<f64>,
    velocity_px_per_s: f64,
}

impl CarouselState {
    /// Horizontal translation of the strip in pixels (zero or negative).
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Distance after which the offset wraps: one copy of the base set.
    #[must_use]
    pub fn loop_width(&self) -> f64 {
        self.strip_width / REPEATS
    }

    /// Most negative offset a drag may reach.
    #[must_use]
    pub fn min_offset(&self) -> f64 {
        -(self.strip_width - self.viewport_width).max(0.0)
    }

    /// Record the rendered strip and visible viewport widths.
    ///
    /// Called every frame so late-loading images are picked up. Non-finite or
    /// negative measurements are ignored.
    pub fn measure(&mut self, strip_width: f64, viewport_width: f64) {
        if strip_width.is_finite() && strip_width >= 0.0 {
            self.strip_width = strip_width;
        }
        if viewport_width.is_finite() && viewport_width >= 0.0 {
            self.viewport_width = viewport_width;
        }
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    /// Advance the animation clock to `now_ms`.
    ///
    /// The first tick only establishes the baseline. While hovering or
    /// dragging the clock still moves, but the offset does not.
    pub fn tick(&mut self, now_ms: f64) {
        if !now_ms.is_finite() {
            return;
        }
        let delta = self.last_tick_ms.map_or(0.0, |prev| now_ms - prev);
        self.last_tick_ms = Some(now_ms);
        if !(delta.is_finite() && delta > 0.0) {
            return;
        }

        self.velocity_px_per_s *= (-delta / VELOCITY_DECAY_MS).exp();

        if self.hovering || self.drag.is_some() {
            return;
        }
        let loop_width = self.loop_width();
        // Nothing to loop over until the strip has been laid out.
        if loop_width <= 0.0 {
            return;
        }

        self.offset -= AUTO_SCROLL_PX_PER_MS * delta;
        if self.offset <= -loop_width {
            self.offset %= loop_width;
        }
    }

    /// Pointer pressed on the strip at client x `pointer_x`.
    pub fn begin_drag(&mut self, pointer_x: f64, now_ms: f64) {
        self.drag = Some(DragAnchor {
            pointer_x,
            offset: self.offset,
            last_offset: self.offset,
            last_ms: now_ms,
        });
    }

    /// Pointer moved while pressed; sets the offset absolutely, clamped to the strip bounds.
    pub fn drag_to(&mut self, pointer_x: f64, now_ms: f64) {
        let Some(mut anchor) = self.drag else {
            return;
        };
        let target = (anchor.offset + pointer_x - anchor.pointer_x).clamp(self.min_offset(), 0.0);

        let dt = now_ms - anchor.last_ms;
        if dt.is_finite() && dt > 0.0 {
            self.velocity_px_per_s = (target - anchor.last_offset) / dt * 1000.0;
            anchor.last_ms = now_ms;
            anchor.last_offset = target;
        }

        self.offset = target;
        self.drag = Some(anchor);
    }

    /// Pointer released or lost; auto-scroll resumes from the current offset.
    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    /// Tile skew in degrees derived from recent drag velocity.
    #[must_use]
    pub fn skew_deg(&self) -> f64 {
        skew_for_velocity(self.velocity_px_per_s)
    }
}

/// Linear velocity-to-skew mapping, saturating at [`SKEW_MAX_DEG`].
///
/// Only rightward motion skews; leftward or zero velocity leaves tiles upright.
#[must_use]
pub fn skew_for_velocity(velocity_px_per_s: f64) -> f64 {
    if !velocity_px_per_s.is_finite() {
        return 0.0;
    }
    (velocity_px_per_s / SKEW_FULL_VELOCITY_PX_PER_S).clamp(0.0, 1.0) * SKEW_MAX_DEG
}
