// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Paged navigation for horizontally scrollable media strips.
//!
//! A page step is always one viewport width, so navigation adapts to the
//! window size. The target offset is computed without clamping; the scroll
//! surface saturates it to its own extent and animates towards it.

use crate::util::easing::{ease_out_cubic, lerp};
use std::collections::HashMap;

/// Duration of a smooth page scroll, in seconds.
pub const SCROLL_ANIMATION_SECS: f64 = 0.35;

/// Direction of a page navigation gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
}

/// Offset one container width to the left or right of `current_offset`.
pub fn compute_target_offset(
    direction: ScrollDirection,
    container_width: f32,
    current_offset: f32,
) -> f32 {
    match direction {
        ScrollDirection::Left => current_offset - container_width,
        ScrollDirection::Right => current_offset + container_width,
    }
}

/// A horizontally scrollable region that can animate to an offset.
pub trait ScrollSurface {
    /// Current horizontal scroll offset.
    fn offset(&self) -> f32;

    /// Visible width of the region.
    fn width(&self) -> f32;

    /// Start a smooth scroll towards `target`. Out-of-range targets must
    /// saturate at the surface's extent, never fail.
    fn smooth_scroll_to(&mut self, target: f32);
}

/// Page the surface one width in `direction`. Returns the unclamped target.
pub fn page<S: ScrollSurface + ?Sized>(surface: &mut S, direction: ScrollDirection) -> f32 {
    let target = compute_target_offset(direction, surface.width(), surface.offset());
    log::debug!(
        "Paging {:?} from {:.1} to {:.1}",
        direction,
        surface.offset(),
        target
    );
    surface.smooth_scroll_to(target);
    target
}

#[derive(Debug, Clone, Copy)]
struct ScrollAnimation {
    from: f32,
    to: f32,
    started: f64,
}

/// Scroll state of one project's media strip.
///
/// Layout is reported by the UI after each frame through [`StripState::observe`],
/// and the clock is advanced by [`StripState::tick`] before the strip is drawn.
#[derive(Debug, Clone, Default)]
pub struct StripState {
    offset: f32,
    viewport_width: f32,
    content_width: f32,
    now: f64,
    animation: Option<ScrollAnimation>,
}

impl StripState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the layout the strip had on the last frame.
    pub fn observe(&mut self, offset: f32, viewport_width: f32, content_width: f32) {
        self.viewport_width = viewport_width.max(0.0);
        self.content_width = content_width.max(0.0);
        if self.animation.is_none() {
            self.offset = offset;
        }
    }

    /// Advance the animation clock to `now` (seconds).
    ///
    /// Returns the offset the strip must be forced to this frame, or `None`
    /// when the user is in control of scrolling.
    pub fn tick(&mut self, now: f64) -> Option<f32> {
        self.now = now;
        let animation = self.animation?;

        let t = ((now - animation.started) / SCROLL_ANIMATION_SECS) as f32;
        if t >= 1.0 {
            self.animation = None;
            self.offset = animation.to;
        } else {
            self.offset = lerp(animation.from, animation.to, ease_out_cubic(t));
        }
        Some(self.offset)
    }

    /// Whether a smooth scroll is still in flight.
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Largest reachable offset.
    pub fn max_offset(&self) -> f32 {
        (self.content_width - self.viewport_width).max(0.0)
    }

    /// Offset at which the current animation will settle, or the current offset.
    pub fn settled_offset(&self) -> f32 {
        self.animation.map_or(self.offset, |a| a.to)
    }
}

impl ScrollSurface for StripState {
    fn offset(&self) -> f32 {
        self.offset
    }

    fn width(&self) -> f32 {
        self.viewport_width
    }

    fn smooth_scroll_to(&mut self, target: f32) {
        if target.is_nan() {
            return;
        }
        let to = target.clamp(0.0, self.max_offset());
        // A fresh request replaces whatever was in flight
        self.animation = Some(ScrollAnimation {
            from: self.offset,
            to,
            started: self.now,
        });
    }
}

/// Strip states keyed by project index, filled in as strips are rendered.
#[derive(Debug, Default)]
pub struct Carousels {
    strips: HashMap<usize, StripState>,
}

impl Carousels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle for a project's strip, created on first use.
    ///
    /// Only projects that render a media strip should be registered: a
    /// registered strip is pageable, and only a rendered one gets ticked.
    pub fn strip_mut(&mut self, project_index: usize) -> &mut StripState {
        self.strips.entry(project_index).or_default()
    }

    /// Page a project's strip. Unknown projects are a silent no-op.
    pub fn page(&mut self, project_index: usize, direction: ScrollDirection) -> Option<f32> {
        self.strips
            .get_mut(&project_index)
            .map(|strip| page(strip, direction))
    }

    /// Whether any strip is animating.
    pub fn any_animating(&self) -> bool {
        self.strips.values().any(StripState::is_animating)
    }

    /// Forget all strips.
    pub fn clear(&mut self) {
        self.strips.clear();
    }
}
