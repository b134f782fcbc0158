// Copyright 2025 the Plotmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

/// Scale change applied by one wheel detent.
const SCALE_STEP: f64 = 0.1;

/// Direction of a wheel-zoom step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Increase the scale by one step.
    In,
    /// Decrease the scale by one step.
    Out,
}

impl ZoomDirection {
    /// Maps a raw wheel-rotation delta onto a zoom direction.
    ///
    /// Scrolling up (negative delta in the usual wheel convention) zooms in.
    #[must_use]
    pub fn from_wheel_delta(delta: f64) -> Self {
        if delta < 0.0 { Self::In } else { Self::Out }
    }
}

/// Pan/zoom viewport over the world-space map plane.
///
/// `MapViewport` holds a uniform scale and an unbounded screen-space offset,
/// and converts between screen and world coordinates through
/// `world = (screen - offset) / scale`. The scale is clamped into
/// `[min_scale, max_scale]` on every mutation, so no public operation can
/// reach an invalid state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapViewport {
    scale: f64,
    offset: Vec2,
    min_scale: f64,
    max_scale: f64,
}

impl MapViewport {
    /// Creates a viewport with the given initial scale and scale limits.
    ///
    /// The limits are normalized so that `min_scale <= max_scale`, and the
    /// initial scale is clamped into range.
    #[must_use]
    pub fn new(initial_scale: f64, min_scale: f64, max_scale: f64) -> Self {
        let (min_scale, max_scale) = if min_scale <= max_scale {
            (min_scale, max_scale)
        } else {
            (max_scale, min_scale)
        };
        Self {
            scale: initial_scale.clamp(min_scale, max_scale),
            offset: Vec2::ZERO,
            min_scale,
            max_scale,
        }
    }

    /// Returns the current uniform scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the current screen-space offset.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Returns the minimum allowed scale.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Returns the maximum allowed scale.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Sets the scale, clamping it into the configured range.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale.clamp(self.min_scale, self.max_scale);
    }

    /// Sets the offset directly.
    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    /// Translates the offset by a screen-space delta.
    ///
    /// Panning is unbounded; there is nothing to clamp.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Converts a screen-space point into world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, pt: Point) -> Point {
        Point::new(
            (pt.x - self.offset.x) / self.scale,
            (pt.y - self.offset.y) / self.scale,
        )
    }

    /// Converts a world-space point into screen coordinates.
    #[must_use]
    pub fn world_to_screen(&self, pt: Point) -> Point {
        Point::new(
            pt.x * self.scale + self.offset.x,
            pt.y * self.scale + self.offset.y,
        )
    }

    /// Returns the world→screen transform as an affine.
    ///
    /// World-space content is drawn under this transform: translate by the
    /// offset, then apply the uniform scale.
    #[must_use]
    pub fn world_transform(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.scale)
    }

    /// Applies one wheel-zoom step anchored at a screen-space cursor.
    ///
    /// The scale moves by one step (clamped), and the offset is recomputed
    /// so the world point under the cursor stays fixed on screen:
    /// `offset' = cursor - (cursor - offset) * (scale' / scale)`.
    ///
    /// When the scale is already at its bound the ratio is 1 and the offset
    /// is unchanged, so a saturated zoom is a no-op.
    pub fn wheel_zoom(&mut self, cursor: Point, direction: ZoomDirection) {
        let previous = self.scale;
        let step = match direction {
            ZoomDirection::In => SCALE_STEP,
            ZoomDirection::Out => -SCALE_STEP,
        };
        self.scale = (self.scale + step).clamp(self.min_scale, self.max_scale);

        let ratio = self.scale / previous;
        self.offset = Vec2::new(
            cursor.x - (cursor.x - self.offset.x) * ratio,
            cursor.y - (cursor.y - self.offset.y) * ratio,
        );
    }
}
