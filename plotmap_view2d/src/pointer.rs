// Copyright 2025 the Plotmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

use crate::MapViewport;

/// Sentinel returned by [`PointerState::world_cursor`] before any
/// pointer-move event has been observed.
pub const INVALID_CURSOR: Point = Point::new(-1.0, -1.0);

/// Tracks the pointer over the map surface: the last known cursor position
/// and the anchor of an in-progress drag.
///
/// Drag deltas are telescoping: each drag sample is measured against the
/// previous sample, not the original press position, and then becomes the
/// new anchor. Summing the deltas of a drag therefore reproduces the total
/// pointer travel without accumulating error from a stale anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    cursor: Option<Point>,
    drag_anchor: Option<Point>,
}

impl PointerState {
    /// Creates a pointer state with no observed position.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a pointer-move event.
    pub fn pointer_moved(&mut self, pos: Point) {
        self.cursor = Some(pos);
    }

    /// Records a pointer-press event, anchoring a potential drag.
    pub fn press(&mut self, pos: Point) {
        self.drag_anchor = Some(pos);
    }

    /// Records a drag sample, returning the delta since the previous sample.
    ///
    /// Returns `None` when no press anchored the drag (for example a drag
    /// that started outside the surface).
    pub fn drag(&mut self, pos: Point) -> Option<Vec2> {
        let anchor = self.drag_anchor?;
        self.drag_anchor = Some(pos);
        Some(pos - anchor)
    }

    /// Records a pointer-release event, ending any drag.
    pub fn release(&mut self) {
        self.drag_anchor = None;
    }

    /// Returns `true` while a drag is anchored.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Returns the last known cursor position in screen coordinates.
    #[must_use]
    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    /// Returns the cursor position in world coordinates.
    ///
    /// Before the first pointer-move event this returns [`INVALID_CURSOR`]
    /// rather than failing; callers render the sentinel as-is.
    #[must_use]
    pub fn world_cursor(&self, viewport: &MapViewport) -> Point {
        match self.cursor {
            Some(pos) => viewport.screen_to_world(pos),
            None => INVALID_CURSOR,
        }
    }
}
