// Copyright 2025 the Plotmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};

use crate::{FlyTo, FlyToStatus, MapViewport, PointerState, ZoomDirection};

/// Maps discrete input events onto viewport mutations.
///
/// The controller owns the viewport, the pointer state, and the (at most
/// one) active fly-to animation, and is the only mutator of all three. Any
/// external mutation — a wheel step or a drag — cancels the active
/// animation first, so the viewport never has two writers at once.
///
/// The event vocabulary matches the map surface one-to-one: pointer-move,
/// pointer-press, pointer-drag, pointer-release, wheel-rotate, and the
/// fly-to request raised by selecting an entity in a list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionController {
    viewport: MapViewport,
    pointer: PointerState,
    animation: Option<FlyTo>,
}

impl InteractionController {
    /// Creates a controller with the given initial scale and scale limits.
    #[must_use]
    pub fn new(initial_scale: f64, min_scale: f64, max_scale: f64) -> Self {
        Self {
            viewport: MapViewport::new(initial_scale, min_scale, max_scale),
            pointer: PointerState::new(),
            animation: None,
        }
    }

    /// Returns the viewport for read-side consumers.
    #[must_use]
    pub fn viewport(&self) -> &MapViewport {
        &self.viewport
    }

    /// Returns the pointer state for read-side consumers.
    #[must_use]
    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    /// Returns `true` while a fly-to animation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Handles a pointer-move event.
    ///
    /// Moves only update the cursor readout; they never mutate the viewport,
    /// so they do not cancel an animation.
    pub fn on_pointer_move(&mut self, pos: Point) {
        self.pointer.pointer_moved(pos);
    }

    /// Handles a pointer-press event, anchoring a drag.
    pub fn on_pointer_press(&mut self, pos: Point) {
        self.pointer.press(pos);
    }

    /// Handles a pointer-drag event, panning by the telescoping delta.
    pub fn on_pointer_drag(&mut self, pos: Point) {
        if let Some(delta) = self.pointer.drag(pos) {
            self.animation = None;
            self.viewport.pan_by(delta);
        }
    }

    /// Handles a pointer-release event, ending the drag.
    pub fn on_pointer_release(&mut self) {
        self.pointer.release();
    }

    /// Handles a wheel-rotate event, zooming about the cursor.
    pub fn on_wheel(&mut self, cursor: Point, wheel_delta: f64) {
        self.animation = None;
        self.viewport
            .wheel_zoom(cursor, ZoomDirection::from_wheel_delta(wheel_delta));
    }

    /// Starts (or replaces) a fly-to animation toward a world point.
    pub fn fly_to(&mut self, target_world: Point, view_size: Size) {
        self.animation = Some(FlyTo::start(&self.viewport, target_world, view_size));
    }

    /// Advances the active animation by one tick.
    ///
    /// Returns `true` if the viewport changed and a redraw is wanted; the
    /// host timer keeps ticking until this returns `false`.
    pub fn tick(&mut self) -> bool {
        match self.animation.as_mut() {
            Some(animation) => {
                if animation.tick(&mut self.viewport) == FlyToStatus::Finished {
                    self.animation = None;
                }
                true
            }
            None => false,
        }
    }

    /// Returns the cursor position in world coordinates.
    ///
    /// See [`PointerState::world_cursor`] for the sentinel behavior.
    #[must_use]
    pub fn world_cursor(&self) -> Point {
        self.pointer.world_cursor(&self.viewport)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::*;

    #[test]
    fn drag_pans_by_telescoping_deltas() {
        let mut ctl = InteractionController::new(1.0, 0.5, 3.0);
        ctl.on_pointer_press(Point::new(100.0, 100.0));
        ctl.on_pointer_drag(Point::new(110.0, 104.0));
        ctl.on_pointer_drag(Point::new(113.0, 110.0));
        ctl.on_pointer_release();

        assert_eq!(ctl.viewport().offset(), Vec2::new(13.0, 10.0));
    }

    #[test]
    fn drag_without_press_does_nothing() {
        let mut ctl = InteractionController::new(1.0, 0.5, 3.0);
        ctl.on_pointer_drag(Point::new(55.0, 55.0));
        assert_eq!(ctl.viewport().offset(), Vec2::ZERO);
    }

    #[test]
    fn wheel_cancels_an_active_animation() {
        let mut ctl = InteractionController::new(1.0, 0.5, 3.0);
        ctl.fly_to(Point::new(50.0, 50.0), Size::new(800.0, 600.0));
        assert!(ctl.is_animating());

        ctl.on_wheel(Point::new(0.0, 0.0), -1.0);
        assert!(!ctl.is_animating());
        assert!(!ctl.tick());
    }

    #[test]
    fn drag_cancels_an_active_animation() {
        let mut ctl = InteractionController::new(1.0, 0.5, 3.0);
        ctl.fly_to(Point::new(50.0, 50.0), Size::new(800.0, 600.0));
        ctl.on_pointer_press(Point::new(10.0, 10.0));
        ctl.on_pointer_drag(Point::new(12.0, 10.0));
        assert!(!ctl.is_animating());
    }

    #[test]
    fn new_fly_to_replaces_the_old_one() {
        let mut ctl = InteractionController::new(1.0, 0.5, 3.0);
        let size = Size::new(800.0, 600.0);
        ctl.fly_to(Point::new(50.0, 50.0), size);
        for _ in 0..5 {
            ctl.tick();
        }
        ctl.fly_to(Point::new(-10.0, 80.0), size);
        while ctl.tick() {}

        // Centered on the second target, not the first.
        assert_eq!(
            ctl.viewport().world_to_screen(Point::new(-10.0, 80.0)),
            Point::new(400.0, 300.0)
        );
    }

    #[test]
    fn tick_reports_completion() {
        let mut ctl = InteractionController::new(1.0, 0.5, 3.0);
        ctl.fly_to(Point::new(0.0, 0.0), Size::new(400.0, 400.0));

        let mut ticks = 0;
        while ctl.tick() {
            ticks += 1;
        }
        assert_eq!(ticks, 30);
        assert!(!ctl.is_animating());
    }
}
