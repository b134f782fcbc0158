// Copyright 2025 the Plotmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use crate::MapViewport;

/// Number of interpolation ticks in a fly-to animation.
pub const FLY_TO_TICKS: u32 = 30;

/// Nominal tick period in milliseconds.
///
/// This is a scheduling hint for the host's timer, not a hard real-time
/// bound; the animation itself only counts ticks.
pub const FLY_TO_TICK_MS: u64 = 20;

/// Scale a fly-to aims for when the viewport allows it.
const FLY_TO_TARGET_SCALE: f64 = 2.0;

/// Result of advancing a fly-to animation by one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlyToStatus {
    /// The animation advanced and expects further ticks.
    Running,
    /// The animation reached its target and stopped itself.
    Finished,
}

/// A fixed-length linear animation of the viewport toward a world point.
///
/// `FlyTo` captures the viewport state at start time and interpolates scale
/// and offset over [`FLY_TO_TICKS`] ticks so that the target world point
/// ends up centered at the target scale. The final tick snaps to the exact
/// target values, so the endpoint is not subject to interpolation rounding.
///
/// At most one animation is active at a time: constructing a new one
/// replaces the old, interpolating from whatever state exists at that
/// moment. There is no pause; cancellation is dropping the value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlyTo {
    start_scale: f64,
    start_offset: Vec2,
    target_scale: f64,
    target_offset: Vec2,
    tick: u32,
}

impl FlyTo {
    /// Starts an animation centering `target_world` in a viewport of
    /// `view_size` screen pixels.
    ///
    /// The target scale is `min(max_scale, 2.0)`; the target offset places
    /// the world point at the viewport center:
    /// `offset = -target_world * target_scale + view_size / 2`.
    #[must_use]
    pub fn start(viewport: &MapViewport, target_world: Point, view_size: Size) -> Self {
        let target_scale = f64::min(viewport.max_scale(), FLY_TO_TARGET_SCALE);
        let target_offset = Vec2::new(
            -target_world.x * target_scale + view_size.width / 2.0,
            -target_world.y * target_scale + view_size.height / 2.0,
        );
        Self {
            start_scale: viewport.scale(),
            start_offset: viewport.offset(),
            target_scale,
            target_offset,
            tick: 0,
        }
    }

    /// Returns the scale the animation is heading toward.
    #[must_use]
    pub fn target_scale(&self) -> f64 {
        self.target_scale
    }

    /// Returns the offset the animation is heading toward.
    #[must_use]
    pub fn target_offset(&self) -> Vec2 {
        self.target_offset
    }

    /// Advances the animation by one tick, mutating the viewport.
    ///
    /// Intermediate ticks apply the linear interpolation; the final tick
    /// writes the exact target values and reports
    /// [`FlyToStatus::Finished`], after which the animation should be
    /// dropped.
    pub fn tick(&mut self, viewport: &mut MapViewport) -> FlyToStatus {
        self.tick += 1;
        if self.tick >= FLY_TO_TICKS {
            viewport.set_scale(self.target_scale);
            viewport.set_offset(self.target_offset);
            return FlyToStatus::Finished;
        }

        let t = f64::from(self.tick) / f64::from(FLY_TO_TICKS);
        viewport.set_scale(self.start_scale + (self.target_scale - self.start_scale) * t);
        viewport.set_offset(self.start_offset.lerp(self.target_offset, t));
        FlyToStatus::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lands_exactly_on_target_after_all_ticks() {
        let mut vp = MapViewport::new(1.0, 0.5, 3.0);
        let mut anim = FlyTo::start(&vp, Point::new(50.0, 50.0), Size::new(800.0, 600.0));

        assert_eq!(anim.target_scale(), 2.0);
        assert_eq!(anim.target_offset(), Vec2::new(300.0, 200.0));

        let mut ticks = 0;
        loop {
            ticks += 1;
            if anim.tick(&mut vp) == FlyToStatus::Finished {
                break;
            }
        }
        assert_eq!(ticks, FLY_TO_TICKS);
        assert_eq!(vp.scale(), 2.0);
        assert_eq!(vp.offset(), Vec2::new(300.0, 200.0));

        // The target world point is centered.
        assert_eq!(
            vp.world_to_screen(Point::new(50.0, 50.0)),
            Point::new(400.0, 300.0)
        );
    }

    #[test]
    fn target_scale_respects_the_viewport_maximum() {
        let vp = MapViewport::new(1.0, 0.5, 1.5);
        let anim = FlyTo::start(&vp, Point::new(0.0, 0.0), Size::new(100.0, 100.0));
        assert_eq!(anim.target_scale(), 1.5);
    }

    #[test]
    fn interpolation_is_monotonic_toward_the_target() {
        let mut vp = MapViewport::new(0.5, 0.5, 3.0);
        let mut anim = FlyTo::start(&vp, Point::new(10.0, 10.0), Size::new(400.0, 400.0));

        let mut previous = vp.scale();
        while anim.tick(&mut vp) == FlyToStatus::Running {
            assert!(vp.scale() >= previous);
            previous = vp.scale();
        }
        assert_eq!(vp.scale(), 2.0);
    }

    #[test]
    fn restart_interpolates_from_the_current_state() {
        let mut vp = MapViewport::new(1.0, 0.5, 3.0);
        let mut first = FlyTo::start(&vp, Point::new(100.0, 100.0), Size::new(800.0, 600.0));
        for _ in 0..10 {
            first.tick(&mut vp);
        }
        let mid_scale = vp.scale();

        // Replacing the animation captures the mid-flight state as its source.
        let mut second = FlyTo::start(&vp, Point::new(-20.0, 40.0), Size::new(800.0, 600.0));
        second.tick(&mut vp);
        assert!((vp.scale() - mid_scale).abs() < (2.0 - mid_scale).abs());

        while second.tick(&mut vp) != FlyToStatus::Finished {}
        assert_eq!(vp.offset(), second.target_offset());
    }
}
