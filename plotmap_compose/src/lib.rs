// Copyright 2025 the Plotmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=plotmap_compose --heading-base-level=0

//! Plotmap Compose: the read-side render compositor for the map surface.
//!
//! Each frame, the compositor reads the current scene and viewport state and
//! issues draw operations to a [`PlotSurface`] in a fixed order:
//!
//! 1. background map image
//! 2. grid overlay
//! 3. boundary outlines
//! 4. plotted entity points
//! 5. entity name labels
//! 6. live cursor-coordinate readout
//! 7. highlighted point
//!
//! World-space layers (image, boundaries, points, labels, highlight) are
//! drawn under the viewport's translate-then-scale transform; screen-space
//! overlays (grid lines, cursor readout) are drawn under the identity
//! transform. Every layer except the image has an externally toggled
//! visibility flag; the compositor itself never mutates any state it reads.
//!
//! ## Minimal example
//!
//! ```ignore
//! use kurbo::Size;
//! use plotmap_compose::{Compositor, LayerFlags, Scene};
//!
//! let compositor = Compositor::new();
//! let scene = Scene {
//!     map_image: Some(map_image),
//!     entities: &entities,
//!     registry: &registry,
//!     highlight: None,
//!     layers: LayerFlags::default() | LayerFlags::BOUNDARIES,
//! };
//! compositor.render(&scene, ctl.viewport(), ctl.pointer(), Size::new(800.0, 600.0), &mut surface);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

use alloc::format;

use kurbo::{Affine, Circle, Line, Point, Size, Vec2};
use peniko::color::palette::css;
use peniko::Brush;
use plotmap_boundary::BoundaryRegistry;
use plotmap_entities::EntityRecord;
use plotmap_imaging::{ImageId, PlotSurface};
use plotmap_view2d::{MapViewport, PointerState, INVALID_CURSOR};

/// Default spacing of the grid overlay, in screen pixels.
pub const DEFAULT_GRID_SPACING: f64 = 75.0;

/// Radius of plotted and highlighted points, in world units.
const POINT_RADIUS: f64 = 5.0;

/// Offset from a point to its name label.
const LABEL_OFFSET: Vec2 = Vec2::new(10.0, 0.0);

/// Offset from the cursor to the coordinate readout.
const READOUT_OFFSET: Vec2 = Vec2::new(10.0, -10.0);

bitflags::bitflags! {
    /// Externally toggled visibility flags for the composited layers.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct LayerFlags: u8 {
        /// Plotted entity points.
        const POINTS      = 0b0000_0001;
        /// Screen-space grid overlay.
        const GRID        = 0b0000_0010;
        /// Live cursor-coordinate readout.
        const COORDINATES = 0b0000_0100;
        /// Entity name labels.
        const NAMES       = 0b0000_1000;
        /// Boundary polygon outlines.
        const BOUNDARIES  = 0b0001_0000;
    }
}

impl Default for LayerFlags {
    /// Points, grid, and coordinates start visible; names and boundaries
    /// start hidden.
    fn default() -> Self {
        Self::POINTS | Self::GRID | Self::COORDINATES
    }
}

/// Everything the compositor reads to paint one frame.
///
/// The scene borrows its data; the compositor never takes ownership of (or
/// mutates) anything it draws.
#[derive(Clone, Copy, Debug)]
pub struct Scene<'a> {
    /// Background map image, blitted at the world origin.
    pub map_image: Option<ImageId>,
    /// Plotted entities with their assigned positions.
    pub entities: &'a [EntityRecord],
    /// Boundary regions, outlined in registration order.
    pub registry: &'a BoundaryRegistry,
    /// Highlighted world-space point, if any (drawn last).
    pub highlight: Option<Point>,
    /// Visibility flags.
    pub layers: LayerFlags,
}

/// Issues one frame's draw operations in the fixed layer order.
#[derive(Clone, Copy, Debug)]
pub struct Compositor {
    grid_spacing: f64,
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new()
    }
}

impl Compositor {
    /// Creates a compositor with the default grid spacing.
    #[must_use]
    pub fn new() -> Self {
        Self {
            grid_spacing: DEFAULT_GRID_SPACING,
        }
    }

    /// Creates a compositor with an explicit grid spacing in screen pixels.
    #[must_use]
    pub fn with_grid_spacing(grid_spacing: f64) -> Self {
        Self { grid_spacing }
    }

    /// Returns the grid spacing in screen pixels.
    #[must_use]
    pub fn grid_spacing(&self) -> f64 {
        self.grid_spacing
    }

    /// Paints one frame.
    ///
    /// `view_size` is the surface extent in screen pixels; it bounds the
    /// grid overlay. Draw order and per-layer coordinate spaces are part of
    /// the contract and never vary.
    pub fn render<S: PlotSurface + ?Sized>(
        &self,
        scene: &Scene<'_>,
        viewport: &MapViewport,
        pointer: &PointerState,
        view_size: Size,
        surface: &mut S,
    ) {
        let world = viewport.world_transform();

        surface.set_transform(world);
        if let Some(image) = scene.map_image {
            surface.image(image, Point::ORIGIN);
        }

        if scene.layers.contains(LayerFlags::GRID) {
            surface.set_transform(Affine::IDENTITY);
            self.draw_grid(view_size, surface);
        }

        surface.set_transform(world);
        if scene.layers.contains(LayerFlags::BOUNDARIES) {
            draw_boundaries(scene.registry, surface);
        }
        if scene.layers.contains(LayerFlags::POINTS) {
            draw_points(scene.entities, surface);
        }
        if scene.layers.contains(LayerFlags::NAMES) {
            draw_names(scene.entities, surface);
        }

        if scene.layers.contains(LayerFlags::COORDINATES) {
            surface.set_transform(Affine::IDENTITY);
            draw_readout(viewport, pointer, surface);
        }

        if let Some(highlight) = scene.highlight {
            surface.set_transform(world);
            surface.set_brush(Brush::Solid(css::BLUE));
            surface.fill_circle(Circle::new(highlight, POINT_RADIUS));
        }
    }

    fn draw_grid<S: PlotSurface + ?Sized>(&self, view_size: Size, surface: &mut S) {
        surface.set_brush(Brush::Solid(css::BLACK));
        surface.set_stroke_width(1.0);

        let mut x = 0.0;
        while x <= view_size.width {
            surface.line(Line::new((x, 0.0), (x, view_size.height)));
            surface.text(&format!("{x:.0}"), Point::new(x + 5.0, 15.0));
            x += self.grid_spacing;
        }
        let mut y = 0.0;
        while y <= view_size.height {
            surface.line(Line::new((0.0, y), (view_size.width, y)));
            surface.text(&format!("{y:.0}"), Point::new(5.0, y - 5.0));
            y += self.grid_spacing;
        }
    }
}

fn draw_boundaries<S: PlotSurface + ?Sized>(registry: &BoundaryRegistry, surface: &mut S) {
    surface.set_brush(Brush::Solid(css::RED));
    surface.set_stroke_width(2.0);
    for region in registry.iter() {
        let vertices = region.polygon().vertices();
        for i in 0..vertices.len() {
            let a = vertices[i];
            let b = vertices[(i + 1) % vertices.len()];
            surface.line(Line::new(a, b));
        }
    }
}

fn draw_points<S: PlotSurface + ?Sized>(entities: &[EntityRecord], surface: &mut S) {
    surface.set_brush(Brush::Solid(css::RED));
    for entity in entities {
        surface.fill_circle(Circle::new(entity.position, POINT_RADIUS));
    }
}

fn draw_names<S: PlotSurface + ?Sized>(entities: &[EntityRecord], surface: &mut S) {
    surface.set_brush(Brush::Solid(css::RED));
    for entity in entities {
        surface.text(&entity.name, entity.position + LABEL_OFFSET);
    }
}

fn draw_readout<S: PlotSurface + ?Sized>(
    viewport: &MapViewport,
    pointer: &PointerState,
    surface: &mut S,
) {
    let world_cursor = pointer.world_cursor(viewport);
    let anchor = pointer.cursor().unwrap_or(INVALID_CURSOR) + READOUT_OFFSET;

    surface.set_brush(Brush::Solid(css::BLACK));
    surface.text(
        &format!("X: {:.0} Y: {:.0}", world_cursor.x, world_cursor.y),
        anchor,
    );
}
