// Copyright 2025 the Plotmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=plotmap_imaging --heading-base-level=0

//! Plotmap Imaging: backend-agnostic draw primitives for the map surface.
//!
//! This crate defines the small imaging vocabulary the Plotmap compositor
//! speaks and the trait concrete rendering surfaces implement. It sits
//! between the compositor (which decides *what* to draw, in *which*
//! transformed space) and whatever actually rasterizes pixels — a GPU
//! renderer, a web canvas, or the recording backend used by tests.
//!
//! # Core concepts
//!
//! - **Resources**: images are opaque [`ImageId`] handles registered with
//!   the backend ahead of time via [`PlotSurface::create_image`]; the core
//!   never touches pixel data after that.
//! - **Operations**: [`StateOp`] mutates drawing state (transform, brush,
//!   stroke width); [`DrawOp`] produces pixels under the current state.
//!   [`SurfaceOp`] combines both for backends that record.
//! - **Spaces**: world-space content is drawn under the viewport's
//!   translate-then-scale affine; screen-space overlays are drawn under
//!   the identity transform. The compositor switches spaces with
//!   [`StateOp::SetTransform`]; backends just obey the current transform.
//!
//! The primitive set is deliberately tiny — image blit, line, filled
//! circle, text — because that is the entire vocabulary of the map surface.
//!
//! # Example
//!
//! ```ignore
//! # use plotmap_imaging::*;
//! # use kurbo::{Affine, Circle, Vec2};
//! # use peniko::{Brush, Color};
//! # struct MySurface { /* implements PlotSurface */ }
//! let mut surface = MySurface { /* ... */ };
//!
//! surface.set_transform(Affine::translate(Vec2::new(10.0, 10.0)) * Affine::scale(2.0));
//! surface.set_brush(Brush::Solid(Color::WHITE));
//! surface.fill_circle(Circle::new((50.0, 50.0), 5.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

use alloc::string::String;

use peniko::Brush;

pub use kurbo::{Affine, Circle, Line, Point};
pub use peniko::ImageFormat;

/// Identifier for an image resource.
///
/// This is a small, opaque handle that is stable for the lifetime of the
/// resource. Images are created once at startup (the map background) and
/// reused every frame.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageId(pub u32);

/// Description of an image resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageDesc {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Pixel format of the image buffer.
    pub format: ImageFormat,
}

/// State operations that mutate the current drawing state.
#[derive(Clone, Debug, PartialEq)]
pub enum StateOp {
    /// Set the current transform applied to subsequent draws.
    SetTransform(Affine),
    /// Set the current brush used for fills, strokes, and text.
    SetBrush(Brush),
    /// Set the current stroke width used for lines.
    SetStrokeWidth(f64),
}

/// Draw operations that produce pixels given the current state.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Blit an image with its top-left corner at `origin`.
    Image {
        /// Image resource to draw.
        image: ImageId,
        /// Top-left corner in local coordinates.
        origin: Point,
    },
    /// Stroke a line segment with the current brush and stroke width.
    Line(Line),
    /// Fill a circle with the current brush.
    FillCircle(Circle),
    /// Draw a text run with its baseline origin at `origin`.
    Text {
        /// Text content.
        text: String,
        /// Baseline origin in local coordinates.
        origin: Point,
    },
}

/// Unified operation used by recording backends.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    /// State-changing operation.
    State(StateOp),
    /// Drawing operation.
    Draw(DrawOp),
}

/// A rendering surface the compositor draws through.
///
/// Backends implement the three required methods; the convenience helpers
/// are shorthand for the corresponding ops and should not be overridden.
pub trait PlotSurface {
    /// Create an image resource from raw pixels.
    ///
    /// The `pixels` slice contains tightly packed, row-major data in the
    /// format given by `desc`.
    fn create_image(&mut self, desc: ImageDesc, pixels: &[u8]) -> ImageId;

    /// Apply a state operation.
    fn state(&mut self, op: StateOp);

    /// Apply a draw operation.
    fn draw(&mut self, op: DrawOp);

    /// Set the current transform.
    ///
    /// This is equivalent to `self.state(StateOp::SetTransform(transform))`.
    #[inline]
    fn set_transform(&mut self, transform: Affine) {
        self.state(StateOp::SetTransform(transform));
    }

    /// Set the current brush.
    #[inline]
    fn set_brush(&mut self, brush: Brush) {
        self.state(StateOp::SetBrush(brush));
    }

    /// Set the current stroke width.
    #[inline]
    fn set_stroke_width(&mut self, width: f64) {
        self.state(StateOp::SetStrokeWidth(width));
    }

    /// Blit an image at an origin.
    #[inline]
    fn image(&mut self, image: ImageId, origin: Point) {
        self.draw(DrawOp::Image { image, origin });
    }

    /// Stroke a line segment.
    #[inline]
    fn line(&mut self, line: Line) {
        self.draw(DrawOp::Line(line));
    }

    /// Fill a circle.
    #[inline]
    fn fill_circle(&mut self, circle: Circle) {
        self.draw(DrawOp::FillCircle(circle));
    }

    /// Draw a text run.
    #[inline]
    fn text(&mut self, text: &str, origin: Point) {
        self.draw(DrawOp::Text {
            text: text.into(),
            origin,
        });
    }
}
