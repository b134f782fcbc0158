// Copyright 2025 the Plotmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=plotmap_imaging_ref --heading-base-level=0

//! Plotmap Imaging Reference Surface.
//!
//! This crate provides a small, stateful implementation of
//! [`PlotSurface`] for **op recording and state tracing**.
//!
//! It is intentionally *not* a reference renderer:
//! - It does **not** rasterize to pixels.
//! - It does **not** establish golden rendering behavior across backends.
//! - It is intended primarily for tests and debugging that want to assert
//!   on emitted ops and the drawing state at the time each op is applied.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use peniko::Brush;
use plotmap_imaging::{
    Affine, DrawOp, ImageDesc, ImageId, PlotSurface, StateOp, SurfaceOp,
};

/// Snapshot of the drawing state inside the surface.
#[derive(Clone, Debug, PartialEq)]
pub struct StateSnapshot {
    /// Current transform.
    pub transform: Affine,
    /// Current brush, if set.
    pub brush: Option<Brush>,
    /// Current stroke width.
    pub stroke_width: f64,
}

impl Default for StateSnapshot {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            brush: None,
            stroke_width: 1.0,
        }
    }
}

/// Event recorded by the reference surface.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// State operation and the resulting state snapshot.
    State {
        /// State operation that was applied.
        op: StateOp,
        /// Snapshot after applying the state operation.
        state: StateSnapshot,
    },
    /// Draw operation and the state snapshot used for drawing.
    Draw {
        /// Draw operation that was applied.
        op: DrawOp,
        /// Snapshot at the time of drawing.
        state: StateSnapshot,
    },
}

/// Recording implementation of [`PlotSurface`].
///
/// This surface:
/// - Stores image descriptors (and their pixel buffers) keyed by ID,
/// - Tracks current drawing state,
/// - Records an [`Event`] for every state and draw operation applied.
#[derive(Default, Debug)]
pub struct RefSurface {
    images: Vec<(ImageDesc, Vec<u8>)>,
    events: Vec<Event>,
    ops: Vec<SurfaceOp>,
    state: StateSnapshot,
}

impl RefSurface {
    /// Creates an empty recording surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a slice of recorded events.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Returns a slice of raw surface operations.
    #[must_use]
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Returns the draw events only, in application order.
    pub fn draws(&self) -> impl Iterator<Item = (&DrawOp, &StateSnapshot)> {
        self.events.iter().filter_map(|e| match e {
            Event::Draw { op, state } => Some((op, state)),
            Event::State { .. } => None,
        })
    }

    /// Returns the descriptor of a registered image.
    #[must_use]
    pub fn image_desc(&self, id: ImageId) -> Option<&ImageDesc> {
        self.images.get(id.0 as usize).map(|(desc, _)| desc)
    }

    /// Clears recorded events and ops but keeps image resources.
    pub fn clear_events(&mut self) {
        self.events.clear();
        self.ops.clear();
    }
}

impl PlotSurface for RefSurface {
    fn create_image(&mut self, desc: ImageDesc, pixels: &[u8]) -> ImageId {
        let id = u32::try_from(self.images.len())
            .expect("RefSurface: too many images for u32 ImageId");
        self.images.push((desc, pixels.to_vec()));
        ImageId(id)
    }

    fn state(&mut self, op: StateOp) {
        match &op {
            StateOp::SetTransform(t) => self.state.transform = *t,
            StateOp::SetBrush(b) => self.state.brush = Some(b.clone()),
            StateOp::SetStrokeWidth(w) => self.state.stroke_width = *w,
        }
        self.ops.push(SurfaceOp::State(op.clone()));
        self.events.push(Event::State {
            op,
            state: self.state.clone(),
        });
    }

    fn draw(&mut self, op: DrawOp) {
        self.ops.push(SurfaceOp::Draw(op.clone()));
        self.events.push(Event::Draw {
            op,
            state: self.state.clone(),
        });
    }
}
