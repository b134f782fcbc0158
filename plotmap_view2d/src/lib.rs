// Copyright 2025 the Plotmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=plotmap_view2d --heading-base-level=0

//! Plotmap View 2D: pan/zoom viewport state and interaction for the map surface.
//!
//! This crate provides a small, headless model of the map view:
//! - [`MapViewport`]: scale + offset state and the screen↔world coordinate
//!   mapping, with cursor-anchored wheel zoom and clamped scale.
//! - [`PointerState`]: last-known cursor position and telescoping drag
//!   tracking.
//! - [`FlyTo`]: a fixed-tick linear animation that centers and zooms the
//!   viewport on a target world point.
//! - [`InteractionController`]: the single owner of all three, mapping
//!   discrete input events onto viewport mutations.
//!
//! It does **not** own a window, a timer, or a rendering backend. Callers
//! are expected to:
//! - Forward pointer and wheel events into the controller.
//! - Drive [`InteractionController::tick`] from their own timer while an
//!   animation is running (nominally every 20 ms).
//! - Read viewport state each frame to build the world transform.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use plotmap_view2d::InteractionController;
//!
//! let mut ctl = InteractionController::new(1.0, 0.5, 3.0);
//!
//! // Wheel-zoom in at a screen position; the world point under the cursor
//! // stays put.
//! let anchor = Point::new(100.0, 100.0);
//! let before = ctl.viewport().screen_to_world(anchor);
//! ctl.on_wheel(anchor, -1.0);
//! let after = ctl.viewport().screen_to_world(anchor);
//! assert!((after - before).hypot() < 1e-9);
//!
//! // Fly to a world point; the host timer drives the animation.
//! ctl.fly_to(Point::new(50.0, 50.0), Size::new(800.0, 600.0));
//! while ctl.tick() {}
//! assert_eq!(ctl.viewport().scale(), 2.0);
//! ```
//!
//! ## Design notes
//!
//! - The viewport is axis-aligned with a **uniform** scale; the mapping is
//!   `world = (screen - offset) / scale` and its exact inverse.
//! - `scale` is clamped into `[min_scale, max_scale]` on every mutation;
//!   offsets are unbounded.
//! - At most one animation is active at a time. Starting a new fly-to
//!   replaces the old one, and any external mutation (wheel, drag) cancels
//!   it, so the viewport always has a single writer.
//!
//! This crate is `no_std`.

#![no_std]

mod controller;
mod flyto;
mod pointer;
mod viewport;

pub use controller::InteractionController;
pub use flyto::{FlyTo, FlyToStatus, FLY_TO_TICKS, FLY_TO_TICK_MS};
pub use pointer::{PointerState, INVALID_CURSOR};
pub use viewport::{MapViewport, ZoomDirection};
