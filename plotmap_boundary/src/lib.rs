// Copyright 2025 the Plotmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=plotmap_boundary --heading-base-level=0

//! Plotmap Boundary: named boundary polygons and deterministic point placement.
//!
//! This crate provides the world-space boundary model used by Plotmap:
//! - [`Polygon`]: a validated, immutable vertex ring with even-odd
//!   containment tests.
//! - [`BoundaryRegion`]: a named polygon plus a monotonically advancing
//!   placement cursor that hands out points inside the polygon in a
//!   deterministic, visually spread-out grid order.
//! - [`BoundaryRegistry`]: an ordered collection of regions with
//!   case-insensitive name lookup.
//!
//! It does **not** own any rendering or data-source concerns. Callers are
//! expected to:
//! - Build a registry once at startup from a static catalog of named
//!   polygons.
//! - Ask the matching region for a placement point once per plotted entity
//!   at data-load time, never per frame.
//! - Draw boundary outlines at a higher layer by iterating the registry.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use plotmap_boundary::{BoundaryRegistry, Polygon};
//!
//! let square = Polygon::new(vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(10.0, 0.0),
//!     Point::new(10.0, 10.0),
//!     Point::new(0.0, 10.0),
//! ])
//! .unwrap();
//!
//! let mut registry = BoundaryRegistry::new();
//! registry.register("Midtown", square);
//!
//! // Lookup is case-insensitive; placement is deterministic.
//! let region = registry.find_mut("midtown").unwrap();
//! let p = region.next_point().unwrap();
//! assert!(region.polygon().contains(p));
//! ```
//!
//! ## Determinism and containment
//!
//! All containment questions in Plotmap are answered by the even-odd
//! ray-casting rule implemented in [`Polygon::contains`]; placement uses the
//! same rule, so a placed point is inside its region by the same definition
//! the rest of the system uses.
//!
//! Degenerate polygons (fewer than three vertices, or a bounding box with
//! zero width or height) are rejected at construction time. This is what
//! keeps the placement search finite: the candidate grid is derived from the
//! bounding box, and a positive-area box bounds the number of candidates
//! worth trying.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod polygon;
mod region;
mod registry;

pub use polygon::{Polygon, PolygonError};
pub use region::{BoundaryRegion, PlacementError, DEFAULT_PLACEMENT_STEP};
pub use registry::{BoundaryRegistry, RegistryError};
