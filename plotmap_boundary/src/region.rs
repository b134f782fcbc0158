// Copyright 2025 the Plotmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};

use crate::Polygon;

/// Default spacing between placement grid cells, in world units.
pub const DEFAULT_PLACEMENT_STEP: f64 = 20.0;

/// Width of the virtual placement grid in cells.
///
/// Candidates fan out left-to-right across this many columns before moving
/// to the next row, which is what spreads co-located entities apart instead
/// of stacking them.
const GRID_COLS: u64 = 5;

/// Multiplier on the grid-derived candidate budget before a placement call
/// gives up.
const RETRY_SAFETY_FACTOR: u64 = 4;

/// Error produced when a placement call runs out of candidates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementError {
    /// The candidate grid was scanned past its budget without finding a
    /// point inside the polygon.
    ///
    /// This indicates a misconfigured boundary (for example a polygon whose
    /// interior lies entirely left of or above the grid anchor), not a
    /// transient condition; retrying will not help.
    GridExhausted,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GridExhausted => write!(f, "placement grid exhausted without a point inside the boundary"),
        }
    }
}

impl core::error::Error for PlacementError {}

/// A named boundary polygon plus its placement cursor.
///
/// The cursor is owned exclusively by the region and advanced only by
/// [`BoundaryRegion::next_point`]; it never decreases. Regions are created
/// once at registry initialization and live for the process lifetime.
#[derive(Clone, Debug)]
pub struct BoundaryRegion {
    name: String,
    polygon: Polygon,
    placement_cursor: u64,
    step: f64,
}

impl BoundaryRegion {
    /// Creates a region with the default placement step.
    #[must_use]
    pub fn new(name: impl Into<String>, polygon: Polygon) -> Self {
        Self::with_step(name, polygon, DEFAULT_PLACEMENT_STEP)
    }

    /// Creates a region with an explicit placement step in world units.
    #[must_use]
    pub fn with_step(name: impl Into<String>, polygon: Polygon, step: f64) -> Self {
        Self {
            name: name.into(),
            polygon,
            placement_cursor: 0,
            step,
        }
    }

    /// Returns the region name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the boundary polygon.
    #[must_use]
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// Returns the current placement cursor.
    #[must_use]
    pub fn placement_cursor(&self) -> u64 {
        self.placement_cursor
    }

    /// Returns the grid cell for a cursor index, relative to the grid anchor.
    fn candidate(&self, index: u64) -> Point {
        let center = self.polygon.center();
        let col = (index % GRID_COLS) as f64;
        let row = (index / GRID_COLS) as f64;
        center + Vec2::new(col * self.step, row * self.step)
    }

    /// Returns the next placement point inside the boundary.
    ///
    /// Candidates are generated in row-major order over a virtual grid
    /// anchored at the bounding-box center: cursor index `i` maps to column
    /// `i % 5` and row `i / 5`, each cell `step` world units apart. The
    /// cursor advances past every candidate tried, so each call resumes
    /// where the previous one left off and no cell is handed out twice.
    ///
    /// Candidates outside the polygon (by the even-odd rule) are skipped.
    /// The scan is budgeted at the grid size implied by the bounding box
    /// times a safety factor; exceeding the budget returns
    /// [`PlacementError::GridExhausted`] instead of looping forever.
    pub fn next_point(&mut self) -> Result<Point, PlacementError> {
        let bounds = self.polygon.bounding_box();
        let grid_rows = (bounds.height() / self.step).ceil() as u64 + 1;
        let budget = GRID_COLS * grid_rows * RETRY_SAFETY_FACTOR;

        for _ in 0..budget {
            let candidate = self.candidate(self.placement_cursor);
            self.placement_cursor += 1;
            if self.polygon.contains(candidate) {
                return Ok(candidate);
            }
        }
        Err(PlacementError::GridExhausted)
    }
}
