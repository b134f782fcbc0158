// Copyright 2025 the Plotmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt;

use kurbo::{Point, Rect};

/// Error produced when constructing a [`Polygon`] from invalid vertices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolygonError {
    /// Fewer than three vertices were supplied.
    TooFewVertices {
        /// Number of vertices that were supplied.
        count: usize,
    },
    /// The vertices span a bounding box with zero width or height.
    ///
    /// A degenerate box would make the placement grid infinite to search,
    /// so it is rejected here rather than tolerated downstream.
    DegenerateBounds,
}

impl fmt::Display for PolygonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewVertices { count } => {
                write!(f, "polygon needs at least 3 vertices, got {count}")
            }
            Self::DegenerateBounds => {
                write!(f, "polygon bounding box has zero width or height")
            }
        }
    }
}

impl core::error::Error for PolygonError {}

/// An immutable simple polygon in world coordinates.
///
/// The vertex ring is closed implicitly: the last vertex connects back to
/// the first. Vertices are validated once at construction; after that the
/// polygon never changes, so its bounding box is computed eagerly and
/// cached.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
    bounds: Rect,
}

impl Polygon {
    /// Creates a polygon from a closed vertex ring.
    ///
    /// Returns an error if fewer than three vertices are given or if the
    /// vertices are degenerate (all on one horizontal or vertical line).
    pub fn new(vertices: Vec<Point>) -> Result<Self, PolygonError> {
        if vertices.len() < 3 {
            return Err(PolygonError::TooFewVertices {
                count: vertices.len(),
            });
        }
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for v in &vertices {
            min_x = min_x.min(v.x);
            min_y = min_y.min(v.y);
            max_x = max_x.max(v.x);
            max_y = max_y.max(v.y);
        }
        let bounds = Rect::new(min_x, min_y, max_x, max_y);
        if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
            return Err(PolygonError::DegenerateBounds);
        }
        Ok(Self { vertices, bounds })
    }

    /// Returns the vertex ring.
    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Returns the axis-aligned bounding box of the vertices.
    #[must_use]
    pub fn bounding_box(&self) -> Rect {
        self.bounds
    }

    /// Returns the center of the bounding box.
    ///
    /// This is the anchor of the placement grid, not the polygon centroid.
    #[must_use]
    pub fn center(&self) -> Point {
        self.bounds.center()
    }

    /// Tests whether a point is inside the polygon under the even-odd rule.
    ///
    /// A point is inside if a ray cast from it crosses the boundary an odd
    /// number of times. Points exactly on a horizontal top edge or on the
    /// maximum-y boundary count as outside; the placement grid never relies
    /// on boundary points.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        let mut inside = false;
        let n = self.vertices.len();
        let mut j = n - 1;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[j];
            if (a.y > pt.y) != (b.y > pt.y) {
                let cross_x = (b.x - a.x) * (pt.y - a.y) / (b.y - a.y) + a.x;
                if pt.x < cross_x {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }
}
