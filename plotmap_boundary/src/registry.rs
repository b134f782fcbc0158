// Copyright 2025 the Plotmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Point;

use crate::{BoundaryRegion, Polygon, PolygonError};

/// Error produced when installing a boundary catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// A catalog entry carried an invalid polygon.
    InvalidPolygon {
        /// Name of the offending catalog entry.
        name: String,
        /// Underlying polygon validation error.
        source: PolygonError,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPolygon { name, source } => {
                write!(f, "boundary {name:?}: {source}")
            }
        }
    }
}

impl core::error::Error for RegistryError {}

/// An ordered collection of [`BoundaryRegion`]s.
///
/// Registration happens once at startup; there is no removal. Lookup is a
/// case-insensitive exact match on the region name, returning the earliest
/// registration when names collide.
#[derive(Clone, Debug, Default)]
pub struct BoundaryRegistry {
    regions: Vec<BoundaryRegion>,
}

impl BoundaryRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from a static catalog of named vertex rings.
    ///
    /// Polygon validation failures are reported with the offending entry's
    /// name attached so a bad catalog is diagnosable at startup.
    pub fn from_catalog<'a, I>(catalog: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (&'a str, &'a [Point])>,
    {
        let mut registry = Self::new();
        for (name, vertices) in catalog {
            let polygon =
                Polygon::new(vertices.to_vec()).map_err(|source| RegistryError::InvalidPolygon {
                    name: name.into(),
                    source,
                })?;
            registry.regions.push(BoundaryRegion::new(name, polygon));
        }
        Ok(registry)
    }

    /// Registers a named boundary polygon.
    pub fn register(&mut self, name: impl Into<String>, polygon: Polygon) {
        self.regions.push(BoundaryRegion::new(name, polygon));
    }

    /// Returns the region whose name matches, ignoring ASCII case.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&BoundaryRegion> {
        self.regions
            .iter()
            .find(|r| r.name().eq_ignore_ascii_case(name))
    }

    /// Returns the matching region mutably, for placement.
    #[must_use]
    pub fn find_mut(&mut self, name: &str) -> Option<&mut BoundaryRegion> {
        self.regions
            .iter_mut()
            .find(|r| r.name().eq_ignore_ascii_case(name))
    }

    /// Returns the regions in registration order.
    #[must_use]
    pub fn regions(&self) -> &[BoundaryRegion] {
        &self.regions
    }

    /// Returns an iterator over the regions in registration order.
    ///
    /// This is the batch-draw entry point: higher layers walk the regions
    /// and stroke each polygon outline.
    pub fn iter(&self) -> impl Iterator<Item = &BoundaryRegion> {
        self.regions.iter()
    }

    /// Returns the number of registered regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Returns `true` if no regions are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    fn square(offset: f64) -> Polygon {
        Polygon::new(vec![
            Point::new(offset, 0.0),
            Point::new(offset + 10.0, 0.0),
            Point::new(offset + 10.0, 10.0),
            Point::new(offset, 10.0),
        ])
        .unwrap()
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mut registry = BoundaryRegistry::new();
        registry.register("Dasmarinas", square(0.0));

        assert!(registry.find("dasmarinas").is_some());
        assert!(registry.find("DASMARINAS").is_some());
        assert!(registry.find("Dasmarinas ").is_none());
        assert!(registry.find("Silang").is_none());
    }

    #[test]
    fn duplicate_names_resolve_to_first_registration() {
        let mut registry = BoundaryRegistry::new();
        registry.register("Twin", square(0.0));
        registry.register("Twin", square(100.0));

        let found = registry.find("twin").unwrap();
        assert_eq!(found.polygon().center(), Point::new(5.0, 5.0));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn iteration_preserves_registration_order() {
        let mut registry = BoundaryRegistry::new();
        registry.register("A", square(0.0));
        registry.register("B", square(20.0));
        registry.register("C", square(40.0));

        let names: Vec<&str> = registry.iter().map(BoundaryRegion::name).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn catalog_errors_name_the_bad_entry() {
        let flat: &[Point] = &[
            Point::new(0.0, 5.0),
            Point::new(4.0, 5.0),
            Point::new(9.0, 5.0),
        ];
        let good: &[Point] = &[
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];

        let err = BoundaryRegistry::from_catalog([("Good", good), ("Flat", flat)]).unwrap_err();
        assert_eq!(
            err,
            RegistryError::InvalidPolygon {
                name: "Flat".into(),
                source: PolygonError::DegenerateBounds,
            }
        );
    }

    #[test]
    fn catalog_installs_in_order() {
        let good: &[Point] = &[
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        let registry = BoundaryRegistry::from_catalog([("One", good), ("Two", good)]).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.regions()[0].name(), "One");
        assert_eq!(registry.regions()[1].name(), "Two");
    }
}
