// Copyright 2025 the Plotmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=plotmap_entities --heading-base-level=0

//! Plotmap Entities: plotted entity records and load-time placement.
//!
//! An entity is a named address belonging to a category; the category names
//! a [`BoundaryRegion`](plotmap_boundary::BoundaryRegion), and at load time
//! each entity asks the matching region for its next deterministic placement
//! point. Entities whose category matches no region are placed at the world
//! origin — a deliberate "never block rendering on missing config" policy,
//! not an error.
//!
//! The row format is the narrowest possible collaborator contract:
//! comma-separated `name, category, address` rows with a leading header
//! line. Rows with the wrong field count are silently dropped and the load
//! continues. Anything beyond basic field splitting (quoting, escapes) is
//! intentionally out of scope.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use plotmap_boundary::{BoundaryRegistry, Polygon};
//! use plotmap_entities::load_entities;
//!
//! let mut registry = BoundaryRegistry::new();
//! registry.register(
//!     "Midtown",
//!     Polygon::new(vec![
//!         Point::new(0.0, 0.0),
//!         Point::new(40.0, 0.0),
//!         Point::new(40.0, 40.0),
//!         Point::new(0.0, 40.0),
//!     ])
//!     .unwrap(),
//! );
//!
//! let rows = "\
//! name,city,address
//! Acme Hardware,Midtown,12 Main St
//! Lost Cafe,Nowhere,99 Void Ave";
//!
//! let entities = load_entities(rows.lines(), &mut registry).unwrap();
//! assert_eq!(entities.len(), 2);
//! assert_eq!(entities[0].position, Point::new(20.0, 20.0));
//! assert_eq!(entities[1].position, Point::ORIGIN);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;
use plotmap_boundary::{BoundaryRegistry, PlacementError};

/// A plotted entity: a named address with its assigned map position.
///
/// The position is computed exactly once, at load time; rendering reads it
/// every frame but never recomputes it.
#[derive(Clone, Debug, PartialEq)]
pub struct EntityRecord {
    /// Display name of the entity.
    pub name: String,
    /// Category, matched case-insensitively against boundary region names.
    pub category: String,
    /// Free-form address text.
    pub address: String,
    /// Assigned world-space position.
    pub position: Point,
}

/// Splits one data row into `(name, category, address)`.
///
/// Returns `None` for rows without exactly three fields; callers drop those
/// rows and keep loading.
#[must_use]
pub fn parse_row(line: &str) -> Option<(&str, &str, &str)> {
    let mut fields = line.split(',');
    let name = fields.next()?;
    let category = fields.next()?;
    let address = fields.next()?;
    if fields.next().is_some() {
        return None;
    }
    Some((name, category, address))
}

/// Loads entity rows and assigns each a placement point.
///
/// The first line is a header and is skipped; malformed rows are dropped.
/// A category with no matching region yields the world-origin fallback. A
/// placement failure from a *matching* region is a configuration error and
/// aborts the load — painting over it would hide a misconfigured boundary
/// catalog.
pub fn load_entities<'a, I>(
    lines: I,
    registry: &mut BoundaryRegistry,
) -> Result<Vec<EntityRecord>, PlacementError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut entities = Vec::new();
    for line in lines.into_iter().skip(1) {
        let Some((name, category, address)) = parse_row(line) else {
            continue;
        };
        let position = match registry.find_mut(category) {
            Some(region) => region.next_point()?,
            None => Point::ORIGIN,
        };
        entities.push(EntityRecord {
            name: name.into(),
            category: category.into(),
            address: address.into(),
            position,
        });
    }
    Ok(entities)
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use plotmap_boundary::Polygon;

    use super::*;

    fn registry_with_square(name: &str) -> BoundaryRegistry {
        let mut registry = BoundaryRegistry::new();
        registry.register(
            name,
            Polygon::new(vec![
                Point::new(0.0, 0.0),
                Point::new(100.0, 0.0),
                Point::new(100.0, 100.0),
                Point::new(0.0, 100.0),
            ])
            .unwrap(),
        );
        registry
    }

    #[test]
    fn parse_row_requires_exactly_three_fields() {
        assert_eq!(
            parse_row("Acme,Midtown,12 Main St"),
            Some(("Acme", "Midtown", "12 Main St"))
        );
        assert_eq!(parse_row("Acme,Midtown"), None);
        assert_eq!(parse_row("Acme,Midtown,12 Main St,extra"), None);
        assert_eq!(parse_row(""), None);
    }

    #[test]
    fn header_is_skipped_and_malformed_rows_dropped() {
        let mut registry = registry_with_square("Midtown");
        let rows = [
            "name,city,address",
            "Acme,Midtown,12 Main St",
            "not a row",
            "Borealis,Midtown,48 North Rd",
        ];

        let entities = load_entities(rows, &mut registry).unwrap();
        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].name, "Acme");
        assert_eq!(entities[1].name, "Borealis");
    }

    #[test]
    fn placement_comes_from_the_matching_region_in_row_order() {
        let mut registry = registry_with_square("Midtown");
        let rows = [
            "name,city,address",
            "A,Midtown,1 First",
            "B,midtown,2 Second",
            "C,MIDTOWN,3 Third",
        ];

        let entities = load_entities(rows, &mut registry).unwrap();
        // Deterministic fan-out from the region center, one cell per row.
        assert_eq!(entities[0].position, Point::new(50.0, 50.0));
        assert_eq!(entities[1].position, Point::new(70.0, 50.0));
        assert_eq!(entities[2].position, Point::new(90.0, 50.0));
        assert_eq!(
            registry.find("Midtown").unwrap().placement_cursor(),
            3
        );
    }

    #[test]
    fn unknown_category_falls_back_to_the_origin() {
        let mut registry = registry_with_square("Midtown");
        let rows = ["header", "Ghost,Atlantis,1 Sunken Blvd"];

        let entities = load_entities(rows, &mut registry).unwrap();
        assert_eq!(entities[0].position, Point::ORIGIN);
        // The fallback never touches any region's cursor.
        assert_eq!(registry.find("Midtown").unwrap().placement_cursor(), 0);
    }

    #[test]
    fn placement_errors_abort_the_load() {
        // A block with a needle stretching the bounding box: the placement
        // grid anchor falls outside every part of the polygon.
        let mut registry = BoundaryRegistry::new();
        registry.register(
            "Needle",
            Polygon::new(vec![
                Point::new(0.0, 0.0),
                Point::new(20.0, 0.0),
                Point::new(20.0, 18.0),
                Point::new(100.0, 18.0),
                Point::new(100.0, 21.0),
                Point::new(0.0, 21.0),
            ])
            .unwrap(),
        );
        let rows = ["header", "Doomed,Needle,1 Nowhere"];

        assert_eq!(
            load_entities(rows, &mut registry),
            Err(PlacementError::GridExhausted)
        );
    }
}
