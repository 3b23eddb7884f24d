use crate::{
    hex::{constraint, CubicCoordinate, CubicVector},
    util::{
        range_len,
        unit::{signed_radius, UnsignedGridUnit},
    },
};
use fnv::FnvBuildHasher;
use log::trace;
use serde::{Deserialize, Serialize};
use std::{
    cmp,
    collections::{hash_set, HashSet},
};

/// A set of coordinates
pub type CoordinateSet = HashSet<CubicCoordinate, FnvBuildHasher>;

/// The set of all coordinates within some distance of a center cell, in a
/// super hexagon pattern (the cells make up the shape of a larger hexagon).
/// For a range of radius `r`, the furthest cells are all `r` steps from the
/// center. Radius 0 means just the center, 1 means 7 cells, and so on.
///
/// The full set of coordinates is materialized when the range is built, so
/// membership checks are a single hash lookup. Ranges can't be mutated;
/// [Self::with_center] and [Self::with_radius] build a new range, which is
/// always regenerated from scratch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RangeDefinition", into = "RangeDefinition")]
pub struct CubicRange {
    center: CubicCoordinate,
    radius: UnsignedGridUnit,
    coordinates: CoordinateSet,
}

impl CubicRange {
    /// Build the range of all cells within `radius` steps of `center`
    pub fn new(center: CubicCoordinate, radius: UnsignedGridUnit) -> Self {
        let capacity = range_len(radius);
        let mut coordinates = CoordinateSet::with_capacity_and_hasher(
            capacity,
            FnvBuildHasher::default(),
        );

        // https://www.redblobgames.com/grids/hexagons/#range
        let n = signed_radius(radius);
        for q in -n..=n {
            // If we just do [-n,n] for r as well, then we end up with a
            // diamond pattern instead of a super hexagon
            let r_min = cmp::max(-n, constraint::derive_r(q, n));
            let r_max = cmp::min(n, constraint::derive_r(q, -n));
            for r in r_min..=r_max {
                let offset = CubicVector::new_unchecked(
                    q,
                    r,
                    constraint::derive_s(q, r),
                );
                coordinates.insert(center + offset);
            }
        }
        debug_assert_eq!(
            coordinates.len(),
            capacity,
            "expected 3r²+3r+1 cells"
        );
        trace!(
            "Materialized {} cells within {} of {}",
            coordinates.len(),
            radius,
            center
        );

        Self {
            center,
            radius,
            coordinates,
        }
    }

    /// The cell at the center of this range
    pub fn center(&self) -> CubicCoordinate {
        self.center
    }

    /// Distance from the center to the outermost cells
    pub fn radius(&self) -> UnsignedGridUnit {
        self.radius
    }

    /// A reference to the set of every cell in this range
    pub fn coordinates(&self) -> &CoordinateSet {
        &self.coordinates
    }

    /// Move the coordinate set out of this struct
    pub fn into_coordinates(self) -> CoordinateSet {
        self.coordinates
    }

    /// Is the given cell in this range?
    pub fn contains(&self, coordinate: CubicCoordinate) -> bool {
        self.coordinates.contains(&coordinate)
    }

    /// Get the number of cells in the range. Always `3r² + 3r + 1`.
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// A range always holds at least its center, so this is never true
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Iterate over every cell in the range, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = CubicCoordinate> + '_ {
        self.coordinates.iter().copied()
    }

    /// Build a new range with the same radius around a different center
    pub fn with_center(&self, center: CubicCoordinate) -> Self {
        Self::new(center, self.radius)
    }

    /// Build a new range with the same center and a different radius
    pub fn with_radius(&self, radius: UnsignedGridUnit) -> Self {
        Self::new(self.center, radius)
    }
}

impl IntoIterator for CubicRange {
    type Item = CubicCoordinate;
    type IntoIter = hash_set::IntoIter<CubicCoordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.coordinates.into_iter()
    }
}

impl<'a> IntoIterator for &'a CubicRange {
    type Item = &'a CubicCoordinate;
    type IntoIter = hash_set::Iter<'a, CubicCoordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.coordinates.iter()
    }
}

/// Serialized form of a range. Only the center and radius are stored, the
/// coordinate set is regenerated on load.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
struct RangeDefinition {
    center: CubicCoordinate,
    radius: UnsignedGridUnit,
}

impl From<RangeDefinition> for CubicRange {
    fn from(definition: RangeDefinition) -> Self {
        Self::new(definition.center, definition.radius)
    }
}

impl From<CubicRange> for RangeDefinition {
    fn from(range: CubicRange) -> Self {
        Self {
            center: range.center,
            radius: range.radius,
        }
    }
}
