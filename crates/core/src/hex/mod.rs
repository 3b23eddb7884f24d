//! This module holds the cubic coordinate system for hexagonal grids, along
//! with the data structures built on top of it.
//!
//! ## Cubic Coordinates
//!
//! The system used here is the [cube coordinate system defined by Amit
//! Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-cube).
//!
//! Each coordinate has three components (`q`, `r`, and `s`). **For any cell,
//! all three components are integers and `q + r + s = 0`.** Even though a
//! hexagon grid only has two dimensions, using three components makes the
//! math around hexagonal grids much simpler: distance, lines, and ranges all
//! fall out of plain vector arithmetic. The grid is the set of integer points
//! on the plane `q + r + s = 0`.
//!
//! ## Locations vs. Translations
//!
//! There are two kinds of integer values in the system:
//!
//! - [CubicCoordinate] is a location, i.e. one cell
//! - [CubicVector] is a translation, i.e. the difference between two cells
//!
//! Both carry the zero-sum constraint. It's checked exactly once, when a value
//! is built from three independent components (see [constraint]). After that,
//! the algebra keeps it intact on its own:
//!
//! - coordinate + vector = coordinate
//! - coordinate - vector = coordinate
//! - coordinate - coordinate = vector
//! - vector * scalar = vector
//!
//! so none of these operations can fail.
//!
//! [FloatCubicCoordinate] is a third, real-valued variant that only exists as
//! an intermediate for interpolation. It rounds back to a [CubicCoordinate].
//!
//! ## Orientation
//!
//! The same coordinates can be drawn with hexagons standing on a vertex or
//! laying on an edge. See [HexagonOrientation]. This only matters to
//! renderers, none of the math here depends on it.

pub mod constraint;
mod data_structure;
mod direction;
mod float;
mod orientation;
mod unit;

pub use self::{
    constraint::ZeroSumViolation, data_structure::*, direction::*, float::*,
    orientation::*, unit::*,
};
