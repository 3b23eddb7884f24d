//! A cubic coordinate system for hexagonal grids. This crate holds the
//! geometry only: addressing cells, moving between them, and querying
//! distances, lines, and ranges. Presentation layers are implemented
//! elsewhere.
//!
//! ```
//! use cubic_grid::{CubicCoordinate, CubicVector};
//!
//! let start = CubicCoordinate::ZERO;
//! let end = start + CubicVector::QR * 2 + CubicVector::S;
//! assert_eq!(start.distance_to(end), 3);
//! assert_eq!(start.line_to(end).len(), 4);
//! assert!(start.range(3).contains(end));
//! ```
//!
//! See the [hex] module for details on how the coordinate system works, and
//! [Grid] for a grid built from a validated [GridConfig].

mod config;
mod grid;
pub mod hex;
mod util;

pub use crate::{
    config::GridConfig,
    grid::Grid,
    hex::*,
    util::{
        range_len,
        unit::{FloatGridUnit, GridUnit, UnsignedGridUnit},
    },
};
