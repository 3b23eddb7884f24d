//! This sub-module contains the basic value types of the cubic coordinate
//! system: coordinates (locations) and vectors (displacements). See the
//! parent module documentation for more info on the coordinate system.

use crate::{
    hex::{
        constraint::{self, ZeroSumViolation},
        CubicDirection, CubicRange, FloatCubicCoordinate,
    },
    util::unit::{signed_radius, FloatGridUnit, GridUnit, UnsignedGridUnit},
};
use derive_more::{
    Add, AddAssign, Display, Mul, MulAssign, Neg, Sub, SubAssign,
};
use serde::{Deserialize, Serialize};
use std::ops;
use strum::{EnumIter, IntoEnumIterator};

/// A trait representing any three-component value in the cubic coordinate
/// system. Coordinates, vectors, and floating coordinates all implement this,
/// so anything that only cares about the shape `(q, r, s)` can be written
/// once against this trait.
pub trait CubicCoordinateValue: Sized {
    /// The primitive type of each component. Must be convertible to `f64` so
    /// values can be interpolated.
    type Component: Copy + Into<FloatGridUnit>;

    /// The `q` component of the value
    fn q(&self) -> Self::Component;

    /// The `r` component of the value
    fn r(&self) -> Self::Component;

    /// The `s` component of the value
    fn s(&self) -> Self::Component;

    /// Get the component along a particular axis
    fn component(&self, axis: CubicAxis) -> Self::Component {
        match axis {
            CubicAxis::Q => self.q(),
            CubicAxis::R => self.r(),
            CubicAxis::S => self.s(),
        }
    }

    /// All three components, in `[q, r, s]` order
    fn components(&self) -> [Self::Component; 3] {
        [self.q(), self.r(), self.s()]
    }

    /// Sum of all three components, as a float. This is exactly 0 for every
    /// coordinate and vector, and very close to 0 for floating coordinates.
    fn sum(&self) -> FloatGridUnit {
        self.q().into() + self.r().into() + self.s().into()
    }
}

/// The 3 axes in our coordinate system.
///
/// See this page for more info:
/// https://www.redblobgames.com/grids/hexagons/#coordinates-cube
#[derive(Copy, Clone, Debug, Display, EnumIter, PartialEq, Eq, Hash)]
pub enum CubicAxis {
    #[display(fmt = "q")]
    Q,
    #[display(fmt = "r")]
    R,
    #[display(fmt = "s")]
    S,
}

/// A point in the cubic coordinate system that identifies a single hexagon
/// cell. Coordinates can't be mutated once built, and the only way to build
/// one from independently supplied components is [CubicCoordinate::new],
/// which enforces `q + r + s = 0`. Everything else (arithmetic with vectors,
/// rounding, range generation) is guaranteed to preserve that invariant, so
/// those paths can't fail.
///
/// Equality and hashing are structural over `(q, r, s)`.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "[q: {}, r: {}, s: {}]", q, r, s)]
#[serde(try_from = "UncheckedCubic", into = "UncheckedCubic")]
pub struct CubicCoordinate {
    q: GridUnit,
    r: GridUnit,
    s: GridUnit,
}

impl CubicCoordinate {
    /// The origin cell
    pub const ZERO: Self = Self::new_unchecked(0, 0, 0);

    /// Construct a new coordinate from all three components. Fails if the
    /// components don't sum to zero.
    pub fn new(
        q: GridUnit,
        r: GridUnit,
        s: GridUnit,
    ) -> Result<Self, ZeroSumViolation> {
        constraint::validate(q, r, s)?;
        Ok(Self { q, r, s })
    }

    /// Construct a coordinate from components that are already known to
    /// satisfy the constraint. Only for use in invariant-preserving code
    /// paths.
    pub(crate) const fn new_unchecked(
        q: GridUnit,
        r: GridUnit,
        s: GridUnit,
    ) -> Self {
        debug_assert!(q as i64 + r as i64 + s as i64 == 0);
        Self { q, r, s }
    }

    /// Construct a new coordinate from `q` and `r`. Since q+r+s=0 for all
    /// coordinates, we can derive `s`. Fails if the derived `s` doesn't fit
    /// in a [GridUnit].
    pub fn from_qr(
        q: GridUnit,
        r: GridUnit,
    ) -> Result<Self, ZeroSumViolation> {
        let s = constraint::checked_derive(q, r)
            .ok_or(ZeroSumViolation { q, r, s: 0 })?;
        Ok(Self::new_unchecked(q, r, s))
    }

    /// Construct a new coordinate from `q` and `s`. Since q+r+s=0 for all
    /// coordinates, we can derive `r`. Fails if the derived `r` doesn't fit
    /// in a [GridUnit].
    pub fn from_qs(
        q: GridUnit,
        s: GridUnit,
    ) -> Result<Self, ZeroSumViolation> {
        let r = constraint::checked_derive(q, s)
            .ok_or(ZeroSumViolation { q, r: 0, s })?;
        Ok(Self::new_unchecked(q, r, s))
    }

    /// Construct a new coordinate from `r` and `s`. Since q+r+s=0 for all
    /// coordinates, we can derive `q`. Fails if the derived `q` doesn't fit
    /// in a [GridUnit].
    pub fn from_rs(
        r: GridUnit,
        s: GridUnit,
    ) -> Result<Self, ZeroSumViolation> {
        let q = constraint::checked_derive(r, s)
            .ok_or(ZeroSumViolation { q: 0, r, s })?;
        Ok(Self::new_unchecked(q, r, s))
    }

    /// Calculate the path distance between two cells, meaning the number of
    /// hops it takes to get from one to the other. 0 if the coordinates are
    /// equal, 1 if the cells are adjacent, 2 if there is 1 cell between them,
    /// etc.
    pub fn distance_to(self, other: CubicCoordinate) -> UnsignedGridUnit {
        // https://www.redblobgames.com/grids/hexagons/#distances
        // Differences are taken in 64 bits so opposite extremes can't
        // overflow. The largest possible difference still fits in a u32.
        let diff = |a: GridUnit, b: GridUnit| {
            (i64::from(a) - i64::from(b)).unsigned_abs()
        };
        diff(self.q, other.q)
            .max(diff(self.r, other.r))
            .max(diff(self.s, other.s)) as UnsignedGridUnit
    }

    /// Draw a line from this cell to another. The returned list starts with
    /// `self`, ends with `other`, and holds `distance + 1` cells, each one
    /// adjacent to the previous.
    ///
    /// The line is calculated by interpolating between the two cells in
    /// floating point, then rounding each interpolated point back to the
    /// nearest cell. See [FloatCubicCoordinate::round].
    pub fn line_to(self, other: CubicCoordinate) -> Vec<CubicCoordinate> {
        // https://www.redblobgames.com/grids/hexagons/#line-drawing
        let distance = self.distance_to(other);
        if distance == 0 {
            return vec![self];
        }

        let steps = FloatGridUnit::from(distance);
        (0..=distance)
            .map(|i| {
                FloatCubicCoordinate::lerp(
                    self,
                    other,
                    FloatGridUnit::from(i) / steps,
                )
                .round()
            })
            .collect()
    }

    /// Get the set of all cells within `radius` steps of this one. See
    /// [CubicRange].
    pub fn range(self, radius: UnsignedGridUnit) -> CubicRange {
        CubicRange::new(self, radius)
    }

    /// Get all the cells that are exactly `radius` steps from this one. The
    /// cells are listed in walking order, so each one is adjacent to the
    /// previous (and the last is adjacent to the first). A radius of 0 gives
    /// just this cell, otherwise there will always be `6 * radius` cells.
    pub fn ring(self, radius: UnsignedGridUnit) -> Vec<CubicCoordinate> {
        // https://www.redblobgames.com/grids/hexagons/#rings
        if radius == 0 {
            return vec![self];
        }

        // Start on the corner that is two directions behind the first
        // direction we walk in, so the first side of the walk runs along the
        // ring instead of cutting across it
        let mut cell = self
            + CubicDirection::CLOCKWISE[4].to_vector() * signed_radius(radius);
        let mut ring = Vec::with_capacity(6 * radius as usize);
        for &direction in CubicDirection::CLOCKWISE {
            for _ in 0..radius {
                ring.push(cell);
                cell = cell.adjacent(direction);
            }
        }
        ring
    }

    /// Get the location of a particular cell adjacent to this one
    pub fn adjacent(self, direction: CubicDirection) -> CubicCoordinate {
        self + direction.to_vector()
    }

    /// Get an iterator of all the cells directly adjacent to this one. The
    /// iterator will always contain exactly 6 values.
    pub fn adjacents(self) -> impl Iterator<Item = CubicCoordinate> {
        CubicDirection::iter().map(move |dir| self.adjacent(dir))
    }
}

impl CubicCoordinateValue for CubicCoordinate {
    type Component = GridUnit;

    fn q(&self) -> Self::Component {
        self.q
    }

    fn r(&self) -> Self::Component {
        self.r
    }

    fn s(&self) -> Self::Component {
        self.s
    }
}

// Adding a valid vector to a valid coordinate always gives a valid coordinate
impl ops::Add<CubicVector> for CubicCoordinate {
    type Output = CubicCoordinate;

    fn add(self, rhs: CubicVector) -> Self::Output {
        Self::new_unchecked(self.q + rhs.q, self.r + rhs.r, self.s + rhs.s)
    }
}

impl ops::Sub<CubicVector> for CubicCoordinate {
    type Output = CubicCoordinate;

    fn sub(self, rhs: CubicVector) -> Self::Output {
        Self::new_unchecked(self.q - rhs.q, self.r - rhs.r, self.s - rhs.s)
    }
}

/// The difference between two coordinates is the vector that translates
/// `rhs` onto `self`
impl ops::Sub<CubicCoordinate> for CubicCoordinate {
    type Output = CubicVector;

    fn sub(self, rhs: CubicCoordinate) -> Self::Output {
        CubicVector::new_unchecked(
            self.q - rhs.q,
            self.r - rhs.r,
            self.s - rhs.s,
        )
    }
}

impl ops::AddAssign<CubicVector> for CubicCoordinate {
    fn add_assign(&mut self, rhs: CubicVector) {
        *self = *self + rhs;
    }
}

impl ops::SubAssign<CubicVector> for CubicCoordinate {
    fn sub_assign(&mut self, rhs: CubicVector) {
        *self = *self - rhs;
    }
}

impl TryFrom<UncheckedCubic> for CubicCoordinate {
    type Error = ZeroSumViolation;

    fn try_from(value: UncheckedCubic) -> Result<Self, Self::Error> {
        Self::new(value.q, value.r, value.s)
    }
}

/// A vector in the cubic coordinate system. This is a `(q, r, s)` kind of
/// vector, not a list vector. A vector represents a translation between two
/// cells, rather than a cell itself. Vectors hold the same constraint as
/// coordinates: `q + r + s = 0`. Adding, subtracting, negating, and scaling
/// valid vectors always gives another valid vector.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    Add,
    Sub,
    Neg,
    Mul,
    AddAssign,
    SubAssign,
    MulAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "[q: {}, r: {}, s: {}]", q, r, s)]
#[serde(try_from = "UncheckedCubic", into = "UncheckedCubic")]
pub struct CubicVector {
    q: GridUnit,
    r: GridUnit,
    s: GridUnit,
}

impl CubicVector {
    /// The identity translation
    pub const ZERO: Self = Self::new_unchecked(0, 0, 0);

    /// Unit vector towards `+s` and `-r`. Up in edge-up orientation, up-left
    /// in vertex-up orientation.
    pub const SR: Self = Self::new_unchecked(0, -1, 1);

    /// Unit vector towards `+s` and `-q`. Up-left in edge-up orientation,
    /// left in vertex-up orientation.
    pub const SQ: Self = Self::new_unchecked(-1, 0, 1);

    /// Unit vector towards `+q` and `-r`. Up-right in both orientations.
    pub const QR: Self = Self::new_unchecked(1, -1, 0);

    /// Unit vector towards `+r` and `-s`. Down in edge-up orientation,
    /// down-right in vertex-up orientation.
    pub const RS: Self = Self::new_unchecked(0, 1, -1);

    /// Unit vector towards `+r` and `-q`. Down-left in both orientations.
    pub const RQ: Self = Self::new_unchecked(-1, 1, 0);

    /// Unit vector towards `+q` and `-s`. Down-right in edge-up orientation,
    /// right in vertex-up orientation.
    pub const QS: Self = Self::new_unchecked(1, 0, -1);

    /// Diagonal towards `+q`, passing through the vertex shared by the
    /// [Self::QR] and [Self::QS] neighbors. Use `-CubicVector::Q` for the
    /// opposite direction.
    pub const Q: Self = Self::new_unchecked(2, -1, -1);

    /// Diagonal towards `+r`, passing through the vertex shared by the
    /// [Self::RS] and [Self::RQ] neighbors
    pub const R: Self = Self::new_unchecked(-1, 2, -1);

    /// Diagonal towards `+s`, passing through the vertex shared by the
    /// [Self::SQ] and [Self::SR] neighbors
    pub const S: Self = Self::new_unchecked(-1, -1, 2);

    /// All six unit vectors, one per neighboring cell
    pub const UNITS: &'static [Self] =
        &[Self::SR, Self::SQ, Self::QR, Self::RS, Self::RQ, Self::QS];

    /// All three positive diagonals
    pub const DIAGONALS: &'static [Self] = &[Self::Q, Self::R, Self::S];

    /// Construct a new vector from all three components. Fails if the
    /// components don't sum to zero.
    pub fn new(
        q: GridUnit,
        r: GridUnit,
        s: GridUnit,
    ) -> Result<Self, ZeroSumViolation> {
        constraint::validate(q, r, s)?;
        Ok(Self { q, r, s })
    }

    /// Construct a vector along the `q`/`r` plane, with `s` fixed at 0. This
    /// means `q` and `r` must be additive inverses.
    pub fn new_qr(q: GridUnit, r: GridUnit) -> Result<Self, ZeroSumViolation> {
        Self::new(q, r, 0)
    }

    /// Construct a vector along the `q`/`s` plane, with `r` fixed at 0. This
    /// means `q` and `s` must be additive inverses.
    pub fn new_qs(q: GridUnit, s: GridUnit) -> Result<Self, ZeroSumViolation> {
        Self::new(q, 0, s)
    }

    /// Construct a vector along the `r`/`s` plane, with `q` fixed at 0. This
    /// means `r` and `s` must be additive inverses.
    pub fn new_rs(r: GridUnit, s: GridUnit) -> Result<Self, ZeroSumViolation> {
        Self::new(0, r, s)
    }

    pub(crate) const fn new_unchecked(
        q: GridUnit,
        r: GridUnit,
        s: GridUnit,
    ) -> Self {
        debug_assert!(q as i64 + r as i64 + s as i64 == 0);
        Self { q, r, s }
    }

    /// Number of single-cell steps this vector translates by. Same metric as
    /// [CubicCoordinate::distance_to].
    pub fn length(self) -> UnsignedGridUnit {
        self.q
            .unsigned_abs()
            .max(self.r.unsigned_abs())
            .max(self.s.unsigned_abs())
    }
}

impl CubicCoordinateValue for CubicVector {
    type Component = GridUnit;

    fn q(&self) -> Self::Component {
        self.q
    }

    fn r(&self) -> Self::Component {
        self.r
    }

    fn s(&self) -> Self::Component {
        self.s
    }
}

// Scalar multiplication commutes
impl ops::Mul<CubicVector> for GridUnit {
    type Output = CubicVector;

    fn mul(self, rhs: CubicVector) -> Self::Output {
        rhs * self
    }
}

impl TryFrom<UncheckedCubic> for CubicVector {
    type Error = ZeroSumViolation;

    fn try_from(value: UncheckedCubic) -> Result<Self, Self::Error> {
        Self::new(value.q, value.r, value.s)
    }
}

/// An unvalidated `(q, r, s)` triple. This is the serialized form of both
/// coordinates and vectors. Deserialization goes through this type and then
/// through the validating constructor, so invalid input can never produce an
/// invalid value.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
struct UncheckedCubic {
    q: GridUnit,
    r: GridUnit,
    s: GridUnit,
}

impl From<CubicCoordinate> for UncheckedCubic {
    fn from(value: CubicCoordinate) -> Self {
        Self {
            q: value.q,
            r: value.r,
            s: value.s,
        }
    }
}

impl From<CubicVector> for UncheckedCubic {
    fn from(value: CubicVector) -> Self {
        Self {
            q: value.q,
            r: value.r,
            s: value.s,
        }
    }
}
