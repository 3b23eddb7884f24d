use crate::{
    hex::{constraint, CubicAxis, CubicCoordinate, CubicCoordinateValue},
    util::unit::{FloatGridUnit, GridUnit},
};
use derive_more::Display;

/// An intermediate point in the cubic coordinate system, with real-valued
/// components. These come out of interpolation (e.g. line drawing), and are
/// meant to be rounded back to a [CubicCoordinate] right away.
///
/// Floating error means the components only *approximately* sum to zero, so
/// there is no validation here. Rounding is what restores the constraint.
///
/// See https://www.redblobgames.com/grids/hexagons/#rounding
#[derive(Copy, Clone, Debug, PartialEq, Display)]
#[display(fmt = "[q: {}, r: {}, s: {}]", q, r, s)]
pub struct FloatCubicCoordinate {
    q: FloatGridUnit,
    r: FloatGridUnit,
    s: FloatGridUnit,
}

impl FloatCubicCoordinate {
    /// Bias added to every component at construction. A point that lands
    /// exactly on the boundary between two cells would otherwise round
    /// towards whichever side floating noise happens to push it. With the
    /// bias, it always rounds the same way.
    pub const EPSILON: FloatGridUnit = 1e-6;

    /// Construct a new floating coordinate. [Self::EPSILON] is added to each
    /// component.
    pub fn new(q: FloatGridUnit, r: FloatGridUnit, s: FloatGridUnit) -> Self {
        Self {
            q: q + Self::EPSILON,
            r: r + Self::EPSILON,
            s: s + Self::EPSILON,
        }
    }

    /// Linearly interpolate between two cells. `t = 0` gives `a`, `t = 1`
    /// gives `b`.
    pub fn lerp(
        a: CubicCoordinate,
        b: CubicCoordinate,
        t: FloatGridUnit,
    ) -> Self {
        let lerp = |a: GridUnit, b: GridUnit| {
            let a = FloatGridUnit::from(a);
            a + (FloatGridUnit::from(b) - a) * t
        };
        Self::new(lerp(a.q(), b.q()), lerp(a.r(), b.r()), lerp(a.s(), b.s()))
    }

    /// Round to the nearest valid [CubicCoordinate].
    ///
    /// Each component is rounded on its own, which can break the zero-sum
    /// constraint. To fix that, whichever component moved the most during
    /// rounding is thrown out and recalculated from the other two.
    pub fn round(self) -> CubicCoordinate {
        let mut q = self.q.round();
        let mut r = self.r.round();
        let mut s = self.s.round();

        let q_diff = (q - self.q).abs();
        let r_diff = (r - self.r).abs();
        let s_diff = (s - self.s).abs();

        match Self::largest_diff_axis(q_diff, r_diff, s_diff) {
            CubicAxis::Q => q = constraint::derive_q(r, s),
            CubicAxis::R => r = constraint::derive_r(q, s),
            CubicAxis::S => s = constraint::derive_s(q, r),
        }

        // Rounded values are whole numbers, so these casts are exact
        CubicCoordinate::new_unchecked(
            q as GridUnit,
            r as GridUnit,
            s as GridUnit,
        )
    }

    /// Pick the axis to recalculate after rounding. Ties are broken in a
    /// fixed order: q only wins if it is strictly the largest, then r wins if
    /// it is strictly larger than s, otherwise s.
    fn largest_diff_axis(
        q_diff: FloatGridUnit,
        r_diff: FloatGridUnit,
        s_diff: FloatGridUnit,
    ) -> CubicAxis {
        if q_diff > r_diff && q_diff > s_diff {
            CubicAxis::Q
        } else if r_diff > s_diff {
            CubicAxis::R
        } else {
            CubicAxis::S
        }
    }
}

impl CubicCoordinateValue for FloatCubicCoordinate {
    type Component = FloatGridUnit;

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

impl From<CubicCoordinate> for FloatCubicCoordinate {
    fn from(other: CubicCoordinate) -> Self {
        Self::new(other.q().into(), other.r().into(), other.s().into())
    }
}
