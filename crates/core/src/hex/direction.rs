use crate::hex::CubicVector;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// The 6 directions in which cells line up side-to-side. Each direction is
/// named after the axis it moves towards followed by the axis it moves away
/// from, e.g. [CubicDirection::QR] adds 1 to `q` and subtracts 1 from `r`.
/// For any given cell, a direction points to the center of one neighboring
/// cell.
///
/// Variants are declared in clockwise order as seen in the vertex-up
/// orientation, starting at up-right.
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CubicDirection {
    /// Up-right
    QR,
    /// Right
    QS,
    /// Down-right
    RS,
    /// Down-left
    RQ,
    /// Left
    SQ,
    /// Up-left
    SR,
}

impl CubicDirection {
    /// All directions, in clockwise order. Every direction's opposite is
    /// exactly half a turn away.
    pub const CLOCKWISE: &'static [Self] =
        &[Self::QR, Self::QS, Self::RS, Self::RQ, Self::SQ, Self::SR];

    /// Get the index of this direction within [Self::CLOCKWISE]
    pub fn clockwise_index(self) -> usize {
        // Variants are declared in clockwise order
        self as usize
    }

    /// Get the direction that is directly opposite this one
    pub fn opposite(self) -> Self {
        let clockwise = Self::CLOCKWISE;
        let len = clockwise.len();
        clockwise[(self.clockwise_index() + (len / 2)) % len]
    }

    /// Get the unit vector that moves a coordinate one cell in this direction
    pub fn to_vector(self) -> CubicVector {
        match self {
            Self::QR => CubicVector::QR,
            Self::QS => CubicVector::QS,
            Self::RS => CubicVector::RS,
            Self::RQ => CubicVector::RQ,
            Self::SQ => CubicVector::SQ,
            Self::SR => CubicVector::SR,
        }
    }
}

impl From<CubicDirection> for CubicVector {
    fn from(direction: CubicDirection) -> Self {
        direction.to_vector()
    }
}
