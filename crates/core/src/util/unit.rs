//! Scalar units used by the cubic coordinate system.

/// Signed unit for a single axis of a coordinate or vector. 32 bits is far
/// more than any grid that could actually be held in memory will need.
pub type GridUnit = i32;

/// Unsigned unit, used for distances and radii. The distance between any two
/// coordinates fits in this type.
pub type UnsignedGridUnit = u32;

/// Floating unit, used for interpolation intermediates.
pub type FloatGridUnit = f64;

/// Convert a radius to a signed unit, for range math. Radii above
/// [GridUnit::MAX] describe grids that could never be materialized, so they
/// are clamped rather than wrapped.
pub(crate) fn signed_radius(radius: UnsignedGridUnit) -> GridUnit {
    GridUnit::try_from(radius).unwrap_or(GridUnit::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_radius() {
        assert_eq!(signed_radius(0), 0);
        assert_eq!(signed_radius(17), 17);
        assert_eq!(signed_radius(UnsignedGridUnit::MAX), GridUnit::MAX);
    }
}
