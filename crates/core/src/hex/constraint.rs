//! The single constraint of the cubic coordinate system: `q + r + s = 0`.
//! Every constructor that accepts independently supplied axes funnels through
//! [validate], and every place that needs to complete a partial coordinate
//! uses one of the `derive_*` helpers.

use crate::util::unit::GridUnit;
use derive_more::{Display, Error};
use std::ops::{Neg, Sub};

/// Error returned when three axis values don't sum to zero, meaning they
/// don't describe any point (or vector) in the cubic coordinate system.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Error)]
#[display(
    fmt = "[q: {}, r: {}, s: {}] is not a valid cubic value; q + r + s must \
           equal 0",
    q,
    r,
    s
)]
pub struct ZeroSumViolation {
    pub q: GridUnit,
    pub r: GridUnit,
    pub s: GridUnit,
}

/// Check that the given axes satisfy the zero-sum constraint. The sum is
/// calculated in 64 bits, so values that would overflow a [GridUnit] are
/// rejected instead of wrapping around to zero.
pub fn validate(
    q: GridUnit,
    r: GridUnit,
    s: GridUnit,
) -> Result<(), ZeroSumViolation> {
    if i64::from(q) + i64::from(r) + i64::from(s) == 0 {
        Ok(())
    } else {
        Err(ZeroSumViolation { q, r, s })
    }
}

/// Calculate the `q` value that satisfies the constraint for the given `r`
/// and `s`
pub fn derive_q<T: Neg<Output = T> + Sub<Output = T>>(r: T, s: T) -> T {
    -r - s
}

/// Calculate the `r` value that satisfies the constraint for the given `q`
/// and `s`
pub fn derive_r<T: Neg<Output = T> + Sub<Output = T>>(q: T, s: T) -> T {
    -q - s
}

/// Calculate the `s` value that satisfies the constraint for the given `q`
/// and `r`
pub fn derive_s<T: Neg<Output = T> + Sub<Output = T>>(q: T, r: T) -> T {
    -q - r
}

/// Calculate the axis that completes a coordinate with the two given axes,
/// i.e. `-a - b`. Returns `None` if the result doesn't fit in a [GridUnit],
/// in which case no valid coordinate has those two axes.
pub fn checked_derive(a: GridUnit, b: GridUnit) -> Option<GridUnit> {
    a.checked_add(b)?.checked_neg()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert_eq!(validate(0, 0, 0), Ok(()));
        assert_eq!(validate(1, -1, 0), Ok(()));
        assert_eq!(validate(-3, 5, -2), Ok(()));
        assert_eq!(
            validate(1, 1, 1),
            Err(ZeroSumViolation { q: 1, r: 1, s: 1 })
        );
        assert_eq!(
            validate(0, 0, 1),
            Err(ZeroSumViolation { q: 0, r: 0, s: 1 })
        );
    }

    #[test]
    fn test_validate_overflow() {
        // These wrap around to 0 in 32 bits, so they'd sneak through a naive
        // check
        assert!(validate(GridUnit::MAX, GridUnit::MAX, 2).is_err());
        assert!(validate(GridUnit::MIN, GridUnit::MIN, 0).is_err());
    }

    #[test]
    fn test_derive() {
        assert_eq!(derive_q(2, -5), 3);
        assert_eq!(derive_r(2, -5), 3);
        assert_eq!(derive_s(-1, 4), -3);
        // Works on floats too, which is what rounding uses
        assert_eq!(derive_s(1.0, -3.0), 2.0);
    }

    #[test]
    fn test_checked_derive() {
        assert_eq!(checked_derive(2, -5), Some(3));
        assert_eq!(checked_derive(GridUnit::MIN + 1, 0), Some(GridUnit::MAX));
        assert_eq!(checked_derive(GridUnit::MIN, GridUnit::MAX), Some(1));
        assert_eq!(checked_derive(GridUnit::MAX, GridUnit::MAX), None);
        assert_eq!(checked_derive(GridUnit::MIN, 0), None);
        assert_eq!(checked_derive(GridUnit::MIN, -1), None);
    }

    #[test]
    fn test_violation_display() {
        let error = ZeroSumViolation { q: 1, r: 1, s: 1 };
        assert_eq!(
            error.to_string(),
            "[q: 1, r: 1, s: 1] is not a valid cubic value; q + r + s must \
             equal 0"
        );
    }
}
