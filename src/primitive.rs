//! Implementation of the FiniteF64 primitive

use crate::{IsoError, IsoResult};
use core_maths::CoreFloat;
use num_traits::FromPrimitive;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiniteF64(pub(crate) f64);

impl FiniteF64 {
    /// Returns the largest whole number less than or equal to this value.
    #[inline]
    pub fn floor(&self) -> Self {
        Self(CoreFloat::floor(self.0))
    }

    /// Returns the fractional part of this value in `[0, 1)`.
    ///
    /// Negative values borrow from the whole part, so `-0.25` yields `0.75`.
    #[inline]
    pub fn positive_fraction(&self) -> Self {
        let fraction = self.0 - CoreFloat::trunc(self.0);
        if fraction < 0.0 {
            Self(fraction + 1.0)
        } else {
            Self(fraction)
        }
    }

    #[inline]
    pub fn checked_mul(&self, other: f64) -> IsoResult<Self> {
        Self::try_from(self.0 * other)
    }

    /// Rounds half away from zero and converts to an `i64`.
    pub(crate) fn round_to_i64(&self) -> IsoResult<i64> {
        i64::from_f64(CoreFloat::round(self.0))
            .ok_or(IsoError::range().with_message("number exceeds a valid instant value."))
    }
}

impl TryFrom<f64> for FiniteF64 {
    type Error = IsoError;
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(IsoError::range().with_message("number value is not a finite value."));
        }
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::FiniteF64;

    #[test]
    fn non_finite_values() {
        assert!(FiniteF64::try_from(f64::NAN).is_err());
        assert!(FiniteF64::try_from(f64::INFINITY).is_err());
        assert!(FiniteF64::try_from(f64::NEG_INFINITY).is_err());
        assert_eq!(FiniteF64::try_from(-0.0).unwrap().0, 0.0);
        assert!(FiniteF64::try_from(f64::MAX).unwrap().checked_mul(10.0).is_err());
    }

    #[test]
    fn fractions() {
        let value = FiniteF64::try_from(12.25).unwrap();
        assert_eq!(value.floor().0, 12.0);
        assert_eq!(value.positive_fraction().0, 0.25);

        let value = FiniteF64::try_from(-0.25).unwrap();
        assert_eq!(value.floor().0, -1.0);
        assert_eq!(value.positive_fraction().0, 0.75);

        let value = FiniteF64::try_from(-3.0).unwrap();
        assert_eq!(value.floor().0, -3.0);
        assert_eq!(value.positive_fraction().0, 0.0);
    }

    #[test]
    fn rounding() {
        assert_eq!(FiniteF64::try_from(999.6).unwrap().round_to_i64(), Ok(1000));
        assert_eq!(FiniteF64::try_from(0.5).unwrap().round_to_i64(), Ok(1));
        assert_eq!(FiniteF64::try_from(-0.5).unwrap().round_to_i64(), Ok(-1));
        assert!(FiniteF64::try_from(1e300).unwrap().round_to_i64().is_err());
    }
}
