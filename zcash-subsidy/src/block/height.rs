//! Block heights.

use std::{
    ops::{Add, Sub},
    str::FromStr,
};

use thiserror::Error;

/// The height of a block is the length of the chain back to the genesis block.
///
/// # Invariants
///
/// Users should not construct block heights greater than `Height::MAX`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Height(pub u32);

/// A difference between two [`Height`]s, possibly negative.
pub type HeightDiff = i64;

/// Errors parsing or constructing [`Height`]s.
#[derive(Error, Copy, Clone, Debug, Eq, PartialEq)]
pub enum HeightError {
    /// The input was not a non-negative decimal integer.
    #[error("height must be a non-negative decimal integer")]
    Parse,

    /// The parsed value was above [`Height::MAX`].
    #[error("height {0} exceeds the maximum block height")]
    Overflow(u32),
}

impl Height {
    /// The minimum Height.
    ///
    /// Due to the underlying type, it is impossible to construct block heights
    /// less than `Height::MIN`.
    ///
    /// Style note: Sometimes, `Height::MIN` is less readable than
    /// `Height(0)`. Use whichever makes sense in context.
    pub const MIN: Height = Height(0);

    /// The maximum Height.
    ///
    /// Users should not construct block heights greater than `Height::MAX`.
    pub const MAX: Height = Height(499_999_999);

    /// The maximum Height as a u32, for range patterns.
    ///
    /// `Height::MAX.0` can't be used in match range patterns, use this
    /// alias instead.
    pub const MAX_AS_U32: u32 = Self::MAX.0;

    /// Returns the next [`Height`], or `None` if it would be above [`Height::MAX`].
    pub fn next(self) -> Option<Self> {
        self + 1
    }

    /// Returns the previous [`Height`], or `None` at the genesis height.
    pub fn previous(self) -> Option<Self> {
        self - 1
    }

    /// Returns `true` if this is the genesis height.
    pub fn is_min(self) -> bool {
        self == Self::MIN
    }
}

impl FromStr for Height {
    type Err = HeightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse() {
            Ok(h) if Height(h) <= Height::MAX => Ok(Height(h)),
            Ok(h) => Err(HeightError::Overflow(h)),
            Err(_) => Err(HeightError::Parse),
        }
    }
}

impl TryFrom<u32> for Height {
    type Error = HeightError;

    fn try_from(height: u32) -> Result<Self, Self::Error> {
        if Height(height) <= Height::MAX {
            Ok(Height(height))
        } else {
            Err(HeightError::Overflow(height))
        }
    }
}

impl Sub<Height> for Height {
    type Output = HeightDiff;

    /// Subtract two heights, returning the signed difference.
    ///
    /// This result can be negative, even though [`Height`]s are non-negative.
    fn sub(self, rhs: Height) -> Self::Output {
        HeightDiff::from(self.0) - HeightDiff::from(rhs.0)
    }
}

impl Add<HeightDiff> for Height {
    type Output = Option<Height>;

    fn add(self, rhs: HeightDiff) -> Option<Height> {
        // All valid heights fit in a HeightDiff, so this can't overflow
        let result = HeightDiff::from(self.0).checked_add(rhs)?;
        let result = u32::try_from(result).ok()?;

        result.try_into().ok()
    }
}

impl Sub<HeightDiff> for Height {
    type Output = Option<Height>;

    fn sub(self, rhs: HeightDiff) -> Option<Height> {
        self + rhs.checked_neg()?
    }
}

#[cfg(any(test, feature = "proptest-impl"))]
use proptest::prelude::*;

#[cfg(any(test, feature = "proptest-impl"))]
impl Arbitrary for Height {
    type Parameters = ();

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        (Height::MIN.0..=Height::MAX.0).prop_map(Height).boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_parses_valid_input() {
        assert_eq!(Ok(Height(0)), "0".parse());
        assert_eq!(Ok(Height(653_600)), "653600".parse());
        assert_eq!(Ok(Height::MAX), Height::MAX_AS_U32.to_string().parse());
    }

    #[test]
    fn height_rejects_invalid_input() {
        // negative, fractional, and non-numeric inputs are invalid arguments,
        // they are never coerced or wrapped
        assert_eq!(Err(HeightError::Parse), "-1".parse::<Height>());
        assert_eq!(Err(HeightError::Parse), "1.5".parse::<Height>());
        assert_eq!(Err(HeightError::Parse), "one".parse::<Height>());
        assert_eq!(Err(HeightError::Parse), "".parse::<Height>());

        assert_eq!(
            Err(HeightError::Overflow(Height::MAX_AS_U32 + 1)),
            (Height::MAX_AS_U32 + 1).to_string().parse::<Height>(),
        );
    }

    #[test]
    fn height_arithmetic_is_checked() {
        assert_eq!(Some(Height(21)), Height(20) + 1);
        assert_eq!(Some(Height(19)), Height(20) - 1);

        assert_eq!(-1, Height(1) - Height(2));
        assert_eq!(1, Height(2) - Height(1));

        assert_eq!(None, Height(0) - 1);
        assert_eq!(None, Height::MAX + 1);
        assert_eq!(Some(Height::MAX), Height::MAX + 0);

        assert_eq!(None, Height(0).previous());
        assert_eq!(Some(Height(1)), Height(0).next());
        assert_eq!(None, Height::MAX.next());
    }
}
