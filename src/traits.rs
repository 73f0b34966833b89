use std::error::Error;
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::ops::Add;

/// The required interface for values stored in the tree.
/// Values are orderable numeric scalars that can be summed along a path.
pub trait Value: Copy + Debug + PartialOrd + Add<Output = Self> {
    /// The additive identity, used as the sum of an empty path.
    fn zero() -> Self;

    /// Adds two values along a path.  Integers saturate at their bounds instead of
    /// overflowing; floats add normally.
    fn bounded_add(self, other: Self) -> Self;

    /// Returns the larger of two values.  Incomparable values (`NaN`) keep `self`.
    #[inline]
    #[must_use]
    fn larger(self, other: Self) -> Self {
        if other > self {
            return other;
        }
        self
    }
}

macro_rules! impl_value {
    (@add saturating, $lhs: expr, $rhs: expr) => {
        $lhs.saturating_add($rhs)
    };
    (@add plain, $lhs: expr, $rhs: expr) => {
        $lhs + $rhs
    };
    ($zero: expr, $add: ident => $($value_type: ty),+) => {
        $(
            impl Value for $value_type {
                #[inline]
                fn zero() -> Self {
                    $zero
                }

                #[inline]
                fn bounded_add(self, other: Self) -> Self {
                    impl_value!(@add $add, self, other)
                }
            }
        )+
    };
}

impl_value!(0, saturating => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
// Infinite and NaN values have no JSON numeral: they serialize as `null`, which
// `BinaryTree::deserialize` rejects.  Trees meant to round-trip must hold finite floats.
impl_value!(0.0, plain => f32, f64);

/// A generic error that implements `Error`.
/// Mostly intended to be used to standardize errors across the crate.
#[derive(Debug)]
pub struct Exception {
    /// The details of an exception
    details: String,
}

impl Exception {
    /// Creates a new `Exception`.
    #[inline]
    #[must_use]
    pub fn new(details: &str) -> Self {
        Self {
            details: details.to_owned(),
        }
    }

    /// The message carried by this `Exception`.
    #[inline]
    #[must_use]
    pub fn details(&self) -> &str {
        &self.details
    }
}

impl Display for Exception {
    #[inline]
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}", self.details)
    }
}

impl Error for Exception {}

impl From<serde_json::Error> for Exception {
    #[inline]
    fn from(error: serde_json::Error) -> Self {
        Self::new(&error.to_string())
    }
}
