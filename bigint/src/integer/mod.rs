//! The signed big integer value.

use {crate::limbs::{LIMB_BASE, LIMB_DIGITS, Limbs}, std::fmt};

mod add;
mod format;
mod mul;
mod parse;
mod random;
mod serialize;

/// The sign of a big integer.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Sign
{
    Positive,
    Negative,
}

impl Sign
{
    /// The sign of a product of values with these signs.
    pub fn product(self, other: Self) -> Self
    {
        if self == other { Self::Positive } else { Self::Negative }
    }
}

/// Arbitrary-precision signed integer.
///
/// The magnitude is stored in limbs of nine decimal digits each.
/// Zero is represented by an empty magnitude and is always positive.
/// Cloning produces an independent deep copy.
#[derive(Clone, Eq, PartialEq)]
pub struct BigInt
{
    sign: Sign,

    // INVARIANT: The most significant limb is not zero.
    magnitude: Limbs,
}

macro_rules! from_primitive
{
    { $($type:ty)* } => {
        $(
            impl From<$type> for BigInt
            {
                fn from(value: $type) -> Self
                {
                    let sign = if value < 0 { Sign::Negative }
                               else { Sign::Positive };
                    Self::from_magnitude(sign, value.unsigned_abs() as u128)
                }
            }
        )*
    };
}

from_primitive! { i8 i16 i32 i64 i128 isize }

impl BigInt
{
    /// The value zero.
    pub fn zero() -> Self
    {
        Self{sign: Sign::Positive, magnitude: Limbs::new()}
    }

    fn from_magnitude(sign: Sign, mut magnitude: u128) -> Self
    {
        let mut limbs = Limbs::new();
        while magnitude != 0 {
            limbs.push_front((magnitude % LIMB_BASE as u128) as u32);
            magnitude /= LIMB_BASE as u128;
        }
        let mut this = Self{sign, magnitude: limbs};
        this.normalize();
        this
    }

    /// The sign of the value; zero is positive.
    pub fn sign(&self) -> Sign
    {
        self.sign
    }

    /// Whether the value is zero.
    pub fn is_zero(&self) -> bool
    {
        self.magnitude.is_empty()
    }

    /// The limbs of the magnitude, most significant first.
    pub fn limbs(&self) -> &Limbs
    {
        &self.magnitude
    }

    /// The number of decimal digits in the magnitude.
    ///
    /// Zero has one digit, as it is written `0`.
    pub fn digit_count(&self) -> usize
    {
        match self.magnitude.len() {
            0 => 1,
            n => self.magnitude.leading_digits() + LIMB_DIGITS * (n - 1),
        }
    }

    /// Restore the representation invariants after a mutation.
    ///
    /// Leading zero limbs are removed, and zero is made positive.
    fn normalize(&mut self)
    {
        while !self.magnitude.is_empty() && self.magnitude.get(0) == 0 {
            self.magnitude.pop_front();
        }
        if self.magnitude.is_empty() {
            self.sign = Sign::Positive;
        }
    }
}

impl Default for BigInt
{
    fn default() -> Self
    {
        Self::zero()
    }
}

impl fmt::Debug for BigInt
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    {
        write!(f, "BigInt({})", self)
    }
}

#[cfg(test)]
mod tests
{
    use {super::*, proptest::proptest};

    #[test]
    fn zero_is_positive()
    {
        let zero = BigInt::zero();
        assert!(zero.is_zero());
        assert_eq!(zero.sign(), Sign::Positive);
        assert_eq!(zero.digit_count(), 1);
        assert_eq!(BigInt::from(0i64), zero);
        assert_eq!(BigInt::default(), zero);
    }

    #[test]
    fn sign_product()
    {
        use Sign::*;
        assert_eq!(Positive.product(Positive), Positive);
        assert_eq!(Negative.product(Negative), Positive);
        assert_eq!(Positive.product(Negative), Negative);
        assert_eq!(Negative.product(Positive), Negative);
    }

    #[test]
    fn from_extremes()
    {
        assert_eq!(
            BigInt::from(i64::MIN).to_string(),
            "-9223372036854775808",
        );
        assert_eq!(
            BigInt::from(i128::MIN).to_string(),
            "-170141183460469231731687303715884105728",
        );
        assert_eq!(BigInt::from(i8::MAX).limbs().len(), 1);
    }

    #[test]
    fn debug()
    {
        assert_eq!(format!("{:?}", BigInt::from(-12)), "BigInt(-12)");
    }

    proptest!
    {
        #[test]
        fn from_matches_to_string(value: i128)
        {
            let big = BigInt::from(value);
            assert_eq!(big.to_string(), value.to_string());
            assert_eq!(big.digit_count(), value.unsigned_abs().to_string().len());
        }

        #[test]
        fn from_i32_matches_i64(value: i32)
        {
            assert_eq!(BigInt::from(value), BigInt::from(value as i64));
        }
    }
}
