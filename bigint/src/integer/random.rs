use {
    super::{BigInt, Sign},
    crate::error::{Error, Result},
    rand::Rng,
    tracing::trace,
};

/// Generating random big integers.
impl BigInt
{
    /// Create a random value with exactly `digits` decimal digits.
    ///
    /// Uses the thread-local generator from [`rand::thread_rng`].
    /// See [`random_with`][`Self::random_with`] for details.
    pub fn random(digits: usize, sign: Sign) -> Result<Self>
    {
        Self::random_with(digits, sign, &mut rand::thread_rng())
    }

    /// Create a random value with exactly `digits` decimal digits.
    ///
    /// Every digit is uniformly distributed, except that the leading
    /// digit of a multi-digit value is never zero.
    /// A single-digit value may be zero, in which case it is positive
    /// regardless of the requested sign.
    pub fn random_with<R>(digits: usize, sign: Sign, rng: &mut R)
        -> Result<Self>
        where R: Rng + ?Sized
    {
        if digits == 0 {
            return Err(Error::ZeroDigitCount);
        }

        trace!(digits, ?sign, "Generating random integer");

        let mut numeral = String::with_capacity(digits + 1);
        if sign == Sign::Negative {
            numeral.push('-');
        }
        let leading = if digits == 1 { 0 } else { 1 };
        numeral.push(char::from(b'0' + rng.gen_range(leading ..= 9u8)));
        for _ in 1 .. digits {
            numeral.push(char::from(b'0' + rng.gen_range(0 ..= 9u8)));
        }

        Self::from_numeral(&numeral)
    }
}
