use {
    super::BigInt,
    crate::limbs::{LIMB_BASE, Limbs},
    std::{mem::take, ops::MulAssign},
    tracing::instrument,
};

/// Accumulators at or above this are folded into the carry.
///
/// A limb product is less than 10^18, so after folding
/// the accumulator stays below 9 * 10^18, well within `u64`.
const FOLD_THRESHOLD: u64 = 8_000_000_000_000_000_000;

const BASE: u64 = LIMB_BASE as u64;

impl BigInt
{
    /// Multiply this value by another value.
    ///
    /// Any combination of signs is permitted.
    /// A zero product is always positive.
    #[instrument(
        level = "trace",
        skip_all,
        fields(lhs_limbs = self.magnitude.len(), rhs_limbs = other.magnitude.len())
    )]
    pub fn mul_in_place(&mut self, other: &BigInt)
    {
        // Take ownership of the old limbs, as we build new ones.
        let lhs = take(&mut self.magnitude);
        let rhs = &other.magnitude;

        self.sign = self.sign.product(other.sign);
        if !lhs.is_empty() && !rhs.is_empty() {
            self.magnitude = convolve(&lhs, rhs);
        }

        self.normalize();
    }
}

/// Schoolbook product of two non-empty magnitudes.
fn convolve(lhs: &Limbs, rhs: &Limbs) -> Limbs
{
    let positions = lhs.len() + rhs.len() - 1;
    let mut result = Limbs::with_front_capacity(positions + 1);
    let mut carry: u64 = 0;

    // Each position sums the products of limbs whose indices add up to it.
    // Positions are computed least significant first and prepended.
    for position in 0 .. positions {
        let mut acc = carry;
        carry = 0;

        let first = position.saturating_sub(rhs.len() - 1);
        let last = position.min(lhs.len() - 1);
        for i in first ..= last {
            acc += lhs.low(i) as u64 * rhs.low(position - i) as u64;
            if acc >= FOLD_THRESHOLD {
                carry += acc / BASE;
                acc %= BASE;
            }
        }

        carry += acc / BASE;
        result.push_front((acc % BASE) as u32);
    }

    while carry != 0 {
        result.push_front((carry % BASE) as u32);
        carry /= BASE;
    }

    result
}

impl MulAssign<&BigInt> for BigInt
{
    fn mul_assign(&mut self, other: &BigInt)
    {
        self.mul_in_place(other);
    }
}
