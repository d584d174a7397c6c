use {
    super::BigInt,
    crate::{error::{Error, Result}, limbs::LIMB_BASE},
};

impl BigInt
{
    /// Add a value with the same sign to this value.
    ///
    /// Values with different signs cannot be added;
    /// this returns [`Error::SignMismatch`] and leaves `self` unchanged.
    /// Zero counts as positive.
    pub fn add_in_place(&mut self, other: &BigInt) -> Result<()>
    {
        if self.sign != other.sign {
            return Err(Error::SignMismatch);
        }

        let len = self.magnitude.len().max(other.magnitude.len());
        let mut carry = 0;

        for i in 0 .. len {
            let mut sum =
                self.magnitude.low(i) + other.magnitude.low(i) + carry;
            carry = 0;
            while sum >= LIMB_BASE {
                sum -= LIMB_BASE;
                carry += 1;
            }

            // Positions past our own length are new leading limbs.
            if i < self.magnitude.len() {
                self.magnitude.set_low(i, sum);
            } else {
                self.magnitude.push_front(sum);
            }
        }

        if carry != 0 {
            self.magnitude.push_front(carry);
        }

        self.normalize();
        Ok(())
    }
}
