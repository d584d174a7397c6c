use {
    super::{BigInt, Sign},
    crate::error::{Error, Result},
    std::fmt::{self, Write},
};

/// Rendering big integers as decimal numerals.
impl BigInt
{
    /// Write the digits of the magnitude, without sign.
    ///
    /// The most significant limb is written without padding;
    /// every other limb is padded to nine digits.
    fn write_digits(&self, w: &mut impl Write) -> fmt::Result
    {
        let mut limbs = self.magnitude.iter();
        match limbs.next() {
            None => w.write_char('0')?,
            Some(leading) => write!(w, "{}", leading)?,
        }
        for limb in limbs {
            write!(w, "{:09}", limb)?;
        }
        Ok(())
    }

    fn digits(&self) -> String
    {
        let mut digits = String::with_capacity(self.digit_count());
        // Writing to a string cannot fail.
        let _ = self.write_digits(&mut digits);
        digits
    }

    /// Render the value padded to a fixed number of digits.
    ///
    /// The result starts with `-` for negative values
    /// and with a space otherwise, followed by exactly `width` digits.
    /// The width must be greater than [`digit_count`][`Self::digit_count`].
    pub fn to_fixed_width(&self, width: usize) -> Result<String>
    {
        let digits = self.digit_count();
        if width <= digits {
            return Err(Error::WidthTooSmall{width, digits});
        }

        let mut result = String::with_capacity(width + 1);
        result.push(match self.sign {
            Sign::Negative => '-',
            Sign::Positive => ' ',
        });
        result.extend(std::iter::repeat('0').take(width - digits));
        result.push_str(&self.digits());
        Ok(result)
    }
}

/// Renders the canonical numeral.
///
/// Width, fill, alignment, and the `+` and `0` flags are honored
/// the same way as for primitive integers.
impl fmt::Display for BigInt
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    {
        let is_nonnegative = self.sign == Sign::Positive;
        f.pad_integral(is_nonnegative, "", &self.digits())
    }
}
