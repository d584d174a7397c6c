use {
    super::{BigInt, Sign},
    crate::{error::{Error, Result}, limbs::{LIMB_DIGITS, Limbs}},
    std::str::FromStr,
};

/// Constructing big integers from decimal numerals.
impl BigInt
{
    /// Parse a decimal numeral.
    ///
    /// The numeral consists of an optional leading `-`
    /// followed by one or more ASCII digits.
    /// Leading zeros are permitted and discarded.
    /// `-0` parses as positive zero.
    pub fn from_numeral(numeral: &str) -> Result<Self>
    {
        let bytes = numeral.as_bytes();

        let (sign, digits) = match bytes {
            [b'-', rest @ ..] => (Sign::Negative, rest),
            _ => (Sign::Positive, bytes),
        };

        if digits.is_empty() {
            return Err(Error::NoDigits);
        }

        let offset = bytes.len() - digits.len();
        if let Some(position) = digits.iter().position(|b| !b.is_ascii_digit()) {
            // Find the whole character, it may not be ASCII.
            let position = offset + position;
            let character = numeral[position ..].chars().next()
                .unwrap_or(char::REPLACEMENT_CHARACTER);
            return Err(Error::InvalidCharacter{character, position});
        }

        let first_nonzero = digits.iter().position(|&b| b != b'0');
        let digits = &digits[first_nonzero.unwrap_or(digits.len()) ..];

        // Peel off groups from the least significant end.
        // The final, possibly shorter group is prepended last,
        // and thus ends up as the most significant limb.
        let mut magnitude =
            Limbs::with_front_capacity(digits.len().div_ceil(LIMB_DIGITS));
        for group in digits.rchunks(LIMB_DIGITS) {
            magnitude.push_front(parse_group(group));
        }

        let mut this = Self{sign, magnitude};
        this.normalize();
        Ok(this)
    }
}

/// Parse up to [`LIMB_DIGITS`] ASCII digits into a limb.
fn parse_group(group: &[u8]) -> u32
{
    debug_assert!(group.len() <= LIMB_DIGITS);
    group.iter().fold(0, |acc, b| acc * 10 + (b - b'0') as u32)
}

impl FromStr for BigInt
{
    type Err = Error;

    fn from_str(numeral: &str) -> Result<Self>
    {
        Self::from_numeral(numeral)
    }
}

#[cfg(test)]
mod tests
{
    use {super::*, proptest::proptest};

    #[test]
    fn zero()
    {
        for numeral in ["0", "-0", "000", "-000000000000000000000"] {
            let value = BigInt::from_numeral(numeral).unwrap();
            assert!(value.is_zero(), "{}", numeral);
            assert_eq!(value.sign(), Sign::Positive);
            assert_eq!(value.to_string(), "0");
        }
    }

    #[test]
    fn limb_boundaries()
    {
        let value = BigInt::from_numeral("123456789").unwrap();
        assert_eq!(value.limbs().len(), 1);
        assert_eq!(value.digit_count(), 9);

        let value = BigInt::from_numeral("1234567890").unwrap();
        assert!(value.limbs().iter().eq([1, 234_567_890]));
        assert_eq!(value.digit_count(), 10);

        let value = BigInt::from_numeral("-1000000000000000000").unwrap();
        assert!(value.limbs().iter().eq([1, 0, 0]));
        assert_eq!(value.sign(), Sign::Negative);
        assert_eq!(value.digit_count(), 19);
    }

    #[test]
    fn leading_zeros_discarded()
    {
        let value = BigInt::from_numeral("0000000000042").unwrap();
        assert!(value.limbs().iter().eq([42]));
        assert_eq!(value.digit_count(), 2);
        assert_eq!(value.to_string(), "42");
    }

    #[test]
    fn errors()
    {
        assert_eq!(BigInt::from_numeral(""), Err(Error::NoDigits));
        assert_eq!(BigInt::from_numeral("-"), Err(Error::NoDigits));
        assert_eq!(
            BigInt::from_numeral("12a3"),
            Err(Error::InvalidCharacter{character: 'a', position: 2}),
        );
        assert_eq!(
            BigInt::from_numeral("--5"),
            Err(Error::InvalidCharacter{character: '-', position: 1}),
        );
        assert_eq!(
            BigInt::from_numeral("5-"),
            Err(Error::InvalidCharacter{character: '-', position: 1}),
        );
        assert_eq!(
            BigInt::from_numeral("+5"),
            Err(Error::InvalidCharacter{character: '+', position: 0}),
        );
        assert_eq!(
            BigInt::from_numeral("1 000"),
            Err(Error::InvalidCharacter{character: ' ', position: 1}),
        );
        assert_eq!(
            BigInt::from_numeral("7é"),
            Err(Error::InvalidCharacter{character: 'é', position: 1}),
        );
        assert_eq!(
            BigInt::from_numeral("١٢"),
            Err(Error::InvalidCharacter{character: '١', position: 0}),
        );
    }

    #[test]
    fn from_str()
    {
        let value: BigInt = "-987654321987654321".parse().unwrap();
        assert_eq!(value.to_string(), "-987654321987654321");
        assert!("x".parse::<BigInt>().is_err());
    }

    proptest!
    {
        #[test]
        fn roundtrip(numeral in "-?[1-9][0-9]{0,100}")
        {
            let value = BigInt::from_numeral(&numeral).unwrap();
            assert_eq!(value.to_string(), numeral);
        }

        #[test]
        fn canonicalizes(sign in "-?", zeros in "0{0,20}", digits in "[0-9]{1,60}")
        {
            let numeral = format!("{}{}{}", sign, zeros, digits);
            let value = BigInt::from_numeral(&numeral).unwrap();

            let trimmed = digits.trim_start_matches('0');
            let expected = match trimmed {
                "" => "0".to_owned(),
                _ => format!("{}{}", sign, trimmed),
            };
            assert_eq!(value.to_string(), expected);
            assert_eq!(value.digit_count(), trimmed.len().max(1));
        }

        #[test]
        fn reparse_is_identity(value: i128)
        {
            let value = BigInt::from(value);
            let reparsed = BigInt::from_numeral(&value.to_string()).unwrap();
            assert_eq!(reparsed, value);
        }
    }
}
