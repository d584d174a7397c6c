use thiserror::Error;

/// Result from operations on big integers.
pub type Result<T> =
    std::result::Result<T, Error>;

/// Returned when an operation is given an invalid argument.
///
/// Every check runs before the receiver is touched,
/// so a failed operation leaves its receiver unchanged.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Error
{
    /// The numeral is empty or consists of only a sign.
    #[error("Numeral has no digits")]
    NoDigits,

    /// The numeral contains a character that is not a digit,
    /// or a `-` that is not at the start.
    #[error("Invalid character {character:?} at position {position}")]
    InvalidCharacter
    {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the numeral.
        position: usize,
    },

    /// The requested width cannot hold all digits of the value.
    #[error("Width {width} is not greater than digit count {digits}")]
    WidthTooSmall
    {
        /// The requested width.
        width: usize,
        /// The digit count of the value.
        digits: usize,
    },

    /// A random value was requested with zero digits.
    #[error("Digit count must be positive")]
    ZeroDigitCount,

    /// Addition was attempted between values with different signs.
    #[error("Cannot add values with different signs")]
    SignMismatch,
}
