//! Big integers serialize as their canonical numeral,
//! so that no precision is lost in formats such as JSON.

use {
    super::BigInt,
    serde::{Deserialize, Deserializer, Serialize, Serializer, de},
    std::fmt,
};

impl Serialize for BigInt
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BigInt
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: Deserializer<'de>
    {
        deserializer.deserialize_str(NumeralVisitor)
    }
}

struct NumeralVisitor;

impl<'de> de::Visitor<'de> for NumeralVisitor
{
    type Value = BigInt;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result
    {
        f.write_str("a decimal numeral")
    }

    fn visit_str<E>(self, numeral: &str) -> Result<Self::Value, E>
        where E: de::Error
    {
        BigInt::from_numeral(numeral).map_err(E::custom)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn json()
    {
        let value = BigInt::from_numeral("-123456789012345678901234567890")
            .unwrap();
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "\"-123456789012345678901234567890\"");
        let back: BigInt = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn json_invalid()
    {
        let error = serde_json::from_str::<BigInt>("\"12a3\"").unwrap_err();
        assert!(error.to_string().contains("Invalid character 'a'"));
        assert!(serde_json::from_str::<BigInt>("123").is_err());
    }
}
