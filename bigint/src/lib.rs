//! Arbitrary-precision signed integers.
//!
//! A [`BigInt`] is a sign together with a sequence of limbs,
//! each limb being one base-1,000,000,000 digit group.
//! Values are constructed from decimal numerals, native integers,
//! or randomly, and are mutated in place by
//! [`add_in_place`][`BigInt::add_in_place`] and
//! [`mul_in_place`][`BigInt::mul_in_place`].
//!
//! # Examples
//!
//! ```
//! # use bigint::BigInt;
//! let mut x: BigInt = "999999999999999999".parse().unwrap();
//! let y = x.clone();
//! x.mul_in_place(&y);
//! assert_eq!(x.to_string(), "999999999999999998000000000000000001");
//! ```

#![warn(missing_docs)]

pub use self::{error::*, integer::*};

pub mod limbs;

mod error;
mod integer;
