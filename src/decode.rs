//! Base-N numeral decoding.
//!
//! Share values arrive as digit strings in a declared base (2 through 16).
//! Decoding accumulates into a `BigInt`, so values of any magnitude survive
//! without wrapping.

use num_bigint::BigInt;
use num_traits::Zero;

use crate::error::DecodeError;

/// Decode a numeral string in the given base into an exact integer.
///
/// Accepts digits `0-9` and `a-f`/`A-F` as far as the base allows. No sign,
/// fractional part, or whitespace.
pub fn decode(numeral: &str, base: u32) -> Result<BigInt, DecodeError> {
    if !(2..=16).contains(&base) {
        return Err(DecodeError::UnsupportedBase(base));
    }
    if numeral.is_empty() {
        return Err(DecodeError::EmptyNumeral);
    }

    let mut value = BigInt::zero();
    for digit in numeral.chars() {
        let d = digit
            .to_digit(base)
            .ok_or(DecodeError::InvalidDigit { digit, base })?;
        value = value * base + d;
    }
    Ok(value)
}
