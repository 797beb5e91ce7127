//! Fixed-width two's-complement decoder

use crate::error::{RadixError, RadixResult};
use crate::radix::Radix;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

/// Interpret `encoded` as a `width`-digit two's-complement word.
///
/// Shorter strings are zero-extended and therefore non-negative. A string of
/// exactly `width` digits whose top bit is set decodes to `value - base^width`.
pub fn decode(encoded: &str, radix: Radix, width: usize) -> RadixResult<BigInt> {
    if width == 0 {
        return Err(RadixError::ZeroWidth);
    }
    if encoded.is_empty() {
        return Err(RadixError::Empty);
    }

    let digits = encoded
        .chars()
        .enumerate()
        .map(|(position, digit)| {
            radix.digit_value(digit).ok_or(RadixError::InvalidDigit {
                digit,
                position,
                radix,
            })
        })
        .collect::<RadixResult<Vec<u8>>>()?;

    if digits.len() > width {
        return Err(RadixError::TooWide {
            found: digits.len(),
            width,
        });
    }

    let base = radix.base();
    let unsigned = digits
        .iter()
        .fold(BigUint::zero(), |acc, &d| acc * base + u32::from(d));
    let unsigned = BigInt::from(unsigned);

    let sign_bit_set = digits.len() == width && u32::from(digits[0]) >= base / 2;
    if sign_bit_set {
        Ok(unsigned - (BigInt::one() << (width * radix.bits_per_digit())))
    } else {
        Ok(unsigned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_negative_word() {
        assert_eq!(decode("1111111111", Radix::Binary, 10).unwrap(), BigInt::from(-1));
        assert_eq!(decode("FFFFFFF0", Radix::Hexadecimal, 8).unwrap(), BigInt::from(-16));
    }

    #[test]
    fn test_short_word_is_positive() {
        assert_eq!(decode("FF", Radix::Hexadecimal, 8).unwrap(), BigInt::from(255));
        assert_eq!(decode("111", Radix::Binary, 10).unwrap(), BigInt::from(7));
    }

    #[test]
    fn test_lowercase_accepted() {
        assert_eq!(decode("ffffffff", Radix::Hexadecimal, 8).unwrap(), BigInt::from(-1));
    }

    #[test]
    fn test_decode_errors() {
        assert_eq!(decode("", Radix::Binary, 10), Err(RadixError::Empty));
        assert_eq!(decode("1", Radix::Binary, 0), Err(RadixError::ZeroWidth));
        assert_eq!(
            decode("102", Radix::Binary, 10),
            Err(RadixError::InvalidDigit {
                digit: '2',
                position: 2,
                radix: Radix::Binary,
            })
        );
        assert_eq!(
            decode("100", Radix::Hexadecimal, 2),
            Err(RadixError::TooWide { found: 3, width: 2 })
        );
    }
}
