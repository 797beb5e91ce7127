//! Two's-complement radix encoder
//!
//! Non-negative values are written as their minimal unsigned digits.
//! Negative values are written as a fixed-width two's-complement word,
//! computed digit by digit: the magnitude is zero-padded to the word
//! width, every digit is complemented (`base - 1 - d`) and one is added
//! with carry. Working on a digit vector instead of a native integer
//! keeps any width and any magnitude available.

use crate::error::{RadixError, RadixResult};
use crate::radix::Radix;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

/// What to do with a negative value whose magnitude does not fit the width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Widen the word to the smallest digit count that holds the value
    #[default]
    Extend,
    /// Fail with [`RadixError::OutOfRange`]
    Reject,
}

/// Encoder for one radix with a configured two's-complement width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadixEncoder {
    radix: Radix,
    width: usize,
    policy: OverflowPolicy,
}

impl RadixEncoder {
    /// Encoder using the radix's default width and [`OverflowPolicy::Extend`]
    pub fn new(radix: Radix) -> Self {
        Self {
            radix,
            width: radix.default_width(),
            policy: OverflowPolicy::default(),
        }
    }

    pub fn binary() -> Self {
        Self::new(Radix::Binary)
    }

    pub fn hexadecimal() -> Self {
        Self::new(Radix::Hexadecimal)
    }

    /// Set the two's-complement width, in digits of this radix
    pub fn with_width(mut self, width: usize) -> RadixResult<Self> {
        if width == 0 {
            return Err(RadixError::ZeroWidth);
        }
        self.width = width;
        Ok(self)
    }

    pub fn with_policy(mut self, policy: OverflowPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn radix(&self) -> Radix {
        self.radix
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    /// Bits spanned by the configured width
    pub fn width_bits(&self) -> usize {
        self.width * self.radix.bits_per_digit()
    }

    /// Encode a value, honouring the overflow policy
    pub fn encode(&self, value: &BigInt) -> RadixResult<String> {
        if self.policy == OverflowPolicy::Reject
            && value.sign() == Sign::Minus
            && min_negative_width(value.magnitude(), self.radix) > self.width
        {
            return Err(RadixError::OutOfRange {
                value: value.clone(),
                radix: self.radix,
                width: self.width,
            });
        }
        Ok(self.encode_extending(value))
    }

    /// Encode a machine integer
    pub fn encode_i64(&self, value: i64) -> RadixResult<String> {
        self.encode(&BigInt::from(value))
    }

    /// Decode a word of this encoder's width back into a signed value
    pub fn decode(&self, encoded: &str) -> RadixResult<BigInt> {
        crate::decode::decode(encoded, self.radix, self.width)
    }

    /// Encode, widening the word when the magnitude needs more digits
    pub(crate) fn encode_extending(&self, value: &BigInt) -> String {
        let magnitude = value.magnitude();
        if magnitude.is_zero() {
            return "0".to_string();
        }

        let digits = magnitude.to_radix_be(self.radix.base());
        if value.sign() != Sign::Minus {
            return self.render(&digits);
        }

        let width = self.width.max(min_negative_width(magnitude, self.radix));
        self.render(&twos_complement(&digits, width, self.radix))
    }

    fn render(&self, digits: &[u8]) -> String {
        digits.iter().map(|&d| self.radix.digit_char(d)).collect()
    }
}

/// Smallest digit count whose two's-complement range reaches `-magnitude`.
///
/// `-m` fits in `B` bits iff `m <= 2^(B-1)`, that is `bits(m - 1) <= B - 1`.
pub fn min_negative_width(magnitude: &BigUint, radix: Radix) -> usize {
    if magnitude.is_zero() {
        return 1;
    }
    let bits = (magnitude - 1u32).bits() as usize + 1;
    bits.div_ceil(radix.bits_per_digit())
}

/// Complement the zero-padded magnitude digit-wise and add one.
///
/// `magnitude` is most-significant first and no longer than `width`.
fn twos_complement(magnitude: &[u8], width: usize, radix: Radix) -> Vec<u8> {
    debug_assert!(magnitude.len() <= width);
    let max = radix.max_digit();

    // Padding zeros complement to the maximum digit
    let mut word = vec![max; width - magnitude.len()];
    word.extend(magnitude.iter().map(|d| max - d));

    for digit in word.iter_mut().rev() {
        if *digit == max {
            *digit = 0;
        } else {
            *digit += 1;
            break;
        }
    }
    word
}
