//! # tally-radix — Signed Integer Radix Encoder
//!
//! Converts signed integers to binary and hexadecimal text. Non-negative
//! values use their minimal unsigned digits; negative values use a
//! fixed-width two's-complement word.
//!
//! | Radix | Default width | Range of negatives |
//! |:------|:--------------|:-------------------|
//! | Binary | 10 digits (10 bits) | `-512 ..= -1` |
//! | Hexadecimal | 8 digits (32 bits) | `-2^31 ..= -1` |
//!
//! Negatives beyond the width are handled by [`OverflowPolicy`]: `Extend`
//! (the default) widens the word losslessly, `Reject` returns
//! [`RadixError::OutOfRange`].
//!
//! ## Example
//!
//! ```
//! use tally_radix::{encode_binary, encode_hex, OverflowPolicy, RadixEncoder};
//!
//! assert_eq!(encode_binary(-2), "1111111110");
//! assert_eq!(encode_hex(255), "FF");
//!
//! let strict = RadixEncoder::hexadecimal()
//!     .with_width(2)
//!     .unwrap()
//!     .with_policy(OverflowPolicy::Reject);
//! assert_eq!(strict.encode_i64(-128).unwrap(), "80");
//! assert!(strict.encode_i64(-129).is_err());
//! ```

pub mod decode;
pub mod encoder;
pub mod error;
pub mod radix;

pub use decode::decode;
pub use encoder::{min_negative_width, OverflowPolicy, RadixEncoder};
pub use error::{RadixError, RadixResult};
pub use radix::Radix;

use num_bigint::BigInt;

/// Binary digits of `value`; negatives use a 10-bit word, widened when needed
pub fn encode_binary<T: Into<BigInt>>(value: T) -> String {
    RadixEncoder::binary().encode_extending(&value.into())
}

/// Uppercase hex digits of `value`; negatives use a 32-bit word, widened when needed
pub fn encode_hex<T: Into<BigInt>>(value: T) -> String {
    RadixEncoder::hexadecimal().encode_extending(&value.into())
}
