//! Encoder errors

use crate::radix::Radix;
use num_bigint::BigInt;
use thiserror::Error;

pub type RadixResult<T> = Result<T, RadixError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RadixError {
    #[error("{value} does not fit in {width} {radix} digits of two's complement")]
    OutOfRange {
        value: BigInt,
        radix: Radix,
        width: usize,
    },

    #[error("Width must be at least one digit")]
    ZeroWidth,

    #[error("Invalid {radix} digit '{digit}' at position {position}")]
    InvalidDigit {
        digit: char,
        position: usize,
        radix: Radix,
    },

    #[error("Encoded value has {found} digits, wider than the {width}-digit word")]
    TooWide { found: usize, width: usize },

    #[error("Encoded value is empty")]
    Empty,
}
