//! Numeral bases supported by the encoder

use std::fmt;

/// Uppercase digit alphabet shared by every supported base
const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// A power-of-two numeral base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radix {
    Binary,
    Hexadecimal,
}

impl Radix {
    /// Numeric base
    pub const fn base(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Hexadecimal => 16,
        }
    }

    /// Bits carried by one digit
    pub const fn bits_per_digit(self) -> usize {
        match self {
            Radix::Binary => 1,
            Radix::Hexadecimal => 4,
        }
    }

    /// Default two's-complement width, in digits.
    ///
    /// Binary and hexadecimal historically use different word sizes
    /// (10 bits against 32 bits). Callers that need a common word size
    /// should pass an explicit width instead.
    pub const fn default_width(self) -> usize {
        match self {
            Radix::Binary => 10,
            Radix::Hexadecimal => 8,
        }
    }

    /// Largest digit value (`base - 1`)
    pub const fn max_digit(self) -> u8 {
        (self.base() - 1) as u8
    }

    /// Render a digit value as its uppercase character
    pub fn digit_char(self, digit: u8) -> char {
        debug_assert!(digit <= self.max_digit());
        DIGITS[digit as usize] as char
    }

    /// Parse a single character as a digit of this base (either case)
    pub fn digit_value(self, c: char) -> Option<u8> {
        c.to_digit(self.base()).map(|d| d as u8)
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Radix::Binary => write!(f, "binary"),
            Radix::Hexadecimal => write!(f, "hexadecimal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_chars_are_uppercase() {
        assert_eq!(Radix::Hexadecimal.digit_char(10), 'A');
        assert_eq!(Radix::Hexadecimal.digit_char(15), 'F');
        assert_eq!(Radix::Binary.digit_char(1), '1');
    }

    #[test]
    fn test_digit_value_accepts_both_cases() {
        assert_eq!(Radix::Hexadecimal.digit_value('f'), Some(15));
        assert_eq!(Radix::Hexadecimal.digit_value('F'), Some(15));
        assert_eq!(Radix::Binary.digit_value('2'), None);
    }

    #[test]
    fn test_default_widths() {
        assert_eq!(Radix::Binary.default_width() * Radix::Binary.bits_per_digit(), 10);
        assert_eq!(
            Radix::Hexadecimal.default_width() * Radix::Hexadecimal.bits_per_digit(),
            32
        );
    }
}
