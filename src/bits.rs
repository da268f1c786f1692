//! Instruction words and MSB-first bit-field extraction.

use std::fmt;

use bitvec::prelude::*;
use serde::{Deserialize, Serialize};

use crate::decoder::{DecodeError, InputFault};

/// Every SuperH instruction word is 16 bits wide.
pub const WORD_BITS: usize = 16;

/// Number of hex characters in one instruction word.
pub const HEX_DIGITS: usize = WORD_BITS / 4;

/// One 16-bit instruction word. Bit offset 0 is the most significant bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Word(pub u16);

impl Word {
    /// Parse a 16-character `0`/`1` string, most significant bit first.
    pub fn parse(bits: &str) -> Result<Self, DecodeError> {
        let invalid = |fault| DecodeError::InvalidInput { input: bits.to_string(), fault };
        let len = bits.chars().count();
        if len != WORD_BITS {
            return Err(invalid(InputFault::Length(len)));
        }
        let mut raw = 0u16;
        for (index, c) in bits.chars().enumerate() {
            let bit = match c {
                '0' => 0,
                '1' => 1,
                other => return Err(invalid(InputFault::Character { index, found: other })),
            };
            raw = (raw << 1) | bit;
        }
        Ok(Self(raw))
    }

    /// Parse a 4-character hex chunk (either case) as produced by a section dump.
    pub fn from_hex(chunk: &str) -> Result<Self, DecodeError> {
        let invalid = |fault| DecodeError::InvalidInput { input: chunk.to_string(), fault };
        let len = chunk.chars().count();
        if len != HEX_DIGITS {
            return Err(invalid(InputFault::HexLength(len)));
        }
        let mut raw = 0u16;
        for (index, c) in chunk.chars().enumerate() {
            let nibble = c
                .to_digit(16)
                .ok_or_else(|| invalid(InputFault::HexCharacter { index, found: c }))?;
            raw = (raw << 4) | nibble as u16;
        }
        Ok(Self(raw))
    }

    /// Unsigned value of `width` bits starting at `offset`, MSB first.
    ///
    /// Panics when the span leaves the word: spans come from validated field
    /// tables, so an out-of-range span is a defect in static data.
    pub fn field(self, offset: usize, width: usize) -> u16 {
        assert!(
            offset + width <= WORD_BITS,
            "bit span {offset}+{width} exceeds the {WORD_BITS}-bit word"
        );
        if width == 0 {
            return 0;
        }
        let view = BitArray::<[u16; 1], Msb0>::new([self.0]);
        view[offset..offset + width].load_be::<u16>()
    }

    /// Zero-padded binary text of a span, e.g. `"0001"` for a 4-bit register field.
    pub fn field_bits(self, offset: usize, width: usize) -> String {
        format!("{:0width$b}", self.field(offset, width), width = width)
    }
}

impl From<u16> for Word {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016b}", self.0)
    }
}

/// Uppercase hexadecimal, no padding, no prefix (`31` -> `1F`).
pub fn fmt_hex(value: u16) -> String {
    format!("{value:X}")
}

/// Plain unsigned decimal.
pub fn fmt_dec(value: u16) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_msb_first() {
        let w = Word::parse("0011000000011100").unwrap();
        assert_eq!(w, Word(0x301C));
        assert_eq!(w.to_string(), "0011000000011100");
    }

    #[test]
    fn parse_rejects_bad_length_and_chars() {
        assert!(matches!(
            Word::parse("0101"),
            Err(DecodeError::InvalidInput { fault: InputFault::Length(4), .. })
        ));
        assert!(matches!(
            Word::parse("00110000000111x0"),
            Err(DecodeError::InvalidInput { fault: InputFault::Character { index: 14, found: 'x' }, .. })
        ));
    }

    #[test]
    fn hex_chunks() {
        assert_eq!(Word::from_hex("d001").unwrap(), Word(0xD001));
        assert_eq!(Word::from_hex("C3C3").unwrap(), Word(0xC3C3));
        assert!(Word::from_hex("12345").is_err());
        assert!(Word::from_hex("12g4").is_err());
    }

    #[test]
    fn field_extraction() {
        let w = Word(0x301C); // 0011 0000 0001 1100
        assert_eq!(w.field(0, 4), 0b0011);
        assert_eq!(w.field(4, 4), 0);
        assert_eq!(w.field(8, 4), 1);
        assert_eq!(w.field(12, 4), 0b1100);
        assert_eq!(w.field(4, 12), 0x01C);
        assert_eq!(w.field(0, 16), 0x301C);
        assert_eq!(w.field(6, 0), 0);
        assert_eq!(Word(0x0100).field(7, 1), 1);
        assert_eq!(w.field_bits(8, 4), "0001");
    }

    #[test]
    #[should_panic(expected = "exceeds")]
    fn field_span_out_of_range_panics() {
        let _ = Word(0).field(12, 8);
    }

    #[test]
    fn formatters() {
        assert_eq!(fmt_hex(31), "1F");
        assert_eq!(fmt_hex(0), "0");
        assert_eq!(fmt_dec(10), "10");
    }
}
