use std::fmt;

use serde::Serialize;

use crate::bits::Word;
use crate::disasm::render;
use crate::table::{Fpscr, OpcodeTable};
use crate::variant::Variant;

/// Text prefixed to the bit string of a word no table entry matches.
pub const FALLBACK_PREFIX: &str = "word";

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InputFault {
    #[error("expected 16 bits, found {0}")]
    Length(usize),
    #[error("character {found:?} at {index} is not a bit")]
    Character { index: usize, found: char },
    #[error("expected 4 hex digits, found {0}")]
    HexLength(usize),
    #[error("character {found:?} at {index} is not a hex digit")]
    HexCharacter { index: usize, found: char },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid input {input:?}: {fault}")]
    InvalidInput { input: String, fault: InputFault },
    #[error("{word}: ${symbol} = {bits} has no entry in {map}")]
    MalformedField { word: Word, symbol: char, bits: String, map: &'static str },
}

/// Outcome of decoding one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Decoded {
    Instruction { word: Word, text: String },
    /// Nothing matched; this is expected input (data in a code section), not an error.
    Unrecognized { word: Word },
}

impl Decoded {
    pub fn word(&self) -> Word {
        match self {
            Decoded::Instruction { word, .. } | Decoded::Unrecognized { word } => *word,
        }
    }

    pub fn is_recognized(&self) -> bool {
        matches!(self, Decoded::Instruction { .. })
    }
}

impl fmt::Display for Decoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decoded::Instruction { text, .. } => f.write_str(text),
            Decoded::Unrecognized { word } => write!(f, "{FALLBACK_PREFIX}{word}"),
        }
    }
}

pub trait Decoder {
    /// Decode under an explicit FPSCR mode.
    fn decode_with(&self, word: Word, mode: Fpscr) -> Result<Decoded, DecodeError>;

    /// Decode with FPSCR.PR and FPSCR.SZ clear, the reset state.
    fn decode(&self, word: Word) -> Result<Decoded, DecodeError> {
        self.decode_with(word, Fpscr::empty())
    }

    fn decode_str(&self, bits: &str) -> Result<Decoded, DecodeError> {
        self.decode(Word::parse(bits)?)
    }

    fn decode_hex(&self, chunk: &str) -> Result<Decoded, DecodeError> {
        self.decode(Word::from_hex(chunk)?)
    }
}

/// One variant's validated table. Immutable once built, shared across threads.
#[derive(Debug)]
pub struct Engine {
    variant: Variant,
    table: OpcodeTable,
    fpscr_mask: Fpscr,
}

impl Engine {
    pub fn new(variant: Variant, table: OpcodeTable, fpscr_mask: Fpscr) -> Self {
        Self { variant, table, fpscr_mask }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn table(&self) -> &OpcodeTable {
        &self.table
    }

    /// Mode bits this variant honours; the rest of a requested mode is ignored.
    pub fn fpscr_mask(&self) -> Fpscr {
        self.fpscr_mask
    }
}

impl Decoder for Engine {
    fn decode_with(&self, word: Word, mode: Fpscr) -> Result<Decoded, DecodeError> {
        let mode = mode & self.fpscr_mask;
        match self.table.find(word, mode) {
            Some(opcode) => {
                let text = render(&opcode.mnemonic, word, &self.table)?;
                Ok(Decoded::Instruction { word, text })
            }
            None => Ok(Decoded::Unrecognized { word }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::isa::INTEGER_FIELDS;
    use crate::table::{op, Guard};
    use pretty_assertions::assert_eq;

    fn tiny() -> Engine {
        let rows = [
            op("0011nnnnmmmm1100", "ADD $M, $N"),
            op("0000000000001001", "NOP"),
            op("1111nnnn00000000", "ONE $N").when(Guard::Clear(Fpscr::PR)),
            op("1111nnnn00000000", "TWO $N").when(Guard::Set(Fpscr::PR)),
        ];
        let table = OpcodeTable::from_groups("tiny", &[&rows], Vec::new(), &INTEGER_FIELDS).unwrap();
        Engine::new(Variant::SuperH4, table, Fpscr::PR)
    }

    #[test]
    fn match_and_fallback() {
        let e = tiny();
        assert_eq!(e.decode_str("0011000000011100").unwrap().to_string(), "ADD R1, R0");
        assert_eq!(e.decode_str("0000000000001001").unwrap().to_string(), "NOP");
        let miss = e.decode_str("1111111111111111").unwrap();
        assert!(!miss.is_recognized());
        assert_eq!(miss.to_string(), "word1111111111111111");
        assert_eq!(e.decode_hex("301c").unwrap().to_string(), "ADD R1, R0");
    }

    #[test]
    fn invalid_input_never_reaches_the_table() {
        let e = tiny();
        let err = e.decode_str("001100000001110").unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidInput { input: "001100000001110".into(), fault: InputFault::Length(15) }
        );
    }

    #[test]
    fn mode_is_masked_by_variant() {
        let e = tiny();
        assert_eq!(e.decode_with(Word(0xF300), Fpscr::SZ).unwrap().to_string(), "ONE R3");
        assert_eq!(e.decode_with(Word(0xF300), Fpscr::PR | Fpscr::SZ).unwrap().to_string(), "TWO R3");
    }

    #[test]
    fn decoded_serializes_with_kind_tag() {
        let e = tiny();
        let v = serde_json::to_value(e.decode(Word(0x0009)).unwrap()).unwrap();
        assert_eq!(v, serde_json::json!({"kind": "instruction", "word": 9, "text": "NOP"}));
    }
}
