//! Opcode tables: compiled bit templates, field specifications, and the
//! construction-time self-check every variant goes through before use.

use std::borrow::Cow;
use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::bits::{fmt_dec, fmt_hex, Word, WORD_BITS};
use crate::decoder::DecodeError;

/// Marker that introduces a placeholder token in a mnemonic pattern.
pub const PLACEHOLDER: char = '$';

bitflags! {
    /// The FPSCR bits that change how SH-4 FPU encodings read.
    /// Positions match the architectural register so a raw value can be passed in.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct Fpscr: u32 {
        /// Double-precision arithmetic.
        const PR = 1 << 19;
        /// Register-pair transfers for FMOV.
        const SZ = 1 << 20;
    }
}

impl Fpscr {
    /// Every mode a table can be decoded under.
    pub const MODES: [Fpscr; 4] = [
        Fpscr::empty(),
        Fpscr::PR,
        Fpscr::SZ,
        Fpscr::PR.union(Fpscr::SZ),
    ];
}

/// Mode predicate attached to a table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Guard {
    Always,
    /// All given bits must be clear.
    Clear(Fpscr),
    /// All given bits must be set.
    Set(Fpscr),
}

impl Guard {
    pub fn admits(self, mode: Fpscr) -> bool {
        match self {
            Guard::Always => true,
            Guard::Clear(bits) => !mode.intersects(bits),
            Guard::Set(bits) => mode.contains(bits),
        }
    }

    /// Some mode admits both guards.
    pub fn compatible(self, other: Guard) -> bool {
        Fpscr::MODES.iter().any(|&m| self.admits(m) && other.admits(m))
    }

    /// Every mode admitted by `other` is admitted by `self`.
    pub fn includes(self, other: Guard) -> bool {
        Fpscr::MODES.iter().all(|&m| !other.admits(m) || self.admits(m))
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("template {template:?} must be 16 characters, found {len}")]
    TemplateLength { template: String, len: usize },
    #[error("template {template:?} has invalid character {found:?} at {index}")]
    TemplateChar { template: String, index: usize, found: char },
    #[error("templates {first:?} and {second:?} disagree at bit {index}")]
    MergeConflict { first: String, second: String, index: usize },
    #[error("field ${symbol} spans {offset}+{width}, outside the 16-bit word")]
    SpanOutOfRange { symbol: char, offset: usize, width: usize },
    #[error("field ${symbol} is defined twice")]
    DuplicateField { symbol: char },
    #[error("symbol map {map} has key {key:#b}, wider than field ${symbol} ({width} bits)")]
    LookupKeyOutOfRange { symbol: char, map: &'static str, key: u16, width: usize },
    #[error("symbol map {map} defines key {key:#b} twice")]
    DuplicateLookupKey { map: &'static str, key: u16 },
    #[error("{variant}: mnemonic {mnemonic:?} uses ${symbol} which has no field definition")]
    UndefinedPlaceholder { variant: String, mnemonic: String, symbol: char },
    #[error("{variant}: mnemonic {mnemonic:?} ends with a bare '$'")]
    DanglingPlaceholder { variant: String, mnemonic: String },
    #[error("{variant}: {later} ({later_mnemonic:?}) can never match, {earlier} ({earlier_mnemonic:?}) always wins")]
    Unreachable {
        variant: String,
        earlier: String,
        earlier_mnemonic: String,
        later: String,
        later_mnemonic: String,
    },
}

/// A compiled 16-bit template: `0`/`1` are literal, letters and `*` are wildcards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    text: String,
    mask: u16,
    bits: u16,
}

impl Template {
    pub fn parse(text: &str) -> Result<Self, TableError> {
        let len = text.chars().count();
        if len != WORD_BITS {
            return Err(TableError::TemplateLength { template: text.to_string(), len });
        }
        let mut mask = 0u16;
        let mut bits = 0u16;
        for (index, c) in text.chars().enumerate() {
            mask <<= 1;
            bits <<= 1;
            match c {
                '0' => mask |= 1,
                '1' => {
                    mask |= 1;
                    bits |= 1;
                }
                '*' => {}
                c if c.is_ascii_alphabetic() => {}
                found => {
                    return Err(TableError::TemplateChar { template: text.to_string(), index, found })
                }
            }
        }
        Ok(Self { text: text.to_string(), mask, bits })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Literal positions as a mask, MSB = offset 0.
    pub fn mask(&self) -> u16 {
        self.mask
    }

    pub fn bits(&self) -> u16 {
        self.bits
    }

    pub fn matches(&self, word: Word) -> bool {
        word.0 & self.mask == self.bits
    }

    /// Some word matches both templates.
    pub fn overlaps(&self, other: &Template) -> bool {
        (self.bits ^ other.bits) & self.mask & other.mask == 0
    }

    /// Every word matching `other` also matches `self`.
    pub fn covers(&self, other: &Template) -> bool {
        self.mask & other.mask == self.mask && (self.bits ^ other.bits) & self.mask == 0
    }

    /// Position-wise merge where `*` yields to the other template.
    pub fn merge(&self, other: &Template) -> Result<Template, TableError> {
        let mut merged = String::with_capacity(WORD_BITS);
        for (index, (a, b)) in self.text.chars().zip(other.text.chars()).enumerate() {
            let c = match (a, b) {
                ('*', c) | (c, '*') => c,
                (a, b) if a == b => a,
                _ => {
                    return Err(TableError::MergeConflict {
                        first: self.text.clone(),
                        second: other.text.clone(),
                        index,
                    })
                }
            };
            merged.push(c);
        }
        Template::parse(&merged)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Display names for the raw values of a register-like field.
#[derive(Debug)]
pub struct SymbolMap {
    pub name: &'static str,
    pub entries: &'static [(u16, &'static str)],
}

impl SymbolMap {
    pub fn get(&self, value: u16) -> Option<&'static str> {
        self.entries.iter().find(|(k, _)| *k == value).map(|(_, name)| *name)
    }

    /// Values of a `width`-bit field this map has no name for.
    pub fn missing(&self, width: usize) -> Vec<u16> {
        (0..1u32 << width).map(|v| v as u16).filter(|&v| self.get(v).is_none()).collect()
    }
}

#[derive(Debug, Clone, Copy)]
pub enum FieldFormat {
    Decimal,
    Hex,
    Symbol(&'static SymbolMap),
}

/// Where a placeholder's value lives in the word and how it is printed.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub symbol: char,
    pub offset: usize,
    pub width: usize,
    pub format: FieldFormat,
}

impl FieldSpec {
    pub const fn dec(symbol: char, offset: usize, width: usize) -> Self {
        Self { symbol, offset, width, format: FieldFormat::Decimal }
    }

    pub const fn hex(symbol: char, offset: usize, width: usize) -> Self {
        Self { symbol, offset, width, format: FieldFormat::Hex }
    }

    pub const fn reg(symbol: char, offset: usize, width: usize, map: &'static SymbolMap) -> Self {
        Self { symbol, offset, width, format: FieldFormat::Symbol(map) }
    }

    pub fn render(&self, word: Word) -> Result<Cow<'static, str>, DecodeError> {
        let value = word.field(self.offset, self.width);
        match self.format {
            FieldFormat::Decimal => Ok(Cow::Owned(fmt_dec(value))),
            FieldFormat::Hex => Ok(Cow::Owned(fmt_hex(value))),
            FieldFormat::Symbol(map) => map.get(value).map(Cow::Borrowed).ok_or_else(|| {
                DecodeError::MalformedField {
                    word,
                    symbol: self.symbol,
                    bits: word.field_bits(self.offset, self.width),
                    map: map.name,
                }
            }),
        }
    }

    fn validate(&self) -> Result<(), TableError> {
        if self.width == 0 || self.offset + self.width > WORD_BITS {
            return Err(TableError::SpanOutOfRange {
                symbol: self.symbol,
                offset: self.offset,
                width: self.width,
            });
        }
        if let FieldFormat::Symbol(map) = self.format {
            let mut seen = Vec::with_capacity(map.entries.len());
            for &(key, _) in map.entries {
                if u32::from(key) >> self.width != 0 {
                    return Err(TableError::LookupKeyOutOfRange {
                        symbol: self.symbol,
                        map: map.name,
                        key,
                        width: self.width,
                    });
                }
                if seen.contains(&key) {
                    return Err(TableError::DuplicateLookupKey { map: map.name, key });
                }
                seen.push(key);
            }
        }
        Ok(())
    }
}

/// One row of static ISA data, before compilation.
#[derive(Debug, Clone, Copy)]
pub struct Row {
    pub template: &'static str,
    pub mnemonic: &'static str,
    pub guard: Guard,
}

/// Row matched in every FPU mode.
pub const fn op(template: &'static str, mnemonic: &'static str) -> Row {
    Row { template, mnemonic, guard: Guard::Always }
}

impl Row {
    pub const fn when(self, guard: Guard) -> Row {
        Row { guard, ..self }
    }
}

/// A compiled table entry.
#[derive(Debug, Clone)]
pub struct Opcode {
    pub template: Template,
    pub mnemonic: String,
    pub guard: Guard,
}

impl Opcode {
    pub fn new(template: Template, mnemonic: impl Into<String>, guard: Guard) -> Self {
        Self { template, mnemonic: mnemonic.into(), guard }
    }

    pub fn compile(row: &Row) -> Result<Self, TableError> {
        Ok(Self::new(Template::parse(row.template)?, row.mnemonic, row.guard))
    }

    /// Placeholder symbols used by the mnemonic, in order of appearance.
    pub fn placeholders(&self) -> impl Iterator<Item = Option<char>> + '_ {
        let mut chars = self.mnemonic.chars();
        std::iter::from_fn(move || loop {
            match chars.next()? {
                PLACEHOLDER => return Some(chars.next()),
                _ => continue,
            }
        })
    }
}

/// Two entries that both match some word in some mode; the earlier one wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Overlap {
    pub first: String,
    pub first_mnemonic: String,
    pub second: String,
    pub second_mnemonic: String,
}

/// A symbol map that names fewer values than its field can hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartialMap {
    pub symbol: char,
    pub map: &'static str,
    pub missing: Vec<u16>,
}

/// Result of the construction-time self-check.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TableReport {
    pub variant: String,
    pub entries: usize,
    pub overlaps: Vec<Overlap>,
    pub partial_maps: Vec<PartialMap>,
}

/// An ordered, validated opcode table. The first matching entry wins.
#[derive(Debug)]
pub struct OpcodeTable {
    name: String,
    opcodes: Vec<Opcode>,
    fields: &'static [FieldSpec],
    report: TableReport,
}

impl OpcodeTable {
    /// Validate `opcodes` against `fields` and freeze them into a table.
    pub fn new(
        name: impl Into<String>,
        opcodes: Vec<Opcode>,
        fields: &'static [FieldSpec],
    ) -> Result<Self, TableError> {
        let name = name.into();
        let mut report = TableReport { variant: name.clone(), entries: opcodes.len(), ..Default::default() };

        for (i, spec) in fields.iter().enumerate() {
            spec.validate()?;
            if fields[..i].iter().any(|f| f.symbol == spec.symbol) {
                return Err(TableError::DuplicateField { symbol: spec.symbol });
            }
            if let FieldFormat::Symbol(map) = spec.format {
                let missing = map.missing(spec.width);
                if !missing.is_empty() {
                    report.partial_maps.push(PartialMap { symbol: spec.symbol, map: map.name, missing });
                }
            }
        }

        for opcode in &opcodes {
            for symbol in opcode.placeholders() {
                let Some(symbol) = symbol else {
                    return Err(TableError::DanglingPlaceholder {
                        variant: name.clone(),
                        mnemonic: opcode.mnemonic.clone(),
                    });
                };
                if !fields.iter().any(|f| f.symbol == symbol) {
                    return Err(TableError::UndefinedPlaceholder {
                        variant: name.clone(),
                        mnemonic: opcode.mnemonic.clone(),
                        symbol,
                    });
                }
            }
        }

        for (j, later) in opcodes.iter().enumerate() {
            for earlier in &opcodes[..j] {
                if !earlier.guard.compatible(later.guard) || !earlier.template.overlaps(&later.template) {
                    continue;
                }
                if earlier.template.covers(&later.template) && earlier.guard.includes(later.guard) {
                    return Err(TableError::Unreachable {
                        variant: name.clone(),
                        earlier: earlier.template.to_string(),
                        earlier_mnemonic: earlier.mnemonic.clone(),
                        later: later.template.to_string(),
                        later_mnemonic: later.mnemonic.clone(),
                    });
                }
                report.overlaps.push(Overlap {
                    first: earlier.template.to_string(),
                    first_mnemonic: earlier.mnemonic.clone(),
                    second: later.template.to_string(),
                    second_mnemonic: later.mnemonic.clone(),
                });
            }
        }

        Ok(Self { name, opcodes, fields, report })
    }

    /// Compile static rows, in order, into a validated table.
    pub fn from_groups(
        name: impl Into<String>,
        groups: &[&[Row]],
        extra: Vec<Opcode>,
        fields: &'static [FieldSpec],
    ) -> Result<Self, TableError> {
        let mut opcodes = Vec::with_capacity(groups.iter().map(|g| g.len()).sum::<usize>() + extra.len());
        for row in groups.iter().flat_map(|g| g.iter()) {
            opcodes.push(Opcode::compile(row)?);
        }
        opcodes.extend(extra);
        Self::new(name, opcodes, fields)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.opcodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.opcodes.is_empty()
    }

    pub fn opcodes(&self) -> &[Opcode] {
        &self.opcodes
    }

    pub fn report(&self) -> &TableReport {
        &self.report
    }

    pub fn field(&self, symbol: char) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.symbol == symbol)
    }

    /// First entry admitted by `mode` whose literal bits match `word`.
    pub fn find(&self, word: Word, mode: Fpscr) -> Option<&Opcode> {
        self.opcodes.iter().find(|o| o.guard.admits(mode) && o.template.matches(word))
    }
}
