//! ISA variant tokens and the process-wide registry of decode engines.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::decoder::Engine;
use crate::isa::{dsp, fpu, sh1, sh2, sh3, sh4, DSP_FIELDS, FPU_FIELDS, INTEGER_FIELDS};
use crate::table::{FieldSpec, Fpscr, OpcodeTable, Row, TableError, TableReport};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown ISA variant {0:?}")]
pub struct UnknownVariant(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Variant {
    SuperH1,
    SuperH2,
    SuperH3,
    SuperH3E,
    SuperH3DSP,
    SuperH4,
    SuperH4A,
    SuperHDSP,
}

const SH1: &[&[Row]] = &[sh1::BASE];
const SH2: &[&[Row]] = &[sh1::BASE, sh2::ADDITIONS];
const SHDSP: &[&[Row]] = &[sh1::BASE, sh2::ADDITIONS, dsp::ADDITIONS];
const SH3: &[&[Row]] = &[sh1::BASE, sh2::ADDITIONS, sh3::ADDITIONS];
const SH3DSP: &[&[Row]] = &[sh1::BASE, sh2::ADDITIONS, sh3::ADDITIONS, dsp::ADDITIONS];
const SH3E: &[&[Row]] = &[sh1::BASE, sh2::ADDITIONS, sh3::ADDITIONS, fpu::SINGLE];
const SH4: &[&[Row]] =
    &[sh1::BASE, sh2::ADDITIONS, sh3::ADDITIONS, fpu::SINGLE, fpu::DOUBLE, sh4::SYSTEM];
const SH4A: &[&[Row]] = &[
    sh1::BASE,
    sh2::ADDITIONS,
    sh3::ADDITIONS,
    fpu::SINGLE,
    fpu::DOUBLE,
    sh4::SYSTEM,
    sh4::SH4A,
];

impl Variant {
    pub const ALL: [Variant; 8] = [
        Variant::SuperH1,
        Variant::SuperH2,
        Variant::SuperH3,
        Variant::SuperH3E,
        Variant::SuperH3DSP,
        Variant::SuperH4,
        Variant::SuperH4A,
        Variant::SuperHDSP,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Variant::SuperH1 => "SuperH1",
            Variant::SuperH2 => "SuperH2",
            Variant::SuperH3 => "SuperH3",
            Variant::SuperH3E => "SuperH3E",
            Variant::SuperH3DSP => "SuperH3DSP",
            Variant::SuperH4 => "SuperH4",
            Variant::SuperH4A => "SuperH4A",
            Variant::SuperHDSP => "SuperHDSP",
        }
    }

    pub fn alias(self) -> &'static str {
        match self {
            Variant::SuperH1 => "sh1",
            Variant::SuperH2 => "sh2",
            Variant::SuperH3 => "sh3",
            Variant::SuperH3E => "sh3e",
            Variant::SuperH3DSP => "sh3dsp",
            Variant::SuperH4 => "sh4",
            Variant::SuperH4A => "sh4a",
            Variant::SuperHDSP => "shdsp",
        }
    }

    /// FPSCR bits that select between encodings on this variant.
    pub fn fpscr_mask(self) -> Fpscr {
        match self {
            Variant::SuperH4 | Variant::SuperH4A => Fpscr::PR | Fpscr::SZ,
            _ => Fpscr::empty(),
        }
    }

    pub fn has_dsp(self) -> bool {
        matches!(self, Variant::SuperH3DSP | Variant::SuperHDSP)
    }

    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            Variant::SuperH3E | Variant::SuperH4 | Variant::SuperH4A => &FPU_FIELDS,
            Variant::SuperH3DSP | Variant::SuperHDSP => &DSP_FIELDS,
            Variant::SuperH1 | Variant::SuperH2 | Variant::SuperH3 => &INTEGER_FIELDS,
        }
    }

    /// Instruction groups in match order.
    pub fn groups(self) -> &'static [&'static [Row]] {
        match self {
            Variant::SuperH1 => SH1,
            Variant::SuperH2 => SH2,
            Variant::SuperH3 => SH3,
            Variant::SuperH3E => SH3E,
            Variant::SuperH3DSP => SH3DSP,
            Variant::SuperH4 => SH4,
            Variant::SuperH4A => SH4A,
            Variant::SuperHDSP => SHDSP,
        }
    }

    /// Compile and validate this variant's table.
    pub fn build(self) -> Result<Engine, TableError> {
        let composites = if self.has_dsp() { dsp::double_transfers()? } else { Vec::new() };
        let table = OpcodeTable::from_groups(self.name(), self.groups(), composites, self.fields())?;
        debug!(variant = self.name(), entries = table.len(), "opcode table built");
        for o in &table.report().overlaps {
            warn!(
                variant = self.name(),
                first = %o.first,
                second = %o.second,
                "{:?} shadows part of {:?}",
                o.first_mnemonic,
                o.second_mnemonic
            );
        }
        Ok(Engine::new(self, table, self.fpscr_mask()))
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = UnknownVariant;

    /// Accepts `SuperH4`, `--SuperH4`, `sh4`, in any case.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let bare = token.strip_prefix("--").unwrap_or(token);
        Variant::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(bare) || v.alias().eq_ignore_ascii_case(bare))
            .ok_or_else(|| UnknownVariant(token.to_string()))
    }
}

/// All eight engines, built and validated together.
#[derive(Debug)]
pub struct Registry {
    engines: Vec<Engine>,
}

impl Registry {
    pub fn build() -> Result<Self, TableError> {
        let engines = Variant::ALL.into_iter().map(Variant::build).collect::<Result<Vec<_>, _>>()?;
        Ok(Self { engines })
    }

    pub fn engine(&self, variant: Variant) -> &Engine {
        // `engines` is built from `Variant::ALL` in declaration order.
        &self.engines[variant as usize]
    }

    pub fn select(&self, token: &str) -> Result<&Engine, UnknownVariant> {
        Ok(self.engine(token.parse()?))
    }

    pub fn engines(&self) -> impl Iterator<Item = &Engine> {
        self.engines.iter()
    }

    pub fn reports(&self) -> Vec<&TableReport> {
        self.engines.iter().map(|e| e.table().report()).collect()
    }
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Build every table once per process. Later calls return the same registry.
pub fn init() -> Result<&'static Registry, TableError> {
    if let Some(registry) = REGISTRY.get() {
        return Ok(registry);
    }
    let built = Registry::build()?;
    Ok(REGISTRY.get_or_init(|| built))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tokens() {
        assert_eq!("SuperH4".parse::<Variant>().unwrap(), Variant::SuperH4);
        assert_eq!("--SuperH3DSP".parse::<Variant>().unwrap(), Variant::SuperH3DSP);
        assert_eq!("sh4a".parse::<Variant>().unwrap(), Variant::SuperH4A);
        assert_eq!("SUPERHDSP".parse::<Variant>().unwrap(), Variant::SuperHDSP);
        assert_eq!("SuperH5".parse::<Variant>().unwrap_err(), UnknownVariant("SuperH5".into()));
        assert!("".parse::<Variant>().is_err());
    }

    #[test]
    fn all_is_in_discriminant_order() {
        for (i, v) in Variant::ALL.into_iter().enumerate() {
            assert_eq!(v as usize, i);
        }
    }

    #[test]
    fn registry_selects_by_token() {
        let reg = init().unwrap();
        assert_eq!(reg.select("--SuperH2").unwrap().variant(), Variant::SuperH2);
        assert!(reg.select("--SuperH9").is_err());
        assert!(std::ptr::eq(reg, init().unwrap()));
    }
}
