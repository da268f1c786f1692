//! SH-4 system instructions (cache control, debug and saved-GR registers)
//! and the SH-4A additions on top of them.

use crate::table::{op, Row};

use super::fpu::SINGLE_PREC;

pub const SYSTEM: &[Row] = &[
    op("0100nnnn11111010", "LDC $N, DBR"),
    op("0100nnnn11110110", "LDC.L @$N+, DBR"),
    op("0000nnnn11111010", "STC DBR, $N"),
    op("0100nnnn11110010", "STC.L DBR, @-$N"),
    op("0000nnnn00111010", "STC SGR, $N"),
    op("0100nnnn00110010", "STC.L SGR, @-$N"),
    op("0000nnnn11000011", "MOVCA.L R0, @$N"),
    op("0000nnnn10010011", "OCBI @$N"),
    op("0000nnnn10100011", "OCBP @$N"),
    op("0000nnnn10110011", "OCBWB @$N"),
];

pub const SH4A: &[Row] = &[
    op("0000nnnn11100011", "ICBI @$N"),
    op("0000nnnn01110011", "MOVCO.L R0, @$N"),
    op("0000nnnn01100011", "MOVLI.L @$N, R0"),
    op("0100nnnn10101001", "MOVUA.L @$N, R0"),
    op("0100nnnn11101001", "MOVUA.L @$N+, R0"),
    op("0000nnnn11010011", "PREFI @$N"),
    op("0000000010101011", "SYNCO"),
    op("1111wwww01111101", "FSRRA $W").when(SINGLE_PREC),
    op("1111qqq011111101", "FSCA FPUL, $Q").when(SINGLE_PREC),
];
