//! SH-3 additions: MMU and exception registers, dynamic shifts, and the
//! banked general registers.

use crate::table::{op, Row};

pub const ADDITIONS: &[Row] = &[
    op("0000000001001000", "CLRS"),
    op("0000000001011000", "SETS"),
    op("0000000000111000", "LDTLB"),
    op("0000nnnn10000011", "PREF @$N"),
    op("0100nnnnmmmm1100", "SHAD $M, $N"),
    op("0100nnnnmmmm1101", "SHLD $M, $N"),
    op("0100nnnn00111110", "LDC $N, SSR"),
    op("0100nnnn01001110", "LDC $N, SPC"),
    op("0100nnnn1bbb1110", "LDC $N, $B"),
    op("0100nnnn00110111", "LDC.L @$N+, SSR"),
    op("0100nnnn01000111", "LDC.L @$N+, SPC"),
    op("0100nnnn1bbb0111", "LDC.L @$N+, $B"),
    op("0000nnnn00110010", "STC SSR, $N"),
    op("0000nnnn01000010", "STC SPC, $N"),
    op("0000nnnn1bbb0010", "STC $B, $N"),
    op("0100nnnn00110011", "STC.L SSR, @-$N"),
    op("0100nnnn01000011", "STC.L SPC, @-$N"),
    op("0100nnnn1bbb0011", "STC.L $B, @-$N"),
];
