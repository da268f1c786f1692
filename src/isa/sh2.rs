//! SH-2 additions: delayed conditional branches, register-relative
//! far branches and the 32-bit multiplier.

use crate::table::{op, Row};

pub const ADDITIONS: &[Row] = &[
    op("10001111dddddddd", "BF/S $D"),
    op("10001101dddddddd", "BT/S $D"),
    op("0000nnnn00100011", "BRAF $N"),
    op("0000nnnn00000011", "BSRF $N"),
    op("0011nnnnmmmm1101", "DMULS.L $M, $N"),
    op("0011nnnnmmmm0101", "DMULU.L $M, $N"),
    op("0100nnnn00010000", "DT $N"),
    op("0000nnnnmmmm1111", "MAC.L @$M+, @$N+"),
    op("0000nnnnmmmm0111", "MUL.L $M, $N"),
];
