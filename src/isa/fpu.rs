//! Floating-point unit groups. SH-3E has only the single-precision unit;
//! SH-4 adds the pair registers, vector ops and the mode-switch
//! instructions, with FPSCR.PR and FPSCR.SZ picking between encodings
//! that share bit patterns.

use crate::table::{op, Fpscr, Guard, Row};

/// Single-precision arithmetic (FPSCR.PR = 0).
pub const SINGLE_PREC: Guard = Guard::Clear(Fpscr::PR);
/// Double-precision arithmetic (FPSCR.PR = 1).
pub const DOUBLE_PREC: Guard = Guard::Set(Fpscr::PR);
/// 32-bit FMOV transfers (FPSCR.SZ = 0).
pub const SINGLE_MOVE: Guard = Guard::Clear(Fpscr::SZ);
/// 64-bit FMOV pair transfers (FPSCR.SZ = 1).
pub const PAIR_MOVE: Guard = Guard::Set(Fpscr::SZ);

pub const SINGLE: &[Row] = &[
    op("1111wwww01011101", "FABS $W").when(SINGLE_PREC),
    op("1111wwwwxxxx0000", "FADD $X, $W").when(SINGLE_PREC),
    op("1111wwwwxxxx0100", "FCMP/EQ $X, $W").when(SINGLE_PREC),
    op("1111wwwwxxxx0101", "FCMP/GT $X, $W").when(SINGLE_PREC),
    op("1111wwwwxxxx0011", "FDIV $X, $W").when(SINGLE_PREC),
    op("1111wwww10001101", "FLDI0 $W").when(SINGLE_PREC),
    op("1111wwww10011101", "FLDI1 $W").when(SINGLE_PREC),
    op("1111wwww00011101", "FLDS $W, FPUL"),
    op("1111wwww00101101", "FLOAT FPUL, $W").when(SINGLE_PREC),
    op("1111wwwwxxxx1110", "FMAC FR0, $X, $W").when(SINGLE_PREC),
    op("1111wwwwxxxx1100", "FMOV $X, $W").when(SINGLE_MOVE),
    op("1111wwwwmmmm1000", "FMOV.S @$M, $W").when(SINGLE_MOVE),
    op("1111wwwwmmmm1001", "FMOV.S @$M+, $W").when(SINGLE_MOVE),
    op("1111wwwwmmmm0110", "FMOV.S @(R0, $M), $W").when(SINGLE_MOVE),
    op("1111nnnnxxxx1010", "FMOV.S $X, @$N").when(SINGLE_MOVE),
    op("1111nnnnxxxx1011", "FMOV.S $X, @-$N").when(SINGLE_MOVE),
    op("1111nnnnxxxx0111", "FMOV.S $X, @(R0, $N)").when(SINGLE_MOVE),
    op("1111wwwwxxxx0010", "FMUL $X, $W").when(SINGLE_PREC),
    op("1111wwww01001101", "FNEG $W").when(SINGLE_PREC),
    op("1111wwww01101101", "FSQRT $W").when(SINGLE_PREC),
    op("1111wwww00001101", "FSTS FPUL, $W"),
    op("1111wwwwxxxx0001", "FSUB $X, $W").when(SINGLE_PREC),
    op("1111wwww00111101", "FTRC $W, FPUL").when(SINGLE_PREC),
    op("0100nnnn01011010", "LDS $N, FPUL"),
    op("0100nnnn01010110", "LDS.L @$N+, FPUL"),
    op("0100nnnn01101010", "LDS $N, FPSCR"),
    op("0100nnnn01100110", "LDS.L @$N+, FPSCR"),
    op("0000nnnn01011010", "STS FPUL, $N"),
    op("0000nnnn01101010", "STS FPSCR, $N"),
    op("0100nnnn01010010", "STS.L FPUL, @-$N"),
    op("0100nnnn01100010", "STS.L FPSCR, @-$N"),
];

pub const DOUBLE: &[Row] = &[
    op("1111qqq001011101", "FABS $Q").when(DOUBLE_PREC),
    op("1111qqq0zzz00000", "FADD $Z, $Q").when(DOUBLE_PREC),
    op("1111qqq0zzz00100", "FCMP/EQ $Z, $Q").when(DOUBLE_PREC),
    op("1111qqq0zzz00101", "FCMP/GT $Z, $Q").when(DOUBLE_PREC),
    op("1111qqq010111101", "FCNVDS $Q, FPUL").when(DOUBLE_PREC),
    op("1111qqq010101101", "FCNVSD FPUL, $Q").when(DOUBLE_PREC),
    op("1111qqq0zzz00011", "FDIV $Z, $Q").when(DOUBLE_PREC),
    op("1111qqq000101101", "FLOAT FPUL, $Q").when(DOUBLE_PREC),
    op("1111qqq0zzz00010", "FMUL $Z, $Q").when(DOUBLE_PREC),
    op("1111qqq001001101", "FNEG $Q").when(DOUBLE_PREC),
    op("1111qqq001101101", "FSQRT $Q").when(DOUBLE_PREC),
    op("1111qqq0zzz00001", "FSUB $Z, $Q").when(DOUBLE_PREC),
    op("1111qqq000111101", "FTRC $Q, FPUL").when(DOUBLE_PREC),
    op("1111qqq0zzz01100", "FMOV $Z, $Q").when(PAIR_MOVE),
    op("1111qqq0lll11100", "FMOV $L, $Q").when(PAIR_MOVE),
    op("1111kkk1zzz01100", "FMOV $Z, $K").when(PAIR_MOVE),
    op("1111kkk1lll11100", "FMOV $L, $K").when(PAIR_MOVE),
    op("1111qqq0mmmm1000", "FMOV @$M, $Q").when(PAIR_MOVE),
    op("1111kkk1mmmm1000", "FMOV @$M, $K").when(PAIR_MOVE),
    op("1111qqq0mmmm1001", "FMOV @$M+, $Q").when(PAIR_MOVE),
    op("1111kkk1mmmm1001", "FMOV @$M+, $K").when(PAIR_MOVE),
    op("1111qqq0mmmm0110", "FMOV @(R0, $M), $Q").when(PAIR_MOVE),
    op("1111kkk1mmmm0110", "FMOV @(R0, $M), $K").when(PAIR_MOVE),
    op("1111nnnnzzz01010", "FMOV $Z, @$N").when(PAIR_MOVE),
    op("1111nnnnlll11010", "FMOV $L, @$N").when(PAIR_MOVE),
    op("1111nnnnzzz01011", "FMOV $Z, @-$N").when(PAIR_MOVE),
    op("1111nnnnlll11011", "FMOV $L, @-$N").when(PAIR_MOVE),
    op("1111nnnnzzz00111", "FMOV $Z, @(R0, $N)").when(PAIR_MOVE),
    op("1111nnnnlll10111", "FMOV $L, @(R0, $N)").when(PAIR_MOVE),
    op("1111ccvv11101101", "FIPR $V, $C").when(SINGLE_PREC),
    op("1111cc0111111101", "FTRV XMTRX, $C").when(SINGLE_PREC),
    op("1111101111111101", "FRCHG"),
    op("1111001111111101", "FSCHG"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_encoding_sharing_a_pattern_is_mode_split() {
        for (i, a) in SINGLE.iter().chain(DOUBLE).enumerate() {
            for b in SINGLE.iter().chain(DOUBLE).skip(i + 1) {
                assert!(
                    a.template != b.template || !a.guard.compatible(b.guard),
                    "{} listed twice without a mode split",
                    a.template
                );
            }
        }
    }
}
