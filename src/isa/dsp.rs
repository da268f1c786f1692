//! SH-DSP additions: DSP control and data registers, repeat control,
//! single data transfers (MOVS) and the X/Y double data transfers.
//!
//! A double data transfer word carries one X-memory and one Y-memory
//! operation. Each half is written with `*` over the bits owned by the
//! other half, and the composite table is their position-wise merge.

use crate::table::{op, Guard, Opcode, Row, TableError, Template};

pub const ADDITIONS: &[Row] = &[
    op("0100nnnn01011110", "LDC $N, MOD"),
    op("0100nnnn01111110", "LDC $N, RE"),
    op("0100nnnn01101110", "LDC $N, RS"),
    op("0100nnnn01010111", "LDC.L @$N+, MOD"),
    op("0100nnnn01110111", "LDC.L @$N+, RE"),
    op("0100nnnn01100111", "LDC.L @$N+, RS"),
    op("0000nnnn01010010", "STC MOD, $N"),
    op("0000nnnn01110010", "STC RE, $N"),
    op("0000nnnn01100010", "STC RS, $N"),
    op("0100nnnn01010011", "STC.L MOD, @-$N"),
    op("0100nnnn01110011", "STC.L RE, @-$N"),
    op("0100nnnn01100011", "STC.L RS, @-$N"),
    op("0100nnnn01101010", "LDS $N, DSR"),
    op("0100nnnn01111010", "LDS $N, A0"),
    op("0100nnnn10001010", "LDS $N, X0"),
    op("0100nnnn10011010", "LDS $N, X1"),
    op("0100nnnn10101010", "LDS $N, Y0"),
    op("0100nnnn10111010", "LDS $N, Y1"),
    op("0100nnnn01100110", "LDS.L @$N+, DSR"),
    op("0100nnnn01110110", "LDS.L @$N+, A0"),
    op("0100nnnn10000110", "LDS.L @$N+, X0"),
    op("0100nnnn10010110", "LDS.L @$N+, X1"),
    op("0100nnnn10100110", "LDS.L @$N+, Y0"),
    op("0100nnnn10110110", "LDS.L @$N+, Y1"),
    op("0000nnnn01101010", "STS DSR, $N"),
    op("0000nnnn01111010", "STS A0, $N"),
    op("0000nnnn10001010", "STS X0, $N"),
    op("0000nnnn10011010", "STS X1, $N"),
    op("0000nnnn10101010", "STS Y0, $N"),
    op("0000nnnn10111010", "STS Y1, $N"),
    op("0100nnnn01100010", "STS.L DSR, @-$N"),
    op("0100nnnn01110010", "STS.L A0, @-$N"),
    op("0100nnnn10000010", "STS.L X0, @-$N"),
    op("0100nnnn10010010", "STS.L X1, @-$N"),
    op("0100nnnn10100010", "STS.L Y0, @-$N"),
    op("0100nnnn10110010", "STS.L Y1, @-$N"),
    op("10001110pppppppp", "LDRE @($P, PC)"),
    op("10001100pppppppp", "LDRS @($P, PC)"),
    op("0100nnnn00010100", "SETRC $N"),
    op("10000010iiiiiiii", "SETRC #$I"),
    op("111101aaqqqq0000", "MOVS.W @-$2, $Q"),
    op("111101aaqqqq0100", "MOVS.W @$2, $Q"),
    op("111101aaqqqq1000", "MOVS.W @$2+, $Q"),
    op("111101aaqqqq1100", "MOVS.W @$2+Is, $Q"),
    op("111101aaqqqq0001", "MOVS.W $Q, @-$2"),
    op("111101aaqqqq0101", "MOVS.W $Q, @$2"),
    op("111101aaqqqq1001", "MOVS.W $Q, @$2+"),
    op("111101aaqqqq1101", "MOVS.W $Q, @$2+Is"),
    op("111101aaqqqq0010", "MOVS.L @-$2, $Q"),
    op("111101aaqqqq0110", "MOVS.L @$2, $Q"),
    op("111101aaqqqq1010", "MOVS.L @$2+, $Q"),
    op("111101aaqqqq1110", "MOVS.L @$2+Is, $Q"),
    op("111101aaqqqq0011", "MOVS.L $Q, @-$2"),
    op("111101aaqqqq0111", "MOVS.L $Q, @$2"),
    op("111101aaqqqq1011", "MOVS.L $Q, @$2+"),
    op("111101aaqqqq1111", "MOVS.L $Q, @$2+Is"),
];

/// X-memory halves: Ax at bit 6, Dx/Da at bit 8, direction at bit 10, op at 12-13.
pub const X_HALVES: &[Row] = &[
    op("1111000*0*0*00**", "NOPX"),
    op("111100a*d*0*01**", "MOVX.W @$3, $4"),
    op("111100a*d*0*10**", "MOVX.W @$3+, $4"),
    op("111100a*d*0*11**", "MOVX.W @$3+Ix, $4"),
    op("111100a*d*1*01**", "MOVX.W $5, @$3"),
    op("111100a*d*1*10**", "MOVX.W $5, @$3+"),
    op("111100a*d*1*11**", "MOVX.W $5, @$3+Ix"),
];

/// Y-memory halves: Ay at bit 7, Dy/Da at bit 9, direction at bit 11, op at 14-15.
pub const Y_HALVES: &[Row] = &[
    op("111100*0*0*0**00", "NOPY"),
    op("111100*a*d*0**01", "MOVY.W @$6, $7"),
    op("111100*a*d*0**10", "MOVY.W @$6+, $7"),
    op("111100*a*d*0**11", "MOVY.W @$6+Iy, $7"),
    op("111100*a*d*1**01", "MOVY.W $8, @$6"),
    op("111100*a*d*1**10", "MOVY.W $8, @$6+"),
    op("111100*a*d*1**11", "MOVY.W $8, @$6+Iy"),
];

/// Every X half paired with every Y half, X-major.
pub fn double_transfers() -> Result<Vec<Opcode>, TableError> {
    let mut out = Vec::with_capacity(X_HALVES.len() * Y_HALVES.len());
    for x in X_HALVES {
        let xt = Template::parse(x.template)?;
        for y in Y_HALVES {
            let template = xt.merge(&Template::parse(y.template)?)?;
            out.push(Opcode::new(template, format!("{} {}", x.mnemonic, y.mnemonic), Guard::Always));
        }
    }
    Ok(out)
}
