//! SH-1 integer instruction set, the base every variant starts from.

use crate::table::{op, Row};

pub const BASE: &[Row] = &[
    op("0011nnnnmmmm1100", "ADD $M, $N"),
    op("0111nnnniiiiiiii", "ADD #$I, $N"),
    op("0011nnnnmmmm1110", "ADDC $M, $N"),
    op("0011nnnnmmmm1111", "ADDV $M, $N"),
    op("0010nnnnmmmm1001", "AND $M, $N"),
    op("11001001iiiiiiii", "AND #$I, R0"),
    op("11001101iiiiiiii", "AND.B #$I, @(R0, GBR)"),
    op("10001011dddddddd", "BF $D"),
    op("1010ffffffffffff", "BRA $F"),
    op("1011ffffffffffff", "BSR $F"),
    op("10001001dddddddd", "BT $D"),
    op("0000000000101000", "CLRMAC"),
    op("0000000000001000", "CLRT"),
    op("0011nnnnmmmm0000", "CMP/EQ $M, $N"),
    op("0011nnnnmmmm0011", "CMP/GE $M, $N"),
    op("0011nnnnmmmm0111", "CMP/GT $M, $N"),
    op("0011nnnnmmmm0110", "CMP/HI $M, $N"),
    op("0011nnnnmmmm0010", "CMP/HS $M, $N"),
    op("0100nnnn00010101", "CMP/PL $N"),
    op("0100nnnn00010001", "CMP/PZ $N"),
    op("0010nnnnmmmm1100", "CMP/STR $M, $N"),
    op("10001000iiiiiiii", "CMP/EQ #$I, R0"),
    op("0010nnnnmmmm0111", "DIV0S $M, $N"),
    op("0000000000011001", "DIV0U"),
    op("0011nnnnmmmm0100", "DIV1 $M, $N"),
    op("0110nnnnmmmm1110", "EXTS.B $M, $N"),
    op("0110nnnnmmmm1111", "EXTS.W $M, $N"),
    op("0110nnnnmmmm1100", "EXTU.B $M, $N"),
    op("0110nnnnmmmm1101", "EXTU.W $M, $N"),
    op("0100nnnn00101011", "JMP @$N"),
    op("0100nnnn00001011", "JSR @$N"),
    op("0100nnnn00001110", "LDC $N, SR"),
    op("0100nnnn00011110", "LDC $N, GBR"),
    op("0100nnnn00101110", "LDC $N, VBR"),
    op("0100nnnn00000111", "LDC.L @$N+, SR"),
    op("0100nnnn00010111", "LDC.L @$N+, GBR"),
    op("0100nnnn00100111", "LDC.L @$N+, VBR"),
    op("0100nnnn00001010", "LDS $N, MACH"),
    op("0100nnnn00011010", "LDS $N, MACL"),
    op("0100nnnn00101010", "LDS $N, PR"),
    op("0100nnnn00000110", "LDS.L @$N+, MACH"),
    op("0100nnnn00010110", "LDS.L @$N+, MACL"),
    op("0100nnnn00100110", "LDS.L @$N+, PR"),
    op("0100nnnnmmmm1111", "MAC.W @$M+, @$N+"),
    op("0110nnnnmmmm0011", "MOV $M, $N"),
    op("0010nnnnmmmm0000", "MOV.B $M, @$N"),
    op("0010nnnnmmmm0001", "MOV.W $M, @$N"),
    op("0010nnnnmmmm0010", "MOV.L $M, @$N"),
    op("0110nnnnmmmm0000", "MOV.B @$M, $N"),
    op("0110nnnnmmmm0001", "MOV.W @$M, $N"),
    op("0110nnnnmmmm0010", "MOV.L @$M, $N"),
    op("0010nnnnmmmm0100", "MOV.B $M, @-$N"),
    op("0010nnnnmmmm0101", "MOV.W $M, @-$N"),
    op("0010nnnnmmmm0110", "MOV.L $M, @-$N"),
    op("0110nnnnmmmm0100", "MOV.B @$M+, $N"),
    op("0110nnnnmmmm0101", "MOV.W @$M+, $N"),
    op("0110nnnnmmmm0110", "MOV.L @$M+, $N"),
    op("0000nnnnmmmm0100", "MOV.B $M, @(R0, $N)"),
    op("0000nnnnmmmm0101", "MOV.W $M, @(R0, $N)"),
    op("0000nnnnmmmm0110", "MOV.L $M, @(R0, $N)"),
    op("0000nnnnmmmm1100", "MOV.B @(R0, $M), $N"),
    op("0000nnnnmmmm1101", "MOV.W @(R0, $M), $N"),
    op("0000nnnnmmmm1110", "MOV.L @(R0, $M), $N"),
    op("1110nnnniiiiiiii", "MOV #$I, $N"),
    op("1001nnnnpppppppp", "MOV.W @($P, PC), $N"),
    op("1101nnnnpppppppp", "MOV.L @($P, PC), $N"),
    op("11000100pppppppp", "MOV.B @($P, GBR), R0"),
    op("11000101pppppppp", "MOV.W @($P, GBR), R0"),
    op("11000110pppppppp", "MOV.L @($P, GBR), R0"),
    op("11000000pppppppp", "MOV.B R0, @($P, GBR)"),
    op("11000001pppppppp", "MOV.W R0, @($P, GBR)"),
    op("11000010pppppppp", "MOV.L R0, @($P, GBR)"),
    op("10000000mmmmssss", "MOV.B R0, @($S, $M)"),
    op("10000001mmmmssss", "MOV.W R0, @($S, $M)"),
    op("0001nnnnmmmmssss", "MOV.L $M, @($S, $N)"),
    op("10000100mmmmssss", "MOV.B @($S, $M), R0"),
    op("10000101mmmmssss", "MOV.W @($S, $M), R0"),
    op("0101nnnnmmmmssss", "MOV.L @($S, $M), $N"),
    op("11000111pppppppp", "MOVA @($P, PC), R0"),
    op("0000nnnn00101001", "MOVT $N"),
    op("0010nnnnmmmm1111", "MULS.W $M, $N"),
    op("0010nnnnmmmm1110", "MULU.W $M, $N"),
    op("0110nnnnmmmm1011", "NEG $M, $N"),
    op("0110nnnnmmmm1010", "NEGC $M, $N"),
    op("0000000000001001", "NOP"),
    op("0110nnnnmmmm0111", "NOT $M, $N"),
    op("0010nnnnmmmm1011", "OR $M, $N"),
    op("11001011iiiiiiii", "OR #$I, R0"),
    op("11001111iiiiiiii", "OR.B #$I, @(R0, GBR)"),
    op("0100nnnn00100100", "ROTCL $N"),
    op("0100nnnn00100101", "ROTCR $N"),
    op("0100nnnn00000100", "ROTL $N"),
    op("0100nnnn00000101", "ROTR $N"),
    op("0000000000101011", "RTE"),
    op("0000000000001011", "RTS"),
    op("0000000000011000", "SETT"),
    op("0100nnnn00100000", "SHAL $N"),
    op("0100nnnn00100001", "SHAR $N"),
    op("0100nnnn00000000", "SHLL $N"),
    op("0100nnnn00001000", "SHLL2 $N"),
    op("0100nnnn00011000", "SHLL8 $N"),
    op("0100nnnn00101000", "SHLL16 $N"),
    op("0100nnnn00000001", "SHLR $N"),
    op("0100nnnn00001001", "SHLR2 $N"),
    op("0100nnnn00011001", "SHLR8 $N"),
    op("0100nnnn00101001", "SHLR16 $N"),
    op("0000000000011011", "SLEEP"),
    op("0000nnnn00000010", "STC SR, $N"),
    op("0000nnnn00010010", "STC GBR, $N"),
    op("0000nnnn00100010", "STC VBR, $N"),
    op("0100nnnn00000011", "STC.L SR, @-$N"),
    op("0100nnnn00010011", "STC.L GBR, @-$N"),
    op("0100nnnn00100011", "STC.L VBR, @-$N"),
    op("0000nnnn00001010", "STS MACH, $N"),
    op("0000nnnn00011010", "STS MACL, $N"),
    op("0000nnnn00101010", "STS PR, $N"),
    op("0100nnnn00000010", "STS.L MACH, @-$N"),
    op("0100nnnn00010010", "STS.L MACL, @-$N"),
    op("0100nnnn00100010", "STS.L PR, @-$N"),
    op("0011nnnnmmmm1000", "SUB $M, $N"),
    op("0011nnnnmmmm1010", "SUBC $M, $N"),
    op("0011nnnnmmmm1011", "SUBV $M, $N"),
    op("0110nnnnmmmm1000", "SWAP.B $M, $N"),
    op("0110nnnnmmmm1001", "SWAP.W $M, $N"),
    op("0100nnnn00011011", "TAS.B @$N"),
    op("11000011iiiiiiii", "TRAPA #$I"),
    op("0010nnnnmmmm1000", "TST $M, $N"),
    op("11001000iiiiiiii", "TST #$I, R0"),
    op("11001100iiiiiiii", "TST.B #$I, @(R0, GBR)"),
    op("0010nnnnmmmm1010", "XOR $M, $N"),
    op("11001010iiiiiiii", "XOR #$I, R0"),
    op("11001110iiiiiiii", "XOR.B #$I, @(R0, GBR)"),
    op("0010nnnnmmmm1101", "XTRCT $M, $N"),
];
