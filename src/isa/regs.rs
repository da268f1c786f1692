//! Register-name maps shared by the field sets.

use crate::table::SymbolMap;

pub static GPR: SymbolMap = SymbolMap {
    name: "Rn",
    entries: &[
        (0, "R0"), (1, "R1"), (2, "R2"), (3, "R3"),
        (4, "R4"), (5, "R5"), (6, "R6"), (7, "R7"),
        (8, "R8"), (9, "R9"), (10, "R10"), (11, "R11"),
        (12, "R12"), (13, "R13"), (14, "R14"), (15, "R15"),
    ],
};

pub static BANK: SymbolMap = SymbolMap {
    name: "Rn_BANK",
    entries: &[
        (0, "R0_BANK"), (1, "R1_BANK"), (2, "R2_BANK"), (3, "R3_BANK"),
        (4, "R4_BANK"), (5, "R5_BANK"), (6, "R6_BANK"), (7, "R7_BANK"),
    ],
};

pub static FR: SymbolMap = SymbolMap {
    name: "FRn",
    entries: &[
        (0, "FR0"), (1, "FR1"), (2, "FR2"), (3, "FR3"),
        (4, "FR4"), (5, "FR5"), (6, "FR6"), (7, "FR7"),
        (8, "FR8"), (9, "FR9"), (10, "FR10"), (11, "FR11"),
        (12, "FR12"), (13, "FR13"), (14, "FR14"), (15, "FR15"),
    ],
};

/// Pair registers are addressed by the upper three bits of the FR number.
pub static DR: SymbolMap = SymbolMap {
    name: "DRn",
    entries: &[
        (0, "DR0"), (1, "DR2"), (2, "DR4"), (3, "DR6"),
        (4, "DR8"), (5, "DR10"), (6, "DR12"), (7, "DR14"),
    ],
};

pub static XD: SymbolMap = SymbolMap {
    name: "XDn",
    entries: &[
        (0, "XD0"), (1, "XD2"), (2, "XD4"), (3, "XD6"),
        (4, "XD8"), (5, "XD10"), (6, "XD12"), (7, "XD14"),
    ],
};

pub static FV: SymbolMap = SymbolMap {
    name: "FVn",
    entries: &[(0, "FV0"), (1, "FV4"), (2, "FV8"), (3, "FV12")],
};

/// DSP `Ds` operand of MOVS. Codes 0000-0100 and 0110 are reserved.
pub static DSP_DS: SymbolMap = SymbolMap {
    name: "Ds",
    entries: &[
        (0b0101, "A1"), (0b0111, "A0"),
        (0b1000, "X0"), (0b1001, "X1"), (0b1010, "Y0"), (0b1011, "Y1"),
        (0b1100, "M0"), (0b1101, "A1G"), (0b1110, "M1"), (0b1111, "A0G"),
    ],
};

pub static DSP_AS: SymbolMap = SymbolMap {
    name: "As",
    entries: &[(0b00, "R4"), (0b01, "R5"), (0b10, "R2"), (0b11, "R3")],
};

pub static DSP_AX: SymbolMap = SymbolMap { name: "Ax", entries: &[(0, "R4"), (1, "R5")] };
pub static DSP_AY: SymbolMap = SymbolMap { name: "Ay", entries: &[(0, "R6"), (1, "R7")] };
pub static DSP_DX: SymbolMap = SymbolMap { name: "Dx", entries: &[(0, "X0"), (1, "X1")] };
pub static DSP_DY: SymbolMap = SymbolMap { name: "Dy", entries: &[(0, "Y0"), (1, "Y1")] };
pub static DSP_DA: SymbolMap = SymbolMap { name: "Da", entries: &[(0, "A0"), (1, "A1")] };
