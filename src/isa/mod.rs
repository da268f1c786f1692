//! Static ISA data: instruction groups per architecture revision, the
//! placeholder field sets, and the register maps they read through.

pub mod dsp;
pub mod fpu;
pub mod regs;
pub mod sh1;
pub mod sh2;
pub mod sh3;
pub mod sh4;

use crate::table::FieldSpec;
use regs::*;

macro_rules! field_set {
    ($($extra:expr),* $(,)?) => {
        [
            FieldSpec::reg('N', 4, 4, &GPR),
            FieldSpec::reg('M', 8, 4, &GPR),
            FieldSpec::dec('I', 8, 8),
            FieldSpec::dec('P', 8, 8),
            FieldSpec::dec('S', 12, 4),
            FieldSpec::hex('D', 8, 8),
            FieldSpec::hex('F', 4, 12),
            FieldSpec::reg('B', 9, 3, &BANK),
            $($extra,)*
        ]
    };
}

/// Integer-unit fields, shared by every variant.
pub static INTEGER_FIELDS: [FieldSpec; 8] = field_set![];

pub static FPU_FIELDS: [FieldSpec; 16] = field_set![
    FieldSpec::reg('W', 4, 4, &FR),
    FieldSpec::reg('X', 8, 4, &FR),
    FieldSpec::reg('Q', 4, 3, &DR),
    FieldSpec::reg('Z', 8, 3, &DR),
    FieldSpec::reg('K', 4, 3, &XD),
    FieldSpec::reg('L', 8, 3, &XD),
    FieldSpec::reg('C', 4, 2, &FV),
    FieldSpec::reg('V', 6, 2, &FV),
];

pub static DSP_FIELDS: [FieldSpec; 16] = field_set![
    FieldSpec::reg('Q', 8, 4, &DSP_DS),
    FieldSpec::reg('2', 6, 2, &DSP_AS),
    FieldSpec::reg('3', 6, 1, &DSP_AX),
    FieldSpec::reg('4', 8, 1, &DSP_DX),
    FieldSpec::reg('5', 8, 1, &DSP_DA),
    FieldSpec::reg('6', 7, 1, &DSP_AY),
    FieldSpec::reg('7', 9, 1, &DSP_DY),
    FieldSpec::reg('8', 9, 1, &DSP_DA),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::Word;

    #[test]
    fn field_sets_read_fixed_spans() {
        let fv = FPU_FIELDS.iter().find(|f| f.symbol == 'V').unwrap();
        // FIPR FV4, FV8
        assert_eq!(fv.render(Word(0xF9ED)).unwrap(), "FV4");
        let dr = FPU_FIELDS.iter().find(|f| f.symbol == 'Q').unwrap();
        assert_eq!(dr.render(Word(0xF620)).unwrap(), "DR6");
        let bank = INTEGER_FIELDS.iter().find(|f| f.symbol == 'B').unwrap();
        assert_eq!(bank.render(Word(0x40FE)).unwrap(), "R7_BANK");
    }
}
