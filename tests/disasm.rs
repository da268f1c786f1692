use pretty_assertions::assert_eq;

use superh_rs::decoder::Decoder;
use superh_rs::{init, DecodeError, Fpscr, Variant, Word};

fn text(variant: Variant, raw: u16) -> String {
    text_in(variant, raw, Fpscr::empty())
}

fn text_in(variant: Variant, raw: u16, mode: Fpscr) -> String {
    init().unwrap().engine(variant).decode_with(Word(raw), mode).unwrap().to_string()
}

#[test]
fn sh1_reference_words() {
    let sh1 = init().unwrap().select("SuperH1").unwrap();
    assert_eq!(sh1.decode_str("0011000000011100").unwrap().to_string(), "ADD R1, R0");
    assert_eq!(sh1.decode_str("1111111111111111").unwrap().to_string(), "word1111111111111111");
    assert_eq!(sh1.decode_str("1100100100001010").unwrap().to_string(), "AND #10, R0");
    assert_eq!(sh1.decode_str("1000100100011111").unwrap().to_string(), "BT 1F");
    assert_eq!(sh1.decode_str("0000000000001001").unwrap().to_string(), "NOP");
}

#[test]
fn sh1_operand_forms() {
    assert_eq!(text(Variant::SuperH1, 0x4301), "SHLR R3");
    assert_eq!(text(Variant::SuperH1, 0x421B), "TAS.B @R2");
    assert_eq!(text(Variant::SuperH1, 0x5123), "MOV.L @(3, R2), R1");
    assert_eq!(text(Variant::SuperH1, 0x1123), "MOV.L R2, @(3, R1)");
    assert_eq!(text(Variant::SuperH1, 0x8035), "MOV.B R0, @(5, R3)");
    assert_eq!(text(Variant::SuperH1, 0x4ABF), "MAC.W @R11+, @R10+");
    assert_eq!(text(Variant::SuperH1, 0xB123), "BSR 123");
    assert_eq!(text(Variant::SuperH1, 0xAFFE), "BRA FFE");
    assert_eq!(text(Variant::SuperH1, 0xE1FF), "MOV #255, R1");
    assert_eq!(text(Variant::SuperH1, 0xD001), "MOV.L @(1, PC), R0");
}

#[test]
fn later_revisions_extend_earlier_ones() {
    assert_eq!(text(Variant::SuperH1, 0x4510), "word0100010100010000");
    assert_eq!(text(Variant::SuperH2, 0x4510), "DT R5");
    assert_eq!(text(Variant::SuperH2, 0x0A5F), "MAC.L @R5+, @R10+");

    assert_eq!(text(Variant::SuperH2, 0x40FE), "word0100000011111110");
    assert_eq!(text(Variant::SuperH3, 0x40FE), "LDC R0, R7_BANK");
    assert_eq!(text(Variant::SuperH3, 0x0392), "STC R1_BANK, R3");
    assert_eq!(text(Variant::SuperH3, 0x0083), "PREF @R0");

    assert_eq!(text(Variant::SuperH4, 0x41FA), "LDC R1, DBR");
    assert_eq!(text(Variant::SuperH4, 0x023A), "STC SGR, R2");
    assert_eq!(text(Variant::SuperH4, 0x00AB), "word0000000010101011");
    assert_eq!(text(Variant::SuperH4A, 0x00AB), "SYNCO");
    assert_eq!(text(Variant::SuperH4A, 0x0163), "MOVLI.L @R1, R0");
    assert_eq!(text(Variant::SuperH4A, 0xF37D), "FSRRA FR3");
}

#[test]
fn dsp_control_registers_only_on_dsp_parts() {
    assert_eq!(text(Variant::SuperH3, 0x415E), "word0100000101011110");
    assert_eq!(text(Variant::SuperH3DSP, 0x415E), "LDC R1, MOD");
    assert_eq!(text(Variant::SuperHDSP, 0x4372), "STS.L A0, @-R3");
    assert_eq!(text(Variant::SuperHDSP, 0x4362), "STS.L DSR, @-R3");
    assert_eq!(text(Variant::SuperHDSP, 0x8205), "SETRC #5");
    assert_eq!(text(Variant::SuperHDSP, 0x40FE), "word0100000011111110");
}

#[test]
fn fpscr_selects_sh4_fpu_forms() {
    let sh4 = Variant::SuperH4;
    assert_eq!(text_in(sh4, 0xF240, Fpscr::empty()), "FADD FR4, FR2");
    assert_eq!(text_in(sh4, 0xF240, Fpscr::PR), "FADD DR4, DR2");
    assert_eq!(text_in(sh4, 0xF210, Fpscr::PR), "word1111001000010000");

    assert_eq!(text_in(sh4, 0xF24C, Fpscr::empty()), "FMOV FR4, FR2");
    assert_eq!(text_in(sh4, 0xF24C, Fpscr::SZ), "FMOV DR4, DR2");
    assert_eq!(text_in(sh4, 0xF35C, Fpscr::SZ), "FMOV XD4, XD2");
    assert_eq!(text_in(sh4, 0xF35C, Fpscr::PR), "FMOV FR5, FR3");

    assert_eq!(text_in(sh4, 0xF9ED, Fpscr::empty()), "FIPR FV4, FV8");
    assert_eq!(text_in(sh4, 0xF9ED, Fpscr::PR), "word1111100111101101");
    assert_eq!(text_in(sh4, 0xF2BD, Fpscr::PR), "FCNVDS DR2, FPUL");
    assert_eq!(text_in(sh4, 0xF2BD, Fpscr::empty()), "word1111001010111101");

    for mode in Fpscr::MODES {
        assert_eq!(text_in(sh4, 0xF31D, mode), "FLDS FR3, FPUL");
        assert_eq!(text_in(sh4, 0xF3FD, mode), "FSCHG");
        assert_eq!(text_in(sh4, 0xFBFD, mode), "FRCHG");
    }
}

#[test]
fn sh3e_ignores_fpscr() {
    assert_eq!(text_in(Variant::SuperH3E, 0xF240, Fpscr::PR | Fpscr::SZ), "FADD FR4, FR2");
    assert_eq!(text_in(Variant::SuperH3E, 0xF24C, Fpscr::SZ), "FMOV FR4, FR2");
    assert_eq!(text(Variant::SuperH3E, 0xF3FD), "word1111001111111101");
}

#[test]
fn dsp_data_transfers() {
    for v in [Variant::SuperHDSP, Variant::SuperH3DSP] {
        assert_eq!(text(v, 0xF000), "NOPX NOPY");
        assert_eq!(text(v, 0xF00A), "MOVX.W @R4+, X0 MOVY.W @R6+, Y0");
        assert_eq!(text(v, 0xF2AC), "MOVX.W A1, @R5+Ix NOPY");
        assert_eq!(text(v, 0xF6BA), "MOVS.L @R2+, Y1");
    }
    assert_eq!(text(Variant::SuperH3, 0xF000), "word1111000000000000");
}

#[test]
fn dsp_index_registers_per_transfer_kind() {
    for v in [Variant::SuperHDSP, Variant::SuperH3DSP] {
        assert_eq!(text(v, 0xF48C), "MOVS.W @R4+Is, X0");
        assert_eq!(text(v, 0xF57D), "MOVS.W A0, @R5+Is");
        assert_eq!(text(v, 0xF6BE), "MOVS.L @R2+Is, Y1");
        assert_eq!(text(v, 0xF00F), "MOVX.W @R4+Ix, X0 MOVY.W @R6+Iy, Y0");
    }
}

#[test]
fn reserved_dsp_register_code_is_an_error() {
    let err = init().unwrap().engine(Variant::SuperHDSP).decode(Word(0xF40A)).unwrap_err();
    match err {
        DecodeError::MalformedField { word, symbol, bits, map } => {
            assert_eq!(word, Word(0xF40A));
            assert_eq!(symbol, 'Q');
            assert_eq!(bits, "0000");
            assert_eq!(map, "Ds");
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn unknown_variant_is_not_a_default() {
    let reg = init().unwrap();
    assert!(reg.select("--SuperH5").is_err());
    assert!(reg.select("x86").is_err());
}
