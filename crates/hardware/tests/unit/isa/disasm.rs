//! Instruction Disassembler Unit Tests.
//!
//! Verifies that common encodings render in SH assembler syntax.

use rstest::rstest;
use shpipe_core::isa::disasm::disassemble;

#[rstest]
#[case(0x0009, "NOP")]
#[case(0x001B, "SLEEP")]
#[case(0x000B, "RTS")]
#[case(0x7101, "ADD #1,R1")]
#[case(0x71FF, "ADD #-1,R1")]
#[case(0xE204, "MOV #4,R2")]
#[case(0x4100, "SHLL R1")]
#[case(0x4218, "SHLL8 R2")]
#[case(0x2212, "MOV.L R1,@R2")]
#[case(0x2204, "MOV.B R0,@-R2")]
#[case(0x6116, "MOV.L @R1+,R1")]
#[case(0x4307, "LDC.L @R3+,SR")]
#[case(0x8901, "BT 1")]
#[case(0xA002, "BRA 2")]
#[case(0xAFFE, "BRA -2")]
#[case(0xCF0F, "OR.B #15,@(R0,GBR)")]
#[case(0xD101, "MOV.L @(4,PC),R1")]
#[case(0x3120, "CMP/EQ R2,R1")]
fn disasm_renders(#[case] word: u16, #[case] text: &str) {
    assert_eq!(disassemble(word), text);
}

#[test]
fn disasm_unknown_word() {
    assert_eq!(disassemble(0xFFFF), ".word 0xffff");
}
