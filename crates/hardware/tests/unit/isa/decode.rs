//! # Decode Table Tests
//!
//! Verifies the control signals produced for representative encodings of
//! each instruction class, and that unimplemented words decode as NOP.

use shpipe_core::common::constants::{REG_GBR, REG_MACH, REG_PR, REG_R0};
use shpipe_core::common::data::AccessWidth;
use shpipe_core::core::pipeline::signals::{
    AluOp, BaseSrc, ControlSignals, Dest, MemDir, MultiCycleOp, Operand, PcControl, ResultSrc,
};
use shpipe_core::core::units::agu::program::PcSelect;
use shpipe_core::core::units::agu::{OffsetSel, Step, StepMode};
use shpipe_core::isa::decode::decode;

use crate::common::builder::instruction::*;

#[test]
fn decode_nop_and_fill_pattern() {
    assert!(decode(NOP).is_nop());
    assert_eq!(decode(NOP), ControlSignals::NOP);
}

#[test]
fn decode_unimplemented_words_as_nop() {
    // MUL.L, DIV1, TRAPA, RTE, MAC.W, and the 0xF group
    for word in [0x0127, 0x3124, 0xC320, 0x002B, 0x412F, 0xF00C, 0xFFFF] {
        assert!(decode(word).is_nop(), "{word:#06x}");
    }
}

#[test]
fn decode_add_immediate_sign_extends() {
    let ctrl = decode(add_imm(-1, 3));
    assert_eq!(ctrl.alu, AluOp::Add);
    assert_eq!((ctrl.x, ctrl.y), (Operand::PortA, Operand::Imm));
    assert_eq!(ctrl.imm, 0xFFFF_FFFF);
    assert_eq!(ctrl.dest, Dest::Reg(3));
    assert!(!ctrl.set_t);
}

#[test]
fn decode_mov_immediate_passes_imm() {
    let ctrl = decode(mov_imm(0x7F, 2));
    assert_eq!(ctrl.alu, AluOp::Pass);
    assert_eq!(ctrl.y, Operand::Imm);
    assert_eq!(ctrl.imm, 0x7F);
    assert_eq!(ctrl.dest, Dest::Reg(2));
}

#[test]
fn decode_compare_writes_only_t() {
    let ctrl = decode(0x3120); // CMP/EQ R2,R1
    assert_eq!(ctrl.alu, AluOp::CmpEq);
    assert!(ctrl.set_t);
    assert_eq!(ctrl.dest, Dest::None);
    assert_eq!((ctrl.ra, ctrl.rb), (1, 2));
}

#[test]
fn decode_shift_writes_rn_and_t() {
    let ctrl = decode(shll(4));
    assert_eq!(ctrl.alu, AluOp::Shll);
    assert_eq!(ctrl.x, Operand::PortA);
    assert_eq!(ctrl.dest, Dest::Reg(4));
    assert!(ctrl.set_t);
}

#[test]
fn decode_pre_decrement_store() {
    let ctrl = decode(mov_b_push(0, 2));
    let mem = ctrl.mem.unwrap();
    assert_eq!(mem.dir, MemDir::Write);
    assert_eq!(mem.width, AccessWidth::Byte);
    assert_eq!(mem.base, BaseSrc::PortA);
    assert_eq!(mem.step, Some(Step::dec(0)));
    assert_eq!(mem.mode, StepMode::Pre);
    assert_eq!(mem.data, Operand::PortB);
    assert_eq!(mem.write_back, Some(2));
    assert_eq!(ctrl.dest, Dest::None);
}

#[test]
fn decode_post_increment_load() {
    let ctrl = decode(mov_l_pop(5, 6));
    let mem = ctrl.mem.unwrap();
    assert_eq!(mem.dir, MemDir::Read);
    assert_eq!(mem.base, BaseSrc::PortB);
    assert_eq!(mem.step, Some(Step::inc(2)));
    assert_eq!(mem.mode, StepMode::Post);
    assert_eq!(mem.write_back, Some(5));
    assert_eq!(ctrl.result, ResultSrc::Load);
    assert_eq!(ctrl.dest, Dest::Reg(6));
}

#[test]
fn decode_indexed_and_displacement_modes() {
    let indexed = decode(0x0126).mem.unwrap(); // MOV.L R2,@(R0,R1)
    assert_eq!(indexed.offset, OffsetSel::Reg1);

    let ctrl = decode(0x5123); // MOV.L @(3,R2),R1
    assert_eq!(ctrl.imm, 3);
    assert_eq!(ctrl.mem.unwrap().offset, OffsetSel::Imm4);
    assert_eq!(ctrl.mem.unwrap().base, BaseSrc::PortB);

    let ctrl = decode(0x8512); // MOV.W @(2,R1),R0
    assert_eq!(ctrl.dest, Dest::Reg(REG_R0));
    assert_eq!(ctrl.mem.unwrap().offset, OffsetSel::Imm2);
}

#[test]
fn decode_pc_relative_and_mova() {
    let ctrl = decode(mov_l_pc(1, 7));
    let mem = ctrl.mem.unwrap();
    assert_eq!(mem.base, BaseSrc::Pc);
    assert_eq!(mem.step, Some(Step::inc(2)));
    assert_eq!(mem.mode, StepMode::Pre);
    assert_eq!(ctrl.dest, Dest::Reg(7));

    let mova = decode(0xC705);
    assert_eq!(mova.mem.unwrap().dir, MemDir::AddressOnly);
    assert_eq!(mova.result, ResultSrc::Address);
    assert_eq!(mova.dest, Dest::Reg(REG_R0));
}

#[test]
fn decode_gbr_forms() {
    let ctrl = decode(0xC102); // MOV.W R0,@(2,GBR)
    let mem = ctrl.mem.unwrap();
    assert_eq!(mem.base, BaseSrc::Gbr);
    assert_eq!(mem.data, Operand::R0);

    let ctrl = decode(0x401E); // LDC R0,GBR
    assert_eq!(ctrl.dest, Dest::Reg(REG_GBR));
}

#[test]
fn decode_branches() {
    let ctrl = decode(bra(-2));
    assert_eq!(ctrl.imm, 0xFFFF_FFFE);
    assert_eq!(ctrl.pc, PcControl::Jump(PcSelect::relative(OffsetSel::Imm4)));
    assert_eq!(ctrl.dest, Dest::None);

    let ctrl = decode(bsr(4));
    assert_eq!(ctrl.result, ResultSrc::Link);
    assert_eq!(ctrl.dest, Dest::Reg(REG_PR));

    let ctrl = decode(RTS);
    assert_eq!(ctrl.rb, REG_PR);
    assert_eq!(ctrl.pc, PcControl::Jump(PcSelect::register()));

    assert_eq!(
        decode(bt(3)).pc,
        PcControl::Branch {
            if_t: true,
            delayed: false
        }
    );
    assert_eq!(
        decode(0x8F01).pc,
        PcControl::Branch {
            if_t: false,
            delayed: true
        }
    );
}

#[test]
fn decode_multi_cycle_forms_hold_the_pc() {
    let ctrl = decode(ldc_l_sr(3));
    assert_eq!(ctrl.sequence, Some(MultiCycleOp::LoadControl(Dest::Sr)));
    assert_eq!(ctrl.pc, PcControl::Hold);
    assert_eq!(ctrl.dest, Dest::None);
    assert_eq!(ctrl.mem.unwrap().write_back, Some(3));

    let ctrl = decode(stc_l_sr(15));
    assert_eq!(ctrl.sequence, Some(MultiCycleOp::StoreControl));
    assert_eq!(ctrl.mem.unwrap().data, Operand::Sr);

    let ctrl = decode(or_b_gbr(0x0F));
    assert_eq!(ctrl.sequence, Some(MultiCycleOp::ByteLogic(AluOp::Or)));
    assert_eq!(ctrl.mem.unwrap().offset, OffsetSel::Reg1);
}

#[test]
fn decode_system_forms() {
    assert!(decode(SLEEP).halt);
    assert!(decode(CLRMAC).clear_mac);
    assert_eq!(decode(SETT).alu, AluOp::SetT);
    assert_eq!(decode(CLRT).alu, AluOp::ClrT);
    assert_eq!(decode(0x020A).rb, REG_MACH); // STS MACH,R2
}
