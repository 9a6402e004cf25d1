//! # Status Register Tests

use shpipe_core::common::constants::SR_WRITABLE_MASK;
use shpipe_core::core::arch::StatusRegister;

#[test]
fn test_sr_resets_clear() {
    let sr = StatusRegister::new();
    assert_eq!(sr.raw(), 0);
    assert!(!sr.t());
}

#[test]
fn test_sr_set_t_only_touches_bit_zero() {
    let mut sr = StatusRegister::new();
    sr.set_raw(0xF0);
    sr.set_t(true);
    assert_eq!(sr.raw(), 0xF1);
    sr.set_t(false);
    assert_eq!(sr.raw(), 0xF0);
}

#[test]
fn test_sr_set_raw_masks_reserved_bits() {
    let mut sr = StatusRegister::new();
    sr.set_raw(u32::MAX);
    assert_eq!(sr.raw(), SR_WRITABLE_MASK);
    assert!(sr.t() && sr.s() && sr.q() && sr.m());
    assert_eq!(sr.imask(), 0xF);
}

#[test]
fn test_sr_imask_field() {
    let mut sr = StatusRegister::new();
    sr.set_raw(0x0000_00A0);
    assert_eq!(sr.imask(), 0xA);
    assert!(!sr.q());
}
