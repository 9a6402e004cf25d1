//! ALU shift and rotate operations.
//!
//! All shifts in this ISA are by a fixed amount encoded in the opcode. The
//! single-bit forms move the bit shifted out into T; the 2/8/16-bit forms
//! leave T untouched. `SHAL` is the same operation as `SHLL`.

use super::AluResult;
use crate::core::pipeline::signals::AluOp;

/// Most significant bit of a 32-bit word.
const MSB: u32 = 1 << 31;

/// Executes a shift or rotate operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a shift variant).
/// * `x`  - The value to shift (`Rn`).
/// * `t`  - Incoming T flag, rotated in by `ROTCL` and `ROTCR`.
///
/// # Returns
///
/// The shifted value and the T update for the single-bit forms.
pub fn execute(op: AluOp, x: u32, t: bool) -> AluResult {
    let msb = x & MSB != 0;
    let lsb = x & 1 != 0;
    match op {
        AluOp::Shll => AluResult::with_t(x << 1, msb),
        AluOp::Shlr => AluResult::with_t(x >> 1, lsb),
        AluOp::Shar => AluResult::with_t(((x as i32) >> 1) as u32, lsb),
        AluOp::Rotl => AluResult::with_t(x.rotate_left(1), msb),
        AluOp::Rotr => AluResult::with_t(x.rotate_right(1), lsb),
        AluOp::Rotcl => AluResult::with_t((x << 1) | u32::from(t), msb),
        AluOp::Rotcr => AluResult::with_t((x >> 1) | (u32::from(t) << 31), lsb),
        AluOp::Shll2 => AluResult::value(x << 2),
        AluOp::Shlr2 => AluResult::value(x >> 2),
        AluOp::Shll8 => AluResult::value(x << 8),
        AluOp::Shlr8 => AluResult::value(x >> 8),
        AluOp::Shll16 => AluResult::value(x << 16),
        AluOp::Shlr16 => AluResult::value(x >> 16),
        _ => AluResult::default(),
    }
}
