//! ALU bitwise, extension, and T-bit operations.

use super::AluResult;
use crate::core::pipeline::signals::AluOp;

/// Executes a logic, data-movement, or T-bit operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a logic variant).
/// * `x`  - Destination-side operand (`Rn`).
/// * `y`  - Source-side operand (`Rm` or immediate).
/// * `t`  - Incoming T flag, read by `MOVT`.
///
/// # Returns
///
/// The result and T update. `TST` returns `x` unchanged as the value.
pub fn execute(op: AluOp, x: u32, y: u32, t: bool) -> AluResult {
    match op {
        AluOp::Pass => AluResult::value(y),
        AluOp::And => AluResult::value(x & y),
        AluOp::Or => AluResult::value(x | y),
        AluOp::Xor => AluResult::value(x ^ y),
        AluOp::Not => AluResult::value(!y),
        AluOp::Tst => AluResult::with_t(x, x & y == 0),
        AluOp::ExtsB => AluResult::value(y as u8 as i8 as i32 as u32),
        AluOp::ExtsW => AluResult::value(y as u16 as i16 as i32 as u32),
        AluOp::ExtuB => AluResult::value(y & 0xFF),
        AluOp::ExtuW => AluResult::value(y & 0xFFFF),
        AluOp::SwapB => {
            let low = ((y & 0xFF) << 8) | ((y >> 8) & 0xFF);
            AluResult::value((y & 0xFFFF_0000) | low)
        }
        AluOp::SwapW => AluResult::value(y.rotate_left(16)),
        // Middle 32 bits of the 64-bit concatenation Rm:Rn.
        AluOp::Xtrct => AluResult::value((y << 16) | (x >> 16)),
        AluOp::MovT => AluResult::value(u32::from(t)),
        AluOp::SetT => AluResult::with_t(x, true),
        AluOp::ClrT => AluResult::with_t(x, false),
        _ => AluResult::default(),
    }
}
