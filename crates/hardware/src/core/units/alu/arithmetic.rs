//! ALU arithmetic operations.
//!
//! Addition and subtraction in their plain, carry (`ADDC`/`SUBC`/`NEGC`), and
//! overflow-detecting (`ADDV`/`SUBV`) forms, the decrement-and-test `DT`, and
//! the `CMP/*` family, which only produce a T flag.

use super::AluResult;
use crate::core::pipeline::signals::AluOp;

/// Executes an arithmetic or compare operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be an arithmetic variant).
/// * `x`  - Destination-side operand (`Rn`).
/// * `y`  - Source-side operand (`Rm` or immediate).
/// * `t`  - Incoming T flag, consumed by the carry forms.
///
/// # Returns
///
/// The result and T update. Compares return `x` unchanged as the value.
pub fn execute(op: AluOp, x: u32, y: u32, t: bool) -> AluResult {
    let (sx, sy) = (x as i32, y as i32);
    match op {
        AluOp::Add => AluResult::value(x.wrapping_add(y)),
        AluOp::AddC => {
            let (partial, c1) = x.overflowing_add(y);
            let (sum, c2) = partial.overflowing_add(u32::from(t));
            AluResult::with_t(sum, c1 || c2)
        }
        AluOp::AddV => {
            let (sum, overflow) = sx.overflowing_add(sy);
            AluResult::with_t(sum as u32, overflow)
        }
        AluOp::Sub => AluResult::value(x.wrapping_sub(y)),
        AluOp::SubC => {
            let (partial, b1) = x.overflowing_sub(y);
            let (diff, b2) = partial.overflowing_sub(u32::from(t));
            AluResult::with_t(diff, b1 || b2)
        }
        AluOp::SubV => {
            let (diff, overflow) = sx.overflowing_sub(sy);
            AluResult::with_t(diff as u32, overflow)
        }
        AluOp::Neg => AluResult::value(0_u32.wrapping_sub(y)),
        AluOp::NegC => {
            let (partial, b1) = 0_u32.overflowing_sub(y);
            let (diff, b2) = partial.overflowing_sub(u32::from(t));
            AluResult::with_t(diff, b1 || b2)
        }
        AluOp::Dt => {
            let dec = x.wrapping_sub(1);
            AluResult::with_t(dec, dec == 0)
        }
        AluOp::CmpEq => AluResult::with_t(x, x == y),
        AluOp::CmpHs => AluResult::with_t(x, x >= y),
        AluOp::CmpGe => AluResult::with_t(x, sx >= sy),
        AluOp::CmpHi => AluResult::with_t(x, x > y),
        AluOp::CmpGt => AluResult::with_t(x, sx > sy),
        AluOp::CmpPz => AluResult::with_t(x, sx >= 0),
        AluOp::CmpPl => AluResult::with_t(x, sx > 0),
        AluOp::CmpStr => {
            let eq = x ^ y;
            let any_byte_equal = eq.to_be_bytes().contains(&0);
            AluResult::with_t(x, any_byte_equal)
        }
        _ => AluResult::default(),
    }
}
