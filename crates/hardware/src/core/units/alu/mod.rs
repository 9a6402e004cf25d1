//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the 32-bit integer ALU used by the decode/precompute
//! phase. Every operation takes two operands and the incoming T flag, and
//! produces a result plus an optional new T flag (`None` leaves T untouched).
//!
//! Operands follow the assembler's two-address form: `x` is the destination
//! side (`Rn`) and `y` is the source side (`Rm` or an immediate). Unary
//! operations on `Rn` (`SHLL Rn`, `DT Rn`) read `x`; unary operations that move
//! `Rm` into `Rn` (`NOT`, `NEG`, `EXTU`, `SWAP`) read `y`.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add/Sub with carry and overflow, Neg, Dt, compares
//! - [`logic`]:      And, Or, Xor, Not, Tst, extends, swaps, T-bit moves
//! - [`shifts`]:     Shifts and rotates, with and without T

/// Integer arithmetic and comparison operations.
pub mod arithmetic;

/// Bitwise logical, extension, and T-bit operations.
pub mod logic;

/// Shift and rotate operations.
pub mod shifts;

use crate::core::pipeline::signals::AluOp;

/// Result of one ALU operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AluResult {
    /// 32-bit result value.
    pub value: u32,
    /// New T flag, or `None` when the operation leaves T unchanged.
    pub t: Option<bool>,
}

impl AluResult {
    /// A result that leaves T unchanged.
    pub const fn value(value: u32) -> Self {
        Self { value, t: None }
    }

    /// A result that also updates T.
    pub const fn with_t(value: u32, t: bool) -> Self {
        Self { value, t: Some(t) }
    }
}

/// Arithmetic Logic Unit (ALU) for integer operations.
#[derive(Debug, Clone, Copy)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform.
    /// * `x`  - Destination-side operand (`Rn`).
    /// * `y`  - Source-side operand (`Rm` or immediate).
    /// * `t`  - Incoming T flag.
    ///
    /// # Returns
    ///
    /// The result value and the T flag update, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use shpipe_core::core::units::alu::Alu;
    /// use shpipe_core::core::pipeline::signals::AluOp;
    ///
    /// // ADDC with carry out
    /// let r = Alu::execute(AluOp::AddC, 0xFFFF_FFFF, 1, false);
    /// assert_eq!(r.value, 0);
    /// assert_eq!(r.t, Some(true));
    ///
    /// // SHLL moves bit 31 into T
    /// let r = Alu::execute(AluOp::Shll, 0x8000_0001, 0, false);
    /// assert_eq!(r.value, 2);
    /// assert_eq!(r.t, Some(true));
    ///
    /// // MOV passes the source operand through
    /// assert_eq!(Alu::execute(AluOp::Pass, 7, 9, true).value, 9);
    /// ```
    pub fn execute(op: AluOp, x: u32, y: u32, t: bool) -> AluResult {
        match op {
            AluOp::Add
            | AluOp::AddC
            | AluOp::AddV
            | AluOp::Sub
            | AluOp::SubC
            | AluOp::SubV
            | AluOp::Neg
            | AluOp::NegC
            | AluOp::Dt
            | AluOp::CmpEq
            | AluOp::CmpHs
            | AluOp::CmpGe
            | AluOp::CmpHi
            | AluOp::CmpGt
            | AluOp::CmpPz
            | AluOp::CmpPl
            | AluOp::CmpStr => arithmetic::execute(op, x, y, t),

            AluOp::Shll
            | AluOp::Shlr
            | AluOp::Shar
            | AluOp::Rotl
            | AluOp::Rotr
            | AluOp::Rotcl
            | AluOp::Rotcr
            | AluOp::Shll2
            | AluOp::Shlr2
            | AluOp::Shll8
            | AluOp::Shlr8
            | AluOp::Shll16
            | AluOp::Shlr16 => shifts::execute(op, x, t),

            AluOp::Pass
            | AluOp::And
            | AluOp::Or
            | AluOp::Xor
            | AluOp::Not
            | AluOp::Tst
            | AluOp::ExtsB
            | AluOp::ExtsW
            | AluOp::ExtuB
            | AluOp::ExtuW
            | AluOp::SwapB
            | AluOp::SwapW
            | AluOp::Xtrct
            | AluOp::MovT
            | AluOp::SetT
            | AluOp::ClrT => logic::execute(op, x, y, t),
        }
    }
}
