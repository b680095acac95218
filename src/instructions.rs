use byteorder::ByteOrder;
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::ToPrimitive;

use crate::{constants, Endian, Word};

/// Processor instruction set.
///
/// Instruction Formats:
///
/// | Format   | Bits 15-12 | Bits 11-9 | Bits 8-6 | Bits 5-3 | Bits 2-0 |
/// |----------|------------|-----------|----------|----------|----------|
/// | R-Format | opcode     | rs        | rt       | rd       | funct    |
/// | I-Format | opcode     | rs        | imm      | imm      | imm      |
/// | J-Format | opcode     | offset    | offset   | offset   | offset   |
///
/// For branches (`BR`) the `rs` field does not name a register; it holds the
/// condition mask tested against the NZP flags (N = 4, Z = 2, P = 1).
#[derive(Clone, Copy, PartialEq, Eq, Debug, ToPrimitive, FromPrimitive)]
pub enum Opcode {
    /// Conditional branch, or no-op when the condition mask is empty.
    ///
    /// Format: `I`.
    /// Adds the immediate (a byte offset) to the already-incremented program
    /// counter when `mask & NZP != 0`. Leaves the flags untouched.
    BR,
    /// Arithmetic group.
    ///
    /// Format: `R`.
    /// Performs the operation selected by `funct` (see [`MathFunct`](enum.MathFunct.html))
    /// on `rt` and `rd`, writing the result to `rs` and setting the flags.
    MATH,
    /// Logic group.
    ///
    /// Format: `R`.
    /// Performs the operation selected by `funct` (see [`LogicFunct`](enum.LogicFunct.html))
    /// on `rt` and `rd`, writing the result to `rs` and setting the flags.
    LOGIC,
    /// Add immediate.
    ///
    /// Format: `I`.
    /// Sets `rs` to `rs + extend(imm)` and sets the flags.
    ADDI,
    /// Subtract immediate.
    ///
    /// Format: `I`.
    /// Sets `rs` to `rs - extend(imm)` and sets the flags.
    SUBI,
    /// Multiply immediate.
    ///
    /// Format: `I`.
    /// Sets `rs` to the low 16 bits of `rs * extend(imm)` and sets the flags.
    MULI,
    /// Divide immediate.
    ///
    /// Format: `I`.
    /// Sets `rs` to `rs / extend(imm)` (truncated) and sets the flags.
    /// A zero immediate faults the processor.
    DIVI,
    /// Shift left.
    ///
    /// Format: `I`.
    /// Sets `rs` to `rs << (imm % 16)`, filling with zeros. The shift amount
    /// is the unsigned immediate.
    SL,
    /// Shift right logical.
    ///
    /// Format: `I`.
    /// Sets `rs` to `rs >> (imm % 16)`, filling with zeros.
    SRL,
    /// Shift right arithmetic.
    ///
    /// Format: `I`.
    /// Sets `rs` to `rs >> (imm % 16)`, filling with the sign bit.
    SRA,
    /// General-purpose group.
    ///
    /// Format: `R`.
    /// Moves, loads, stores, swaps, halts and the like, selected by `funct`
    /// (see [`GpFunct`](enum.GpFunct.html)).
    GP,
    /// Store immediate.
    ///
    /// Format: `I`.
    /// Writes `extend(imm)` to data memory at the byte address held in `rs`.
    STI,
    /// Load immediate.
    ///
    /// Format: `I`.
    /// Sets `rs` to `extend(imm)`. Does not touch the flags.
    LDI,
    /// Save the register file.
    ///
    /// Format: `J`.
    /// Writes `R0..R7` as a 16-byte frame to data memory at
    /// `PC + extend(offset)`, where `PC` has already been incremented.
    SAVE,
    /// Restore the register file.
    ///
    /// Format: `J`.
    /// Reads a 16-byte frame from data memory at `PC + extend(offset)` back
    /// into `R0..R7`.
    REST,
    /// Unconditional jump.
    ///
    /// Format: `J`.
    /// Adds the sign-extended offset to the already-incremented program
    /// counter.
    JMP,
}

/// Functions of the [`Opcode::MATH`](enum.Opcode.html#variant.MATH) group.
#[derive(Clone, Copy, PartialEq, Eq, FromPrimitive, ToPrimitive, Debug)]
pub enum MathFunct {
    /// Add. Sets `rs` to `rt + rd`, wrapping.
    ADDR,
    /// Subtract. Sets `rs` to `rt - rd`, wrapping.
    SUBR,
    /// Multiply. Sets `rs` to the low 16 bits of `rt * rd`.
    MULR,
    /// Divide. Sets `rs` to `rt / rd`, truncating towards zero.
    /// A zero divisor faults the processor.
    DIVR,
    /// Two's complement. Sets `rs` to `-rt`.
    TWOS,
}

/// Functions of the [`Opcode::LOGIC`](enum.Opcode.html#variant.LOGIC) group.
#[derive(Clone, Copy, PartialEq, Eq, FromPrimitive, ToPrimitive, Debug)]
pub enum LogicFunct {
    /// Sets `rs` to `~rt`.
    NOT,
    /// Sets `rs` to `rt & rd`.
    AND,
    /// Sets `rs` to `rt | rd`.
    OR,
    /// Sets `rs` to `rt ^ rd`.
    XOR,
    /// Sets `rs` to `~(rt | rd)`.
    NOR,
}

/// Functions of the [`Opcode::GP`](enum.Opcode.html#variant.GP) group.
#[derive(Clone, Copy, PartialEq, Eq, FromPrimitive, ToPrimitive, Debug)]
pub enum GpFunct {
    /// Copies `rt` to `rs`. The only non-ALU operation that sets the flags.
    MOVE,
    /// Loads the 16-bit value at data address `rt` into `rs`.
    LDR,
    /// Stores `rt` to data memory at the byte address held in `rs`.
    STR,
    /// Sets `rs` to zero.
    CLR,
    /// Loads the (incremented) program counter into `rs`.
    LPC,
    /// Swaps `rs` and `rt`.
    SWP,
    /// Resets the program counter to zero.
    RST,
    /// Halts the processor.
    HLT,
}

/// The eight general-purpose registers.
#[derive(Clone, Copy, PartialEq, Eq, FromPrimitive, ToPrimitive, Debug)]
pub enum RegisterId {
    R0,
    R1,
    R2,
    R3,
    R4,
    R5,
    R6,
    R7,
}

#[inline]
pub fn enum_to_u16<T: ToPrimitive + Copy>(val: T) -> u16 {
    val.to_u16().unwrap()
}

macro_rules! impl_enum_display {
    ($e:ty) => {
        impl std::fmt::Display for $e {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                std::fmt::Debug::fmt(self, f)
            }
        }
    };
}

impl_enum_display!(Opcode);
impl_enum_display!(MathFunct);
impl_enum_display!(LogicFunct);
impl_enum_display!(GpFunct);
impl_enum_display!(RegisterId);

#[inline]
pub fn register_index(id: RegisterId) -> usize {
    enum_to_u16(id) as usize
}

/// Constructs an R-format instruction.
#[inline]
pub fn make_r_instruction(
    oc: Opcode,
    rs: RegisterId,
    rt: RegisterId,
    rd: RegisterId,
    funct: u16,
) -> Word {
    ((enum_to_u16(oc) << constants::OPCODE_OFFSET) & constants::OPCODE_MASK)
        | ((enum_to_u16(rs) << constants::RS_OFFSET) & constants::RS_MASK)
        | ((enum_to_u16(rt) << constants::RT_OFFSET) & constants::RT_MASK)
        | ((enum_to_u16(rd) << constants::RD_OFFSET) & constants::RD_MASK)
        | ((funct << constants::FUNCT_OFFSET) & constants::FUNCT_MASK)
}

/// Constructs a MATH instruction.
pub fn make_math_instruction(
    funct: MathFunct,
    rs: RegisterId,
    rt: RegisterId,
    rd: RegisterId,
) -> Word {
    make_r_instruction(Opcode::MATH, rs, rt, rd, enum_to_u16(funct))
}

/// Constructs a MATH instruction.
#[macro_export]
macro_rules! instr_math {
    ($funct:ident, $rs:ident, $rt:ident, $rd:ident) => {
        make_math_instruction(
            MathFunct::$funct,
            RegisterId::$rs,
            RegisterId::$rt,
            RegisterId::$rd,
        )
    };
}

/// Constructs a LOGIC instruction.
pub fn make_logic_instruction(
    funct: LogicFunct,
    rs: RegisterId,
    rt: RegisterId,
    rd: RegisterId,
) -> Word {
    make_r_instruction(Opcode::LOGIC, rs, rt, rd, enum_to_u16(funct))
}

/// Constructs a LOGIC instruction.
#[macro_export]
macro_rules! instr_logic {
    ($funct:ident, $rs:ident, $rt:ident, $rd:ident) => {
        make_logic_instruction(
            LogicFunct::$funct,
            RegisterId::$rs,
            RegisterId::$rt,
            RegisterId::$rd,
        )
    };
}

/// Constructs a GP instruction. The `rd` field is never named by the
/// general-purpose group and encodes as zero.
pub fn make_gp_instruction(funct: GpFunct, rs: RegisterId, rt: RegisterId) -> Word {
    make_r_instruction(Opcode::GP, rs, rt, RegisterId::R0, enum_to_u16(funct))
}

/// Constructs a GP instruction.
#[macro_export]
macro_rules! instr_gp {
    ($funct:ident, $rs:ident, $rt:ident) => {
        make_gp_instruction(GpFunct::$funct, RegisterId::$rs, RegisterId::$rt)
    };
}

/// Constructs an I-format instruction. The immediate is truncated to its
/// 9-bit field.
#[inline]
pub fn make_i_instruction(oc: Opcode, rs: RegisterId, immediate: i16) -> Word {
    ((enum_to_u16(oc) << constants::OPCODE_OFFSET) & constants::OPCODE_MASK)
        | ((enum_to_u16(rs) << constants::RS_OFFSET) & constants::RS_MASK)
        | (((immediate as Word) << constants::IMMEDIATE_OFFSET) & constants::IMMEDIATE_MASK)
}

/// Constructs an I-format instruction.
#[macro_export]
macro_rules! instr_i {
    ($opcode:ident, $rs:ident, $imm:expr) => {
        make_i_instruction(Opcode::$opcode, RegisterId::$rs, $imm)
    };
}

/// Constructs a branch instruction from a condition mask (N = 4, Z = 2,
/// P = 1) and a PC-relative byte offset.
#[inline]
pub fn make_branch_instruction(mask: u16, offset: i16) -> Word {
    ((enum_to_u16(Opcode::BR) << constants::OPCODE_OFFSET) & constants::OPCODE_MASK)
        | ((mask << constants::RS_OFFSET) & constants::RS_MASK)
        | (((offset as Word) << constants::IMMEDIATE_OFFSET) & constants::IMMEDIATE_MASK)
}

/// Constructs a branch instruction.
#[macro_export]
macro_rules! instr_br {
    ($mask:expr, $offset:expr) => {
        make_branch_instruction($mask, $offset)
    };
}

/// Constructs a J-format instruction. The offset is truncated to its 12-bit
/// field.
#[inline]
pub fn make_j_instruction(oc: Opcode, offset: i16) -> Word {
    ((enum_to_u16(oc) << constants::OPCODE_OFFSET) & constants::OPCODE_MASK)
        | (((offset as Word) << constants::JUMP_OFFSET) & constants::JUMP_MASK)
}

/// Constructs a J-format instruction.
#[macro_export]
macro_rules! instr_j {
    ($opcode:ident, $offset:expr) => {
        make_j_instruction(Opcode::$opcode, $offset)
    };
}

/// Constructs a no-op: a branch whose condition mask is empty.
#[macro_export]
macro_rules! nop {
    () => {
        make_branch_instruction(0, 0)
    };
}

/// Extracts the sign-extended 9-bit immediate field.
#[inline]
pub fn immediate_value(instruction: Word) -> i16 {
    let raw = (instruction & constants::IMMEDIATE_MASK) >> constants::IMMEDIATE_OFFSET;
    if raw & constants::IMMEDIATE_SIGN_MASK != 0 {
        (raw | constants::IMMEDIATE_EXTENSION) as i16
    } else {
        raw as i16
    }
}

/// Extracts the sign-extended 12-bit offset field.
#[inline]
pub fn jump_offset(instruction: Word) -> i16 {
    let raw = (instruction & constants::JUMP_MASK) >> constants::JUMP_OFFSET;
    if raw & constants::JUMP_SIGN_MASK != 0 {
        (raw | constants::JUMP_EXTENSION) as i16
    } else {
        raw as i16
    }
}

/// Packs instruction words into the byte image the processor fetches from.
pub fn image_from_words(words: &[Word]) -> Vec<u8> {
    let mut image = vec![0; words.len() * constants::WORD_BYTES as usize];
    Endian::write_u16_into(words, &mut image[..]);
    image
}
