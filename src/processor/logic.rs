use byteorder::ByteOrder;
use num_traits::FromPrimitive;

use crate::memory::{Memory, Storage};
use crate::{
    constants, immediate_value, jump_offset, Endian, Flags, GpFunct, LogicFunct, MathFunct,
    Opcode, Word,
};

use super::ExitCode;

pub(crate) enum TickResult {
    Next,
    Stop(ExitCode),
}

/// Control signals latched during decode: where the execute result goes.
/// Both destinations are addressed through the `rs` field; stores take the
/// byte address from the register it names.
pub(crate) struct Controls {
    pub write_dst_reg: bool,
    pub write_dst_mem: bool,
}

pub(crate) struct Decoded {
    pub opcode: Opcode,
    pub rs_idx: usize,
    pub rt_idx: usize,
    pub rd_idx: usize,
    pub funct: u16,
    pub imm: i16,
    pub imm_u: u16,
    pub jmp: i16,
    pub controls: Controls,
}

/// Splits an instruction word into its fields and latches the control
/// signals.
pub(crate) fn decode(instruction: Word) -> Decoded {
    let opcode_value = (instruction & constants::OPCODE_MASK) >> constants::OPCODE_OFFSET;
    // A 4-bit opcode space with 16 defined opcodes: every value decodes.
    let opcode = Opcode::from_u16(opcode_value).unwrap();

    let funct = (instruction & constants::FUNCT_MASK) >> constants::FUNCT_OFFSET;

    let controls = Controls {
        write_dst_reg: match opcode {
            Opcode::MATH
            | Opcode::LOGIC
            | Opcode::ADDI
            | Opcode::SUBI
            | Opcode::MULI
            | Opcode::DIVI
            | Opcode::SL
            | Opcode::SRL
            | Opcode::SRA
            | Opcode::LDI => true,
            Opcode::GP => match GpFunct::from_u16(funct) {
                Some(GpFunct::MOVE)
                | Some(GpFunct::LDR)
                | Some(GpFunct::CLR)
                | Some(GpFunct::LPC) => true,
                _ => false,
            },
            _ => false,
        },
        write_dst_mem: match opcode {
            Opcode::STI => true,
            Opcode::GP => funct == crate::enum_to_u16(GpFunct::STR),
            _ => false,
        },
    };

    Decoded {
        opcode,
        rs_idx: ((instruction & constants::RS_MASK) >> constants::RS_OFFSET) as usize,
        rt_idx: ((instruction & constants::RT_MASK) >> constants::RT_OFFSET) as usize,
        rd_idx: ((instruction & constants::RD_MASK) >> constants::RD_OFFSET) as usize,
        funct,
        imm: immediate_value(instruction),
        imm_u: (instruction & constants::IMMEDIATE_MASK) >> constants::IMMEDIATE_OFFSET,
        jmp: jump_offset(instruction),
        controls,
    }
}

fn alu(result: &mut Word, flags: &mut Flags, value: i16) {
    *result = value as Word;
    *flags = Flags::from_result(value);
}

fn divide(dividend: i16, divisor: i16) -> Result<i16, ExitCode> {
    if divisor == 0 {
        return Err(ExitCode::DivideByZero);
    }

    // wrapping_div so i16::MIN / -1 wraps like every other operation.
    Ok(dividend.wrapping_div(divisor))
}

fn math(funct: u16, a: i16, b: i16) -> Result<i16, ExitCode> {
    Ok(match MathFunct::from_u16(funct) {
        Some(MathFunct::ADDR) => a.wrapping_add(b),
        Some(MathFunct::SUBR) => a.wrapping_sub(b),
        Some(MathFunct::MULR) => a.wrapping_mul(b),
        Some(MathFunct::DIVR) => divide(a, b)?,
        Some(MathFunct::TWOS) => a.wrapping_neg(),
        // Unpopulated function encodings produce a zero result.
        None => 0,
    })
}

fn logical(funct: u16, a: Word, b: Word) -> Word {
    match LogicFunct::from_u16(funct) {
        Some(LogicFunct::NOT) => !a,
        Some(LogicFunct::AND) => a & b,
        Some(LogicFunct::OR) => a | b,
        Some(LogicFunct::XOR) => a ^ b,
        Some(LogicFunct::NOR) => !(a | b),
        None => 0,
    }
}

/// Shift amounts are the unsigned immediate modulo the word width.
fn shift_amount(imm_u: u16) -> u32 {
    u32::from(imm_u) % constants::WORD_WIDTH
}

/// Executes a decoded instruction and performs writeback.
pub(crate) fn execute(
    d: &Decoded,
    registers: &mut [Word; constants::REGISTER_COUNT],
    flags: &mut Flags,
    pc: &mut u16,
    data: &mut Memory,
) -> TickResult {
    let rs = registers[d.rs_idx];
    let rt = registers[d.rt_idx];
    let rd = registers[d.rd_idx];

    let mut result: Word = 0;

    match d.opcode {
        Opcode::BR => {
            // The rs field is the condition mask, not a register name.
            if flags.matches(d.rs_idx as u16) {
                *pc = pc.wrapping_add(d.imm as u16);
            }
        }

        Opcode::MATH => match math(d.funct, rt as i16, rd as i16) {
            Ok(value) => alu(&mut result, flags, value),
            Err(code) => return TickResult::Stop(code),
        },

        Opcode::LOGIC => {
            let value = logical(d.funct, rt, rd);
            alu(&mut result, flags, value as i16);
        }

        Opcode::ADDI => alu(&mut result, flags, (rs as i16).wrapping_add(d.imm)),

        Opcode::SUBI => alu(&mut result, flags, (rs as i16).wrapping_sub(d.imm)),

        Opcode::MULI => alu(&mut result, flags, (rs as i16).wrapping_mul(d.imm)),

        Opcode::DIVI => match divide(rs as i16, d.imm) {
            Ok(value) => alu(&mut result, flags, value),
            Err(code) => return TickResult::Stop(code),
        },

        Opcode::SL => {
            let value = rs << shift_amount(d.imm_u);
            alu(&mut result, flags, value as i16);
        }

        Opcode::SRL => {
            let value = rs >> shift_amount(d.imm_u);
            alu(&mut result, flags, value as i16);
        }

        Opcode::SRA => {
            let value = (rs as i16) >> shift_amount(d.imm_u);
            alu(&mut result, flags, value);
        }

        Opcode::GP => match GpFunct::from_u16(d.funct) {
            Some(GpFunct::MOVE) => {
                // The one non-ALU operation that participates in NZP.
                alu(&mut result, flags, rt as i16);
            }
            Some(GpFunct::LDR) => match data.read_half(rt) {
                Ok(value) => result = value,
                Err(()) => return TickResult::Stop(ExitCode::AddressOutOfRange),
            },
            Some(GpFunct::STR) => {
                result = rt;
            }
            Some(GpFunct::CLR) => {
                result = 0;
            }
            Some(GpFunct::LPC) => {
                result = *pc;
            }
            Some(GpFunct::SWP) => {
                registers.swap(d.rs_idx, d.rt_idx);
            }
            Some(GpFunct::RST) => {
                *pc = 0;
            }
            Some(GpFunct::HLT) => {
                return TickResult::Stop(ExitCode::Halted);
            }
            // A 3-bit function space with 8 defined functions: every value
            // decodes.
            None => unreachable!(),
        },

        Opcode::STI => {
            result = d.imm as Word;
        }

        Opcode::LDI => {
            result = d.imm as Word;
        }

        Opcode::SAVE => {
            let base = pc.wrapping_add(d.jmp as u16);
            match data.borrow_slice_mut(base, constants::FRAME_BYTES) {
                Ok(frame) => Endian::write_u16_into(&registers[..], frame),
                Err(()) => return TickResult::Stop(ExitCode::AddressOutOfRange),
            }
        }

        Opcode::REST => {
            let base = pc.wrapping_add(d.jmp as u16);
            match data.borrow_slice(base, constants::FRAME_BYTES) {
                Ok(frame) => Endian::read_u16_into(frame, &mut registers[..]),
                Err(()) => return TickResult::Stop(ExitCode::AddressOutOfRange),
            }
        }

        Opcode::JMP => {
            *pc = pc.wrapping_add(d.jmp as u16);
        }
    }

    if d.controls.write_dst_reg {
        registers[d.rs_idx] = result;
    }

    if d.controls.write_dst_mem && data.write_half(rs, result).is_err() {
        return TickResult::Stop(ExitCode::AddressOutOfRange);
    }

    TickResult::Next
}
