use byteorder::ByteOrder;
use matches::debug_assert_matches;
use num_traits::FromPrimitive;
use pest::iterators::Pair;
use pest::Span;

use brisc::*;

use crate::error::{Error, Result};
use crate::int_util::process_int;
use crate::labels::{process_labeled_statement, LabelMap};
use crate::mnemonics::{self, Encoding};
use crate::parser::Rule;

pub type InstrVec<'i> = Vec<ParsedInstruction<'i>>;

// Value ranges of the signed 9-bit immediate field and the signed 12-bit
// offset field. Immediates additionally admit the unsigned reading of the
// same 9 bits, so `0x1FF` assembles and sign-extends at runtime.
const IMMEDIATE_MIN: i64 = -(1 << (constants::IMMEDIATE_WIDTH - 1));
const IMMEDIATE_MAX: i64 = (1 << (constants::IMMEDIATE_WIDTH - 1)) - 1;
const IMMEDIATE_MAX_UNSIGNED: i64 = (1 << constants::IMMEDIATE_WIDTH) - 1;
const JUMP_MIN: i64 = -(1 << (constants::JUMP_WIDTH - 1));
const JUMP_MAX: i64 = (1 << (constants::JUMP_WIDTH - 1)) - 1;

#[derive(Debug, PartialEq)]
pub enum JumpTarget<'i> {
    Offset(i16),
    Label(Span<'i>),
}

/// One encoding slot. Slots with a pending label keep the label's span so
/// the linking pass can report against the right line.
#[derive(Debug, PartialEq)]
pub enum ParsedInstruction<'i> {
    Complete(Word),

    Branch {
        mask: u16,
        target: JumpTarget<'i>,
    },

    Jump {
        opcode: Opcode,
        target: JumpTarget<'i>,
    },
}

/// Pass 1: walks the parsed program, collecting encoding slots, the label
/// table and the source line of every slot.
pub fn process_instructions(
    program: Pair<Rule>,
) -> Result<(InstrVec, LabelMap, Vec<usize>)> {
    debug_assert_matches!(program.as_rule(), Rule::program);

    let mut instructions = Vec::new();
    let mut labels = LabelMap::new();
    let mut lines = Vec::new();

    for statement in program.into_inner() {
        if statement.as_rule() != Rule::statement {
            continue;
        }

        let line = statement.as_span().start_pos().line_col().0;
        let len = instructions.len() as u32;
        process_labeled_statement(statement, &mut labels, len, |pair| {
            lines.push(line);
            process_instruction(pair, &mut instructions)
        })?;
    }

    Ok((instructions, labels, lines))
}

fn process_instruction<'i>(pair: Pair<'i, Rule>, instr: &mut InstrVec<'i>) -> Result<()> {
    debug_assert_matches!(pair.as_rule(), Rule::instruction);

    let mut pairs = pair.into_inner();
    let mnemonic = pairs.next().unwrap();
    let span = mnemonic.as_span();
    let name = mnemonic.as_str().to_lowercase();
    let operands: Vec<Pair<'i, Rule>> = pairs.collect();

    let encoding =
        mnemonics::lookup(&name).ok_or_else(|| Error::unknown_mnemonic(&span, &name))?;

    match encoding {
        Encoding::Nop => {
            expect_operands(&span, &operands, 0)?;
            instr.push(ParsedInstruction::Complete(make_branch_instruction(0, 0)));
        }

        Encoding::Register { opcode, funct } => {
            // Up to three registers, read as rs, rt, rd; missing tail
            // fields encode as register zero.
            if operands.len() > 3 {
                return Err(Error::internal_encoding(&span));
            }
            let mut ids = [RegisterId::R0; 3];
            for (i, operand) in operands.iter().enumerate() {
                ids[i] = process_register(operand)?;
            }
            instr.push(ParsedInstruction::Complete(make_r_instruction(
                opcode, ids[0], ids[1], ids[2], funct,
            )));
        }

        Encoding::Immediate { opcode } => {
            expect_operands(&span, &operands, 2)?;
            let rs = process_register(&operands[0])?;
            let immediate = process_immediate(&operands[1])?;
            instr.push(ParsedInstruction::Complete(make_i_instruction(
                opcode, rs, immediate,
            )));
        }

        Encoding::Branch { mask } => {
            expect_operands(&span, &operands, 1)?;
            let target = process_jump_target(&operands[0], IMMEDIATE_MIN, IMMEDIATE_MAX)?;
            instr.push(ParsedInstruction::Branch { mask, target });
        }

        Encoding::Jump { opcode } => {
            expect_operands(&span, &operands, 1)?;
            let target = process_jump_target(&operands[0], JUMP_MIN, JUMP_MAX)?;
            instr.push(ParsedInstruction::Jump { opcode, target });
        }
    }

    Ok(())
}

/// A wrong operand count leaves the slot's fragments summing to something
/// other than 16 bits, which is an encoding failure.
fn expect_operands(span: &Span, operands: &[Pair<Rule>], count: usize) -> Result<()> {
    if operands.len() == count {
        Ok(())
    } else {
        Err(Error::internal_encoding(span))
    }
}

fn operand_inner<'i>(pair: &Pair<'i, Rule>) -> Pair<'i, Rule> {
    pair.clone().into_inner().next().unwrap()
}

fn process_register(pair: &Pair<Rule>) -> Result<RegisterId> {
    let inner = operand_inner(pair);
    let span = inner.as_span();
    let token = inner.as_str();

    if inner.as_rule() != Rule::register {
        return Err(Error::bad_register(&span, token));
    }

    token
        .to_lowercase()
        .strip_prefix("$r")
        .and_then(|digits| digits.parse::<usize>().ok())
        .filter(|index| *index < constants::REGISTER_COUNT)
        .and_then(RegisterId::from_usize)
        .ok_or_else(|| Error::bad_register(&span, token))
}

fn process_immediate(pair: &Pair<Rule>) -> Result<i16> {
    let inner = operand_inner(pair);
    let span = inner.as_span();

    if inner.as_rule() != Rule::int {
        return Err(Error::bad_immediate(&span, inner.as_str()));
    }

    let value = process_int(inner)?;
    if value < IMMEDIATE_MIN || value > IMMEDIATE_MAX_UNSIGNED {
        return Err(Error::bad_immediate(&span, span.as_str()));
    }

    Ok(value as i16)
}

fn process_jump_target<'i>(pair: &Pair<'i, Rule>, min: i64, max: i64) -> Result<JumpTarget<'i>> {
    let inner = operand_inner(pair);
    let span = inner.as_span();

    match inner.as_rule() {
        Rule::int => {
            let offset = process_int(inner)?;
            if offset < min || offset > max {
                return Err(Error::offset_out_of_range(&span, span.as_str(), offset));
            }
            Ok(JumpTarget::Offset(offset as i16))
        }
        Rule::identifier => Ok(JumpTarget::Label(span)),
        _ => Err(Error::bad_immediate(&span, span.as_str())),
    }
}

/// Pass 2: resolves a pending label to a PC-relative byte offset. The
/// processor increments the program counter before executing, so the
/// distance is measured from the instruction after the branch.
fn resolve_jump_target(
    labels: &LabelMap,
    target: &JumpTarget,
    current_instr: usize,
    min: i64,
    max: i64,
) -> Result<i16> {
    match target {
        JumpTarget::Offset(offset) => Ok(*offset),
        JumpTarget::Label(span) => {
            let name = span.as_str();
            let target_line = labels
                .get(name)
                .ok_or_else(|| Error::unknown_label(span, name))?;

            let byte_offset =
                i64::from(constants::WORD_BYTES) * (i64::from(*target_line) - (current_instr as i64 + 1));
            if byte_offset < min || byte_offset > max {
                return Err(Error::offset_out_of_range(span, name, byte_offset));
            }

            Ok(byte_offset as i16)
        }
    }
}

fn finalize_instruction(
    labels: &LabelMap,
    instr: &ParsedInstruction,
    current_instr: usize,
    line: usize,
) -> Result<Word> {
    Ok(match *instr {
        ParsedInstruction::Complete(word) => word,

        ParsedInstruction::Branch { mask, ref target } => {
            let offset =
                resolve_jump_target(labels, target, current_instr, IMMEDIATE_MIN, IMMEDIATE_MAX)?;
            let word = make_branch_instruction(mask, offset);
            if immediate_value(word) != offset {
                return Err(Error::internal_encoding_at(line));
            }
            word
        }

        ParsedInstruction::Jump { opcode, ref target } => {
            let offset = resolve_jump_target(labels, target, current_instr, JUMP_MIN, JUMP_MAX)?;
            let word = make_j_instruction(opcode, offset);
            if jump_offset(word) != offset {
                return Err(Error::internal_encoding_at(line));
            }
            word
        }
    })
}

/// Pass 2 driver: links every slot and packs the final 16-bit words into
/// the byte image the processor fetches from.
pub fn assemble_instructions(
    instr: &[ParsedInstruction],
    labels: &LabelMap,
    lines: &[usize],
) -> Result<Vec<u8>> {
    let word_bytes = constants::WORD_BYTES as usize;
    let mut image = vec![0; instr.len() * word_bytes];

    for (i, pi) in instr.iter().enumerate() {
        let word = finalize_instruction(labels, pi, i, lines[i])?;
        let start = i * word_bytes;
        let end = start + word_bytes;
        Endian::write_u16(&mut image[start..end], word);
    }

    Ok(image)
}
