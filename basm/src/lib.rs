//! Assembler for the [brisc](../brisc/index.html) processor.
//!
//! The main entry point is [`assemble`](fn.assemble.html), which accepts a
//! program written in BRISC assembly and produces the machine-code image
//! together with a [`SymbolTable`](type.SymbolTable.html) mapping each label
//! to the index of the instruction it precedes. The image is a contiguous
//! sequence of big-endian 16-bit words, two bytes per instruction, ready to
//! be handed to [`Processor::load_text`](../brisc/struct.Processor.html#method.load_text).
//!
//! Translation happens in two passes. The first pass lowers each source
//! line into an encoding slot, leaving label operands pending; the second
//! pass patches every pending slot with a PC-relative byte offset. Parsing
//! is implemented with [pest].
//!
//! # BRISC Assembly Language
//!
//! One instruction per line. Comments start with a hash symbol `#` and
//! continue to the end of the line. A label is an identifier followed by a
//! colon, standing on its own line or in front of an instruction; it names
//! the instruction that follows it.
//!
//! Registers are written `$r0` through `$r7`. Immediates are signed
//! integers in decimal or with a standard `0x`/`0o`/`0b` radix prefix.
//! Operands may be separated by commas, whitespace is enough.
//!
//! Quick reference for all available mnemonics:
//!
//! Mnemonic    | Short Description                          | Syntax
//! ------------|--------------------------------------------|----------------------
//! `nop`       | No-op                                      | `nop`
//! `br[n][z][p]` | Branch on any of the named flags         | `brnz target`
//! `addr`      | Add                                        | `addr rs, rt, rd`
//! `subr`      | Subtract                                   | `subr rs, rt, rd`
//! `mulr`      | Multiply                                   | `mulr rs, rt, rd`
//! `divr`      | Divide                                     | `divr rs, rt, rd`
//! `twos`      | Two's complement                           | `twos rs, rt`
//! `not`       | Bitwise Not                                | `not rs, rt`
//! `and`       | Bitwise And                                | `and rs, rt, rd`
//! `or`        | Bitwise Or                                 | `or rs, rt, rd`
//! `xor`       | Bitwise Xor                                | `xor rs, rt, rd`
//! `nor`       | Bitwise Nor                                | `nor rs, rt, rd`
//! `addi`      | Add immediate                              | `addi rs, value`
//! `subi`      | Subtract immediate                         | `subi rs, value`
//! `muli`      | Multiply immediate                         | `muli rs, value`
//! `divi`      | Divide immediate                           | `divi rs, value`
//! `sl`        | Shift left                                 | `sl rs, value`
//! `srl`       | Shift right logical                        | `srl rs, value`
//! `sra`       | Shift right arithmetic                     | `sra rs, value`
//! `move`      | Copy register                              | `move rs, rt`
//! `ldr`       | Load from data memory                      | `ldr rs, rt`
//! `str`       | Store to data memory                       | `str rs, rt`
//! `clr`       | Clear register                             | `clr rs`
//! `lpc`       | Load program counter                       | `lpc rs`
//! `swp`       | Swap registers                             | `swp rs, rt`
//! `rst`       | Reset program counter                      | `rst`
//! `hlt`       | Halt                                       | `hlt`
//! `sti`       | Store immediate                            | `sti rs, value`
//! `ldi`       | Load immediate                             | `ldi rs, value`
//! `save`      | Save register file                         | `save target`
//! `rest`      | Restore register file                      | `rest target`
//! `jmp`       | Jump                                       | `jmp target`
//!
//! Branch and jump targets are labels or literal byte offsets, relative to
//! the instruction *after* the branch. R-shape instructions may leave
//! trailing registers off; the missing fields encode as `$r0`.
//!
//! [pest]: https://docs.rs/pest/

mod error;
mod instructions;
mod int_util;
mod labels;
mod mnemonics;
mod parser;


use std::collections::HashMap;

use log::{debug, trace};
use pest::iterators::Pair;
use pest::Parser;

use parser::BasmParser;

pub use error::{Error, Result};
pub use parser::Rule;

/// Maps a label to the index of the instruction it precedes.
pub type SymbolTable = HashMap<String, u32>;

/// Translates BRISC assembly into a machine-code image.
///
/// The returned image is `2 * instruction_count` bytes long. Assembling the
/// same source twice produces the identical image.
///
/// # Errors
/// Assembly is all-or-nothing; the first offending line aborts the
/// translation.
pub fn assemble(input: &str) -> Result<(Vec<u8>, SymbolTable)> {
    debug!("assembly started ({} bytes of source)", input.len());

    let program = parse(input)?;
    let (instr, labels, lines) = instructions::process_instructions(program)?;
    debug!(
        "first pass complete: {} instructions, {} labels",
        instr.len(),
        labels.len()
    );
    trace!("label table: {:?}", labels);

    let image = instructions::assemble_instructions(&instr, &labels, &lines)?;
    debug!("linking complete: {} bytes of text image", image.len());

    let symbols = labels
        .into_iter()
        .map(|(name, index)| (name.to_owned(), index))
        .collect();

    Ok((image, symbols))
}

fn parse(input: &str) -> Result<Pair<Rule>> {
    let mut pairs = BasmParser::parse(Rule::program, input)?;
    Ok(pairs.next().unwrap())
}
