mod logic;

use std::error::Error as StdError;
use std::fmt;

use log::trace;

use crate::memory::{Memory, Storage};
use crate::{constants, register_index, Flags, RegisterId, Word};

use self::logic::TickResult;

/// Why the processor stopped.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum ExitCode {
    /// The `hlt` function was executed (normal shutdown).
    Halted,
    /// An integer division by zero was attempted.
    DivideByZero,
    /// A memory access reached past the end of a 256-byte space.
    AddressOutOfRange,
}

/// Errors raised while seeding the processor, before execution starts.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The image does not fit into a 256-byte memory.
    ImageTooLarge(usize),
    /// A text image must be a whole number of 16-bit words.
    UnalignedImage(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::ImageTooLarge(len) => write!(
                f,
                "image of {} bytes exceeds the {}-byte memory",
                len,
                constants::MEMORY_BYTES
            ),
            Error::UnalignedImage(len) => write!(
                f,
                "text image of {} bytes is not a multiple of {}",
                len,
                constants::WORD_BYTES
            ),
        }
    }
}

impl StdError for Error {}

/// A copy of the full architectural state, taken between steps.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Snapshot {
    pub pc: u16,
    pub ir: Word,
    pub nzp: u16,
    pub registers: [Word; constants::REGISTER_COUNT],
    pub text_memory: Vec<u8>,
    pub data_memory: Vec<u8>,
    pub cycle: u64,
    pub running: bool,
    pub exit_code: Option<ExitCode>,
}

/// The BRISC processor.
///
/// Owns the whole architectural state: the register file, the program
/// counter, the instruction register, the NZP flags and both 256-byte
/// memories. The host seeds state through [`load_text`], [`load_data`] and
/// [`write_register`], then drives execution one instruction at a time with
/// [`step`] or to completion with [`run`].
///
/// [`load_text`]: #method.load_text
/// [`load_data`]: #method.load_data
/// [`write_register`]: #method.write_register
/// [`step`]: #method.step
/// [`run`]: #method.run
pub struct Processor {
    registers: [Word; constants::REGISTER_COUNT],
    pc: u16,
    ir: Word,
    flags: Flags,
    cycle: u64,
    state: Option<ExitCode>,
    text: Memory,
    data: Memory,
}

impl Default for Processor {
    fn default() -> Processor {
        Processor::new()
    }
}

impl Processor {
    /// Constructs a processor with zeroed state, ready to run.
    pub fn new() -> Processor {
        Processor {
            registers: [0; constants::REGISTER_COUNT],
            pc: 0,
            ir: 0,
            flags: Flags::default(),
            cycle: 0,
            state: None,
            text: Memory::new(constants::MEMORY_BYTES),
            data: Memory::new(constants::MEMORY_BYTES),
        }
    }

    /// Replaces the text memory with `image`, zero-filling the remainder.
    ///
    /// # Errors
    /// The image must fit into 256 bytes and hold whole instruction words.
    pub fn load_text(&mut self, image: &[u8]) -> Result<(), Error> {
        if image.len() % constants::WORD_BYTES as usize != 0 {
            return Err(Error::UnalignedImage(image.len()));
        }
        Processor::load(&mut self.text, image)
    }

    /// Replaces the data memory with `image`, zero-filling the remainder.
    ///
    /// # Errors
    /// The image must fit into 256 bytes.
    pub fn load_data(&mut self, image: &[u8]) -> Result<(), Error> {
        Processor::load(&mut self.data, image)
    }

    fn load(memory: &mut Memory, image: &[u8]) -> Result<(), Error> {
        if image.len() > constants::MEMORY_BYTES as usize {
            return Err(Error::ImageTooLarge(image.len()));
        }
        memory.load(image);
        Ok(())
    }

    pub fn register(&self, id: RegisterId) -> Word {
        self.registers[register_index(id)]
    }

    pub fn registers(&self) -> &[Word; constants::REGISTER_COUNT] {
        &self.registers
    }

    /// Seeds a register before execution.
    pub fn write_register(&mut self, id: RegisterId, value: Word) {
        self.registers[register_index(id)] = value;
    }

    pub fn pc(&self) -> u16 {
        self.pc
    }

    pub fn ir(&self) -> Word {
        self.ir
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// `None` while running, otherwise the recorded exit code.
    pub fn state(&self) -> Option<ExitCode> {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.is_none()
    }

    pub fn text_memory(&self) -> &Memory {
        &self.text
    }

    pub fn data_memory(&self) -> &Memory {
        &self.data
    }

    /// Copies out the full architectural state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            pc: self.pc,
            ir: self.ir,
            nzp: self.flags.bits(),
            registers: self.registers,
            text_memory: Vec::from(self.text.data()),
            data_memory: Vec::from(self.data.data()),
            cycle: self.cycle,
            running: self.is_running(),
            exit_code: self.state,
        }
    }

    /// Executes exactly one fetch/decode/execute tick.
    ///
    /// Returns `None` while the processor keeps running. Once it has halted
    /// or faulted, the exit code is returned and further calls have no
    /// effect.
    pub fn step(&mut self) -> Option<ExitCode> {
        if self.state.is_some() {
            return self.state;
        }

        // Fetch. The program counter is advanced before execute runs, so
        // control transfers see it pointing past their own instruction.
        let instruction = match self.text.read_half(self.pc) {
            Ok(word) => word,
            Err(()) => return self.stop(ExitCode::AddressOutOfRange),
        };
        self.ir = instruction;
        self.pc = self.pc.wrapping_add(constants::WORD_BYTES);
        self.cycle += 1;

        trace!("cycle {}: instruction {:#06X}", self.cycle, instruction);

        let decoded = logic::decode(instruction);
        let result = logic::execute(
            &decoded,
            &mut self.registers,
            &mut self.flags,
            &mut self.pc,
            &mut self.data,
        );

        match result {
            TickResult::Next => None,
            TickResult::Stop(code) => self.stop(code),
        }
    }

    /// Steps until the processor halts or faults.
    pub fn run(&mut self) -> ExitCode {
        loop {
            if let Some(exit_code) = self.step() {
                return exit_code;
            }
        }
    }

    fn stop(&mut self, code: ExitCode) -> Option<ExitCode> {
        self.state = Some(code);
        self.state
    }
}
