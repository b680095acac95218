pub mod constants;

mod flags;
mod instructions;
mod memory;
mod processor;

pub use crate::flags::Flags;
pub use crate::instructions::*;
pub use crate::memory::{Memory, Storage};
pub use crate::processor::{Error, ExitCode, Processor, Snapshot};

/// Width of a machine word: instruction words and register values alike.
pub type Word = u16;

/// Byte order of the text and data images. The assembled bit string is
/// MSB-first, so words land in memory big-endian.
pub type Endian = byteorder::BigEndian;
