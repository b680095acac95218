use brisc::{enum_to_u16, GpFunct, LogicFunct, MathFunct, Opcode};

/// How a mnemonic lowers into an instruction word.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Encoding {
    /// An empty branch: all fields zero.
    Nop,
    /// R-shape: up to three register operands plus a function code.
    Register { opcode: Opcode, funct: u16 },
    /// I-shape: one register operand and a 9-bit immediate.
    Immediate { opcode: Opcode },
    /// Branch: the condition mask sits in the register field, the operand is
    /// a label or byte offset.
    Branch { mask: u16 },
    /// J-shape: the operand is a label or a 12-bit byte offset.
    Jump { opcode: Opcode },
}

/// The instruction table. Mnemonics map here and nowhere else; anything the
/// table does not list fails assembly.
pub fn lookup(mnemonic: &str) -> Option<Encoding> {
    let encoding = match mnemonic {
        "nop" => Encoding::Nop,

        "brp" => Encoding::Branch { mask: 0b001 },
        "brz" => Encoding::Branch { mask: 0b010 },
        "brzp" => Encoding::Branch { mask: 0b011 },
        "brn" => Encoding::Branch { mask: 0b100 },
        "brnp" => Encoding::Branch { mask: 0b101 },
        "brnz" => Encoding::Branch { mask: 0b110 },
        "brnzp" => Encoding::Branch { mask: 0b111 },

        "addr" => Encoding::Register {
            opcode: Opcode::MATH,
            funct: enum_to_u16(MathFunct::ADDR),
        },
        "subr" => Encoding::Register {
            opcode: Opcode::MATH,
            funct: enum_to_u16(MathFunct::SUBR),
        },
        "mulr" => Encoding::Register {
            opcode: Opcode::MATH,
            funct: enum_to_u16(MathFunct::MULR),
        },
        "divr" => Encoding::Register {
            opcode: Opcode::MATH,
            funct: enum_to_u16(MathFunct::DIVR),
        },
        "twos" => Encoding::Register {
            opcode: Opcode::MATH,
            funct: enum_to_u16(MathFunct::TWOS),
        },

        "not" => Encoding::Register {
            opcode: Opcode::LOGIC,
            funct: enum_to_u16(LogicFunct::NOT),
        },
        "and" => Encoding::Register {
            opcode: Opcode::LOGIC,
            funct: enum_to_u16(LogicFunct::AND),
        },
        "or" => Encoding::Register {
            opcode: Opcode::LOGIC,
            funct: enum_to_u16(LogicFunct::OR),
        },
        "xor" => Encoding::Register {
            opcode: Opcode::LOGIC,
            funct: enum_to_u16(LogicFunct::XOR),
        },
        "nor" => Encoding::Register {
            opcode: Opcode::LOGIC,
            funct: enum_to_u16(LogicFunct::NOR),
        },

        "addi" => Encoding::Immediate {
            opcode: Opcode::ADDI,
        },
        "subi" => Encoding::Immediate {
            opcode: Opcode::SUBI,
        },
        "muli" => Encoding::Immediate {
            opcode: Opcode::MULI,
        },
        "divi" => Encoding::Immediate {
            opcode: Opcode::DIVI,
        },
        "sl" => Encoding::Immediate { opcode: Opcode::SL },
        "srl" => Encoding::Immediate {
            opcode: Opcode::SRL,
        },
        "sra" => Encoding::Immediate {
            opcode: Opcode::SRA,
        },

        "move" => Encoding::Register {
            opcode: Opcode::GP,
            funct: enum_to_u16(GpFunct::MOVE),
        },
        "ldr" => Encoding::Register {
            opcode: Opcode::GP,
            funct: enum_to_u16(GpFunct::LDR),
        },
        "str" => Encoding::Register {
            opcode: Opcode::GP,
            funct: enum_to_u16(GpFunct::STR),
        },
        "clr" => Encoding::Register {
            opcode: Opcode::GP,
            funct: enum_to_u16(GpFunct::CLR),
        },
        "lpc" => Encoding::Register {
            opcode: Opcode::GP,
            funct: enum_to_u16(GpFunct::LPC),
        },
        "swp" => Encoding::Register {
            opcode: Opcode::GP,
            funct: enum_to_u16(GpFunct::SWP),
        },
        "rst" => Encoding::Register {
            opcode: Opcode::GP,
            funct: enum_to_u16(GpFunct::RST),
        },
        "hlt" => Encoding::Register {
            opcode: Opcode::GP,
            funct: enum_to_u16(GpFunct::HLT),
        },

        "sti" => Encoding::Immediate {
            opcode: Opcode::STI,
        },
        "ldi" => Encoding::Immediate {
            opcode: Opcode::LDI,
        },

        "save" => Encoding::Jump {
            opcode: Opcode::SAVE,
        },
        "rest" => Encoding::Jump {
            opcode: Opcode::REST,
        },
        "jmp" => Encoding::Jump {
            opcode: Opcode::JMP,
        },

        _ => return None,
    };

    Some(encoding)
}
