use super::*;

#[test]
fn taken_when_flags_match() {
    instructions_execute! {
        [
            instr_i!(ADDI, R0, 1),
            instr_br!(Flags::P, 2),
            instr_i!(LDI, R1, 99),
            instr_gp!(HLT, R0, R0)
        ],
        [] => [R0 = 1],
        8,
        Some(ExitCode::Halted)
    };
}

#[test]
fn not_taken_when_mask_misses() {
    instructions_execute! {
        [
            instr_i!(ADDI, R0, 1),
            instr_br!(Flags::N, 2),
            instr_i!(LDI, R1, 99),
            instr_gp!(HLT, R0, R0)
        ],
        [] => [R0 = 1, R1 = 99],
        8,
        Some(ExitCode::Halted)
    };
}

#[test]
fn any_set_mask_bit_takes_the_branch() {
    instructions_execute! {
        [
            instr_i!(ADDI, R0, 1),
            instr_br!(Flags::N | Flags::P, 2),
            instr_i!(LDI, R1, 99),
            instr_gp!(HLT, R0, R0)
        ],
        [] => [R0 = 1],
        8,
        Some(ExitCode::Halted)
    };
}

#[test]
fn never_taken_before_first_alu_result() {
    // The flags reset to all-clear, so even brnzp falls through.
    instructions_execute! {
        [
            instr_br!(0b111, 2),
            instr_i!(LDI, R1, 99),
            instr_gp!(HLT, R0, R0)
        ],
        [] => [R1 = 99],
        8,
        Some(ExitCode::Halted)
    };
}

#[test]
fn flags_survive_the_branch() {
    let processor = instructions_execute! {
        [
            instr_i!(ADDI, R0, 1),
            instr_br!(Flags::Z, 2),
            instr_gp!(HLT, R0, R0)
        ],
        [] => [R0 = 1],
        8,
        Some(ExitCode::Halted)
    };
    assert_eq!(processor.flags().bits(), Flags::P);
}
