use super::*;

#[test]
fn loads_the_incremented_pc() {
    instruction_runs! {
        instr_gp!(LPC, R1, R0),
        [] => [R1 = 2]
    };
}

#[test]
fn later_instructions_see_later_values() {
    instructions_execute! {
        [nop!(), instr_gp!(LPC, R1, R0), instr_gp!(HLT, R0, R0)],
        [] => [R1 = 4],
        8,
        Some(ExitCode::Halted)
    };
}
