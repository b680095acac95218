use super::*;

#[test]
fn clears_register() {
    instruction_runs! {
        instr_gp!(CLR, R3, R0),
        [R3 = 123] => [R3 = 0]
    };
}

#[test]
fn does_not_touch_the_flags() {
    let processor = instructions_execute! {
        [
            instr_i!(ADDI, R0, 1),
            instr_gp!(CLR, R0, R0),
            instr_gp!(HLT, R0, R0)
        ],
        [] => [R0 = 0],
        8,
        Some(ExitCode::Halted)
    };
    assert_eq!(processor.flags().bits(), Flags::P);
}
