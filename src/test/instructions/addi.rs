use super::*;

#[test]
fn positive() {
    instruction_runs! {
        instr_i!(ADDI, R0, 123),
        [R0 = 45] => [R0 = 168]
    };
}

#[test]
fn negative_immediate() {
    instruction_runs! {
        instr_i!(ADDI, R0, -123),
        [R0 = 45] => [R0 = -78]
    };
}

#[test]
fn negative_register() {
    instruction_runs! {
        instr_i!(ADDI, R0, 45),
        [R0 = -123] => [R0 = -78]
    };
}

#[test]
fn overflow_wraps() {
    instruction_runs! {
        instr_i!(ADDI, R0, 1),
        [R0 = 0x7FFF] => [R0 = 0x8000u16]
    };
}
