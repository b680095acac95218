use super::*;

#[test]
fn truncates_towards_zero() {
    instruction_runs! {
        instr_i!(DIVI, R0, 4),
        [R0 = 15] => [R0 = 3]
    };
}

#[test]
fn negative_register() {
    instruction_runs! {
        instr_i!(DIVI, R0, 4),
        [R0 = -15] => [R0 = -3]
    };
}

#[test]
fn by_zero() {
    instruction_exits! {
        instr_i!(DIVI, R0, 0),
        [R0 = 15] => [],
        DivideByZero
    };
}
