use super::*;

#[test]
fn negates() {
    let processor = instruction_runs! {
        instr_math!(TWOS, R1, R0, R0),
        [R0 = 5] => [R1 = -5]
    };
    assert_eq!(processor.flags().bits(), Flags::N);
}

#[test]
fn negates_negative() {
    instruction_runs! {
        instr_math!(TWOS, R1, R0, R0),
        [R0 = -5] => [R1 = 5]
    };
}

#[test]
fn zero() {
    let processor = instruction_runs! {
        instr_math!(TWOS, R1, R0, R0),
        [R0 = 0] => [R1 = 0]
    };
    assert_eq!(processor.flags().bits(), Flags::Z);
}
