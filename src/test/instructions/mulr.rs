use super::*;

#[test]
fn positive() {
    instruction_runs! {
        instr_math!(MULR, R2, R0, R1),
        [R0 = 12, R1 = 34] => [R2 = 408]
    };
}

#[test]
fn negative() {
    let processor = instruction_runs! {
        instr_math!(MULR, R2, R0, R1),
        [R0 = -2, R1 = 3] => [R2 = -6]
    };
    assert_eq!(processor.flags().bits(), Flags::N);
}

#[test]
fn keeps_low_sixteen_bits() {
    // 300 * 300 = 90000 = 0x15F90; only 0x5F90 survives.
    instruction_runs! {
        instr_math!(MULR, R2, R0, R1),
        [R0 = 300, R1 = 300] => [R2 = 0x5F90]
    };
}
