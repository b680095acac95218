use super::*;

#[test]
fn positive() {
    instruction_runs! {
        instr_i!(MULI, R0, 34),
        [R0 = 12] => [R0 = 408]
    };
}

#[test]
fn negative_immediate() {
    instruction_runs! {
        instr_i!(MULI, R0, -3),
        [R0 = 14] => [R0 = -42]
    };
}

#[test]
fn keeps_low_sixteen_bits() {
    // 1000 * 100 = 100000 = 0x186A0; only 0x86A0 survives.
    instruction_runs! {
        instr_i!(MULI, R0, 100),
        [R0 = 1000] => [R0 = 0x86A0u16]
    };
}
