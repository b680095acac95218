use super::*;

#[test]
fn differing_bits() {
    instruction_runs! {
        instr_logic!(XOR, R2, R0, R1),
        [R0 = 0b1100, R1 = 0b1010] => [R2 = 0b0110]
    };
}

#[test]
fn with_itself_is_zero() {
    let processor = instruction_runs! {
        instr_logic!(XOR, R2, R0, R0),
        [R0 = 0x5A5A] => [R2 = 0]
    };
    assert_eq!(processor.flags().bits(), Flags::Z);
}
