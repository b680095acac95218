use super::*;

#[test]
fn masks_bits() {
    instruction_runs! {
        instr_logic!(AND, R2, R0, R1),
        [R0 = 0b1100, R1 = 0b1010] => [R2 = 0b1000]
    };
}

#[test]
fn disjoint_is_zero() {
    let processor = instruction_runs! {
        instr_logic!(AND, R2, R0, R1),
        [R0 = 0xF0F0u16, R1 = 0x0F0F] => [R2 = 0]
    };
    assert_eq!(processor.flags().bits(), Flags::Z);
}
