use super::*;

#[test]
fn merges_bits() {
    instruction_runs! {
        instr_logic!(OR, R2, R0, R1),
        [R0 = 0b1100, R1 = 0b1010] => [R2 = 0b1110]
    };
}

#[test]
fn sign_bit_sets_n() {
    let processor = instruction_runs! {
        instr_logic!(OR, R2, R0, R1),
        [R0 = 0x8000u16, R1 = 1] => [R2 = 0x8001u16]
    };
    assert_eq!(processor.flags().bits(), Flags::N);
}
