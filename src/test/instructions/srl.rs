use super::*;

#[test]
fn inserts_zeros() {
    let processor = instruction_runs! {
        instr_i!(SRL, R0, 4),
        [R0 = 0xFFF0u16] => [R0 = 0x0FFF]
    };
    assert_eq!(processor.flags().bits(), Flags::P);
}

#[test]
fn amount_is_modulo_sixteen() {
    instruction_runs! {
        instr_i!(SRL, R0, 16),
        [R0 = 0x1234] => [R0 = 0x1234]
    };
}
