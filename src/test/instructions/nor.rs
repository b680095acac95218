use super::*;

#[test]
fn inverted_or() {
    instruction_runs! {
        instr_logic!(NOR, R2, R0, R1),
        [R0 = 0xFF00u16, R1 = 0x00F0] => [R2 = 0x000F]
    };
}

#[test]
fn of_zeros_is_all_ones() {
    let processor = instruction_runs! {
        instr_logic!(NOR, R2, R0, R1),
        [] => [R2 = 0xFFFFu16]
    };
    assert_eq!(processor.flags().bits(), Flags::N);
}
