use super::*;

#[test]
fn stores_half_word() {
    let processor = instruction_runs! {
        instr_gp!(STR, R0, R1),
        [R0 = 0x20, R1 = 0x01A5] => []
    };
    assert_eq!(processor.data_memory().read_half(0x20), Ok(0x01A5));
    assert_eq!(processor.flags().bits(), 0);
}

#[test]
fn text_memory_is_untouched() {
    // A store lands in data memory even when the address overlaps the
    // program's own bytes.
    let processor = instruction_runs! {
        instr_gp!(STR, R0, R1),
        [R0 = 0, R1 = 0xFFFFu16] => []
    };
    assert_eq!(processor.data_memory().read_half(0), Ok(0xFFFF));
    assert_eq!(
        processor.text_memory().read_half(0),
        Ok(instr_gp!(STR, R0, R1))
    );
}

#[test]
fn out_of_range() {
    instruction_exits! {
        instr_gp!(STR, R0, R1),
        [R0 = 255, R1 = 7] => [],
        AddressOutOfRange
    };
}
