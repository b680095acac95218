use super::*;

#[test]
fn stores_the_immediate() {
    let processor = instruction_runs! {
        instr_i!(STI, R0, 0xA5),
        [R0 = 0x20] => []
    };
    assert_eq!(processor.data_memory().read_half(0x20), Ok(0x00A5));
}

#[test]
fn sign_extends_the_immediate() {
    // -91 encodes as the 9-bit field 0x1A5 and comes back as 0xFFA5.
    let processor = instruction_runs! {
        instr_i!(STI, R0, -91),
        [R0 = 0x20] => []
    };
    assert_eq!(processor.data_memory().read_half(0x20), Ok(0xFFA5));
}

#[test]
fn out_of_range() {
    instruction_exits! {
        instr_i!(STI, R0, 1),
        [R0 = 255] => [],
        AddressOutOfRange
    };
}
