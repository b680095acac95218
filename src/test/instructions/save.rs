use super::*;

#[test]
fn writes_the_register_frame() {
    let processor = instruction_runs! {
        instr_j!(SAVE, 0),
        [R0 = 1, R1 = 2, R2 = 3, R3 = 4, R4 = 5, R5 = 6, R6 = 7, R7 = 8] => []
    };

    // The base address is the incremented pc: 2.
    assert_eq!(
        &processor.data_memory().data()[2..18],
        &[0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 0, 6, 0, 7, 0, 8]
    );
}

#[test]
fn negative_offset() {
    let processor = instruction_runs! {
        instr_j!(SAVE, -2),
        [R0 = 0x1234] => []
    };
    assert_eq!(processor.data_memory().read_half(0), Ok(0x1234));
}

#[test]
fn out_of_range() {
    // Base 2 + 254 = 256: the 16-byte frame starts past the end.
    instruction_exits! {
        instr_j!(SAVE, 254),
        [] => [],
        AddressOutOfRange
    };
}
