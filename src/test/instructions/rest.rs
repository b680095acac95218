use super::*;

#[test]
fn restores_all_eight_registers() {
    let image = image_from_words(&[instr_j!(REST, 0), instr_gp!(HLT, R0, R0)]);

    let mut processor = Processor::default();
    processor.load_text(&image[..]).unwrap();

    // Frame at base 2: big-endian halves 1..=8.
    let mut frame = vec![0u8; 18];
    for i in 0..8 {
        frame[2 + 2 * i + 1] = i as u8 + 1;
    }
    processor.load_data(&frame[..]).unwrap();

    assert_eq!(processor.run(), ExitCode::Halted);
    assert_eq!(*processor.registers(), [1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn out_of_range() {
    instruction_exits! {
        instr_j!(REST, 254),
        [] => [],
        AddressOutOfRange
    };
}
