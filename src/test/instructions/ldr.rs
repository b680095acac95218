use super::*;

#[test]
fn loads_half_word() {
    let image = image_from_words(&[instr_gp!(LDR, R1, R0), instr_gp!(HLT, R0, R0)]);

    let mut processor = Processor::default();
    processor.load_text(&image[..]).unwrap();

    let mut data = vec![0u8; 64];
    data[0x20] = 0x01;
    data[0x21] = 0xA5;
    processor.load_data(&data[..]).unwrap();
    processor.write_register(RegisterId::R0, 0x20);

    assert_eq!(processor.run(), ExitCode::Halted);
    assert_eq!(processor.register(RegisterId::R1), 0x01A5);
}

#[test]
fn does_not_touch_the_flags() {
    let image = image_from_words(&[instr_gp!(LDR, R1, R0), instr_gp!(HLT, R0, R0)]);

    let mut processor = Processor::default();
    processor.load_text(&image[..]).unwrap();
    processor.load_data(&[0xFF, 0xFF]).unwrap();

    assert_eq!(processor.run(), ExitCode::Halted);
    assert_eq!(processor.register(RegisterId::R1), 0xFFFF);
    assert_eq!(processor.flags().bits(), 0);
}

#[test]
fn out_of_range() {
    instruction_exits! {
        instr_gp!(LDR, R1, R0),
        [R0 = 255] => [],
        AddressOutOfRange
    };
}
