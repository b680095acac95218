use super::*;

#[test]
fn halts() {
    instruction_exits! {
        instr_gp!(HLT, R0, R0),
        [R0 = 3] => [],
        Halted
    };
}

#[test]
fn pc_points_past_the_halt() {
    let image = image_from_words(&[nop!(), instr_gp!(HLT, R0, R0)]);

    let mut processor = Processor::default();
    processor.load_text(&image[..]).unwrap();

    assert_eq!(processor.run(), ExitCode::Halted);
    assert_eq!(processor.pc(), 4);
    assert_eq!(processor.ir(), instr_gp!(HLT, R0, R0));
}
