use super::*;

#[test]
fn skips_forward() {
    instructions_execute! {
        [instr_j!(JMP, 2), instr_i!(LDI, R1, 99), instr_gp!(HLT, R0, R0)],
        [] => [],
        8,
        Some(ExitCode::Halted)
    };
}

#[test]
fn forward_and_back() {
    let image = image_from_words(&[
        instr_j!(JMP, 4),
        instr_gp!(HLT, R0, R0),
        instr_gp!(HLT, R0, R0),
        instr_j!(JMP, -6),
    ]);

    let mut processor = Processor::default();
    processor.load_text(&image[..]).unwrap();

    assert_eq!(processor.run(), ExitCode::Halted);
    // jmp +4 lands on the second jmp; jmp -6 lands back on the first hlt.
    assert_eq!(processor.pc(), 4);
    assert_eq!(processor.cycle(), 3);
}
