use super::*;

#[test]
fn swaps() {
    instruction_runs! {
        instr_gp!(SWP, R1, R2),
        [R1 = 1, R2 = 2] => [R1 = 2, R2 = 1]
    };
}

#[test]
fn with_itself_is_identity() {
    instruction_runs! {
        instr_gp!(SWP, R1, R1),
        [R1 = 5] => []
    };
}

#[test]
fn does_not_touch_the_flags() {
    let processor = instruction_runs! {
        instr_gp!(SWP, R1, R2),
        [R1 = -1, R2 = 2] => [R1 = 2, R2 = -1]
    };
    assert_eq!(processor.flags().bits(), 0);
}
