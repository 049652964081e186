use crate::error::RamFullError;
use crate::test::{machine, run_to_halt};
use crate::OpCode;

#[test]
fn nop_advances_past_itself() {
    let machine = run_to_halt(&[OpCode::Nop as u8, OpCode::Hlt as u8]);
    assert_eq!(machine.pc(), 2);
}

#[test]
fn ldi_sets_the_register() {
    let machine = run_to_halt(&[OpCode::Ldi as u8, 0, 8, OpCode::Hlt as u8]);
    assert_eq!(machine.register(0), 8);
}

#[test]
fn prn_emits_decimal_and_newline() {
    let machine = run_to_halt(&[
        OpCode::Ldi as u8,
        0,
        8,
        OpCode::Prn as u8,
        0,
        OpCode::Hlt as u8,
    ]);
    assert_eq!(machine.output().as_str(), "8\n");
}

#[test]
fn pra_emits_raw_byte_without_newline() {
    let machine = run_to_halt(&[
        OpCode::Ldi as u8,
        0,
        b'A',
        OpCode::Pra as u8,
        0,
        OpCode::Hlt as u8,
    ]);
    assert_eq!(machine.output().as_str(), "A");
}

#[test]
fn print8_scenario() {
    let machine = run_to_halt(&[
        OpCode::Ldi as u8,
        0,
        8,
        OpCode::Prn as u8,
        0,
        OpCode::Hlt as u8,
    ]);
    assert_eq!(machine.output().as_str(), "8\n");
}

#[test]
fn mul_scenario() {
    let machine = run_to_halt(&[
        OpCode::Ldi as u8,
        0,
        8,
        OpCode::Ldi as u8,
        1,
        9,
        OpCode::Mul as u8,
        0,
        1,
        OpCode::Prn as u8,
        0,
        OpCode::Hlt as u8,
    ]);
    assert_eq!(machine.output().as_str(), "72\n");
}

#[test]
fn unknown_opcode_is_fatal() {
    let mut machine = machine();
    machine.load_program(&[0x02]).unwrap();
    assert_eq!(machine.run(), Err(crate::ExitCode::InvalidOpcode(0x02)));
}

#[test]
fn loader_rejects_a_program_that_would_overrun_the_stack_region() {
    let mut machine = machine();
    let program = vec![OpCode::Nop as u8; 300];
    assert_eq!(
        machine.load_program(&program),
        Err(RamFullError { program_len: 300 })
    );
}

#[test]
fn program_filling_exactly_up_to_the_stack_region_is_accepted() {
    let mut machine = machine();
    let mut program = vec![OpCode::Nop as u8; 0xF2];
    program.push(OpCode::Hlt as u8);
    assert!(machine.load_program(&program).is_ok());
}
