use crate::test::{machine, run_to_halt};
use crate::ExitCode;
use crate::OpCode;

#[test]
fn add_wraps_on_overflow() {
    let machine = run_to_halt(&[
        OpCode::Ldi as u8,
        0,
        0xFF,
        OpCode::Ldi as u8,
        1,
        2,
        OpCode::Add as u8,
        0,
        1,
        OpCode::Hlt as u8,
    ]);
    assert_eq!(machine.register(0), 1);
}

#[test]
fn div_by_zero_aborts_the_run() {
    let mut machine = machine();
    machine
        .load_program(&[
            OpCode::Ldi as u8,
            0,
            10,
            OpCode::Ldi as u8,
            1,
            0,
            OpCode::Div as u8,
            0,
            1,
            OpCode::Hlt as u8,
        ])
        .unwrap();
    assert_eq!(machine.run(), Err(ExitCode::DivideByZero));
}

#[test]
fn mod_by_zero_aborts_the_run() {
    let mut machine = machine();
    machine
        .load_program(&[
            OpCode::Ldi as u8,
            0,
            10,
            OpCode::Ldi as u8,
            1,
            0,
            OpCode::Mod as u8,
            0,
            1,
            OpCode::Hlt as u8,
        ])
        .unwrap();
    assert_eq!(machine.run(), Err(ExitCode::DivideByZero));
}

#[test]
fn not_twice_restores_the_register() {
    let machine = run_to_halt(&[
        OpCode::Ldi as u8,
        0,
        0x5A,
        OpCode::Not as u8,
        0,
        OpCode::Not as u8,
        0,
        OpCode::Hlt as u8,
    ]);
    assert_eq!(machine.register(0), 0x5A);
}

#[test]
fn xor_with_self_yields_zero() {
    let machine = run_to_halt(&[
        OpCode::Ldi as u8,
        0,
        0x5A,
        OpCode::Xor as u8,
        0,
        0,
        OpCode::Hlt as u8,
    ]);
    assert_eq!(machine.register(0), 0);
}

#[test]
fn inc_and_dec_wrap_at_the_edges() {
    let machine = run_to_halt(&[
        OpCode::Ldi as u8,
        0,
        0xFF,
        OpCode::Inc as u8,
        0,
        OpCode::Ldi as u8,
        1,
        0,
        OpCode::Dec as u8,
        1,
        OpCode::Hlt as u8,
    ]);
    assert_eq!(machine.register(0), 0);
    assert_eq!(machine.register(1), 0xFF);
}

#[test]
fn shl_and_shr_are_logical() {
    let machine = run_to_halt(&[
        OpCode::Ldi as u8,
        0,
        0b1000_0001,
        OpCode::Ldi as u8,
        1,
        1,
        OpCode::Shl as u8,
        0,
        1,
        OpCode::Hlt as u8,
    ]);
    assert_eq!(machine.register(0), 0b0000_0010);
}
