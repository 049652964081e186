//! Fetch-decode-execute core of the LS-8 virtual machine: registers, flat
//! memory, ALU, flags, timer-driven interrupts and the instruction set that
//! ties them together. Loading a program from disk and wiring up a
//! command-line entry point live in the `ls8-cli` crate; this crate only
//! knows how to run bytes that are already in memory.

pub mod alu;
pub mod constants;
pub mod error;
pub mod flags;
pub mod interrupt;
pub mod memory;
pub mod opcode;
pub mod output;
pub mod processor;
pub mod register;
pub mod timer;

pub use error::{ExitCode, RamFullError};
pub use opcode::OpCode;
pub use processor::{Machine, StandardMachine};
