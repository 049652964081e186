//! Fixed memory-layout constants for the LS-8 machine.
//!
//! These values are architectural: changing them changes what programs the
//! machine can run, not just how fast it runs them.

/// Total addressable memory, in bytes.
pub const RAM_SIZE: usize = 256;

/// Number of general-purpose registers (`R0`..`R7`).
pub const REGISTER_COUNT: usize = 8;

/// Initial value of the stack pointer (`R7`). The stack grows downward from here.
pub const SP_INIT: u8 = 0xF3;

/// Address of the first interrupt vector (for interrupt bit 0).
pub const VECTOR_TABLE_BASE: u8 = 0xF8;

/// Number of interrupt vectors (and interrupt mask/status bits).
pub const VECTOR_TABLE_LEN: usize = 8;
