use num_derive::{FromPrimitive, ToPrimitive};

/// The complete LS-8 instruction set.
///
/// Discriminants are the exact binary encodings from the opcode map; decode
/// goes through [`FromPrimitive`](num_traits::FromPrimitive), the same way
/// the 32-bit DLX-style opcodes in this family of machines are decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum OpCode {
    Nop = 0x00,
    Hlt = 0x01,

    Ret = 0x11,
    Iret = 0x13,

    Push = 0x45,
    Pop = 0x46,
    Prn = 0x47,
    Pra = 0x48,

    Call = 0x50,
    Int = 0x52,
    Jmp = 0x54,
    Jeq = 0x55,
    Jne = 0x56,
    Jgt = 0x57,
    Jlt = 0x58,
    Jle = 0x59,
    Jge = 0x5A,

    Ldi = 0x82,
    Ld = 0x83,
    St = 0x84,

    Add = 0xA0,
    Sub = 0xA1,
    Mul = 0xA2,
    Div = 0xA3,
    Mod = 0xA4,
    Inc = 0xA5,
    Dec = 0xA6,
    Cmp = 0xA7,
    And = 0xA8,
    Not = 0xA9,
    Or = 0xAA,
    Xor = 0xAB,
    Shl = 0xAC,
    Shr = 0xAD,
}
