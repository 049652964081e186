use crate::constants::{REGISTER_COUNT, SP_INIT};

/// Register index of the Interrupt Mask.
pub const R_IM: usize = 5;
/// Register index of the Interrupt Status.
pub const R_IS: usize = 6;
/// Register index of the Stack Pointer.
pub const R_SP: usize = 7;

/// The eight general-purpose registers `R0`..`R7`.
///
/// `R5`, `R6` and `R7` carry architectural meaning (see [`R_IM`], [`R_IS`],
/// [`R_SP`]) but are stored and addressed the same as any other register.
pub struct RegisterFile {
    values: [u8; REGISTER_COUNT],
}

impl RegisterFile {
    /// Constructs a fresh register file with `SP` set to [`SP_INIT`] and all
    /// other registers zeroed.
    pub fn new() -> RegisterFile {
        let mut values = [0u8; REGISTER_COUNT];
        values[R_SP] = SP_INIT;
        RegisterFile { values }
    }

    /// Reads register `id`. Only the low 3 bits of `id` are significant.
    pub fn get(&self, id: usize) -> u8 {
        self.values[id & 0x07]
    }

    /// Writes register `id`. Only the low 3 bits of `id` are significant.
    pub fn set(&mut self, id: usize, value: u8) {
        self.values[id & 0x07] = value;
    }

    /// Current Interrupt Mask.
    pub fn im(&self) -> u8 {
        self.get(R_IM)
    }

    /// Current Interrupt Status.
    pub fn is(&self) -> u8 {
        self.get(R_IS)
    }

    /// Current Stack Pointer.
    pub fn sp(&self) -> u8 {
        self.get(R_SP)
    }
}

impl Default for RegisterFile {
    fn default() -> RegisterFile {
        RegisterFile::new()
    }
}
