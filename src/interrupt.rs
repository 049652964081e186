/// Masks, latches and selects pending interrupts between instruction
/// boundaries.
///
/// The controller itself never touches memory or the stack; `Machine` pushes
/// and pops the handler frame. This mirrors splitting the processor core
/// apart from its arithmetic in the teacher's `Core`/`logic` split: the
/// controller only decides *whether* and *which*, never *how*.
#[derive(Debug, Default)]
pub struct InterruptController {
    in_handler: bool,
}

impl InterruptController {
    pub fn new() -> InterruptController {
        InterruptController::default()
    }

    /// True while a handler is running; suppresses further dispatch.
    pub fn in_handler(&self) -> bool {
        self.in_handler
    }

    /// Selects the lowest set bit in `im & is`, if any and if no handler is
    /// already running. Does not mutate any state.
    pub fn pending(&self, im: u8, is: u8) -> Option<u8> {
        if self.in_handler {
            return None;
        }
        let bits = im & is;
        if bits == 0 {
            None
        } else {
            Some(bits.trailing_zeros() as u8)
        }
    }

    /// Marks a handler as entered.
    pub fn enter(&mut self) {
        self.in_handler = true;
    }

    /// Marks the running handler as exited (on `IRET`).
    pub fn leave(&mut self) {
        self.in_handler = false;
    }
}
