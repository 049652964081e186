use num_traits::FromPrimitive;

use crate::alu;
use crate::constants::{SP_INIT, VECTOR_TABLE_BASE};
use crate::error::{ExitCode, RamFullError};
use crate::flags::Flags;
use crate::interrupt::InterruptController;
use crate::memory::{Memory, Storage};
use crate::opcode::OpCode;
use crate::output::OutputSink;
use crate::register::{RegisterFile, R_IS, R_SP};
use crate::timer::{TimeSource, Timer};

/// The LS-8 machine: fetch-decode-execute loop plus everything it touches.
///
/// `C` and `O` are the injected time source and console sink; production
/// code uses [`crate::timer::SystemClock`] and [`crate::output::StdoutSink`],
/// tests use [`crate::timer::VirtualClock`] and [`crate::output::BufferSink`]
/// so interrupt timing and printed output are both assertable without real
/// I/O.
pub struct Machine<C: TimeSource, O: OutputSink> {
    memory: Memory,
    registers: RegisterFile,
    flags: Flags,
    pc: u8,
    program_top: u8,
    interrupts: InterruptController,
    timer: Timer,
    clock: C,
    output: O,
}

impl<C: TimeSource, O: OutputSink> Machine<C, O> {
    /// Constructs a machine with empty memory, zeroed registers (SP at
    /// [`SP_INIT`]) and no program loaded.
    pub fn new(clock: C, output: O) -> Machine<C, O> {
        let timer = Timer::new(&clock);
        Machine {
            memory: Memory::new(),
            registers: RegisterFile::new(),
            flags: Flags::default(),
            pc: 0,
            program_top: 0,
            interrupts: InterruptController::new(),
            timer,
            clock,
            output,
        }
    }

    /// Copies `program` into memory starting at address 0.
    ///
    /// Fails if the program would reach into the stack region that starts
    /// at [`SP_INIT`]; callers (the loader) are expected to have already
    /// appended the safety `HLT` terminator.
    pub fn load_program(&mut self, program: &[u8]) -> Result<(), RamFullError> {
        if program.len() > SP_INIT as usize {
            return Err(RamFullError {
                program_len: program.len(),
            });
        }
        for (address, &byte) in program.iter().enumerate() {
            self.memory.write_byte(address as u8, byte);
        }
        self.program_top = program.len() as u8;
        Ok(())
    }

    /// Runs until `HLT` or a fatal error. `HLT` is normal termination and is
    /// reported as `Ok`; every other [`ExitCode`] is a genuine failure.
    pub fn run(&mut self) -> Result<(), ExitCode> {
        loop {
            match self.step() {
                Ok(()) => {}
                Err(ExitCode::Halted) => return Ok(()),
                Err(code) => return Err(code),
            }
        }
    }

    /// Executes a single loop iteration: service a pending interrupt if one
    /// is due, fetch-decode-execute one instruction, then poll the timer.
    ///
    /// The timer is never polled after a `HLT`, because the `?` on
    /// `execute` returns before reaching it.
    pub fn step(&mut self) -> Result<(), ExitCode> {
        self.service_interrupts()?;

        let opcode_byte = self.fetch_byte();
        let opcode = OpCode::from_u8(opcode_byte).ok_or(ExitCode::InvalidOpcode(opcode_byte))?;
        self.execute(opcode)?;

        self.poll_timer();
        Ok(())
    }

    pub fn pc(&self) -> u8 {
        self.pc
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn register(&self, id: usize) -> u8 {
        self.registers.get(id)
    }

    /// Direct register write, for assembling test scenarios without first
    /// running an `LDI`.
    pub fn set_register(&mut self, id: usize, value: u8) {
        self.registers.set(id, value);
    }

    pub fn memory_byte(&self, address: u8) -> u8 {
        self.memory.read_byte(address)
    }

    /// Direct memory write, for planting an interrupt vector or scratch
    /// value ahead of a test run.
    pub fn write_memory_byte(&mut self, address: u8, value: u8) {
        self.memory.write_byte(address, value);
    }

    /// Mutable access to the injected clock, so tests built over
    /// [`crate::timer::VirtualClock`] can cross the one-second timer
    /// threshold without sleeping.
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    fn fetch_byte(&mut self) -> u8 {
        let byte = self.memory.read_byte(self.pc);
        self.pc = self.pc.wrapping_add(1);
        byte
    }

    fn push(&mut self, value: u8) -> Result<(), ExitCode> {
        let sp = self.registers.sp();
        if sp < self.program_top {
            return Err(ExitCode::StackOverflow);
        }
        self.memory.write_byte(sp, value);
        self.registers.set(R_SP, sp.wrapping_sub(1));
        Ok(())
    }

    fn pop(&mut self) -> Result<u8, ExitCode> {
        let sp = self.registers.sp();
        if sp >= SP_INIT {
            return Err(ExitCode::StackUnderflow);
        }
        let new_sp = sp.wrapping_add(1);
        self.registers.set(R_SP, new_sp);
        Ok(self.memory.read_byte(new_sp))
    }

    fn conditional_jump(&mut self, taken: impl FnOnce(&Flags) -> bool) -> Result<(), ExitCode> {
        let r = self.fetch_byte() as usize;
        if taken(&self.flags) {
            self.pc = self.registers.get(r);
        }
        Ok(())
    }

    /// Saves R0..R6, flags and PC onto the stack and transfers control to
    /// the lowest pending interrupt's vector, if any is due and no handler
    /// is already running.
    fn service_interrupts(&mut self) -> Result<(), ExitCode> {
        let im = self.registers.im();
        let is = self.registers.is();

        let bit = match self.interrupts.pending(im, is) {
            Some(bit) => bit,
            None => return Ok(()),
        };

        self.registers.set(R_IS, is & !(1 << bit));
        self.interrupts.enter();

        let pc = self.pc;
        self.push(pc)?;
        self.push(self.flags.to_byte())?;
        for r in 0..=R_IS {
            let value = self.registers.get(r);
            self.push(value)?;
        }

        self.pc = self.memory.read_byte(VECTOR_TABLE_BASE.wrapping_add(bit));
        Ok(())
    }

    fn iret(&mut self) -> Result<(), ExitCode> {
        for r in (0..=R_IS).rev() {
            let value = self.pop()?;
            self.registers.set(r, value);
        }
        let flags_byte = self.pop()?;
        self.flags = Flags::from_byte(flags_byte);
        let pc = self.pop()?;
        self.pc = pc;
        self.interrupts.leave();
        Ok(())
    }

    fn poll_timer(&mut self) {
        let vector_installed = self.memory.read_byte(VECTOR_TABLE_BASE) != 0;
        if self.timer.poll(&self.clock, vector_installed) {
            let is = self.registers.is();
            self.registers.set(R_IS, is | 0b1);
        }
    }

    fn execute(&mut self, opcode: OpCode) -> Result<(), ExitCode> {
        use OpCode::*;

        match opcode {
            Nop => {}

            Hlt => return Err(ExitCode::Halted),

            Ret => {
                let pc = self.pop()?;
                self.pc = pc;
            }

            Iret => self.iret()?,

            Push => {
                let r = self.fetch_byte() as usize;
                let value = self.registers.get(r);
                self.push(value)?;
            }

            Pop => {
                let r = self.fetch_byte() as usize;
                let value = self.pop()?;
                self.registers.set(r, value);
            }

            Prn => {
                let r = self.fetch_byte() as usize;
                let value = self.registers.get(r);
                self.output.print_decimal(value);
            }

            Pra => {
                let r = self.fetch_byte() as usize;
                let value = self.registers.get(r);
                self.output.print_char(value);
            }

            Call => {
                let r = self.fetch_byte() as usize;
                let return_address = self.pc;
                self.push(return_address)?;
                self.pc = self.registers.get(r);
            }

            Int => {
                let r = self.fetch_byte() as usize;
                let bit = self.registers.get(r);
                let is = self.registers.is();
                self.registers.set(R_IS, is | 1u8.wrapping_shl(bit as u32));
            }

            Jmp => {
                let r = self.fetch_byte() as usize;
                self.pc = self.registers.get(r);
            }

            Jeq => self.conditional_jump(|f| f.e)?,
            Jne => self.conditional_jump(|f| !f.e)?,
            Jgt => self.conditional_jump(|f| f.g)?,
            Jlt => self.conditional_jump(|f| f.l)?,
            Jle => self.conditional_jump(|f| f.l || f.e)?,
            Jge => self.conditional_jump(|f| f.g || f.e)?,

            Ldi => {
                let r = self.fetch_byte() as usize;
                let immediate = self.fetch_byte();
                self.registers.set(r, immediate);
            }

            Ld => {
                let a = self.fetch_byte() as usize;
                let b = self.fetch_byte() as usize;
                let address = self.registers.get(b);
                let value = self.memory.read_byte(address);
                self.registers.set(a, value);
            }

            St => {
                let a = self.fetch_byte() as usize;
                let b = self.fetch_byte() as usize;
                let address = self.registers.get(a);
                let value = self.registers.get(b);
                self.memory.write_byte(address, value);
            }

            Cmp => {
                let a = self.fetch_byte() as usize;
                let b = self.fetch_byte() as usize;
                self.flags = Flags::compare(self.registers.get(a), self.registers.get(b));
            }

            Inc | Dec | Not => {
                let r = self.fetch_byte() as usize;
                let value = self.registers.get(r);
                self.registers.set(r, alu::unary(opcode, value));
            }

            Add | Sub | Mul | Div | Mod | And | Or | Xor | Shl | Shr => {
                let a = self.fetch_byte() as usize;
                let b = self.fetch_byte() as usize;
                let result = alu::binary(opcode, self.registers.get(a), self.registers.get(b))?;
                self.registers.set(a, result);
            }
        }

        Ok(())
    }
}

/// Convenience alias for the machine as the CLI wires it up: real time,
/// real stdout.
pub type StandardMachine = Machine<crate::timer::SystemClock, crate::output::StdoutSink>;

impl StandardMachine {
    pub fn standard() -> StandardMachine {
        Machine::new(crate::timer::SystemClock, crate::output::StdoutSink)
    }
}
