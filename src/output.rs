use std::borrow::Cow;
use std::io::{self, Write};

/// Console output sink for `PRN`/`PRA`, injectable so tests can capture
/// output instead of writing to the real stdout.
pub trait OutputSink {
    fn print_decimal(&mut self, value: u8);
    fn print_char(&mut self, value: u8);
}

/// Writes straight to process stdout, used outside of tests.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn print_decimal(&mut self, value: u8) {
        println!("{}", value);
    }

    fn print_char(&mut self, value: u8) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        let _ = handle.write_all(&[value]);
        let _ = handle.flush();
    }
}

/// In-memory sink for assertions in tests.
#[derive(Debug, Default)]
pub struct BufferSink {
    buffer: Vec<u8>,
}

impl BufferSink {
    pub fn new() -> BufferSink {
        BufferSink::default()
    }

    /// The raw bytes written so far, in order. `PRA` can write any byte
    /// 0..=255, including ones that don't form valid UTF-8, so this is the
    /// only accessor guaranteed not to panic.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// The written bytes decoded as text, for asserting on the usual
    /// decimal-and-ASCII output of `PRN`/`PRA`. Non-UTF-8 bytes are replaced
    /// rather than panicking, since `PRA` is free to write any byte value.
    pub fn as_str(&self) -> Cow<str> {
        String::from_utf8_lossy(&self.buffer)
    }
}

impl OutputSink for BufferSink {
    fn print_decimal(&mut self, value: u8) {
        self.buffer.extend_from_slice(value.to_string().as_bytes());
        self.buffer.push(b'\n');
    }

    fn print_char(&mut self, value: u8) {
        self.buffer.push(value);
    }
}
