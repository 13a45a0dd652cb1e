use std::io::{self, Write as _};

/// Output sink the interpreter drives. The interpreter only ever appends
/// text or resets the sink; it never reads content back.
pub trait Writer {
    fn write(&mut self, text: &str);
    fn clear(&mut self);
}

/// Streams output straight to stdout. `clear` is a no-op: printed text
/// cannot be taken back, and a fresh run on a terminal starts visually
/// where the last one ended anyway.
#[derive(Debug, Default)]
pub struct StdoutWriter;

impl Writer for StdoutWriter {
    fn write(&mut self, text: &str) {
        print!("{}", text);
        io::stdout().flush().ok();
    }

    fn clear(&mut self) {}
}

/// Collects output in memory. Used by tests and by hosts that present
/// the output themselves.
#[derive(Debug, Default)]
pub struct BufferWriter {
    buffer: String,
}

impl BufferWriter {
    pub fn new() -> Self {
        BufferWriter::default()
    }

    pub fn contents(&self) -> &str {
        &self.buffer
    }
}

impl Writer for BufferWriter {
    fn write(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn clear(&mut self) {
        self.buffer.clear();
    }
}
