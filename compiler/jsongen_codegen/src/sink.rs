//! Output sinks for rendered code.

/// Destination of generated source text.
///
/// The generator renders into a sink; where the text ends up (a string, a
/// file buffer) is up to the implementation.
pub trait CodeSink {
    /// Emit a text fragment.
    fn emit(&mut self, text: &str);

    /// Emit a fragment followed by a newline.
    fn emit_line(&mut self, line: &str) {
        self.emit(line);
        self.emit("\n");
    }
}

/// In-memory sink.
#[derive(Default)]
pub struct StringSink {
    buffer: String,
}

impl StringSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn output(self) -> String {
        self.buffer
    }
}

impl CodeSink for StringSink {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }
}
