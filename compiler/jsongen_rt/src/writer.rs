//! Output buffer for generated encoders.

use crate::Error;

/// Append-only JSON output buffer.
///
/// Generated encoders call the primitive writers directly. The first error
/// reported through [`Writer::raw`] or a non-finite float is kept; later
/// writes still happen, and [`Writer::build_bytes`] returns the error.
#[derive(Debug, Default)]
pub struct Writer {
    buf: Vec<u8>,
    error: Option<Error>,
}

macro_rules! int_writers {
    ($($name:ident: $ty:ty),* $(,)?) => {
        $(
            #[inline]
            pub fn $name(&mut self, n: $ty) {
                let mut digits = itoa::Buffer::new();
                self.buf.extend_from_slice(digits.format(n).as_bytes());
            }
        )*
    };
}

impl Writer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Writer {
            buf: Vec::with_capacity(capacity),
            error: None,
        }
    }

    /// Append one byte without escaping.
    #[inline]
    pub fn raw_byte(&mut self, b: u8) {
        self.buf.push(b);
    }

    /// Append text without escaping.
    #[inline]
    pub fn raw_string(&mut self, s: &str) {
        self.buf.extend_from_slice(s.as_bytes());
    }

    /// Append pre-encoded bytes, or record the error that produced them.
    ///
    /// An empty success is written as `null`.
    pub fn raw(&mut self, data: Result<Vec<u8>, Error>) {
        match data {
            Ok(bytes) if bytes.is_empty() => self.raw_string("null"),
            Ok(bytes) => self.buf.extend_from_slice(&bytes),
            Err(err) => self.record(err),
        }
    }

    /// Append a quoted, escaped JSON string.
    pub fn string(&mut self, s: &str) {
        self.buf.reserve(s.len() + 2);
        self.buf.push(b'"');

        let bytes = s.as_bytes();
        let mut start = 0;
        for (i, &b) in bytes.iter().enumerate() {
            let escape: &[u8] = match b {
                b'"' => b"\\\"",
                b'\\' => b"\\\\",
                b'\n' => b"\\n",
                b'\r' => b"\\r",
                b'\t' => b"\\t",
                0x08 => b"\\b",
                0x0c => b"\\f",
                0x00..=0x1f => {
                    self.buf.extend_from_slice(&bytes[start..i]);
                    self.unicode_escape(b);
                    start = i + 1;
                    continue;
                }
                _ => continue,
            };
            self.buf.extend_from_slice(&bytes[start..i]);
            self.buf.extend_from_slice(escape);
            start = i + 1;
        }
        self.buf.extend_from_slice(&bytes[start..]);
        self.buf.push(b'"');
    }

    #[inline]
    pub fn bool(&mut self, v: bool) {
        self.raw_string(if v { "true" } else { "false" });
    }

    int_writers! {
        int: isize,
        int8: i8,
        int16: i16,
        int32: i32,
        int64: i64,
        uint: usize,
        uint8: u8,
        uint16: u16,
        uint32: u32,
        uint64: u64,
    }

    pub fn float32(&mut self, f: f32) {
        if f.is_finite() {
            let mut digits = ryu::Buffer::new();
            self.buf.extend_from_slice(digits.format_finite(f).as_bytes());
        } else {
            self.record(Error::NonFiniteFloat(f64::from(f)));
        }
    }

    pub fn float64(&mut self, f: f64) {
        if f.is_finite() {
            let mut digits = ryu::Buffer::new();
            self.buf.extend_from_slice(digits.format_finite(f).as_bytes());
        } else {
            self.record(Error::NonFiniteFloat(f));
        }
    }

    /// Bytes written so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// The first error recorded, if any.
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Clear output and error, keeping the allocation.
    pub fn reset(&mut self) {
        self.buf.clear();
        self.error = None;
    }

    /// Finish writing: the bytes, or the first recorded error.
    pub fn build_bytes(self) -> Result<Vec<u8>, Error> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.buf),
        }
    }

    fn record(&mut self, err: Error) {
        if self.error.is_none() {
            self.error = Some(err);
        }
    }

    fn unicode_escape(&mut self, b: u8) {
        const HEX: &[u8; 16] = b"0123456789abcdef";
        self.buf.extend_from_slice(b"\\u00");
        self.buf.push(HEX[usize::from(b >> 4)]);
        self.buf.push(HEX[usize::from(b & 0xf)]);
    }
}

#[cfg(test)]
mod tests;
