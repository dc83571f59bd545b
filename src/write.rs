use zerocopy::byteorder::{self, LittleEndian};

use crate::{Error, Result};

/// Append-only little-endian output buffer used by every encoder.
///
/// Fixed-width writes cannot fail. Writes that carry a length prefix return
/// [`Error::InvalidLength`] when the length does not fit the wire format.
#[derive(Debug, Default, Clone)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    #[inline]
    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }

    #[inline]
    pub fn write_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    #[inline]
    pub fn write_bool(&mut self, value: bool) {
        self.buf.push(value as u8);
    }

    #[inline]
    pub fn write_i32(&mut self, value: i32) {
        self.buf
            .extend_from_slice(&byteorder::I32::<LittleEndian>::new(value).to_bytes());
    }

    #[inline]
    pub fn write_i64(&mut self, value: i64) {
        self.buf
            .extend_from_slice(&byteorder::I64::<LittleEndian>::new(value).to_bytes());
    }

    #[inline]
    pub fn write_f32(&mut self, value: f32) {
        self.buf
            .extend_from_slice(&byteorder::F32::<LittleEndian>::new(value).to_bytes());
    }

    #[inline]
    pub fn write_f64(&mut self, value: f64) {
        self.buf
            .extend_from_slice(&byteorder::F64::<LittleEndian>::new(value).to_bytes());
    }

    /// Raw bytes, no prefix.
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Element count or blob length as an `i32` prefix.
    pub fn write_len(&mut self, len: usize) -> Result<()> {
        let len = i32::try_from(len).map_err(|_| Error::InvalidLength(len as i64))?;
        self.write_i32(len);
        Ok(())
    }

    /// UTF-8 string prefixed with its byte length as a 7-bit encoded integer.
    pub fn write_string(&mut self, value: &str) -> Result<()> {
        let len = value.len();
        if i32::try_from(len).is_err() {
            return Err(Error::InvalidLength(len as i64));
        }
        let mut remaining = len as u32;
        while remaining >= 0x80 {
            self.buf.push((remaining as u8) | 0x80);
            remaining >>= 7;
        }
        self.buf.push(remaining as u8);
        self.buf.extend_from_slice(value.as_bytes());
        Ok(())
    }
}

impl From<Writer> for Vec<u8> {
    #[inline]
    fn from(writer: Writer) -> Self {
        writer.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitives_are_little_endian() {
        let mut w = Writer::new();
        w.write_i32(1);
        w.write_i64(-2);
        w.write_f32(1.0);
        assert_eq!(&w.as_slice()[..4], &[1, 0, 0, 0]);
        assert_eq!(&w.as_slice()[4..12], &(-2i64).to_le_bytes());
        assert_eq!(&w.as_slice()[12..], &1.0f32.to_le_bytes());
    }

    #[test]
    fn test_string_prefix_uses_seven_bit_length() {
        let mut w = Writer::new();
        w.write_string("hi").unwrap();
        assert_eq!(w.as_slice(), &[2, b'h', b'i']);

        let long = "a".repeat(300);
        let mut w = Writer::new();
        w.write_string(&long).unwrap();
        // 300 = 0b10_0101100 -> 0xAC 0x02
        assert_eq!(&w.as_slice()[..2], &[0xAC, 0x02]);
        assert_eq!(w.len(), 302);
    }

    #[test]
    fn test_bool_encoding() {
        let mut w = Writer::new();
        w.write_bool(true);
        w.write_bool(false);
        assert_eq!(w.into_inner(), vec![1, 0]);
    }
}
