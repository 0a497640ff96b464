use crate::error::{Error, Result};

/// Forward-only read cursor over a byte slice. All reads are little-endian.
///
/// Every read checks the remaining length first and fails with
/// [`Error::TruncatedInput`] instead of running off the end of the buffer.
#[derive(Clone)]
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current byte position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Total length of underlying data.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether we've reached the end.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Remaining bytes from current position.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Skip `n` bytes forward.
    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.ensure(n)?;
        self.pos += n;
        Ok(())
    }

    /// Read a slice of `n` bytes without copying.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        self.ensure(n)?;
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        self.ensure(1)?;
        let v = self.data[self.pos];
        self.pos += 1;
        Ok(v)
    }

    /// Read a one-byte flag; any non-zero value is `true`.
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        let bytes = self.read_bytes(4)?;
        Ok(i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        let bytes = self.read_bytes(4)?;
        Ok(f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Read three consecutive floats (x, y, z).
    pub fn read_vec3(&mut self) -> Result<[f32; 3]> {
        Ok([self.read_f32()?, self.read_f32()?, self.read_f32()?])
    }

    /// Read an i32 count or length field, rejecting negative values.
    pub fn read_count(&mut self, field: &'static str) -> Result<usize> {
        let offset = self.pos;
        let value = self.read_i32()?;
        usize::try_from(value).map_err(|_| Error::InvalidCount {
            offset,
            field,
            value,
        })
    }

    /// Read a string stored in a fixed-size field of `stride` bytes.
    ///
    /// The string runs up to the first NUL byte, wherever that is; the cursor
    /// then advances by exactly `stride`. The terminator may sit inside the
    /// padding or, in malformed files, beyond it.
    pub fn read_fixed_string(&mut self, stride: usize) -> Result<String> {
        let (s, _) = self.peek_cstring()?;
        self.skip(stride)?;
        Ok(s)
    }

    /// Read a NUL-terminated string and advance past the terminator.
    pub fn read_cstring(&mut self) -> Result<String> {
        let (s, len) = self.peek_cstring()?;
        // peek_cstring found the terminator, so content + NUL is in bounds.
        self.pos += len + 1;
        Ok(s)
    }

    /// Decode the C string at the current position without moving.
    /// Returns the string and its on-disk length (excluding the NUL).
    fn peek_cstring(&self) -> Result<(String, usize)> {
        let rest = &self.data[self.pos.min(self.data.len())..];
        let Some(end) = rest.iter().position(|&b| b == 0) else {
            return Err(Error::UnterminatedString { offset: self.pos });
        };
        Ok((decode_name(&rest[..end]), end))
    }

    fn ensure(&self, n: usize) -> Result<()> {
        if n > self.remaining() {
            return Err(Error::TruncatedInput {
                offset: self.pos,
                need: n,
                have: self.remaining(),
            });
        }
        Ok(())
    }
}

/// Names are ASCII in shipped files. Anything that isn't valid UTF-8 is read
/// as Latin-1 so a stray byte never aborts the whole set.
fn decode_name(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_owned(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

/// Little-endian buffer builder used to assemble test inputs.
#[cfg(test)]
pub(crate) struct Writer {
    buf: Vec<u8>,
}

#[cfg(test)]
impl Writer {
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    pub fn write_u8(&mut self, v: u8) -> &mut Self {
        self.buf.push(v);
        self
    }

    pub fn write_i32(&mut self, v: i32) -> &mut Self {
        self.buf.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn write_f32(&mut self, v: f32) -> &mut Self {
        self.buf.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn write_vec3(&mut self, v: [f32; 3]) -> &mut Self {
        self.write_f32(v[0]).write_f32(v[1]).write_f32(v[2])
    }

    /// Write `s` NUL-padded into a field of exactly `stride` bytes.
    pub fn write_fixed_string(&mut self, s: &str, stride: usize) -> &mut Self {
        assert!(s.len() < stride);
        self.buf.extend_from_slice(s.as_bytes());
        self.buf.resize(self.buf.len() + stride - s.len(), 0);
        self
    }

    pub fn write_cstring(&mut self, s: &str) -> &mut Self {
        self.buf.extend_from_slice(s.as_bytes());
        self.buf.push(0);
        self
    }

    pub fn finish(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.buf)
    }
}
