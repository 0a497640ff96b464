use crate::cursor::Cursor;
use crate::error::Result;

/// Encoded size of a light record.
pub const LIGHT_RECORD_SIZE: usize = 100;

/// Light kinds named by the format. Light records are not decoded yet, so
/// nothing produces these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightType {
    Omni,
    Direct,
}

/// An undecoded light record.
///
/// The field layout inside the 100 bytes is unknown. The raw bytes are kept
/// as-is; no name, position, color or cone values are extracted.
#[derive(Clone, PartialEq, Eq)]
pub struct Light {
    raw: [u8; LIGHT_RECORD_SIZE],
}

impl Light {
    /// Consume one light record at the cursor.
    pub fn parse(c: &mut Cursor<'_>) -> Result<Self> {
        let mut raw = [0u8; LIGHT_RECORD_SIZE];
        raw.copy_from_slice(c.read_bytes(LIGHT_RECORD_SIZE)?);
        Ok(Self { raw })
    }

    /// The undecoded record bytes.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }
}

impl std::fmt::Debug for Light {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Light")
            .field("size", &self.raw.len())
            .finish_non_exhaustive()
    }
}
