//! Reader for LAB resource archives.
//!
//! A LAB file is a flat, uncompressed bundle of named resources:
//!
//! ```text
//! 0x00  magic "LABN"
//! 0x04  u32 version
//! 0x08  u32 entry count
//! 0x0c  u32 string table size
//! 0x10  entries, 16 bytes each:
//!         u32 name offset (into the string table)
//!         u32 data start (absolute)
//!         u32 data size
//!         u32 reserved
//!       string table: NUL-terminated names
//! ```
//!
//! All fields are little-endian. Name lookup ignores ASCII case.

pub mod error;

use std::path::Path;

pub use error::{Error, Result};

/// Magic bytes at the start of every archive.
const LAB_MAGIC: [u8; 4] = *b"LABN";

const HEADER_SIZE: usize = 16;
const ENTRY_SIZE: usize = 16;

/// A single resource in the archive.
#[derive(Debug, Clone)]
pub struct LabEntry {
    pub name: String,
    /// Absolute byte offset of the resource data.
    pub offset: usize,
    /// Size of the resource data.
    pub size: usize,
}

/// An archive loaded into memory.
pub struct Lab {
    data: Vec<u8>,
    entries: Vec<LabEntry>,
}

impl Lab {
    /// Read and index an archive from disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let lab = Self::parse(data)?;
        tracing::debug!(path = %path.display(), entries = lab.len(), "opened archive");
        Ok(lab)
    }

    /// Index an archive from its raw bytes.
    pub fn parse(data: Vec<u8>) -> Result<Self> {
        let head = slice(&data, 0, 4)?;
        let magic = [head[0], head[1], head[2], head[3]];
        if magic != LAB_MAGIC {
            return Err(Error::InvalidMagic {
                expected: LAB_MAGIC,
                found: magic,
            });
        }
        let _version = read_u32(&data, 4)?;
        let count = read_u32(&data, 8)? as usize;
        let strings_size = read_u32(&data, 12)? as usize;

        let strings_start = count
            .checked_mul(ENTRY_SIZE)
            .and_then(|n| n.checked_add(HEADER_SIZE))
            .ok_or(Error::TruncatedInput {
                offset: HEADER_SIZE,
                need: usize::MAX,
                have: data.len().saturating_sub(HEADER_SIZE),
            })?;
        let strings = slice(&data, strings_start, strings_size)?;

        let mut entries = Vec::with_capacity(count);
        for index in 0..count {
            let at = HEADER_SIZE + index * ENTRY_SIZE;
            let name_offset = read_u32(&data, at)? as usize;
            let offset = read_u32(&data, at + 4)? as usize;
            let size = read_u32(&data, at + 8)? as usize;

            let name = entry_name(strings, name_offset).ok_or(Error::InvalidNameOffset {
                index,
                offset: name_offset,
            })?;
            // Entry data must lie inside the archive.
            slice(&data, offset, size)?;

            entries.push(LabEntry { name, offset, size });
        }

        Ok(Self { data, entries })
    }

    /// All entries in archive order.
    pub fn entries(&self) -> &[LabEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find an entry by name, ignoring ASCII case.
    pub fn find(&self, name: &str) -> Option<&LabEntry> {
        self.entries.iter().find(|e| e.name.eq_ignore_ascii_case(name))
    }

    /// The bytes of a named entry.
    pub fn get(&self, name: &str) -> Option<&[u8]> {
        let entry = self.find(name)?;
        self.data.get(entry.offset..entry.offset + entry.size)
    }
}

impl std::fmt::Debug for Lab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lab")
            .field("size", &self.data.len())
            .field("entries", &self.entries.len())
            .finish()
    }
}

/// Fetch the full contents of `name`, from `lab` if given, otherwise from the
/// filesystem.
pub fn load(name: &str, lab: Option<&Lab>) -> Result<Vec<u8>> {
    match lab {
        Some(lab) => lab
            .get(name)
            .map(<[u8]>::to_vec)
            .ok_or_else(|| Error::SourceUnavailable {
                name: name.to_owned(),
                source: None,
            }),
        None => std::fs::read(name).map_err(|source| Error::SourceUnavailable {
            name: name.to_owned(),
            source: Some(source),
        }),
    }
}

fn slice(data: &[u8], offset: usize, len: usize) -> Result<&[u8]> {
    offset
        .checked_add(len)
        .and_then(|end| data.get(offset..end))
        .ok_or(Error::TruncatedInput {
            offset,
            need: len,
            have: data.len().saturating_sub(offset),
        })
}

fn read_u32(data: &[u8], offset: usize) -> Result<u32> {
    let b = slice(data, offset, 4)?;
    Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
}

fn entry_name(strings: &[u8], offset: usize) -> Option<String> {
    let rest = strings.get(offset..)?;
    let end = rest.iter().position(|&b| b == 0)?;
    Some(String::from_utf8_lossy(&rest[..end]).into_owned())
}
