use crate::cursor::Cursor;
use crate::diagnostic::Diagnostic;
use crate::error::{Error, Result};
use crate::sections::light::{Light, LIGHT_RECORD_SIZE};
use crate::sections::sector::Sector;
use crate::sections::setup::Setup;
use crate::sections::Record;

/// A decoded scene set.
///
/// Sections are stored in file order. Each section is preceded in the stream
/// by an i32 count, and that count alone decides how many records are read:
///
/// ```text
/// i32 setup count,  setups
/// i32 light count,  lights
/// i32 sector count, sectors
/// ```
///
/// The whole file is decoded eagerly through one shared cursor, since every
/// record's start depends on the length of everything before it.
#[derive(Debug, Clone, PartialEq)]
pub struct Set {
    setups: Vec<Setup>,
    lights: Vec<Light>,
    sectors: Vec<Sector>,
    /// Cursor position after the last sector.
    end: usize,
    /// Length of the input.
    len: usize,
}

impl Set {
    /// Decode a complete set from raw file bytes.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let mut c = Cursor::new(data);

        let setups = read_section(&mut c, "setup count", Setup::MIN_SIZE, Setup::parse)?;
        let lights = read_section(&mut c, "light count", LIGHT_RECORD_SIZE, Light::parse)?;
        let sectors = read_section(&mut c, "sector count", Sector::MIN_SIZE, Sector::parse)?;

        tracing::debug!(
            setups = setups.len(),
            lights = lights.len(),
            sectors = sectors.len(),
            consumed = c.position(),
            len = c.len(),
            "decoded set"
        );

        Ok(Self {
            setups,
            lights,
            sectors,
            end: c.position(),
            len: c.len(),
        })
    }

    pub fn setups(&self) -> &[Setup] {
        &self.setups
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn sectors(&self) -> &[Sector] {
        &self.sectors
    }

    /// Every record in report order: setups, then lights, then sectors.
    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        self.setups
            .iter()
            .map(Record::Setup)
            .chain(self.lights.iter().map(Record::Light))
            .chain(self.sectors.iter().map(Record::Sector))
    }

    /// Recoverable findings, in file order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let mut out = Vec::new();
        for sector in &self.sectors {
            if sector.kind.is_none() {
                out.push(Diagnostic::UnknownSectorType {
                    sector: sector.name.clone(),
                    tag: sector.tag,
                });
            }
            if sector.degenerate {
                out.push(Diagnostic::DegenerateNormal {
                    sector: sector.name.clone(),
                });
            }
        }
        if self.end < self.len {
            out.push(Diagnostic::TrailingData {
                offset: self.end,
                remaining: self.len - self.end,
            });
        }
        out
    }

    /// Reject sectors whose type tag is unknown.
    pub fn check(&self) -> Result<()> {
        match self.sectors.iter().find(|s| s.kind.is_none()) {
            Some(sector) => Err(Error::UnknownSectorType {
                sector: sector.name.clone(),
                tag: sector.tag,
            }),
            None => Ok(()),
        }
    }
}

/// Read a count followed by that many records.
fn read_section<'a, T>(
    c: &mut Cursor<'a>,
    field: &'static str,
    min_size: usize,
    parse: impl Fn(&mut Cursor<'a>) -> Result<T>,
) -> Result<Vec<T>> {
    let count = c.read_count(field)?;
    // A corrupt count can't reserve more than the input could possibly hold.
    let mut records = Vec::with_capacity(count.min(c.remaining() / min_size));
    for _ in 0..count {
        records.push(parse(c)?);
    }
    Ok(records)
}
