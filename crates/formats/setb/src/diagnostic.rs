use std::fmt;

/// A recoverable finding about a successfully decoded set.
///
/// None of these stop decoding; the report is still produced. Callers that
/// want them to be fatal can use [`Set::check`](crate::Set::check) or
/// inspect [`Set::diagnostics`](crate::Set::diagnostics).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A sector's type tag matches no known constant; it renders without a label.
    UnknownSectorType { sector: String, tag: i32 },
    /// A sector has too few distinct vertices for a normal; it renders as zero.
    DegenerateNormal { sector: String },
    /// Bytes left over after the last sector.
    TrailingData { offset: usize, remaining: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnknownSectorType { sector, tag } => {
                write!(f, "sector {sector:?} has unknown type tag {tag:#x}")
            }
            Diagnostic::DegenerateNormal { sector } => {
                write!(f, "sector {sector:?} is degenerate; normal set to zero")
            }
            Diagnostic::TrailingData { offset, remaining } => {
                write!(f, "{remaining} trailing bytes at offset {offset:#x}")
            }
        }
    }
}
