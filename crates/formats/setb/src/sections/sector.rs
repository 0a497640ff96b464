use crate::cursor::Cursor;
use crate::error::Result;

/// Sector classification, stored on disk as a 32-bit tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectorType {
    None,
    Walk,
    Funnel,
    Camera,
    Special,
    Hot,
}

impl SectorType {
    pub const NONE_TAG: i32 = 0x0000;
    pub const WALK_TAG: i32 = 0x1000;
    pub const FUNNEL_TAG: i32 = 0x1100;
    pub const CAMERA_TAG: i32 = 0x2000;
    pub const SPECIAL_TAG: i32 = 0x4000;
    pub const HOT_TAG: i32 = 0x8000;

    /// Classify a raw tag. Tags are exact bit patterns, not flags.
    pub fn from_tag(tag: i32) -> Option<Self> {
        match tag {
            Self::NONE_TAG => Some(Self::None),
            Self::WALK_TAG => Some(Self::Walk),
            Self::FUNNEL_TAG => Some(Self::Funnel),
            Self::CAMERA_TAG => Some(Self::Camera),
            Self::SPECIAL_TAG => Some(Self::Special),
            Self::HOT_TAG => Some(Self::Hot),
            _ => None,
        }
    }

    pub fn tag(self) -> i32 {
        match self {
            Self::None => Self::NONE_TAG,
            Self::Walk => Self::WALK_TAG,
            Self::Funnel => Self::FUNNEL_TAG,
            Self::Camera => Self::CAMERA_TAG,
            Self::Special => Self::SPECIAL_TAG,
            Self::Hot => Self::HOT_TAG,
        }
    }

    /// Report label. `None` has no label.
    pub fn label(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Walk => Some("walk"),
            Self::Funnel => Some("funnel"),
            Self::Camera => Some("camera"),
            Self::Special => Some("special"),
            Self::Hot => Some("hot"),
        }
    }
}

/// A polygonal region of walkable or special geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Sector {
    pub name: String,
    pub id: i32,
    /// Raw type tag as stored in the file.
    pub tag: i32,
    /// Classified type, or `None` if the tag matches no known constant.
    pub kind: Option<SectorType>,
    /// Default visibility.
    pub visible: bool,
    pub height: f32,
    /// Polygon vertices in file order.
    pub vertices: Vec<[f32; 3]>,
    /// Unit normal derived from the first, second and last vertex.
    /// Zero when the polygon is degenerate.
    pub normal: [f32; 3],
    /// Whether `normal` could not be derived.
    pub degenerate: bool,
}

impl Sector {
    /// Smallest possible encoded sector: no vertices, empty name, no trailer.
    pub const MIN_SIZE: usize = 4 + 4 + 4 + 1 + 4 + 4 + 4;

    /// Parse one sector record at the cursor.
    ///
    /// Layout:
    /// ```text
    /// i32        vertex count
    /// f32×3 × n  vertices (x, y, z)
    /// i32        name length
    /// [u8; len]  name (NUL-terminated within the field)
    /// i32        id
    /// u8         default visibility
    /// i32        type tag
    /// i32        trailer length in 4-byte words
    /// [u32; n]   trailer (unused)
    /// f32        height
    /// ```
    pub fn parse(c: &mut Cursor<'_>) -> Result<Self> {
        let start = c.position();

        let num_vertices = c.read_count("vertex count")?;
        let mut vertices = Vec::with_capacity(num_vertices.min(c.remaining() / 12));
        for _ in 0..num_vertices {
            vertices.push(c.read_vec3()?);
        }

        let name_len = c.read_count("sector name length")?;
        let name = c.read_fixed_string(name_len)?;
        let id = c.read_i32()?;
        let visible = c.read_bool()?;
        let tag = c.read_i32()?;

        let trailer_words = c.read_count("sector trailer length")?;
        c.skip(trailer_words.saturating_mul(4))?;

        let height = c.read_f32()?;

        let (normal, degenerate) = match surface_normal(&vertices) {
            Some(n) => (n, false),
            None => ([0.0; 3], true),
        };

        tracing::trace!(
            name = %name,
            id,
            vertices = vertices.len(),
            bytes = c.position() - start,
            "decoded sector"
        );

        Ok(Self {
            name,
            id,
            tag,
            kind: SectorType::from_tag(tag),
            visible,
            height,
            vertices,
            normal,
            degenerate,
        })
    }

    /// Report label for the type, empty for `None` and unknown tags.
    pub fn type_label(&self) -> &'static str {
        self.kind.and_then(SectorType::label).unwrap_or("")
    }
}

/// Unit normal of the plane through v[0], v[1] and v[last], i.e.
/// `(v1 - v0) × (vlast - v0)` normalized.
///
/// Returns `None` for fewer than two vertices or a zero-length cross product.
pub fn surface_normal(vertices: &[[f32; 3]]) -> Option<[f32; 3]> {
    let [first, second, ..] = vertices else {
        return None;
    };
    let last = vertices.last()?;

    let a = sub(*second, *first);
    let b = sub(*last, *first);
    let n = [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ];

    let norm = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
    if norm == 0.0 || !norm.is_finite() {
        return None;
    }
    Some([n[0] / norm, n[1] / norm, n[2] / norm])
}

fn sub(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}
