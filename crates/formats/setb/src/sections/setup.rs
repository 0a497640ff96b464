use crate::cursor::Cursor;
use crate::error::Result;

/// Width of the fixed name field at the start of a setup.
pub const SETUP_NAME_STRIDE: usize = 128;

/// A named camera viewpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Setup {
    pub name: String,
    /// Tile image the setup is drawn over.
    pub tile: String,
    /// Background image. Not part of the current record layout.
    pub background: Option<String>,
    /// Z-buffer image. Not part of the current record layout.
    pub zbuffer: Option<String>,
    /// Camera position.
    pub position: [f32; 3],
    /// Look-at target.
    pub interest: [f32; 3],
    pub roll: f32,
    /// Field of view.
    pub fov: f32,
    /// Near clip plane.
    pub nclip: f32,
    /// Far clip plane.
    pub fclip: f32,
}

impl Setup {
    /// Smallest possible encoded setup (empty tile name).
    pub const MIN_SIZE: usize = SETUP_NAME_STRIDE + 4 + 1 + 12 + 12 + 16;

    /// Parse one setup record at the cursor.
    pub fn parse(c: &mut Cursor<'_>) -> Result<Self> {
        let name = c.read_fixed_string(SETUP_NAME_STRIDE)?;
        let _unknown = c.read_i32()?;
        let tile = c.read_cstring()?;

        let position = c.read_vec3()?;
        let interest = c.read_vec3()?;
        let roll = c.read_f32()?;
        let fov = c.read_f32()?;
        let nclip = c.read_f32()?;
        let fclip = c.read_f32()?;

        tracing::trace!(name = %name, tile = %tile, "decoded setup");

        Ok(Self {
            name,
            tile,
            background: None,
            zbuffer: None,
            position,
            interest,
            roll,
            fov,
            nclip,
            fclip,
        })
    }
}
