//! Decoder for binary scene-set files.
//!
//! A set describes one game location: camera setups, lights, and the sectors
//! (walkboxes, camera-change regions, hot spots) laid over it.
//!
//! Layers:
//! - `cursor`: bounds-checked little-endian reads
//! - `sections`: one decoder per record type
//! - `set`: the section counts and record lists, in file order
//! - `render`: the text report (`Display` on every record and on `Set`)

pub mod cursor;
pub mod diagnostic;
pub mod error;
pub mod render;
pub mod sections;
pub mod set;

pub use diagnostic::Diagnostic;
pub use error::{Error, Result};
pub use sections::light::{Light, LightType};
pub use sections::sector::{Sector, SectorType};
pub use sections::setup::Setup;
pub use sections::Record;
pub use set::Set;
