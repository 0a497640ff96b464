pub mod light;
pub mod sector;
pub mod setup;

use self::light::Light;
use self::sector::Sector;
use self::setup::Setup;

/// Any record of a set, borrowed from its owning [`Set`](crate::Set).
///
/// Records share one capability: rendering themselves as report text
/// (see the `Display` impls in [`render`](crate::render)).
#[derive(Debug, Clone, Copy)]
pub enum Record<'a> {
    Setup(&'a Setup),
    Light(&'a Light),
    Sector(&'a Sector),
}
