//! Text report for decoded sets.
//!
//! The report is tab-delimited, with floats in fixed-point notation at six
//! digits. Two parts of the layout are legacy output kept verbatim so reports
//! stay diffable against earlier dumps:
//!
//! - the colormaps section is always empty, since colormaps are not stored in
//!   the set file;
//! - the lights section always says `numlights 0`, whatever the real count.

use std::fmt;

use crate::sections::light::Light;
use crate::sections::sector::Sector;
use crate::sections::setup::Setup;
use crate::sections::Record;
use crate::set::Set;

fn fmt_vec3(v: &[f32; 3], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:.6}\t{:.6}\t{:.6}", v[0], v[1], v[2])
}

impl fmt::Display for Setup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\tname\t{}", self.name)?;
        write!(f, "\tposition\t")?;
        fmt_vec3(&self.position, f)?;
        writeln!(f)?;
        write!(f, "\tinterest\t")?;
        fmt_vec3(&self.interest, f)?;
        writeln!(f)?;
        writeln!(f, "\troll\t{:.6}", self.roll)?;
        writeln!(f, "\tfov\t{:.6}", self.fov)?;
        writeln!(f, "\tnclip\t{:.6}", self.nclip)?;
        writeln!(f, "\tfclip\t{:.6}", self.fclip)
    }
}

impl fmt::Display for Light {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Light records aren't decoded, so there is nothing to print.
        Ok(())
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\tsector\t{}", self.name)?;
        writeln!(f, "\tID\t{}", self.id)?;
        writeln!(f, "\ttype\t{}", self.type_label())?;
        let visibility = if self.visible { "visible" } else { "invisible" };
        writeln!(f, "\tdefault visibility\t{visibility}")?;
        writeln!(f, "\theight\t{:.6}", self.height)?;
        writeln!(f, "\tnumvertices\t{}", self.vertices.len())?;
        write!(f, "\tnormal\t\t\t")?;
        fmt_vec3(&self.normal, f)?;
        writeln!(f)?;
        write!(f, "\tvertices:\t\t")?;
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, "\t\t\t\t")?;
            }
            fmt_vec3(v, f)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Record::Setup(setup) => fmt::Display::fmt(setup, f),
            Record::Light(light) => fmt::Display::fmt(light, f),
            Record::Sector(sector) => fmt::Display::fmt(sector, f),
        }
    }
}

impl fmt::Display for Set {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "section: colormaps")?;

        writeln!(f, "section: setups")?;
        writeln!(f, "\tnumsetups {}", self.setups().len())?;
        for setup in self.setups() {
            write!(f, "{setup}\n\n")?;
        }

        writeln!(f, "section: lights")?;
        writeln!(f, "\tnumlights 0")?;
        for light in self.lights() {
            write!(f, "{light}\n\n")?;
        }

        writeln!(f, "section: sectors")?;
        for sector in self.sectors() {
            write!(f, "{sector}\n\n")?;
        }
        Ok(())
    }
}
