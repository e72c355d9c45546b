//! Shared family name of the fonts at a path.

use std::path::Path;

use anyhow::{Result, bail};
use font_names::name_overlap;

use crate::{io::sortable_paths, parallel::read_names};

/// Common PostScript name prefix of all fonts at `input`.
pub fn family_name(input: &Path) -> Result<String> {
    let paths = sortable_paths(input)?;
    if paths.is_empty() {
        bail!("No UFO, OTF or TTF files found in {}", input.display());
    }
    let fonts = read_names(&paths)?;
    Ok(name_overlap(fonts.iter().map(|font| &font.name)))
}

pub fn family(input: &Path) -> Result<()> {
    println!("{}", family_name(input)?);
    Ok(())
}
