//! Sort the fonts found at a path and compare against discovery order.

use std::{convert::Infallible, path::Path};

use anyhow::{Result, bail};
use log::info;
use style_sorter::{score, sort_fonts};

use crate::{
    io::sortable_paths,
    parallel::{NamedFont, read_names},
};

/// Width of the `unsorted` column.
const COLUMN_WIDTH: usize = 36;

/// Fonts at `input` in discovery order and in family order.
pub fn sort_input(
    input: &Path,
    alternate_italics: bool,
) -> Result<(Vec<NamedFont>, Vec<NamedFont>)> {
    let paths = sortable_paths(input)?;
    if paths.is_empty() {
        bail!("No UFO, OTF or TTF files found in {}", input.display());
    }
    info!("Found {} fonts in {}", paths.len(), input.display());

    let unsorted = read_names(&paths)?;
    let sorted = sort_fonts(unsorted.clone(), alternate_italics, |font| {
        Ok::<_, Infallible>(font.name.clone())
    })?;
    Ok((unsorted, sorted))
}

/// Print discovery order and family order side by side.
pub fn sort(input: &Path, alternate_italics: bool, debug: bool) -> Result<()> {
    let (unsorted, sorted) = sort_input(input, alternate_italics)?;

    println!("{:<COLUMN_WIDTH$} sorted", "unsorted");
    for (left, right) in unsorted.iter().zip(&sorted) {
        if debug {
            let key = score(&right.name, alternate_italics);
            println!("{:<COLUMN_WIDTH$} {key}  {}", left.name, right.name);
        } else {
            println!("{:<COLUMN_WIDTH$} {}", left.name, right.name);
        }
    }
    Ok(())
}
