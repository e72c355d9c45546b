//! PostScript name extraction for binary fonts and UFO sources.
//!
//! The name of a font is what proofs are titled and sorted by. Binary fonts
//! use name ID 6; UFOs use `postscriptFontName`. Both fall back to a name
//! synthesized from family and style.

mod binary;
mod error;
mod ufo;

use std::{fs, path::Path};

use log::warn;

pub use binary::postscript_name_from_data;
pub use error::{Error, Result};

/// PostScript name of a font file or UFO.
///
/// A binary font without any usable name records is named after its file
/// stem.
pub fn postscript_name(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    if is_ufo(path) {
        return ufo::postscript_name(path);
    }

    let data = fs::read(path).map_err(|source| Error::Io { path: path.to_owned(), source })?;
    match postscript_name_from_data(&data)? {
        Some(name) => Ok(name),
        None => {
            warn!("{}: no name records, using the file name", path.display());
            Ok(file_stem(path))
        }
    }
}

/// Whether the path names a UFO source (by suffix).
pub fn is_ufo(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("ufo"))
}

/// `"{family}-{style}"` with spaces removed (`Source Sans 3`, `Semi Bold` ->
/// `SourceSans3-SemiBold`).
pub fn synthesize_postscript_name(family: &str, style: &str) -> String {
    format!("{}-{}", family.replace(' ', ""), style.replace(' ', ""))
}

/// Shared leading part of a set of names, without surrounding dashes.
///
/// ```
/// use font_names::name_overlap;
///
/// assert_eq!(name_overlap(["SourceSans3-Regular", "SourceSans3-Bold"]), "SourceSans3");
/// ```
pub fn name_overlap<I, S>(names: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut names = names.into_iter();
    let Some(first) = names.next() else {
        return String::new();
    };

    let mut prefix: Vec<char> = first.as_ref().chars().collect();
    for name in names {
        let shared = prefix.iter().zip(name.as_ref().chars()).take_while(|(a, b)| *a == b).count();
        prefix.truncate(shared);
    }

    prefix.into_iter().collect::<String>().trim_matches('-').to_string()
}

fn file_stem(path: &Path) -> String {
    path.file_stem().map(|stem| stem.to_string_lossy().into_owned()).unwrap_or_default()
}
