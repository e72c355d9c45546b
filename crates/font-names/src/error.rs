//! Error types for name extraction.

use std::{io, path::PathBuf, result};

use norad::error::FontLoadError;
use read_fonts::ReadError;

/// Errors that can occur while reading a font's names.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse font: {0}")]
    Parse(#[from] ReadError),

    #[error("failed to load UFO: {0}")]
    Ufo(#[from] FontLoadError),
}

pub type Result<T> = result::Result<T, Error>;
