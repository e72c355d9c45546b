//! Font sorting CLI library.

pub mod cli;
pub mod commands;
pub mod io;
pub mod parallel;

pub use font_names::{name_overlap, postscript_name};
pub use style_sorter::{Score, sort_fonts, sort_names};
