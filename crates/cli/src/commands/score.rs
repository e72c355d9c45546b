//! Print sort keys for style names given on the command line.

use style_sorter::{Score, sort_names};

/// `(key, name)` pairs in family order.
pub fn score_names(names: &[String], alternate_italics: bool) -> Vec<(Score, String)> {
    sort_names(names, alternate_italics)
        .into_iter()
        .map(|name| (Score::of(&name, alternate_italics), name))
        .collect()
}
