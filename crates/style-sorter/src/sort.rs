//! Ordering of style names and of the fonts that carry them.

use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;
use log::{debug, trace};

use crate::score::Score;

/// Sort style names into family order.
///
/// Each distinct name is scored once. Names that share a score are ordered
/// lexicographically, which also keeps duplicates next to each other, and the
/// groups are emitted by ascending score. The result is a permutation of the
/// input.
pub fn sort_names<I, S>(names: I, alternate_italics: bool) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut scores: HashMap<String, Score> = HashMap::new();
    let mut groups: BTreeMap<Score, Vec<String>> = BTreeMap::new();

    for name in names {
        let name = name.as_ref();
        let score = *scores.entry(name.to_owned()).or_insert_with(|| {
            let score = Score::of(name, alternate_italics);
            trace!("{score} {name}");
            score
        });
        groups.entry(score).or_default().push(name.to_owned());
    }

    debug!("sorted {} names into {} score groups", scores.len(), groups.len());

    groups
        .into_values()
        .flat_map(|mut group| {
            group.sort();
            group
        })
        .collect()
}

/// Sort font handles by the style name of each font.
///
/// `style_name` extracts the name of one font; several fonts may resolve to
/// the same name (an OTF and a TTF of the same design) and are kept together
/// in their input order. Zero or one font is returned as is without calling
/// `style_name`. The first extraction error aborts the sort.
pub fn sort_fonts<T, E, F>(
    fonts: Vec<T>,
    alternate_italics: bool,
    mut style_name: F,
) -> Result<Vec<T>, E>
where
    F: FnMut(&T) -> Result<String, E>,
{
    if fonts.len() <= 1 {
        return Ok(fonts);
    }

    let mut by_name: IndexMap<String, Vec<T>> = IndexMap::new();
    for font in fonts {
        let name = style_name(&font)?;
        by_name.entry(name).or_default().push(font);
    }

    let order = sort_names(by_name.keys(), alternate_italics);
    let mut sorted = Vec::new();
    for name in order {
        if let Some(group) = by_name.swap_remove(&name) {
            sorted.extend(group);
        }
    }
    Ok(sorted)
}
