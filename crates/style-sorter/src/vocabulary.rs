//! Style vocabulary for the optical size, width and weight axes.
//!
//! Each axis is an ordered list of slots. A slot is a group of equivalent
//! spellings (e.g. `Cond` and `Condensed`), and its position in the list is
//! the value the axis contributes to a [`Score`](crate::Score).

/// One typographic axis: ordered synonym groups plus the slot used when a
/// name mentions none of them.
#[derive(Debug)]
pub struct Axis {
    pub name: &'static str,
    pub slots: &'static [&'static [&'static str]],
    pub fallback: usize,
}

/// Optical size, smallest/most specialized first.
pub const OPTICAL_SIZE: Axis = Axis {
    name: "opsz",
    slots: &[
        &["null"],
        &["caption", "capt"],
        &["5pt"],
        &["7pt"],
        &["smalltext", "smtxt"],
        &["text"],
        &["normal"],
        &["subhead", "subh"],
        &["display", "disp"],
        &["large"],
        &["poster"],
    ],
    fallback: 6,
};

/// Width, narrowest first.
pub const WIDTH: Axis = Axis {
    name: "wdth",
    slots: &[
        &["extracondensed", "extracond", "xcondensed", "xcond"],
        &["narrow"],
        &["condensed", "cond", "cnd"],
        &["semicondensed", "semicond", "semicnd", "semicn"],
        &["normal"],
        &["semiextended", "semiext"],
        &["extended"],
        &["expanded"],
        &["wide"],
        &["xwide", "extrawide"],
    ],
    fallback: 4,
};

/// Weight, lightest first.
pub const WEIGHT: Axis = Axis {
    name: "wght",
    slots: &[
        &["hairline", "hair"],
        &["ultralight"],
        &["thin"],
        &["extralight"],
        &["light"],
        &["semilight"],
        &["book"],
        &["regular"],
        &["medium"],
        &["semibold"],
        &["bold"],
        &["extrabold"],
        &["heavy"],
        &["black"],
        &["ultra"],
        &["fat"],
    ],
    fallback: 7,
};

/// Spellings that mark a style as italic.
pub const ITALIC_TOKENS: &[&str] = &["italic", "ital", "it"];

impl Axis {
    /// Slot index for an already lowercased name.
    ///
    /// Every slot with at least one spelling contained in the name is a
    /// candidate; the candidate whose matched spelling is longest wins, so
    /// `semibold` beats `bold` and `extracondensed` beats `condensed`. Equal
    /// lengths resolve to the lower slot.
    pub fn index_of(&self, lowercase_name: &str) -> Option<usize> {
        let mut matches: Vec<(usize, usize)> = Vec::new();
        for (index, slot) in self.slots.iter().enumerate() {
            let longest = slot
                .iter()
                .filter(|variant| lowercase_name.contains(*variant))
                .map(|variant| variant.len())
                .max();
            if let Some(len) = longest {
                matches.push((index, len));
            }
        }

        let mut best: Option<(usize, usize)> = None;
        for (index, len) in matches {
            match best {
                Some((_, best_len)) if best_len >= len => {}
                _ => best = Some((index, len)),
            }
        }
        best.map(|(index, _)| index)
    }

    /// Slot index, or the axis fallback when nothing matches.
    pub fn score(&self, lowercase_name: &str) -> usize {
        self.index_of(lowercase_name).unwrap_or(self.fallback)
    }

    /// Whether any spelling of any slot occurs in the name.
    pub fn mentioned_in(&self, lowercase_name: &str) -> bool {
        self.slots.iter().flat_map(|slot| slot.iter()).any(|v| lowercase_name.contains(v))
    }
}

/// Whether the name mentions any axis or italic token at all.
pub fn mentions_any_token(lowercase_name: &str) -> bool {
    [&OPTICAL_SIZE, &WIDTH, &WEIGHT].iter().any(|axis| axis.mentioned_in(lowercase_name))
        || ITALIC_TOKENS.iter().any(|token| lowercase_name.contains(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallbacks_point_at_neutral_slots() {
        assert_eq!(OPTICAL_SIZE.slots[OPTICAL_SIZE.fallback], &["normal"]);
        assert_eq!(WIDTH.slots[WIDTH.fallback], &["normal"]);
        assert_eq!(WEIGHT.slots[WEIGHT.fallback], &["regular"]);
    }

    #[test]
    fn vocabulary_is_lowercase() {
        for axis in [&OPTICAL_SIZE, &WIDTH, &WEIGHT] {
            for variant in axis.slots.iter().flat_map(|slot| slot.iter()) {
                assert_eq!(*variant, variant.to_lowercase(), "{} in {}", variant, axis.name);
            }
        }
    }

    #[test]
    fn longest_match_wins() {
        assert_eq!(WEIGHT.index_of("myfont-semibold"), Some(9));
        assert_eq!(WEIGHT.index_of("myfont-extrabold"), Some(11));
        assert_eq!(WEIGHT.index_of("myfont-ultralight"), Some(1));
        assert_eq!(WIDTH.index_of("myfont-extracondensed"), Some(0));
        assert_eq!(WIDTH.index_of("myfont-semicondbold"), Some(3));
        assert_eq!(WIDTH.index_of("myfont-xwide"), Some(9));
        assert_eq!(OPTICAL_SIZE.index_of("myfont-smalltext"), Some(4));
    }

    #[test]
    fn equal_length_resolves_to_lower_slot() {
        // "black" and "ultra" are both five characters long.
        assert_eq!(WEIGHT.index_of("myfont-ultrablack"), Some(13));
    }

    #[test]
    fn synonyms_share_a_slot() {
        assert_eq!(WIDTH.index_of("font-cnd"), WIDTH.index_of("font-condensed"));
        assert_eq!(OPTICAL_SIZE.index_of("font-disp"), OPTICAL_SIZE.index_of("font-display"));
        assert_eq!(WEIGHT.index_of("font-hair"), WEIGHT.index_of("font-hairline"));
    }

    #[test]
    fn no_match_uses_fallback() {
        assert_eq!(WEIGHT.index_of("acumin-whatever"), None);
        assert_eq!(WEIGHT.score("acumin-whatever"), WEIGHT.fallback);
        assert_eq!(WIDTH.score("acumin-whatever"), WIDTH.fallback);
    }

    #[test]
    fn token_mentions() {
        assert!(!mentions_any_token("acumin-whatever"));
        assert!(mentions_any_token("acumin-regular"));
        assert!(mentions_any_token("acumin-normal"));
        assert!(mentions_any_token("acumin-it"));
    }
}
