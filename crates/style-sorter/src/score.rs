//! Per-name sort scores.

use std::{fmt, num::IntErrorKind, sync::LazyLock};

use regex::Regex;

use crate::vocabulary::{ITALIC_TOKENS, OPTICAL_SIZE, WEIGHT, WIDTH, mentions_any_token};

/// Added to the weight of italic styles when italics trail the romans.
pub const ITALIC_WEIGHT_OFFSET: u16 = 100;

/// Axis value given to names that mention no known style token.
pub const OUTLIER: u16 = 999;

static WORD_UNITS: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"[A-Z]+[a-z]*|[a-z]+").unwrap()
});

static TRAILING_DIGITS: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"([0-9]+)$").unwrap()
});

/// Sort key of a single style name.
///
/// Fields compare in declaration order, so the derived `Ord` sorts by optical
/// size, then width, weight, trailing index, and finally the italic bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score {
    pub optical: u16,
    pub width: u16,
    pub weight: u16,
    pub index: u32,
    pub italic: bool,
}

impl Score {
    /// Neutral default on every axis (what `Regular` scores).
    pub const DEFAULT: Self = Self {
        optical: OPTICAL_SIZE.fallback as u16,
        width: WIDTH.fallback as u16,
        weight: WEIGHT.fallback as u16,
        index: 0,
        italic: false,
    };

    /// Score a style name.
    ///
    /// With `alternate_italics` an italic sits right after its roman, since
    /// the two differ only in the last component. Without it the italic's
    /// weight is pushed past every roman weight of the family.
    pub fn of(name: &str, alternate_italics: bool) -> Self {
        let lowercase = name.to_lowercase();
        let italic = is_italic(name);

        let mut score = Self {
            optical: OPTICAL_SIZE.score(&lowercase) as u16,
            width: WIDTH.score(&lowercase) as u16,
            weight: WEIGHT.score(&lowercase) as u16,
            index: trailing_index(name),
            italic,
        };

        if italic && !alternate_italics {
            score.weight += ITALIC_WEIGHT_OFFSET;
        }

        if score.axes() == Self::DEFAULT.axes() && !mentions_any_token(&lowercase) {
            score.optical = OUTLIER;
            score.width = OUTLIER;
            score.weight = OUTLIER;
        }

        score
    }

    /// The optical size, width and weight components.
    pub fn axes(&self) -> (u16, u16, u16) {
        (self.optical, self.width, self.weight)
    }

    /// Whether the name was pushed to the end as unrecognizable.
    pub fn is_outlier(&self) -> bool {
        self.axes() == (OUTLIER, OUTLIER, OUTLIER)
    }

    /// Fixed-width decimal encoding, e.g. `006004007000` for `Regular`.
    ///
    /// The index field holds two digits; larger indices are clamped in the
    /// key (the `Ord` impl still sees the full value).
    pub fn sort_key(&self) -> String {
        format!(
            "{:03}{:03}{:03}{:02}{}",
            self.optical,
            self.width,
            self.weight,
            self.index.min(99),
            u8::from(self.italic)
        )
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sort_key())
    }
}

/// Score a style name. See [`Score::of`].
pub fn score(name: &str, alternate_italics: bool) -> Score {
    Score::of(name, alternate_italics)
}

/// Whether a name carries an italic token as a discrete word.
///
/// Words are split at separators, digits and lower-to-upper case changes:
/// `BoldIt` and `Bold-Italic` are italic, `Whitney` and `Digital` are not.
/// All-lowercase or all-caps concatenations count when they end in `italic`,
/// or in `it`/`ital` right after a weight or width (`BOLDIT`, `condital`).
pub fn is_italic(name: &str) -> bool {
    WORD_UNITS.find_iter(name).any(|unit| {
        let unit = unit.as_str().to_lowercase();
        ITALIC_TOKENS.contains(&unit.as_str())
            || unit.ends_with("italic")
            || ["ital", "it"].iter().any(|suffix| {
                unit.strip_suffix(suffix).is_some_and(|stem| ends_with_style_token(stem))
            })
    })
}

fn ends_with_style_token(stem: &str) -> bool {
    [&WEIGHT, &WIDTH]
        .iter()
        .flat_map(|axis| axis.slots.iter().flat_map(|slot| slot.iter()))
        .any(|token| stem.ends_with(token))
}

/// Index from a trailing ASCII digit run (`Font-Regular2` -> 2), or 0.
///
/// Runs too long for a `u32` saturate.
pub fn trailing_index(name: &str) -> u32 {
    let Some(digits) = TRAILING_DIGITS.captures(name).and_then(|caps| caps.get(1)) else {
        return 0;
    };
    match digits.as_str().parse() {
        Ok(index) => index,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => u32::MAX,
        Err(_) => 0,
    }
}
