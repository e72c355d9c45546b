//! # Style Sorter
//!
//! Order font style names the way a type designer flips through a family
//! specimen: smallest optical size first, then narrowest width, lightest
//! weight, numbered duplicates, and italics either right after their roman or
//! after all romans.
//!
//! Names are matched case-insensitively against a fixed vocabulary per axis
//! (see [`vocabulary`]). A name that mentions nothing recognizable sorts after
//! every recognized style instead of colliding with `Regular`.
//!
//! ## Example
//!
//! ```
//! use style_sorter::sort_names;
//!
//! let sorted = sort_names(["MyFont-Bold", "MyFont-Regular", "MyFont-Light"], false);
//! assert_eq!(sorted, ["MyFont-Light", "MyFont-Regular", "MyFont-Bold"]);
//! ```

mod score;
mod sort;
pub mod vocabulary;

pub use score::{ITALIC_WEIGHT_OFFSET, OUTLIER, Score, is_italic, score, trailing_index};
pub use sort::{sort_fonts, sort_names};
