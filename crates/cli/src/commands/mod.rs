//! CLI command implementations.

mod family;
mod score;
mod sort;

pub use family::{family, family_name};
pub use score::score_names;
pub use sort::{sort, sort_input};
