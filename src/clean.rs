//! Normalization of PICA+ leaf values.
//!
//! Catalogue values often carry doubled spaces, tabs or line breaks. Title
//! fields additionally bracket the non-sorting article with the markup
//! characters `¬` and `@` (`"¬The@ Journal"`), which are dropped for display.

use lazy_static::lazy_static;
use regex::Regex;

/// Characters used in titles to mark sorting-irrelevant words.
pub const TITLE_MARKUP: [char; 2] = ['¬', '@'];

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").expect("whitespace pattern is valid");
}

/// Collapse runs of whitespace into single spaces and trim both ends.
///
/// Applying it twice yields the same result as applying it once.
///
/// # Examples
///
/// ```
/// use zdb_hydra::clean::clean;
///
/// assert_eq!(clean("  Berlin :\tSpringer\n"), "Berlin : Springer");
/// ```
#[must_use]
pub fn clean(value: &str) -> String {
    WHITESPACE.replace_all(value.trim(), " ").into_owned()
}

/// Remove title markup characters, then [`clean`] the result.
///
/// # Examples
///
/// ```
/// use zdb_hydra::clean::clean_title;
///
/// assert_eq!(clean_title("¬The@ Journal of Testing"), "The Journal of Testing");
/// ```
#[must_use]
pub fn clean_title(value: &str) -> String {
    let stripped: String = value.chars().filter(|c| !TITLE_MARKUP.contains(c)).collect();
    clean(&stripped)
}
