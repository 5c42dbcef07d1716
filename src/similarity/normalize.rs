//! Text normalization for token-set comparison.

use std::collections::BTreeSet;

/// Lowercases and replaces every non-alphanumeric character with a space.
///
/// This is the preprocessing the token-set ratio applies so that "Go to
/// Paris!" and "go-to-paris" tokenize identically. The plain ratio
/// deliberately skips it: exact-duplicate detection compares raw text.
pub(crate) fn clean(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .flat_map(char::to_lowercase)
        .collect()
}

/// Splits cleaned text into its set of unique tokens.
///
/// A `BTreeSet` keeps the tokens sorted, which the token-set ratio relies on
/// when it joins subsets back into comparable strings.
pub(crate) fn token_set(cleaned: &str) -> BTreeSet<&str> {
    cleaned.split_whitespace().collect()
}
