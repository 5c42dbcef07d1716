//! Similarity ratios on the 0–100 scale.
//!
//! Two ratios with different jobs: [`simple_ratio`] is a normalized
//! edit-distance comparison of raw text, used for exact-duplicate detection;
//! [`token_set_ratio`] ignores word order and repeated words, used for
//! near-duplicate warnings and search ranking.

use rapidfuzz::fuzz;

use super::normalize::{clean, token_set};

/// The highest possible similarity score.
///
/// With truncation, `simple_ratio` reaches it only for identical text;
/// `token_set_ratio` reaches it when one text's token set contains the
/// other's.
pub const MAX_SCORE: u32 = 100;

/// Raw normalized indel similarity, 0.0–100.0.
fn indel_ratio(a: &str, b: &str) -> f64 {
    // rapidfuzz returns a 0.0–1.0 ratio; scale to this crate's 0–100 range.
    fuzz::ratio(a.chars(), b.chars()) * 100.0
}

/// Scores drop the fractional part rather than rounding, so 100 stays
/// reserved for a perfect match.
fn truncate(score: f64) -> u32 {
    debug_assert!((0.0..=100.0).contains(&score));
    score as u32
}

/// Edit-distance similarity of the raw strings, truncated to an integer.
pub fn simple_ratio(a: &str, b: &str) -> u32 {
    truncate(indel_ratio(a, b))
}

/// Whether two texts are exact duplicates under the similarity metric.
pub(crate) fn is_exact(a: &str, b: &str) -> bool {
    // The normalized ratio hits 100.0 only at edit distance zero.
    indel_ratio(a, b) >= 100.0
}

/// Word-order- and duplicate-insensitive similarity, truncated to an integer.
///
/// Both texts are cleaned and reduced to sorted unique token sets; the score
/// is the best edit-distance ratio among the intersection and the two
/// intersection-plus-difference combinations. "go to paris" and "paris to
/// go" therefore score 100, while texts with disjoint vocabulary score low.
/// A text with no tokens left after cleaning scores 0 against everything.
pub fn token_set_ratio(a: &str, b: &str) -> u32 {
    let cleaned_a = clean(a);
    let cleaned_b = clean(b);
    let tokens_a = token_set(&cleaned_a);
    let tokens_b = token_set(&cleaned_b);
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0;
    }

    let shared = join(tokens_a.intersection(&tokens_b));
    let only_a = join(tokens_a.difference(&tokens_b));
    let only_b = join(tokens_b.difference(&tokens_a));

    let shared_plus_a = concat(&shared, &only_a);
    let shared_plus_b = concat(&shared, &only_b);

    let best = indel_ratio(&shared, &shared_plus_a)
        .max(indel_ratio(&shared, &shared_plus_b))
        .max(indel_ratio(&shared_plus_a, &shared_plus_b));
    truncate(best)
}

fn join<'a>(tokens: impl Iterator<Item = &'a &'a str>) -> String {
    tokens.copied().collect::<Vec<_>>().join(" ")
}

fn concat(head: &str, tail: &str) -> String {
    if head.is_empty() {
        tail.to_string()
    } else if tail.is_empty() {
        head.to_string()
    } else {
        format!("{} {}", head, tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case("climb everest", "climb everest")]
    #[case("", "")]
    fn identical_text_is_exact(#[case] a: &str, #[case] b: &str) {
        check!(is_exact(a, b));
        check!(simple_ratio(a, b) == MAX_SCORE);
    }

    #[rstest]
    #[case("climb everest", "climb everests")]
    #[case("go to paris", "paris to go")]
    fn different_text_is_not_exact(#[case] a: &str, #[case] b: &str) {
        check!(!is_exact(a, b));
        check!(simple_ratio(a, b) < MAX_SCORE);
    }

    #[test]
    fn token_set_ignores_order_and_duplicates() {
        check!(token_set_ratio("go to paris", "paris to go") == MAX_SCORE);
        check!(token_set_ratio("go go to paris", "go to paris") == MAX_SCORE);
        check!(token_set_ratio("Go To Paris!", "go to paris") == MAX_SCORE);
    }

    #[test]
    fn disjoint_vocabulary_scores_low() {
        let score = token_set_ratio("climb everest", "buy a kayak");
        check!(score < 50, "disjoint texts scored {}", score);
        check!(score != MAX_SCORE);
    }

    #[test]
    fn empty_after_cleaning_scores_zero() {
        check!(token_set_ratio("?!", "go to paris") == 0);
        check!(token_set_ratio("", "") == 0);
    }

    #[test]
    fn subset_text_scores_high() {
        // The intersection-vs-superset comparison is what makes a contained
        // phrase score well.
        let score = token_set_ratio("visit paris", "visit paris in the spring");
        check!(score == MAX_SCORE);
    }
}
