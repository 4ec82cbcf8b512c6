//! Shannon entropy over the character distribution of a string

use std::collections::BTreeMap;

/// Computes the Shannon entropy of `value` in bits per character.
///
/// Probabilities are the empirical per-character frequencies of `value`.
/// Returns 0.0 for the empty string and for strings made of a single repeated
/// character; a string of `n` distinct characters scores `log2(n)`.
///
/// Character counts are accumulated in an ordered map so the floating point sum
/// is evaluated in the same order on every call.
///
/// # Examples
///
/// ```
/// use tokentrail_domain::shannon_entropy;
///
/// assert_eq!(shannon_entropy(""), 0.0);
/// assert_eq!(shannon_entropy("aaaa"), 0.0);
/// assert!((shannon_entropy("abcd") - 2.0).abs() < 1e-12);
/// ```
pub fn shannon_entropy(value: &str) -> f64 {
    if value.is_empty() {
        return 0.0;
    }

    let mut counts: BTreeMap<char, usize> = BTreeMap::new();
    let mut len = 0usize;
    for c in value.chars() {
        *counts.entry(c).or_insert(0) += 1;
        len += 1;
    }

    let len = len as f64;
    counts
        .values()
        .map(|&count| {
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: entropy is bounded by log2 of the number of distinct chars
        #[test]
        fn test_entropy_bounds(s in "\\PC{0,64}") {
            let distinct = s.chars().collect::<std::collections::BTreeSet<_>>().len();
            let e = shannon_entropy(&s);
            prop_assert!(e >= 0.0);
            if distinct > 0 {
                prop_assert!(e <= (distinct as f64).log2() + 1e-9);
            }
        }

        /// Property: all-distinct strings are maximal among equal-length strings
        #[test]
        fn test_distinct_chars_maximal(s in "[a-z]{1,26}") {
            let n = s.chars().count();
            let distinct: String = ('a'..='z').take(n).collect();
            prop_assert!(shannon_entropy(&s) <= shannon_entropy(&distinct) + 1e-9);
        }

        /// Property: entropy does not depend on character order
        #[test]
        fn test_permutation_invariant(s in "[A-Za-z0-9]{0,40}") {
            let reversed: String = s.chars().rev().collect();
            prop_assert_eq!(shannon_entropy(&s), shannon_entropy(&reversed));
        }
    }
}
