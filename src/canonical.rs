//! # Canonical cycle notation
//!
//! A permutation has many equivalent cycle-notation strings: every cycle can start at
//! any of its elements and the cycles can be listed in any order. The canonical form
//! fixes both choices:
//!
//! 1. every cycle is rotated so that its largest element comes first,
//! 2. cycles are sorted by `(largest element, rotated sequence)`,
//! 3. each cycle is written as `(e1 e2 … ek)` and the cycles are concatenated.
//!
//! With no cycles at all the canonical form is `()`.
//!
//! The *normalized* form strips parentheses, commas and whitespace from the canonical
//! form, leaving the bare sequence of elements. It is only a comparison key against a
//! one-line permutation string.

use std::{fmt, sync::LazyLock};

use itertools::Itertools;
use regex::Regex;

use crate::cycle::Cycle;

/// Canonical form of a permutation without any cycles.
pub const EMPTY_NOTATION: &str = "()";

static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[(),\s]").expect("punctuation pattern is a valid regex"));

/// Canonical cycle notation together with its punctuation-free counterpart.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CanonicalNotation {
    pub canonical: String,
    pub normalized: String,
}

impl CanonicalNotation {
    /// Whether `one_line` spells out exactly the elements of the canonical notation.
    pub fn matches(&self, one_line: &str) -> bool {
        self.normalized == one_line
    }
}

impl From<CanonicalNotation> for (String, String) {
    fn from(notation: CanonicalNotation) -> Self {
        (notation.canonical, notation.normalized)
    }
}

impl fmt::Display for CanonicalNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

/// Rotates every cycle to start at its maximum and sorts them into canonical order.
///
/// The sort key is the pair `(max, rotated cycle)`. Maxima of the cycles of one
/// permutation are all distinct, so the second component only matters for cycle lists
/// that do not come from a single permutation.
pub fn canonical_order(cycles: &[Cycle]) -> Vec<Cycle> {
    cycles
        .iter()
        .map(|cycle| {
            let rotated = cycle.rotated_to_max();
            (rotated.largest(), rotated)
        })
        .sorted()
        .map(|(_, rotated)| rotated)
        .collect()
}

/// Builds the canonical and normalized notation of a list of cycles.
///
/// # Examples
///
/// ```
/// # use permcycle::{canonical_notation, Cycle};
/// let cycles = vec![Cycle::new(vec![1, 4]), Cycle::new(vec![2, 3])];
/// let notation = canonical_notation(&cycles);
/// assert_eq!(notation.canonical, "(3 2)(4 1)");
/// assert_eq!(notation.normalized, "3241");
///
/// let (canonical, normalized) = canonical_notation(&[]).into();
/// assert_eq!(canonical, "()");
/// assert_eq!(normalized, "");
/// ```
pub fn canonical_notation(cycles: &[Cycle]) -> CanonicalNotation {
    let canonical = if cycles.is_empty() {
        EMPTY_NOTATION.to_string()
    } else {
        canonical_order(cycles).iter().join("")
    };
    let normalized = normalize(&canonical);
    CanonicalNotation {
        canonical,
        normalized,
    }
}

/// Removes every `(`, `)`, `,` and whitespace character.
///
/// ```
/// # use permcycle::normalize;
/// assert_eq!(normalize("(3 2)(4 1)"), "3241");
/// assert_eq!(normalize("(1, 2) (3)"), "123");
/// ```
pub fn normalize(notation: &str) -> String {
    PUNCTUATION.replace_all(notation, "").into_owned()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn cycles(raw: &[&[usize]]) -> Vec<Cycle> {
        raw.iter().map(|c| Cycle::new(c.to_vec())).collect()
    }

    #[test]
    fn test_identity() {
        let notation = canonical_notation(&cycles(&[&[1], &[2], &[3], &[4]]));
        insta::assert_snapshot!(&notation, @"(1)(2)(3)(4)");
        assert_eq!(notation.normalized, "1234");
        assert!(notation.matches("1234"));
    }

    #[test]
    fn test_two_transpositions() {
        let notation = canonical_notation(&cycles(&[&[1, 2], &[3, 4]]));
        insta::assert_snapshot!(&notation, @"(2 1)(4 3)");
        assert!(notation.matches("2143"));
    }

    #[test]
    fn test_reversal_does_not_match() {
        let notation = canonical_notation(&cycles(&[&[1, 4], &[2, 3]]));
        insta::assert_snapshot!(&notation, @"(3 2)(4 1)");
        assert_eq!(notation.normalized, "3241");
        assert!(!notation.matches("4321"));
    }

    #[test]
    fn test_empty() {
        let notation = canonical_notation(&[]);
        assert_eq!(notation.canonical, EMPTY_NOTATION);
        assert_eq!(notation.normalized, "");
        assert!(notation.matches(""));
    }

    #[test]
    fn test_fixed_points_sort_between_longer_cycles() {
        let notation = canonical_notation(&cycles(&[&[6, 2, 5], &[3], &[1, 4]]));
        insta::assert_snapshot!(&notation, @"(3)(4 1)(6 2 5)");
    }

    #[test]
    fn test_tie_break_on_equal_maxima() {
        // not a permutation, but the order must still be total and deterministic
        let order = canonical_order(&cycles(&[&[1, 5, 3], &[5, 2], &[5, 1]]));
        assert_eq!(order, cycles(&[&[5, 1], &[5, 2], &[5, 3, 1]]));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("(1)(2)"), "12");
        assert_eq!(normalize("( 9,\t8 )\n(7)"), "987");
        assert_eq!(normalize("()"), "");
    }

    fn cycle_list_strategy() -> impl Strategy<Value = Vec<Vec<usize>>> {
        (1usize..=9)
            .prop_flat_map(|n| Just((1..=n).collect::<Vec<_>>()).prop_shuffle())
            .prop_flat_map(|elements| {
                let n = elements.len();
                (Just(elements), prop::collection::vec(any::<bool>(), n))
            })
            .prop_map(|(elements, cuts)| {
                let mut list = Vec::new();
                let mut current = Vec::new();
                for (element, cut) in elements.into_iter().zip(cuts) {
                    current.push(element);
                    if cut {
                        list.push(std::mem::take(&mut current));
                    }
                }
                if !current.is_empty() {
                    list.push(current);
                }
                list
            })
    }

    proptest! {
        #[test]
        fn canonical_form_ignores_cycle_order_and_rotation(
            list in cycle_list_strategy(),
            seed in any::<u64>(),
        ) {
            let expected = canonical_notation(
                &list.iter().cloned().map(Cycle::new).collect::<Vec<_>>(),
            );

            let mut shuffled: Vec<Cycle> = list
                .iter()
                .enumerate()
                .map(|(i, c)| {
                    let mut c = c.clone();
                    let shift = (seed as usize).wrapping_add(i * 7) % c.len();
                    c.rotate_left(shift);
                    Cycle::new(c)
                })
                .collect();
            shuffled.reverse();
            let k = (seed as usize) % shuffled.len();
            shuffled.rotate_left(k);

            prop_assert_eq!(canonical_notation(&shuffled), expected);
        }

        #[test]
        fn normalized_form_has_one_token_per_element(list in cycle_list_strategy()) {
            let n: usize = list.iter().map(Vec::len).sum();
            let notation = canonical_notation(
                &list.into_iter().map(Cycle::new).collect::<Vec<_>>(),
            );
            prop_assert_eq!(notation.normalized.len(), n);
            prop_assert!(notation.normalized.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
