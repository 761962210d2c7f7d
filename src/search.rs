//! # Self-matching search
//!
//! A permutation is *self-matching* when its one-line notation reads exactly like its
//! canonical cycle notation with the punctuation removed. `2143` is one: its canonical
//! notation is `(2 1)(4 3)`. `4321` is not: it gives `(3 2)(4 1)`.
//!
//! The search walks all `n!` permutations of `1..=n` in lexicographic order and runs
//! each through cycle extraction and canonicalization. Candidates are generated
//! directly, never parsed, so the search itself cannot fail; the one-digit-per-element
//! property only makes sense for `n <= 9`, and larger `n` just means a very long walk.

use std::ops::RangeInclusive;

use itertools::{structs::Permutations, Itertools};
use tracing::{debug, trace};

use crate::{decomposition::Decomposition, permutation::Permutation};

/// Lazy iterator over the self-matching permutations of `1..=n`, in lexicographic
/// order of their one-line strings.
pub struct SelfMatching {
    n: usize,
    candidates: Permutations<RangeInclusive<usize>>,
    examined: usize,
}

impl SelfMatching {
    pub fn new(n: usize) -> Self {
        SelfMatching {
            n,
            candidates: (1..=n).permutations(n),
            examined: 0,
        }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of candidates looked at so far.
    pub fn examined(&self) -> usize {
        self.examined
    }
}

impl Iterator for SelfMatching {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        for images in self.candidates.by_ref() {
            self.examined += 1;
            let permutation = Permutation::from_map(images.iter().map(|&e| e - 1).collect());
            let decomposition = Decomposition::new(permutation);
            if decomposition.is_self_matching() {
                let one_line = decomposition.one_line();
                trace!(n = self.n, %one_line, notation = %decomposition.notation, "self-matching");
                return Some(one_line);
            }
        }
        None
    }
}

/// Lazy form of [`find_self_matching_permutations`].
pub fn self_matching(n: usize) -> SelfMatching {
    SelfMatching::new(n)
}

/// All self-matching permutations of size `n`, in enumeration order.
///
/// # Examples
///
/// ```
/// # use permcycle::find_self_matching_permutations;
/// assert_eq!(
///     find_self_matching_permutations(4),
///     vec!["1234", "1243", "1324", "2134", "2143"]
/// );
/// ```
pub fn find_self_matching_permutations(n: usize) -> Vec<String> {
    let mut search = self_matching(n);
    let found: Vec<String> = search.by_ref().collect();
    debug!(
        n,
        examined = search.examined(),
        found = found.len(),
        "self-matching search finished"
    );
    found
}
