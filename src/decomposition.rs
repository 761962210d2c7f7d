use crate::{
    canonical::{canonical_notation, CanonicalNotation},
    cycle::Cycle,
    permutation::{Permutation, ValidationError},
};

/// Everything derived from one permutation: its cycles in discovery order and their
/// canonical notation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decomposition {
    pub permutation: Permutation,
    pub cycles: Vec<Cycle>,
    pub notation: CanonicalNotation,
}

impl Decomposition {
    pub fn new(permutation: Permutation) -> Self {
        let cycles = permutation.find_cycles();
        let notation = canonical_notation(&cycles);
        Decomposition {
            permutation,
            cycles,
            notation,
        }
    }

    pub fn one_line(&self) -> String {
        self.permutation.one_line()
    }

    /// Whether the one-line string of the permutation equals its normalized canonical
    /// notation.
    pub fn is_self_matching(&self) -> bool {
        self.notation.matches(&self.one_line())
    }
}

/// Validates `one_line` as a permutation of size `n` and decomposes it.
///
/// # Examples
///
/// ```
/// # use permcycle::decompose;
/// let d = decompose(4, "2143").unwrap();
/// assert_eq!(d.notation.canonical, "(2 1)(4 3)");
/// assert!(d.is_self_matching());
/// ```
pub fn decompose(n: usize, one_line: &str) -> Result<Decomposition, ValidationError> {
    Ok(Decomposition::new(Permutation::from_one_line(n, one_line)?))
}

/// Validates `one_line` and reports whether it spells out its own canonical notation.
pub fn is_self_matching(n: usize, one_line: &str) -> Result<bool, ValidationError> {
    Ok(decompose(n, one_line)?.is_self_matching())
}
