//! A single cycle of a permutation, and its rotation into canonical position.

use std::fmt;

use itertools::Itertools;

/// An ordered sequence of distinct elements `(c1 c2 … ck)` standing for
/// `c1 -> c2 -> … -> ck -> c1`.
///
/// The ordering derived here is the lexicographic ordering of the element sequence,
/// which is the tie-break used when sorting canonical cycles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cycle(Vec<usize>);

impl Cycle {
    pub fn new(elements: Vec<usize>) -> Self {
        Cycle(elements)
    }

    pub fn elements(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Largest element of the cycle, `None` only for an empty cycle.
    pub fn largest(&self) -> Option<usize> {
        self.0.iter().copied().max()
    }

    /// The same cycle, rotated left so that its largest element comes first.
    ///
    /// Cyclic order is preserved: elements before the maximum wrap around to the end.
    ///
    /// # Examples
    ///
    /// ```
    /// # use permcycle::Cycle;
    /// let cycle = Cycle::new(vec![2, 5, 1, 3]);
    /// assert_eq!(cycle.rotated_to_max().elements(), &[5, 1, 3, 2]);
    /// ```
    pub fn rotated_to_max(&self) -> Cycle {
        let mut rotated = self.0.clone();
        if let Some(pos) = self.0.iter().position_max() {
            rotated.rotate_left(pos);
        }
        Cycle(rotated)
    }
}

impl From<Vec<usize>> for Cycle {
    fn from(elements: Vec<usize>) -> Self {
        Cycle(elements)
    }
}

impl FromIterator<usize> for Cycle {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Cycle(iter.into_iter().collect())
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.0.iter().format(" "))
    }
}
