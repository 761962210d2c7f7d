//! # Permutations
//!
//! This module provides a `Permutation` struct for small permutations written in
//! one-line notation, together with the validation rules for that notation and the
//! disjoint-cycle decomposition of the permutation's functional graph.
//!
//! ## Key Features:
//!
//! - **Representation**: A `Permutation` is stored by its direct mapping (`map[i]` is
//!   the image of `i`, zero-based). Elements are exposed one-based at the boundary,
//!   matching the one-line notation.
//! - **Construction**:
//!   - Identity permutation: `Permutation::id(n)`.
//!   - From a zero-based mapping vector: `Permutation::from_map(vec![...])`.
//!   - From a validated one-line string: `Permutation::from_one_line(n, "2143")`.
//! - **Cycles**: `p.find_cycles()` walks the functional graph `i -> p(i)` and returns
//!   one [`Cycle`] per connected component, fixed points included.
//! - **Rendering**: `p.one_line()` gives back the digit string, and `Display` prints the
//!   canonical cycle notation followed by the one-line form.
//!
//! Only sizes below [`SIZE_LIMIT`] can be written in one-line notation, since every
//! element has to fit in a single decimal digit.

use std::{fmt, ops::Index};

use bitvec::vec::BitVec;
use itertools::Itertools;
use thiserror::Error;
use tracing::debug;

use crate::{
    canonical::{canonical_notation, CanonicalNotation},
    cycle::Cycle,
};

/// Smallest size that can no longer be written one digit per element.
pub const SIZE_LIMIT: usize = 10;

/// A permutation of `1..=n`, stored zero-based.
///
/// # Examples
///
/// ```
/// use permcycle::permutation::Permutation;
///
/// // 1 -> 2, 2 -> 1, 3 -> 4, 4 -> 3
/// let p = Permutation::from_one_line(4, "2143").unwrap();
/// assert_eq!(p.image(1), 2);
/// assert_eq!(p.one_line(), "2143");
/// assert_eq!(p.to_string(), "(2 1)(4 3) [2143]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Permutation {
    map: Vec<usize>,
}

impl Permutation {
    // --------------------------------------------------------------------------------------------
    // Basic Constructors and Accessors
    // --------------------------------------------------------------------------------------------

    /// Creates the identity permutation of length `n`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use permcycle::permutation::Permutation;
    /// let p = Permutation::id(4);
    /// assert_eq!(p.one_line(), "1234");
    /// assert!(p.is_identity());
    /// ```
    pub fn id(n: usize) -> Self {
        Permutation {
            map: (0..n).collect(),
        }
    }

    /// Creates a permutation from a zero-based mapping vector: `map[i]` is the image of `i`.
    ///
    /// The caller guarantees that `map` is a bijection of `0..map.len()`. Use
    /// [`Permutation::from_one_line`] for untrusted input.
    ///
    /// # Examples
    ///
    /// ```
    /// # use permcycle::permutation::Permutation;
    /// let p = Permutation::from_map(vec![3, 2, 1, 0]);
    /// assert_eq!(p.one_line(), "4321");
    /// ```
    pub fn from_map(map: Vec<usize>) -> Self {
        Permutation { map }
    }

    /// Parses a permutation of size `n` from its one-line notation.
    ///
    /// The character at (one-based) position `i` is the image of `i`. Checks run in a
    /// fixed order and stop at the first failure: the size, then the length, then each
    /// character in turn.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::SizeTooLarge`] if `n >= 10`.
    /// - [`ValidationError::LengthMismatch`] if the string does not have `n` characters.
    /// - [`ValidationError::DigitOutOfRange`] if a character is not a digit in `1..=n`.
    /// - [`ValidationError::RepeatedDigit`] if a digit occurs twice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use permcycle::permutation::{Permutation, ValidationErrorKind};
    /// let p = Permutation::from_one_line(3, "312").unwrap();
    /// assert_eq!(p.map(), &[2, 0, 1]);
    ///
    /// let err = Permutation::from_one_line(4, "123").unwrap_err();
    /// assert_eq!(err.kind(), ValidationErrorKind::LengthMismatch);
    /// ```
    pub fn from_one_line(n: usize, one_line: &str) -> Result<Self, ValidationError> {
        if n >= SIZE_LIMIT {
            return Err(ValidationError::SizeTooLarge {
                n,
                limit: SIZE_LIMIT,
            });
        }

        let actual = one_line.chars().count();
        if actual != n {
            return Err(ValidationError::LengthMismatch {
                expected: n,
                actual,
            });
        }

        let images = one_line
            .chars()
            .enumerate()
            .map(|(i, c)| match c.to_digit(10) {
                Some(d) if (1..=n).contains(&(d as usize)) => Ok(d as usize),
                _ => Err(ValidationError::DigitOutOfRange {
                    n,
                    position: i + 1,
                    found: c,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut seen: BitVec = BitVec::repeat(false, n);
        let mut map = Vec::with_capacity(n);
        for (i, image) in images.into_iter().enumerate() {
            if seen.replace(image - 1, true) {
                return Err(ValidationError::RepeatedDigit {
                    digit: image,
                    position: i + 1,
                });
            }
            map.push(image - 1);
        }

        Ok(Permutation { map })
    }

    /// Returns the internal zero-based mapping as a slice.
    pub fn map(&self) -> &[usize] {
        &self.map
    }

    /// Number of elements being permuted.
    pub fn length(&self) -> usize {
        self.map.len()
    }

    /// One-based image of the one-based element `element`.
    ///
    /// # Panics
    ///
    /// Panics if `element` is not in `1..=self.length()`.
    pub fn image(&self, element: usize) -> usize {
        self.map[element - 1] + 1
    }

    /// Checks if this permutation is the identity permutation.
    pub fn is_identity(&self) -> bool {
        self.map.iter().enumerate().all(|(i, &m)| i == m)
    }

    // --------------------------------------------------------------------------------------------
    // Rendering
    // --------------------------------------------------------------------------------------------

    /// Renders the permutation in one-line notation: the images of `1, 2, …, n`
    /// written one after the other.
    pub fn one_line(&self) -> String {
        self.map.iter().map(|&m| m + 1).join("")
    }

    /// The edges `(i, p(i))` of the functional graph, one-based, in order of `i`.
    ///
    /// This is everything a diagram of the permutation needs; fixed points show up as
    /// self-loops.
    ///
    /// # Examples
    ///
    /// ```
    /// # use permcycle::permutation::Permutation;
    /// let p = Permutation::from_one_line(3, "213").unwrap();
    /// assert_eq!(p.edges().collect::<Vec<_>>(), vec![(1, 2), (2, 1), (3, 3)]);
    /// ```
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.map.iter().enumerate().map(|(i, &m)| (i + 1, m + 1))
    }

    // --------------------------------------------------------------------------------------------
    // Cycles
    // --------------------------------------------------------------------------------------------

    /// Returns the cycle decomposition of `self`, one-based.
    ///
    /// Each cycle lists the elements of one component of the functional graph in
    /// traversal order, e.g. `[1, 3, 2]` means `1->3, 3->2, 2->1`. Components are
    /// discovered from the smallest unvisited element upwards, so every cycle starts at
    /// its smallest element. Fixed points become cycles of length one.
    ///
    /// # Examples
    ///
    /// ```
    /// # use permcycle::permutation::Permutation;
    /// let p = Permutation::from_one_line(4, "3124").unwrap();
    /// let cycles = p.find_cycles();
    /// assert_eq!(cycles.len(), 2);
    /// assert_eq!(cycles[0].elements(), &[1, 3, 2]);
    /// assert_eq!(cycles[1].elements(), &[4]);
    /// ```
    pub fn find_cycles(&self) -> Vec<Cycle> {
        let mut visited: BitVec = BitVec::repeat(false, self.map.len());
        let mut cycles = Vec::new();
        for i in 0..self.map.len() {
            if visited[i] {
                continue;
            }
            let mut cycle = Vec::new();
            let mut j = i;
            while !visited.replace(j, true) {
                cycle.push(j + 1);
                j = self.map[j];
            }
            cycles.push(Cycle::new(cycle));
        }
        cycles
    }

    /// Canonical cycle notation of `self`, see [`canonical_notation`].
    pub fn canonical_notation(&self) -> CanonicalNotation {
        canonical_notation(&self.find_cycles())
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.canonical_notation(), self.one_line())
    }
}

impl Index<usize> for Permutation {
    type Output = usize;

    fn index(&self, index: usize) -> &Self::Output {
        &self.map()[index]
    }
}

/// Decomposes the permutation of size `n` written as `one_line` into disjoint cycles.
///
/// Validation happens before anything else, so no cycles are produced for bad input.
///
/// # Examples
///
/// ```
/// # use permcycle::extract_cycles;
/// let cycles = extract_cycles(4, "4321").unwrap();
/// let rendered: Vec<String> = cycles.iter().map(|c| c.to_string()).collect();
/// assert_eq!(rendered, vec!["(1 4)", "(2 3)"]);
/// ```
pub fn extract_cycles(n: usize, one_line: &str) -> Result<Vec<Cycle>, ValidationError> {
    let cycles = Permutation::from_one_line(n, one_line)?.find_cycles();
    debug!(n, one_line, cycles = cycles.len(), "extracted cycles");
    Ok(cycles)
}

/// Reasons a one-line permutation string is rejected.
///
/// Besides the size, length and digit-range checks, a repeated digit is rejected as
/// its own kind: a string such as `"1123"` passes the range check but is not a
/// bijection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("n must be less than {limit}, got {n}")]
    SizeTooLarge { n: usize, limit: usize },

    #[error("permutation string not of length {expected} (it has {actual} characters)")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("all digits must be between 1 and {n}, found {found:?} at position {position}")]
    DigitOutOfRange {
        n: usize,
        position: usize,
        found: char,
    },

    #[error("digit {digit} appears more than once (again at position {position})")]
    RepeatedDigit { digit: usize, position: usize },
}

/// Which validation check a [`ValidationError`] comes from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    SizeTooLarge,
    LengthMismatch,
    DigitOutOfRange,
    RepeatedDigit,
}

impl ValidationError {
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            ValidationError::SizeTooLarge { .. } => ValidationErrorKind::SizeTooLarge,
            ValidationError::LengthMismatch { .. } => ValidationErrorKind::LengthMismatch,
            ValidationError::DigitOutOfRange { .. } => ValidationErrorKind::DigitOutOfRange,
            ValidationError::RepeatedDigit { .. } => ValidationErrorKind::RepeatedDigit,
        }
    }
}
