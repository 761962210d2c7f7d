//! # Permcycle
//!
//! Permcycle decomposes small permutations, written in one-line notation, into
//! disjoint cycles and puts that decomposition into a canonical textual form.
//!
//! The canonical form makes it possible to ask a curious question: which
//! permutations of `1..=n` spell out their own cycle notation? `2143` does, because
//! its canonical cycle notation is `(2 1)(4 3)`. The [`search`] module answers the
//! question exhaustively.
//!
//! ```
//! use permcycle::{canonical_notation, extract_cycles, find_self_matching_permutations};
//!
//! let cycles = extract_cycles(4, "4321").unwrap();
//! let notation = canonical_notation(&cycles);
//! assert_eq!(notation.canonical, "(3 2)(4 1)");
//! assert!(!notation.matches("4321"));
//!
//! assert!(find_self_matching_permutations(4).contains(&"2143".to_string()));
//! ```

pub mod canonical;
pub mod cycle;
pub mod decomposition;
pub mod permutation;
pub mod search;

pub use canonical::{canonical_notation, normalize, CanonicalNotation};
pub use cycle::Cycle;
pub use decomposition::{decompose, is_self_matching, Decomposition};
pub use permutation::{
    extract_cycles, Permutation, ValidationError, ValidationErrorKind, SIZE_LIMIT,
};
pub use search::{find_self_matching_permutations, self_matching, SelfMatching};
