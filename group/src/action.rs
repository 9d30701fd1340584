//! Explicit actions: the pairs `x ↦ σ(x)` read straight off a notation string.
//!
//! These routines work on the displayed text rather than on a parsed
//! [`Permutation`](crate::Permutation), so they never fail: a label that does
//! not occur in any cycle is a fixed point.

use crate::alphabet::Alphabet;
use crate::notation::cycle_texts;

/// Returns `(x, σ(x))` for every label `x`, with `σ` given in cycle notation.
///
/// For each label the cycles are searched in order; if the label sits at
/// position `p` of cycle `c`, its image is `c[(p + 1) mod len(c)]`. A label
/// found in no cycle, including every label of the identity `"() = id"`, maps
/// to itself.
///
/// # Example
///
/// ```
/// use quotient_group::{action::explicit_action, alphabet::{DIGITS, LETTERS}};
///
/// assert_eq!(
///     explicit_action("(123)", &DIGITS),
///     [('1', '2'), ('2', '3'), ('3', '1'), ('4', '4')]
/// );
/// assert_eq!(
///     explicit_action("() = id", &LETTERS),
///     [('a', 'a'), ('b', 'b'), ('c', 'c')]
/// );
/// ```
#[must_use]
pub fn explicit_action<const N: usize>(cycle: &str, alphabet: &Alphabet<N>) -> [(char, char); N] {
    let cycles: Vec<Vec<char>> = cycle_texts(cycle)
        .into_iter()
        .map(|text| text.chars().collect())
        .collect();
    core::array::from_fn(|i| {
        let label = alphabet.symbol(i);
        (label, step(&cycles, label))
    })
}

/// Returns `(x, σ(x))` for every label `x`, with `σ` given in one-line
/// notation. Positions past the end of `one_line` are fixed points.
///
/// ```
/// use quotient_group::{action::one_line_action, alphabet::LETTERS};
///
/// assert_eq!(one_line_action("bca", &LETTERS), [('a', 'b'), ('b', 'c'), ('c', 'a')]);
/// ```
#[must_use]
pub fn one_line_action<const N: usize>(one_line: &str, alphabet: &Alphabet<N>) -> [(char, char); N] {
    let images: Vec<char> = one_line.chars().collect();
    core::array::from_fn(|i| {
        let label = alphabet.symbol(i);
        (label, images.get(i).copied().unwrap_or(label))
    })
}

/// Applies one step of whichever cycle contains `label`.
fn step(cycles: &[Vec<char>], label: char) -> char {
    for cycle in cycles {
        if let Some(p) = cycle.iter().position(|&c| c == label) {
            return cycle[(p + 1) % cycle.len()];
        }
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{DIGITS, LETTERS};

    #[test]
    fn double_transposition() {
        assert_eq!(
            explicit_action("(13)(24)", &DIGITS),
            [('1', '3'), ('2', '4'), ('3', '1'), ('4', '2')]
        );
    }

    #[test]
    fn four_cycle_wraps() {
        assert_eq!(
            explicit_action("(1432)", &DIGITS),
            [('1', '4'), ('2', '1'), ('3', '2'), ('4', '3')]
        );
    }

    #[test]
    fn s3_transposition_fixes_third_letter() {
        assert_eq!(
            explicit_action("(ac)", &LETTERS),
            [('a', 'c'), ('b', 'b'), ('c', 'a')]
        );
    }

    #[test]
    fn unknown_text_is_identity() {
        assert_eq!(
            explicit_action("not a cycle", &DIGITS),
            [('1', '1'), ('2', '2'), ('3', '3'), ('4', '4')]
        );
    }

    #[test]
    fn one_line_short_input_fixes_tail() {
        assert_eq!(
            one_line_action("21", &DIGITS),
            [('1', '2'), ('2', '1'), ('3', '3'), ('4', '4')]
        );
    }
}
