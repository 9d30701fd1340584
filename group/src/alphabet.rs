//! Ordered label sets that permutations act on.
//!
//! A permutation is stored as an array of indices; an [`Alphabet`] turns those
//! indices into the characters shown to a reader. S4 acts on [`DIGITS`], and
//! its quotient S3 acts on [`LETTERS`].

/// An ordered set of `N` distinct labels.
///
/// # Example
///
/// ```
/// use quotient_group::alphabet::{DIGITS, LETTERS};
///
/// assert_eq!(DIGITS.symbol(0), '1');
/// assert_eq!(LETTERS.index_of('c'), Some(2));
/// assert_eq!(LETTERS.index_of('d'), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet<const N: usize> {
    symbols: [char; N],
}

/// The labels `1, 2, 3, 4` (vertices of the tetrahedron).
pub const DIGITS: Alphabet<4> = Alphabet::new(['1', '2', '3', '4']);

/// The labels `a, b, c` (the three ways of pairing off the vertices).
pub const LETTERS: Alphabet<3> = Alphabet::new(['a', 'b', 'c']);

impl<const N: usize> Alphabet<N> {
    /// Creates an alphabet from `N` labels, in display order.
    #[must_use]
    pub const fn new(symbols: [char; N]) -> Self {
        Self { symbols }
    }

    /// Returns all labels in order.
    #[must_use]
    pub const fn symbols(&self) -> &[char; N] {
        &self.symbols
    }

    /// Returns the label at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[must_use]
    pub const fn symbol(&self, index: usize) -> char {
        self.symbols[index]
    }

    /// Returns the label at `index`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    /// Returns the position of `symbol`, or `None` if it is not a label.
    #[must_use]
    pub fn index_of(&self, symbol: char) -> Option<usize> {
        self.symbols.iter().position(|&s| s == symbol)
    }

    /// Concatenates the labels in order (`"1234"`, `"abc"`).
    #[must_use]
    pub fn word(&self) -> String {
        self.symbols.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_word() {
        assert_eq!(DIGITS.word(), "1234");
        assert_eq!(LETTERS.word(), "abc");
    }

    #[test]
    fn lookup_round_trips() {
        for (i, &s) in DIGITS.symbols().iter().enumerate() {
            assert_eq!(DIGITS.index_of(s), Some(i));
            assert_eq!(DIGITS.get(i), Some(s));
        }
        assert_eq!(DIGITS.get(4), None);
        assert_eq!(DIGITS.index_of('0'), None);
    }
}
