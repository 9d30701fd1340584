//! Cycle and one-line notation.
//!
//! Cycle notation writes a permutation as a product of disjoint cycles:
//! `(12)(34)`, `(123)`. Labels that do not move are omitted, and the identity
//! is written `"() = id"`. One-line notation lists the image of each label in
//! order: `(123)` is `2314`.

use core::fmt;
use core::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::alphabet::Alphabet;
use crate::error::NotationError;
use crate::permutation::Permutation;

/// How the identity is written in cycle notation.
pub const IDENTITY: &str = "() = id";

/// Other spellings of the identity accepted by [`parse_cycles`].
const IDENTITY_ALIASES: [&str; 4] = [IDENTITY, "()", "id", "e"];

/// The two notations a permutation can be displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Notation {
    /// Product of disjoint cycles, e.g. `(123)`.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "cycle"))]
    Cycle,
    /// Images of the labels in order, e.g. `2314`.
    #[cfg_attr(feature = "serde", serde(rename = "one-line"))]
    OneLine,
}

impl Notation {
    /// Both notations, cycle first.
    pub const ALL: [Notation; 2] = [Notation::Cycle, Notation::OneLine];

    /// The selector value: `"cycle"` or `"one-line"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Notation::Cycle => "cycle",
            Notation::OneLine => "one-line",
        }
    }

    /// The label shown next to the selector.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Notation::Cycle => "Cycle notation",
            Notation::OneLine => "One-line notation",
        }
    }

    /// Writes `permutation` in this notation.
    #[must_use]
    pub fn format<const N: usize>(
        self,
        permutation: &Permutation<N>,
        alphabet: &Alphabet<N>,
    ) -> String {
        match self {
            Notation::Cycle => permutation.cycle_notation(alphabet),
            Notation::OneLine => permutation.one_line(alphabet),
        }
    }

    /// Parses `text` in this notation.
    ///
    /// # Errors
    ///
    /// As [`parse_cycles`] or [`parse_one_line`].
    pub fn parse<const N: usize>(
        self,
        text: &str,
        alphabet: &Alphabet<N>,
    ) -> Result<Permutation<N>, NotationError> {
        match self {
            Notation::Cycle => parse_cycles(text, alphabet),
            Notation::OneLine => parse_one_line(text, alphabet),
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Notation {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "cycle" => Ok(Notation::Cycle),
            "one-line" | "oneline" | "one_line" => Ok(Notation::OneLine),
            other => Err(NotationError::UnknownNotation(other.to_string())),
        }
    }
}

/// Returns the text inside each pair of parentheses, in order.
///
/// Empty parentheses contribute nothing, so the identity `"() = id"` yields
/// no cycles.
///
/// ```
/// use quotient_group::notation::cycle_texts;
///
/// assert_eq!(cycle_texts("(12)(34)"), vec!["12", "34"]);
/// assert!(cycle_texts("() = id").is_empty());
/// ```
#[must_use]
pub fn cycle_texts(text: &str) -> Vec<&str> {
    cycle_pattern()
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
        .collect()
}

#[allow(clippy::expect_used)]
fn cycle_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\(([^)]+)\)").expect("cycle pattern is a valid regex"))
}

/// Parses a product of disjoint cycles.
///
/// Accepts the identity as `"() = id"`, `"()"`, `"id"` or `"e"`. Singleton
/// cycles such as `(1)` are allowed and fix their label.
///
/// # Errors
///
/// Returns a [`NotationError`] for labels outside the alphabet, labels that
/// appear twice, empty cycles, unbalanced parentheses, or text outside
/// parentheses.
///
/// ```
/// use quotient_group::{alphabet::DIGITS, notation::parse_cycles};
///
/// let sigma = parse_cycles("(12)(34)", &DIGITS).unwrap();
/// assert_eq!(sigma.one_line(&DIGITS), "2143");
/// assert!(parse_cycles("(12)(23)", &DIGITS).is_err());
/// ```
pub fn parse_cycles<const N: usize>(
    text: &str,
    alphabet: &Alphabet<N>,
) -> Result<Permutation<N>, NotationError> {
    let trimmed = text.trim();
    if IDENTITY_ALIASES.contains(&trimmed) {
        return Ok(Permutation::identity());
    }

    let mut images = *Permutation::<N>::identity().images();
    let mut seen = [false; N];
    let mut rest = trimmed;

    while !rest.is_empty() {
        let body_and_rest = rest
            .strip_prefix('(')
            .ok_or_else(|| NotationError::UnexpectedText(rest.to_string()))?;
        let close = body_and_rest
            .find(')')
            .ok_or_else(|| NotationError::Unbalanced(trimmed.to_string()))?;
        let body = &body_and_rest[..close];
        if body.is_empty() {
            return Err(NotationError::EmptyCycle);
        }

        let mut cycle = Vec::with_capacity(body.len());
        for symbol in body.chars() {
            let index = alphabet
                .index_of(symbol)
                .ok_or(NotationError::UnknownLabel(symbol))?;
            if seen[index] {
                return Err(NotationError::RepeatedLabel(symbol));
            }
            seen[index] = true;
            cycle.push(index);
        }
        for (k, &from) in cycle.iter().enumerate() {
            images[from] = cycle[(k + 1) % cycle.len()] as u8;
        }

        rest = &body_and_rest[close + 1..];
    }

    Permutation::from_images(images)
}

/// Parses one-line notation: exactly `N` distinct labels.
///
/// # Errors
///
/// Returns a [`NotationError`] for the wrong number of labels, labels outside
/// the alphabet, or repeated labels.
///
/// ```
/// use quotient_group::{alphabet::LETTERS, notation::parse_one_line};
///
/// let tau = parse_one_line("bca", &LETTERS).unwrap();
/// assert_eq!(tau.cycle_notation(&LETTERS), "(abc)");
/// ```
pub fn parse_one_line<const N: usize>(
    text: &str,
    alphabet: &Alphabet<N>,
) -> Result<Permutation<N>, NotationError> {
    let symbols: Vec<char> = text.trim().chars().collect();
    if symbols.len() != N {
        return Err(NotationError::WrongLength {
            expected: N,
            found: symbols.len(),
        });
    }

    let mut images = [0u8; N];
    let mut seen = [false; N];
    for (slot, &symbol) in images.iter_mut().zip(&symbols) {
        let index = alphabet
            .index_of(symbol)
            .ok_or(NotationError::UnknownLabel(symbol))?;
        if seen[index] {
            return Err(NotationError::RepeatedLabel(symbol));
        }
        seen[index] = true;
        *slot = index as u8;
    }

    Permutation::from_images(images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{DIGITS, LETTERS};

    #[test]
    fn notation_names() {
        assert_eq!("cycle".parse::<Notation>(), Ok(Notation::Cycle));
        assert_eq!("one-line".parse::<Notation>(), Ok(Notation::OneLine));
        assert_eq!(Notation::OneLine.to_string(), "one-line");
        assert!(matches!(
            "matrix".parse::<Notation>(),
            Err(NotationError::UnknownNotation(_))
        ));
    }

    #[test]
    fn cycle_texts_skips_identity() {
        assert_eq!(cycle_texts("(1234)"), vec!["1234"]);
        assert_eq!(cycle_texts("(abc)"), vec!["abc"]);
        assert!(cycle_texts("()").is_empty());
    }

    #[test]
    fn parses_products() {
        let sigma = parse_cycles("(13)(24)", &DIGITS).unwrap();
        assert_eq!(sigma.images(), &[2, 3, 0, 1]);
        let tau = parse_cycles("(1432)", &DIGITS).unwrap();
        assert_eq!(tau.one_line(&DIGITS), "4123");
    }

    #[test]
    fn identity_spellings() {
        for text in ["() = id", "()", "id", " e "] {
            assert!(parse_cycles(text, &DIGITS).unwrap().is_identity(), "{text}");
        }
    }

    #[test]
    fn singleton_cycle_is_fixed_point() {
        let sigma = parse_cycles("(1)(23)", &DIGITS).unwrap();
        assert_eq!(sigma.cycle_notation(&DIGITS), "(23)");
    }

    #[test]
    fn rejects_malformed_cycles() {
        assert_eq!(
            parse_cycles("(15)", &DIGITS),
            Err(NotationError::UnknownLabel('5'))
        );
        assert_eq!(
            parse_cycles("(12)(13)", &DIGITS),
            Err(NotationError::RepeatedLabel('1'))
        );
        assert_eq!(parse_cycles("(12)()", &DIGITS), Err(NotationError::EmptyCycle));
        assert!(matches!(
            parse_cycles("(123", &DIGITS),
            Err(NotationError::Unbalanced(_))
        ));
        assert!(matches!(
            parse_cycles("12", &DIGITS),
            Err(NotationError::UnexpectedText(_))
        ));
        assert!(parse_cycles("(12) ", &DIGITS).is_ok());
    }

    #[test]
    fn one_line_parsing() {
        assert_eq!(parse_one_line("2314", &DIGITS).unwrap().cycle_notation(&DIGITS), "(123)");
        assert_eq!(
            parse_one_line("123", &DIGITS),
            Err(NotationError::WrongLength { expected: 4, found: 3 })
        );
        assert_eq!(
            parse_one_line("aab", &LETTERS),
            Err(NotationError::RepeatedLabel('a'))
        );
        assert_eq!(
            parse_one_line("abd", &LETTERS),
            Err(NotationError::UnknownLabel('d'))
        );
    }

    #[test]
    fn format_matches_parse() {
        let sigma = Notation::Cycle.parse("(142)", &DIGITS).unwrap();
        assert_eq!(Notation::OneLine.format(&sigma, &DIGITS), "4132");
        assert_eq!(Notation::Cycle.format(&sigma, &DIGITS), "(142)");
    }
}
