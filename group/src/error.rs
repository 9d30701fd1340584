//! Parse and construction errors.

/// Error returned when a string is not a valid permutation in the requested
/// notation, or when an image array is not a bijection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    /// A character that is not one of the alphabet's labels.
    #[error("unknown label '{0}'")]
    UnknownLabel(char),
    /// A label written more than once.
    #[error("label '{0}' appears more than once")]
    RepeatedLabel(char),
    /// An empty pair of parentheses inside a product of cycles.
    #[error("empty cycle in a product of cycles")]
    EmptyCycle,
    /// An opening parenthesis without a matching close.
    #[error("unbalanced parentheses in '{0}'")]
    Unbalanced(String),
    /// Text that is not enclosed in a cycle.
    #[error("unexpected text '{0}' outside parentheses")]
    UnexpectedText(String),
    /// A one-line string or image array of the wrong length.
    #[error("expected {expected} labels, found {found}")]
    WrongLength {
        /// Number of labels the permutation acts on.
        expected: usize,
        /// Number of labels supplied.
        found: usize,
    },
    /// An image index outside `0..size`.
    #[error("image {image} out of range for a permutation of {size} labels")]
    ImageOutOfRange {
        /// The offending image.
        image: u8,
        /// Number of labels the permutation acts on.
        size: usize,
    },
    /// Two labels sent to the same image.
    #[error("image {0} is hit more than once")]
    RepeatedImage(u8),
    /// A notation name other than `cycle` or `one-line`.
    #[error("unknown notation '{0}' (expected 'cycle' or 'one-line')")]
    UnknownNotation(String),
}
