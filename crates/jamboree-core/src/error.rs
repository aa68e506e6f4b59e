//! Error types for the game-tree notation.

/// Errors that occur when parsing a game tree from its text notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// The input is empty or contains only whitespace.
    #[error("empty tree notation")]
    Empty,
    /// A character that cannot start or continue a node was found.
    #[error("unexpected character '{found}' at offset {offset}")]
    UnexpectedChar {
        /// The offending character.
        found: char,
        /// Byte offset into the input.
        offset: usize,
    },
    /// The input ended in the middle of a node.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd {
        /// What the parser was looking for.
        expected: &'static str,
    },
    /// A score literal does not fit a signed 32-bit integer.
    #[error("invalid score \"{found}\" at offset {offset}")]
    InvalidScore {
        /// The literal as written.
        found: String,
        /// Byte offset into the input.
        offset: usize,
    },
    /// A child list was opened with `(` but contains no children.
    #[error("empty child list at offset {offset}")]
    EmptyChildren {
        /// Byte offset of the opening parenthesis.
        offset: usize,
    },
    /// Input remains after the root node was fully parsed.
    #[error("trailing input at offset {offset}")]
    TrailingInput {
        /// Byte offset of the first unconsumed character.
        offset: usize,
    },
}
