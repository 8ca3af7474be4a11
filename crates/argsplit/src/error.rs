use thiserror::Error;

use crate::Span;

/// A specialized [`Result`] type for splitting.
pub type SplitResult<T> = Result<T, SplitError>;

/// Split errors are returned when a line cannot be split into words.
///
/// Errors are never recoverable; the whole line is rejected. All positions are byte offsets into
/// the original input line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    /// Error indicating that an unescaped quote appears within a bare word.
    ///
    /// Quotes may only open a word. Contains the position of the quote.
    #[error("unexpected quote in word at index {0}")]
    UnexpectedQuoteInWord(usize),

    /// Error indicating that the input ends within a quoted word.
    ///
    /// Contains the position of the opening quote.
    #[error("quote opened at index {0} is never closed")]
    UnterminatedQuote(usize),

    /// Error indicating that a closing quote is directly followed by a character other than
    /// whitespace.
    ///
    /// Contains the position of the character following the quote.
    #[error("expected whitespace after closing quote, found a character at index {0}")]
    MissingSpaceAfterQuote(usize),

    /// Error indicating that a backslash escapes a character other than `\` or `"`.
    ///
    /// Contains the escaped character and its position.
    #[error("cannot escape character '{0}' at index {1}")]
    IllegalEscape(char, usize),

    /// Error indicating that a backslash ends a word without escaping anything.
    ///
    /// Contains the position of the backslash.
    #[error("nothing to escape after backslash at index {0}")]
    DanglingEscape(usize),
}

impl SplitError {
    /// Returns a help text associated with the error.
    pub fn help(&self) -> &str {
        match self {
            SplitError::UnexpectedQuoteInWord(_) => "quotes may only start a word",
            SplitError::UnterminatedQuote(_) => "this quote is never closed",
            SplitError::MissingSpaceAfterQuote(_) => "expected whitespace after a closing quote",
            SplitError::IllegalEscape(_, _) => "only '\\' and '\"' can be escaped",
            SplitError::DanglingEscape(_) => "this backslash escapes nothing",
        }
    }

    /// Returns the positional span in which the error resides.
    pub fn span(&self) -> Span {
        match *self {
            SplitError::UnexpectedQuoteInWord(pos)
            | SplitError::UnterminatedQuote(pos)
            | SplitError::MissingSpaceAfterQuote(pos)
            | SplitError::DanglingEscape(pos) => Span::new(pos, pos + 1),

            // Include the backslash preceding the escaped character.
            SplitError::IllegalEscape(ch, pos) => {
                Span::new(pos.saturating_sub(1), pos + ch.len_utf8())
            }
        }
    }
}
