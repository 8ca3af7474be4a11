/// A half-open range of byte offsets `[start, end)` in an input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Constructs a new span.
    ///
    /// # Panics
    ///
    /// Panics if `start` comes after `end`.
    pub fn new(start: usize, end: usize) -> Self {
        assert!(
            start <= end,
            "Span start {} cannot come after end {}",
            start,
            end
        );
        Self { start, end }
    }
}

/// A word split from an input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    /// Word contents with all escape sequences decoded.
    pub value: String,

    /// Position of the raw word in the input. Quoted words include their quotes.
    pub span: Span,

    /// `true` if the word was delimited by quotes.
    pub quoted: bool,
}

impl Word {
    /// Constructs a new word.
    pub fn new(value: String, span: Span, quoted: bool) -> Self {
        Self {
            value,
            span,
            quoted,
        }
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.value
    }
}
