/// Character opening and closing a quoted word.
pub(crate) const QUOTE_CHAR: char = '"';

/// Character escaping the character that follows it.
pub(crate) const ESCAPE_CHAR: char = '\\';

/// Returns `true` if a character separates words.
pub fn is_whitespace(ch: char) -> bool {
    ch.is_whitespace()
}

/// Returns `true` if a character delimits a quoted word.
pub(crate) fn is_quote(ch: char) -> bool {
    ch == QUOTE_CHAR
}

/// Returns `true` if a character starts an escape sequence.
pub(crate) fn is_escape(ch: char) -> bool {
    ch == ESCAPE_CHAR
}

/// Returns `true` if a character must be escaped to appear literally within a word.
pub(crate) fn needs_escape(ch: char) -> bool {
    is_quote(ch) || is_escape(ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_follows_char_classification() {
        for ch in [' ', '\t', '\n', '\r', '\u{000B}', '\u{000C}', '\u{0085}', '\u{2028}'] {
            assert!(is_whitespace(ch), "{ch:?} should be whitespace");
        }
        for ch in ['a', '"', '\\', '-', '\u{200B}'] {
            assert!(!is_whitespace(ch), "{ch:?} should not be whitespace");
        }
    }

    #[test]
    fn only_quotes_and_backslashes_need_escapes() {
        assert!(needs_escape('"'));
        assert!(needs_escape('\\'));
        assert!(!needs_escape('\''));
        assert!(!needs_escape(' '));
    }
}
