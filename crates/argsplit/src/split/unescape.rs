use std::borrow::Cow;

use crate::input::{is_escape, needs_escape};
use crate::{SplitError, SplitResult};

/// Decodes the escape sequences `\\` and `\"` in a raw word body.
///
/// `offset` is the position of `raw` within the input line, making error positions absolute.
/// Bodies without backslashes are returned as-is.
///
/// # Errors
///
/// Returns [`SplitError::IllegalEscape`] if a backslash escapes any other character, and
/// [`SplitError::DanglingEscape`] if the body ends with an unpaired backslash.
pub fn unescape(raw: &str, offset: usize) -> SplitResult<Cow<'_, str>> {
    if !raw.chars().any(is_escape) {
        return Ok(Cow::Borrowed(raw));
    }

    let mut unescaped = String::with_capacity(raw.len());
    let mut chars = raw.char_indices();
    while let Some((pos, ch)) = chars.next() {
        if !is_escape(ch) {
            unescaped.push(ch);
            continue;
        }

        match chars.next() {
            Some((_, escaped)) if needs_escape(escaped) => unescaped.push(escaped),
            Some((pos, escaped)) => return Err(SplitError::IllegalEscape(escaped, offset + pos)),
            None => return Err(SplitError::DanglingEscape(offset + pos)),
        }
    }

    Ok(Cow::Owned(unescaped))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_borrows_plain_bodies() {
        assert!(matches!(unescape("plain", 0), Ok(Cow::Borrowed("plain"))));
        assert!(matches!(unescape("", 7), Ok(Cow::Borrowed(""))));
    }

    #[test]
    fn it_decodes_escapes() {
        assert_eq!(unescape(r#"qu\"ck"#, 0).unwrap(), r#"qu"ck"#);
        assert_eq!(unescape(r"qu\\ck", 0).unwrap(), r"qu\ck");
        assert_eq!(unescape(r#"\\\""#, 0).unwrap(), r#"\""#);
        assert_eq!(unescape(r"\\\\", 0).unwrap(), r"\\");
    }

    #[test]
    fn it_reports_absolute_positions() {
        assert_eq!(
            unescape(r"\quick", 4),
            Err(SplitError::IllegalEscape('q', 5))
        );
        assert_eq!(unescape(r"fox\", 16), Err(SplitError::DanglingEscape(19)));
        assert_eq!(
            unescape(r"a\\b\n", 10),
            Err(SplitError::IllegalEscape('n', 15))
        );
    }

    #[test]
    fn it_reports_byte_positions_after_multibyte_chars() {
        assert_eq!(unescape(r"é\x", 0), Err(SplitError::IllegalEscape('x', 3)));
        assert_eq!(unescape("\\é", 2), Err(SplitError::IllegalEscape('é', 3)));
    }
}
