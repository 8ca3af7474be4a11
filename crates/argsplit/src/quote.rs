use std::borrow::Cow;

use crate::input::{is_escape, is_whitespace, needs_escape, ESCAPE_CHAR, QUOTE_CHAR};

/// Quotes a word so that splitting the result yields the word again.
///
/// Words without whitespace are escaped in place. Empty words and words containing whitespace
/// are escaped and surrounded by quotes.
///
/// Returns `None` for words that need quotes and end with a backslash: the escaped backslash
/// would be read as escaping the closing quote.
pub fn quote(word: &str) -> Option<Cow<'_, str>> {
    let needs_quotes = word.is_empty() || word.chars().any(is_whitespace);
    if !needs_quotes {
        return Some(escape(word));
    }

    if word.chars().last().map_or(false, is_escape) {
        return None;
    }

    let mut quoted = String::with_capacity(word.len() + 2);
    quoted.push(QUOTE_CHAR);
    quoted.push_str(&escape(word));
    quoted.push(QUOTE_CHAR);
    Some(Cow::Owned(quoted))
}

/// Quotes all words and joins them into a single line separated by spaces.
///
/// Returns `None` if any word cannot be quoted, see [`quote`].
pub fn join<I, S>(words: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut line = String::new();
    for (index, word) in words.into_iter().enumerate() {
        if index > 0 {
            line.push(' ');
        }
        line.push_str(&quote(word.as_ref())?);
    }

    Some(line)
}

/// Escapes all quotes and backslashes in a word.
fn escape(word: &str) -> Cow<'_, str> {
    if !word.chars().any(needs_escape) {
        return Cow::Borrowed(word);
    }

    let mut escaped = String::with_capacity(word.len() + 2);
    for ch in word.chars() {
        if needs_escape(ch) {
            escaped.push(ESCAPE_CHAR);
        }
        escaped.push(ch);
    }

    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::split;

    #[test]
    fn it_borrows_plain_words() {
        assert!(matches!(quote("plain"), Some(Cow::Borrowed("plain"))));
    }

    #[test]
    fn it_escapes_bare_words() {
        assert_eq!(quote(r#"qu"ck"#).as_deref(), Some(r#"qu\"ck"#));
        assert_eq!(quote(r"C:\Dev").as_deref(), Some(r"C:\\Dev"));
        assert_eq!(quote(r"fox\").as_deref(), Some(r"fox\\"));
    }

    #[test]
    fn it_quotes_empty_words_and_whitespace() {
        assert_eq!(quote("").as_deref(), Some(r#""""#));
        assert_eq!(quote("brown fox").as_deref(), Some(r#""brown fox""#));
        assert_eq!(quote("say \"hi\"").as_deref(), Some(r#""say \"hi\"""#));
    }

    #[test]
    fn it_rejects_quoted_words_ending_with_backslash() {
        assert_eq!(quote(r"brown fox\"), None);
        assert_eq!(join(["ok", r"not ok\"]), None);
    }

    #[test]
    fn joined_words_split_into_the_same_words() {
        let words = ["the", "", "brown fox", r#"qu"ck"#, r"back\slash", "tab\there", "\""];
        let line = join(words).expect("words should be quotable");
        assert_eq!(split(&line), Ok(words.iter().map(ToString::to_string).collect()));
    }
}
