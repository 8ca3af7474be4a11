use tracing::debug;

use crate::{SplitResult, Word};

use self::splitter::Splitter;

mod splitter;
mod unescape;


pub use unescape::unescape;

/// Splits a line of input into words.
///
/// Words are separated by whitespace. Text within double quotes forms a single word, and the
/// escape sequences `\\` and `\"` are decoded within both bare and quoted words.
///
/// # Errors
///
/// This function will return an error if the line is malformed. No words are returned in that
/// case.
pub fn split(src: &str) -> SplitResult<Vec<String>> {
    split_words(src).map(|words| words.into_iter().map(String::from).collect())
}

/// Splits a line of input into [`Word`]s, retaining the position of each word in the input.
///
/// # Errors
///
/// This function will return an error if the line is malformed.
pub fn split_words(src: &str) -> SplitResult<Vec<Word>> {
    Splitter::new(src).run().map_err(|error| {
        debug!(%error, "rejected input");
        error
    })
}
