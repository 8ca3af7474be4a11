//! Splits a single line of text into words, grouping double-quoted text and decoding backslash
//! escapes, similar to shell word splitting.
//!
//! ```
//! let words = argsplit::split(r#"the quick "brown fox""#).unwrap();
//! assert_eq!(words, vec!["the", "quick", "brown fox"]);
//! ```

mod error;
mod input;
mod quote;
mod split;
mod word;

pub use error::{SplitError, SplitResult};
pub use input::is_whitespace;
pub use quote::{join, quote};
pub use split::{split, split_words, unescape};
pub use word::{Span, Word};
