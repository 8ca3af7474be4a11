use std::iter::Peekable;
use std::str::CharIndices;

use tracing::trace;

use crate::input::{is_escape, is_quote, is_whitespace};
use crate::{unescape, Span, SplitError, SplitResult, Word};

type Input<'a> = Peekable<CharIndices<'a>>;

/// A state of a [`Splitter`].
///
/// Word states carry the start of their pending span, which remains unset until the first
/// character of the word body is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Between words.
    Space,

    /// Within a bare word.
    Word(Option<usize>),

    /// Within a quoted word opened by the quote at `open`.
    Quotes { open: usize, begin: Option<usize> },
}

/// A splitter is a deterministic finite automaton that walks some `str` input once, left to
/// right, and collects the words within it.
///
/// Some transitions do not consume the current character. The character is then dispatched again
/// in the new state.
pub struct Splitter<'a> {
    src: &'a str,
    input: Input<'a>,

    /// The most recently consumed character.
    previous: Option<char>,

    state: State,
    words: Vec<Word>,
}

impl<'a> Splitter<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            input: src.char_indices().peekable(),
            previous: None,
            state: State::Space,
            words: Vec::new(),
        }
    }

    /// Consumes all input and returns the split words.
    pub fn run(mut self) -> SplitResult<Vec<Word>> {
        while let Some(&(index, ch)) = self.input.peek() {
            self.state = match self.state {
                State::Space => self.next_space_state(index, ch),
                State::Word(begin) => self.next_word_state(begin, index, ch)?,
                State::Quotes { open, begin } => self.next_quotes_state(open, begin, index, ch)?,
            };
        }

        self.finish()
    }

    /// Returns the state following a character between words.
    fn next_space_state(&mut self, index: usize, ch: char) -> State {
        if is_quote(ch) {
            self.advance();
            return State::Quotes {
                open: index,
                begin: None,
            };
        }

        if is_whitespace(ch) {
            self.advance();
            return State::Space;
        }

        // The character starts a word and is dispatched again in the word state.
        State::Word(None)
    }

    /// Returns the state following a character within a bare word.
    fn next_word_state(
        &mut self,
        begin: Option<usize>,
        index: usize,
        ch: char,
    ) -> SplitResult<State> {
        match begin {
            None => {
                self.accept_word_char(index, ch)?;
                Ok(State::Word(Some(index)))
            }

            // The whitespace ending the word is consumed in the space state.
            Some(begin) if is_whitespace(ch) => {
                self.push_word(Span::new(begin, index), Span::new(begin, index), false)?;
                Ok(State::Space)
            }

            Some(begin) => {
                self.accept_word_char(index, ch)?;
                Ok(State::Word(Some(begin)))
            }
        }
    }

    /// Returns the state following a character within a quoted word.
    fn next_quotes_state(
        &mut self,
        open: usize,
        begin: Option<usize>,
        index: usize,
        ch: char,
    ) -> SplitResult<State> {
        match begin {
            // An empty pair of quotes.
            None if is_quote(ch) => {
                self.advance();
                self.push_word(Span::new(index, index), Span::new(open, index + 1), true)?;
                self.expect_space_after_quote()?;
                Ok(State::Space)
            }

            None => {
                self.advance();
                Ok(State::Quotes {
                    open,
                    begin: Some(index),
                })
            }

            Some(begin) if is_quote(ch) && !self.is_escaped() => {
                self.advance();
                self.push_word(Span::new(begin, index), Span::new(open, index + 1), true)?;
                self.expect_space_after_quote()?;
                Ok(State::Space)
            }

            Some(_) => {
                self.advance();
                Ok(State::Quotes { open, begin })
            }
        }
    }

    /// Consumes a character within a bare word.
    fn accept_word_char(&mut self, index: usize, ch: char) -> SplitResult<()> {
        debug_assert!(!is_whitespace(ch), "whitespace never starts or continues a word");
        if is_quote(ch) && !self.is_escaped() {
            return Err(SplitError::UnexpectedQuoteInWord(index));
        }

        self.advance();
        Ok(())
    }

    /// Ensures that the character after a closing quote, if any, is whitespace.
    fn expect_space_after_quote(&mut self) -> SplitResult<()> {
        match self.input.peek() {
            Some(&(index, ch)) if !is_whitespace(ch) => {
                Err(SplitError::MissingSpaceAfterQuote(index))
            }
            _ => Ok(()),
        }
    }

    /// Returns `true` if the previous character escapes the current one.
    ///
    /// Only a single character is looked at, so `\\"` counts as an escaped quote.
    fn is_escaped(&self) -> bool {
        self.previous.map_or(false, is_escape)
    }

    /// Decodes the word `body` and appends it to the result.
    fn push_word(&mut self, body: Span, span: Span, quoted: bool) -> SplitResult<()> {
        let value = unescape(&self.src[body.start..body.end], body.start)?.into_owned();
        trace!(?span, %value, quoted, "split word");
        self.words.push(Word::new(value, span, quoted));
        Ok(())
    }

    /// Advances the cursor past the current character.
    fn advance(&mut self) {
        if let Some((_, ch)) = self.input.next() {
            self.previous = Some(ch);
        }
    }

    /// Completes the final word after all input is consumed.
    fn finish(mut self) -> SplitResult<Vec<Word>> {
        match self.state {
            State::Quotes { open, .. } => Err(SplitError::UnterminatedQuote(open)),
            State::Word(Some(begin)) => {
                let span = Span::new(begin, self.src.len());
                self.push_word(span, span, false)?;
                Ok(self.words)
            }
            State::Word(None) | State::Space => Ok(self.words),
        }
    }
}
