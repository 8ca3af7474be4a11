pub(crate) mod command;
pub(crate) mod input;
pub(crate) mod interactive;

#[cfg(test)]
use mockall::automock;

use crate::error::CliResult;

/// Input received when prompting a [`Shell`] for a line.
#[derive(Debug, PartialEq)]
pub(crate) enum ShellInput {
    /// A line of input.
    Line(String),

    /// The user interrupted the current line.
    Interrupt,

    /// The user ended the session.
    Logout,

    /// No more input.
    None,
}

/// A source of input lines.
#[cfg_attr(test, automock)]
pub(crate) trait Shell {
    /// Prompts for a line of input using a `prompt` text.
    ///
    /// Fails if input cannot be read.
    fn prompt_line(&mut self, prompt: &str) -> CliResult<ShellInput>;

    /// Returns `true` if the shell is run interactively, i.e. the user is prompted for input and
    /// errors should not end the session.
    fn is_interactive(&self) -> bool;

    /// Appends a line entry to the shell's history.
    ///
    /// This feature is optional to implement, and may be a no-op.
    fn add_history_entry(&mut self, line: &str);
}

/// Removes a trailing line ending from a line of input.
pub(crate) fn trim_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .unwrap_or(line)
}
