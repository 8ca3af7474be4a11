use std::{borrow::Cow, path::PathBuf};

use rustyline::{
    completion::Completer,
    error::ReadlineError,
    highlight::Highlighter,
    hint::{Hinter, HistoryHinter},
    history::DefaultHistory,
    validate::Validator,
    Config, Context, Editor,
};
use rustyline_derive::Helper;
use tracing::warn;

use crate::error::{CliError, CliResult};

use super::{Shell, ShellInput};

/// File in the user's home directory where the line history is kept.
const USER_HISTORY_FILE_NAME: &str = ".argsplit_history";

/// An interactive shell that prompts the user for lines through a line editor.
pub struct RustylineShell {
    editor: Editor<SplitHelper, DefaultHistory>,
}

impl RustylineShell {
    /// Constructs a new interactive shell and loads the user's history, if any.
    pub fn new(colored_prompt: String) -> rustyline::Result<Self> {
        let helper = SplitHelper {
            hinter: HistoryHinter {},
            colored_prompt,
        };

        let config = Config::builder().auto_add_history(false).build();
        let mut editor = Editor::with_config(config)?;
        editor.set_helper(Some(helper));

        let mut shell = Self { editor };
        shell.load_history_file();
        Ok(shell)
    }

    fn load_history_file(&mut self) {
        if let Some(history_file) = history_file_path() {
            if history_file.exists() {
                if let Err(error) = self.editor.load_history(&history_file) {
                    warn!(%error, "could not load history");
                }
            }
        }
    }
}

impl Shell for RustylineShell {
    fn prompt_line(&mut self, prompt: &str) -> CliResult<ShellInput> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ShellInput::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ShellInput::Interrupt),
            Err(ReadlineError::Eof) => Ok(ShellInput::Logout),
            Err(error) => Err(CliError::Editor(error)),
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn add_history_entry(&mut self, line: &str) {
        if let Err(error) = self.editor.add_history_entry(line) {
            warn!(%error, "could not add history entry");
            return;
        }

        if let Some(history_file) = history_file_path() {
            if let Err(error) = self.editor.append_history(&history_file) {
                warn!(%error, "could not save history");
            }
        }
    }
}

/// Returns the path to the user's history file.
fn history_file_path() -> Option<PathBuf> {
    dirs::home_dir().map(|mut path| {
        path.push(USER_HISTORY_FILE_NAME);
        path
    })
}

#[derive(Helper)]
struct SplitHelper {
    hinter: HistoryHinter,
    colored_prompt: String,
}

impl Completer for SplitHelper {
    type Candidate = String;
}

impl Validator for SplitHelper {}

impl Hinter for SplitHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &Context<'_>) -> Option<String> {
        self.hinter.hint(line, pos, ctx)
    }
}

impl Highlighter for SplitHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Borrowed(&self.colored_prompt)
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned("\x1b[2m".to_owned() + hint + "\x1b[m")
    }
}
