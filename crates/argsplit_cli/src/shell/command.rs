use crate::error::CliResult;

use super::{Shell, ShellInput};

/// A shell providing a single line given on the command line.
pub struct SingleCommandShell {
    line: Option<String>,
}

impl SingleCommandShell {
    pub fn new(line: String) -> Self {
        Self { line: Some(line) }
    }
}

impl Shell for SingleCommandShell {
    fn prompt_line(&mut self, _prompt: &str) -> CliResult<ShellInput> {
        match self.line.take() {
            Some(line) => Ok(ShellInput::Line(line)),
            None => Ok(ShellInput::None),
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }

    fn add_history_entry(&mut self, _line: &str) {
        // Intentionally left blank.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_provides_one_line() {
        let mut shell = SingleCommandShell::new("a b".into());
        assert_eq!(shell.prompt_line("").unwrap(), ShellInput::Line("a b".into()));
        assert_eq!(shell.prompt_line("").unwrap(), ShellInput::None);
    }
}
