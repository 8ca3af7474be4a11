use std::io::{BufRead, BufReader, Read};

use crate::error::{CliError, CliResult};

use super::{Shell, ShellInput};

/// A non-interactive shell reading lines from a type implementing [`std::io::Read`], such as a
/// file or stdin.
///
/// Input is buffered internally in order to increase read performance.
pub struct InputShell<R: Read> {
    /// Internal read buffer.
    reader: BufReader<R>,
}

impl<R: Read> InputShell<R> {
    /// Constructs a new shell from a type implementing [`std::io::Read`].
    pub fn new(input: R) -> Self {
        let reader = BufReader::new(input);
        Self { reader }
    }
}

impl<R: Read> Shell for InputShell<R> {
    fn prompt_line(&mut self, _prompt: &str) -> CliResult<ShellInput> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => Ok(ShellInput::None),
            Ok(_) => Ok(ShellInput::Line(line)),
            Err(error) => Err(CliError::Input(error)),
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
    use std::io::{ErrorKind, Seek, Write};

    use super::*;

    #[test]
    fn it_reads_lines_from_a_file() {
        let mut file = tempfile::tempfile().expect("temporary file should be created");
        write!(file, "first line\n\"second\" line").expect("temporary file should be written");
        file.rewind().expect("temporary file should be rewound");

        let mut shell = InputShell::new(file);
        assert_eq!(
            shell.prompt_line("").unwrap(),
            ShellInput::Line("first line\n".into())
        );
        assert_eq!(
            shell.prompt_line("").unwrap(),
            ShellInput::Line("\"second\" line".into())
        );
        assert_eq!(shell.prompt_line("").unwrap(), ShellInput::None);
    }

    #[test]
    fn it_fails_on_invalid_utf8() {
        let mut shell = InputShell::new(&b"a b\n\xff\xfe\nc\n"[..]);
        assert_eq!(
            shell.prompt_line("").unwrap(),
            ShellInput::Line("a b\n".into())
        );
        assert!(matches!(
            shell.prompt_line(""),
            Err(CliError::Input(error)) if error.kind() == ErrorKind::InvalidData
        ));
    }
}
