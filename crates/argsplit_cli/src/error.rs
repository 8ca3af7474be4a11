use annotate_snippets::{
    display_list::{DisplayList, FormatOptions},
    snippet::{Annotation, AnnotationType, Slice, Snippet, SourceAnnotation},
};
use argsplit::SplitError;
use thiserror::Error;

/// A specialized [`Result`] type for the command line front-end.
pub(crate) type CliResult<T> = Result<T, CliError>;

/// Errors ending the program, as opposed to rejected lines which are reported and skipped.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// An input file could not be opened.
    #[error("cannot open '{}': {1}", .0.display())]
    OpenInput(std::path::PathBuf, #[source] std::io::Error),

    /// Input could not be read, or was not valid UTF-8.
    #[error("cannot read input: {0}")]
    Input(#[source] std::io::Error),

    /// Output could not be written.
    #[error("cannot write output: {0}")]
    Output(#[from] std::io::Error),

    /// The interactive line editor failed.
    #[error("line editor failed: {0}")]
    Editor(#[from] rustyline::error::ReadlineError),
}

/// Renders errors for lines that could not be split.
pub(crate) trait ErrorHandler {
    /// Returns a description of an error found in a `line`.
    fn render(&self, line: &str, error: &SplitError) -> String;
}

/// A simple error handler, describing errors on a single line.
pub(crate) struct SimpleErrorHandler;
impl ErrorHandler for SimpleErrorHandler {
    fn render(&self, _line: &str, error: &SplitError) -> String {
        format!("argsplit: {error}")
    }
}

/// A guiding error handler, pointing out the error within the line along with some help.
pub(crate) struct GuidingErrorHandler {
    /// Use ANSI colors.
    pub color: bool,
}

impl ErrorHandler for GuidingErrorHandler {
    fn render(&self, line: &str, error: &SplitError) -> String {
        let label = error.to_string();
        let span = error.span();

        let snippet = Snippet {
            title: Some(Annotation {
                label: Some(label.as_str()),
                id: None,
                annotation_type: AnnotationType::Error,
            }),
            footer: vec![],
            slices: vec![Slice {
                source: line,
                line_start: 1,
                origin: None,
                fold: false,
                annotations: vec![SourceAnnotation {
                    label: error.help(),
                    annotation_type: AnnotationType::Error,
                    range: (char_offset(line, span.start), char_offset(line, span.end)),
                }],
            }],
            opt: FormatOptions {
                color: self.color,
                ..Default::default()
            },
        };

        DisplayList::from(snippet).to_string()
    }
}

/// Converts a byte offset into a character offset within a line.
///
/// Offsets inside a multibyte character count that character.
fn char_offset(line: &str, byte_offset: usize) -> usize {
    line.char_indices()
        .take_while(|(index, _)| *index < byte_offset)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_offsets_count_multibyte_chars_once() {
        assert_eq!(char_offset("abc", 2), 2);
        assert_eq!(char_offset("é\\x", 2), 1);
        assert_eq!(char_offset("é\\x", 3), 2);
        assert_eq!(char_offset("é", 1), 1);
        assert_eq!(char_offset("ab", 10), 2);
    }

    #[test]
    fn simple_handler_renders_one_line() {
        let line = r"the \quick";
        let error = argsplit::split(line).unwrap_err();
        assert_eq!(
            SimpleErrorHandler.render(line, &error),
            "argsplit: cannot escape character 'q' at index 5"
        );
    }

    #[test]
    fn guiding_handler_points_at_the_error() {
        let line = r#"the quick "brown fox"#;
        let error = argsplit::split(line).unwrap_err();
        let rendered = GuidingErrorHandler { color: false }.render(line, &error);

        assert!(rendered.contains("error: quote opened at index 10 is never closed"));
        assert!(rendered.contains(line));
        assert!(rendered.contains("^ this quote is never closed"));
    }
}
