use argsplit::Word;
use itertools::Itertools;

/// The way split words are written to the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    /// A list of words per line: `["the", "brown fox"]`.
    List,

    /// Each word terminated by a NUL character.
    Null,

    /// The words quoted and joined back into a single line.
    Quoted,

    /// One word per line, preceded by its position in the input.
    Spans,
}

impl OutputFormat {
    /// Formats the words split from a single line of input.
    pub fn format(&self, words: &[Word]) -> String {
        match self {
            OutputFormat::List => {
                let mut values = words.iter().map(|word| format!("{:?}", word.value));
                format!("[{}]\n", values.join(", "))
            }
            OutputFormat::Null => words.iter().map(|word| format!("{}\0", word.value)).collect(),
            OutputFormat::Quoted => {
                // Words split from a line can always be quoted again.
                let line = argsplit::join(words.iter().map(|word| &word.value)).unwrap_or_default();
                format!("{line}\n")
            }
            OutputFormat::Spans => words
                .iter()
                .map(|word| {
                    let quoted = if word.quoted { " (quoted)" } else { "" };
                    format!(
                        "{}..{}\t{:?}{quoted}\n",
                        word.span.start, word.span.end, word.value
                    )
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(line: &str) -> Vec<Word> {
        argsplit::split_words(line).expect("line should split")
    }

    #[test]
    fn it_formats_lists() {
        assert_eq!(
            OutputFormat::List.format(&words(r#"the "brown fox" qu\"ck"#)),
            "[\"the\", \"brown fox\", \"qu\\\"ck\"]\n"
        );
        assert_eq!(OutputFormat::List.format(&[]), "[]\n");
    }

    #[test]
    fn it_formats_null_terminated_words() {
        assert_eq!(
            OutputFormat::Null.format(&words(r#"a "" "b c""#)),
            "a\0\0b c\0"
        );
    }

    #[test]
    fn it_formats_quoted_lines() {
        assert_eq!(
            OutputFormat::Quoted.format(&words(r#"  a   "b c"  \\d "#)),
            "a \"b c\" \\\\d\n"
        );
    }

    #[test]
    fn it_requotes_escapes_and_empty_words() {
        let line = r#"x\\ a\"b "" "c \"d\"""#;
        let quoted = OutputFormat::Quoted.format(&words(line));

        assert_eq!(quoted, "x\\\\ a\\\"b \"\" \"c \\\"d\\\"\"\n");
        assert_eq!(
            argsplit::split(quoted.trim_end()).expect("quoted line should split"),
            argsplit::split(line).expect("line should split")
        );
    }

    #[test]
    fn it_formats_spans() {
        assert_eq!(
            OutputFormat::Spans.format(&words(r#"ab "c d""#)),
            "0..2\t\"ab\"\n3..8\t\"c d\" (quoted)\n"
        );
    }
}
