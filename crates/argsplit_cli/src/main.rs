mod error;
mod output;
mod shell;


use std::{fs::File, io::Write, path::PathBuf, process::ExitCode};

use ansi_term::Colour;
use clap::{crate_version, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use error::{CliError, CliResult, ErrorHandler, GuidingErrorHandler, SimpleErrorHandler};
use output::OutputFormat;
use shell::{
    command::SingleCommandShell, input::InputShell, interactive::RustylineShell,
    trim_line_ending, Shell, ShellInput,
};

/// Environment variable holding the log filter.
const LOG_ENV_VAR: &str = "ARGSPLIT_LOG";

/// Prompt shown by interactive shells.
const PROMPT: &str = "argsplit> ";

/// Command line options for the application's CLI.
#[derive(Parser)]
#[command(
    about = "Splits lines into words, honoring double quotes and backslash escapes.",
    version = crate_version!()
)]
struct Opts {
    /// Split a single line
    #[arg(short, long, conflicts_with = "input")]
    command: Option<String>,

    /// Input file, split line by line
    input: Option<PathBuf>,

    /// Terminate each word with a NUL character
    #[arg(short = '0', long, conflicts_with_all = ["quote", "spans"])]
    null: bool,

    /// Print each line re-quoted
    #[arg(short, long, conflicts_with = "spans")]
    quote: bool,

    /// Print each word along with its byte span
    #[arg(long)]
    spans: bool,

    /// Disable colored diagnostics
    #[arg(long)]
    no_color: bool,
}

impl Opts {
    fn output_format(&self) -> OutputFormat {
        if self.null {
            OutputFormat::Null
        } else if self.quote {
            OutputFormat::Quoted
        } else if self.spans {
            OutputFormat::Spans
        } else {
            OutputFormat::List
        }
    }
}

/// Entrypoint for the application.
pub fn main() -> ExitCode {
    init_logging();
    let opts = Opts::parse();

    let outcome = run(&opts);
    match &outcome {
        Ok(0) => (),
        Ok(rejected) => debug!(rejected, "some lines were rejected"),
        Err(err) => eprintln!("argsplit: {err}"),
    }

    ExitCode::from(exit_status(&outcome))
}

/// Maps the outcome of a session to the process exit status.
fn exit_status(outcome: &CliResult<usize>) -> u8 {
    match outcome {
        Ok(0) => 0,
        Ok(_) => 1,
        Err(_) => 2,
    }
}

/// Installs a subscriber logging to stderr, filtered through [`LOG_ENV_VAR`].
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs the shell selected by the options.
fn run(opts: &Opts) -> CliResult<usize> {
    let mut shell = select_shell(opts)?;

    let stderr_is_tty = atty::is(atty::Stream::Stderr);
    let errors: Box<dyn ErrorHandler> = if shell.is_interactive() || stderr_is_tty {
        Box::new(GuidingErrorHandler {
            color: stderr_is_tty && !opts.no_color,
        })
    } else {
        Box::new(SimpleErrorHandler)
    };

    run_session(
        shell.as_mut(),
        opts.output_format(),
        errors.as_ref(),
        &mut std::io::stdout().lock(),
    )
}

/// Runs a shell to completion and returns the number of rejected lines that fail the session.
fn run_session(
    shell: &mut dyn Shell,
    format: OutputFormat,
    errors: &dyn ErrorHandler,
    out: &mut dyn Write,
) -> CliResult<usize> {
    let rejected = run_shell(shell, format, errors, out)?;

    // Interactive sessions do not fail on rejected lines.
    if shell.is_interactive() {
        return Ok(0);
    }

    Ok(rejected)
}

/// Returns a shell for the input given in the options.
fn select_shell(opts: &Opts) -> CliResult<Box<dyn Shell>> {
    if let Some(line) = &opts.command {
        return Ok(Box::new(SingleCommandShell::new(line.clone())));
    }

    if let Some(path) = &opts.input {
        let file = File::open(path).map_err(|err| CliError::OpenInput(path.clone(), err))?;
        return Ok(Box::new(InputShell::new(file)));
    }

    if atty::is(atty::Stream::Stdin) {
        let prompt = if opts.no_color {
            PROMPT.to_owned()
        } else {
            Colour::Green.bold().paint(PROMPT).to_string()
        };
        return Ok(Box::new(RustylineShell::new(prompt)?));
    }

    Ok(Box::new(InputShell::new(std::io::stdin())))
}

/// Main loop splitting every line of a [`Shell`], writing the words to `out`.
///
/// Lines that cannot be split are reported to stderr. Returns the number of rejected lines.
///
/// # Errors
///
/// Fails if input cannot be read or output cannot be written. Remaining lines are not split.
fn run_shell(
    shell: &mut dyn Shell,
    format: OutputFormat,
    errors: &dyn ErrorHandler,
    out: &mut dyn Write,
) -> CliResult<usize> {
    let mut rejected = 0;
    loop {
        let line = match shell.prompt_line(PROMPT)? {
            ShellInput::Line(line) => line,
            ShellInput::Interrupt => continue,
            ShellInput::Logout | ShellInput::None => break,
        };
        let line = trim_line_ending(&line);

        match argsplit::split_words(line) {
            Ok(words) => {
                shell.add_history_entry(line);
                out.write_all(format.format(&words).as_bytes())?;
                out.flush()?;
            }
            Err(error) => {
                rejected += 1;
                eprintln!("{}", errors.render(line, &error));
            }
        }
    }

    out.flush()?;
    Ok(rejected)
}
