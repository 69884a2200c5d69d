use std::io::{self, BufRead, Write};

use crate::{
    error::{Error, ParseError, RuntimeError},
    get_result,
};

/// Longest input line accepted by default, in characters.
pub const DEFAULT_MAX_LENGTH: usize = 100;

/// Settings of the interactive loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Longest accepted line in characters. `None` lifts the limit.
    pub max_length: Option<usize>,
    /// Whether to greet the user before the first prompt.
    pub banner:     bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { max_length: Some(DEFAULT_MAX_LENGTH),
               banner:     true, }
    }
}

/// The answer to one input line.
///
/// `Display` renders the message shown to the user; the detailed error is
/// kept for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The line was empty and nothing was evaluated.
    Empty,
    /// The expression evaluated to this value.
    Value(i64),
    /// The line was rejected before evaluation.
    FormatError(ParseError),
    /// The line was well formed but could not be calculated.
    CalculationError(RuntimeError),
}

impl std::fmt::Display for Reply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "Expression cannot be empty, please try again"),
            Self::Value(v) => write!(f, "Result: {v}"),
            Self::FormatError(_) => {
                write!(f, "Invalid expression format, please check and try again")
            },
            Self::CalculationError(_) => {
                write!(f, "Calculation error, please check your expression")
            },
        }
    }
}

/// Computes the reply for a single line, with its terminator already removed.
///
/// # Example
/// ```
/// use stackcalc::repl::{Config, Reply, respond};
///
/// let config = Config::default();
///
/// assert_eq!(respond(&config, "2 * (3 + 4)"), Reply::Value(14));
/// assert_eq!(respond(&config, ""), Reply::Empty);
/// assert_eq!(respond(&config, "(1").to_string(),
///            "Invalid expression format, please check and try again");
/// assert_eq!(respond(&config, "1/0").to_string(),
///            "Calculation error, please check your expression");
/// ```
#[must_use]
pub fn respond(config: &Config, line: &str) -> Reply {
    if line.is_empty() {
        return Reply::Empty;
    }

    let length = line.chars().count();
    if let Some(max) = config.max_length
       && length > max
    {
        log::warn!("{}", ParseError::InputTooLong { length, max });
        return Reply::FormatError(ParseError::InputTooLong { length, max });
    }

    match get_result(line) {
        Ok(v) => Reply::Value(v),
        Err(e) => {
            log::warn!("{e}");
            match e {
                Error::Parse(e) => Reply::FormatError(e),
                Error::Runtime(e) => Reply::CalculationError(e),
            }
        },
    }
}

/// The interactive read-evaluate-print loop.
///
/// Reads one expression per line from `input` and writes prompts and replies
/// to `output`. The loop ends on the line `exit` or at end of input.
pub struct Repl<R, W> {
    input:  R,
    output: W,
    config: Config,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub const fn new(input: R, output: W, config: Config) -> Self {
        Self { input,
               output,
               config }
    }

    /// Runs the loop until `exit` or end of input.
    ///
    /// # Errors
    /// Propagates I/O errors from reading `input` or writing `output`.
    ///
    /// # Example
    /// ```
    /// use std::io::Cursor;
    ///
    /// use stackcalc::repl::{Config, Repl};
    ///
    /// let config = Config { banner: false,
    ///                       ..Config::default() };
    /// let mut output = Vec::new();
    /// Repl::new(Cursor::new("1+1\nexit\n"), &mut output, config).run()
    ///                                                         .unwrap();
    ///
    /// let transcript = String::from_utf8(output).unwrap();
    /// assert!(transcript.contains("Result: 2"));
    /// ```
    pub fn run(&mut self) -> io::Result<()> {
        if self.config.banner {
            writeln!(self.output, "Welcome to the Arithmetic Calculator")?;
            writeln!(self.output,
                     "Supported operations: Addition(+), Subtraction(-), Multiplication(*), Division(/), Parentheses()")?;
            writeln!(self.output, "Type \"exit\" to quit the program")?;
        }

        let mut line = String::new();
        loop {
            write!(self.output, "\nPlease enter an expression: ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                log::info!("end of input, leaving the loop");
                break;
            }

            let expression = line.trim_end_matches(['\n', '\r']);
            if expression == "exit" {
                writeln!(self.output, "Exiting calculator. Thank you for using!")?;
                break;
            }

            let reply = respond(&self.config, expression);
            writeln!(self.output, "{reply}")?;
        }

        Ok(())
    }

    /// Gives back the output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}
