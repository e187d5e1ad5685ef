use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{BufRead, Write};

/// Source of answers to the planner's prompts.
pub trait Prompt {
    /// Show `prompt` and read one line of input without its line ending.
    ///
    /// Returns `Ok(None)` once the user is done (end of input or Ctrl-C).
    fn ask(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Interactive terminal input with line editing and history.
impl Prompt for DefaultEditor {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.add_history_entry(line.as_str())?;
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

/// Reads answers from any buffered reader, echoing prompts to `echo`.
///
/// Used for scripted sessions, where the input is a prepared list of answers.
pub struct ReaderPrompt<R, W> {
    input: R,
    echo: W,
}

impl<R: BufRead, W: Write> ReaderPrompt<R, W> {
    /// Public constructor.
    pub fn new(input: R, echo: W) -> Self {
        Self { input, echo }
    }

    /// Give back the reader and the echo sink, e.g. to inspect echoed prompts.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.echo)
    }
}

impl<R: BufRead, W: Write> Prompt for ReaderPrompt<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.echo, "{}", prompt)?;
        self.echo.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(len);
        Ok(Some(line))
    }
}
