/*
 * Helper functions for input and output.
 */
use std::io::Write;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use super::common::{QuizError, Result};

macro_rules! my_println {
    ($dst:expr) => (
        writeln!($dst).map_err($crate::common::QuizError::Io)
    );
    ($dst:expr, $($arg:tt)*) => (
        writeln!($dst, $($arg)*).map_err($crate::common::QuizError::Io)
    );
}

macro_rules! my_print {
    ($dst:expr, $($arg:tt)*) => (
        write!($dst, $($arg)*).map_err($crate::common::QuizError::Io)
    );
}

/// A source of operator input, one line per call.
pub trait LineReader {
    /// Display `message` and read one line. Returns `Ok(None)` once input is closed.
    /// Pressing Ctrl+C yields `Err(QuizError::ReadlineInterrupted)`.
    fn read_line(&mut self, message: &str) -> Result<Option<String>>;
}

/// Reads from the terminal with line editing. When standard input is not a terminal,
/// lines are read as-is and the prompt is not echoed.
pub struct Terminal {
    editor: DefaultEditor,
}

impl Terminal {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().map_err(QuizError::Readline)?;
        Ok(Terminal { editor })
    }
}

impl LineReader for Terminal {
    fn read_line(&mut self, message: &str) -> Result<Option<String>> {
        match self.editor.readline(message) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Interrupted) => Err(QuizError::ReadlineInterrupted),
            Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(QuizError::Readline(e)),
        }
    }
}

/// Display a prompt and read a line. The response is trimmed and lowercased. Closing
/// the input stream or pressing Ctrl+C both count as having nothing more to say.
pub fn prompt<L: LineReader>(input: &mut L, message: &str) -> Result<Option<String>> {
    match input.read_line(message) {
        Ok(response) => Ok(response.map(|r| r.trim().to_lowercase())),
        Err(QuizError::ReadlineInterrupted) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Print `message` to `out`, breaking lines according to the current width of the
/// terminal.
pub fn prettyprint<W: Write>(out: &mut W, message: &str) -> Result<()> {
    let width = textwrap::termwidth().max(20);
    for line in textwrap::wrap(message, width) {
        my_println!(out, "{}", line)?;
    }
    Ok(())
}

/// Replays a fixed list of responses, then reports end of input.
#[cfg(test)]
pub struct ScriptedInput {
    responses: std::collections::VecDeque<String>,
    pub prompts: Vec<String>,
}

#[cfg(test)]
impl ScriptedInput {
    pub fn new(responses: &[&str]) -> Self {
        ScriptedInput {
            responses: responses.iter().map(|r| r.to_string()).collect(),
            prompts: Vec::new(),
        }
    }
}

#[cfg(test)]
impl LineReader for ScriptedInput {
    fn read_line(&mut self, message: &str) -> Result<Option<String>> {
        self.prompts.push(message.to_string());
        match self.responses.pop_front() {
            Some(ref r) if r == "^C" => Err(QuizError::ReadlineInterrupted),
            response => Ok(response),
        }
    }
}
