pub mod history;

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use rustyline::DefaultEditor;

use crate::error::ShellError;

/// Whether standard input is a terminal.
pub fn stdin_is_tty() -> bool {
    // SAFETY: isatty only inspects the descriptor.
    unsafe { libc::isatty(libc::STDIN_FILENO) == 1 }
}

pub enum ReadOutcome {
    Line(String),
    Interrupted,
    Eof,
}

/// Where raw input lines come from: the line editor on a terminal, a script
/// file, or redirected standard input.
pub enum InputSource {
    Editor(Box<DefaultEditor>),
    Script(BufReader<File>),
    Stdin(BufReader<io::Stdin>),
}

impl InputSource {
    pub fn terminal() -> Result<Self, ShellError> {
        Ok(InputSource::Editor(Box::new(DefaultEditor::new()?)))
    }

    pub fn from_script(file: File) -> Self {
        InputSource::Script(BufReader::new(file))
    }

    pub fn stdin() -> Self {
        InputSource::Stdin(BufReader::new(io::stdin()))
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self, InputSource::Editor(_))
    }

    /// Reads the next raw line. The prompt is only shown by the editor
    /// variant; stream variants read silently. A single trailing newline is
    /// trimmed.
    pub fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ShellError> {
        match self {
            InputSource::Editor(editor) => match editor.readline(prompt) {
                Ok(line) => {
                    let _ = editor.add_history_entry(line.as_str());
                    Ok(ReadOutcome::Line(line))
                }
                Err(rustyline::error::ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
                Err(rustyline::error::ReadlineError::Eof) => Ok(ReadOutcome::Eof),
                Err(e) => Err(e.into()),
            },
            InputSource::Script(reader) => read_stream_line(reader),
            InputSource::Stdin(reader) => read_stream_line(reader),
        }
    }
}

fn read_stream_line<R: BufRead>(reader: &mut R) -> Result<ReadOutcome, ShellError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(ReadOutcome::Eof);
    }
    if line.ends_with('\n') {
        line.pop();
    }
    Ok(ReadOutcome::Line(line))
}
