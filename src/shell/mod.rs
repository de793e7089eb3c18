mod chain;
mod expand;
mod words;

pub use chain::{ChainBuffer, ChainOp};

use std::io::Write;

use crate::core::commands::{self, BuiltinOutcome, Dispatch};
use crate::core::session::Session;
use crate::error::ShellError;
use crate::flags::Flags;
use crate::highlight::PromptStyle;
use crate::input::history::HistoryFile;
use crate::input::{InputSource, ReadOutcome};
use crate::process::{signal, ProcessExecutor};

const HISTORY_FILE: &str = ".vena_history";

/// Top-level driver: reads lines, walks command chains, and dispatches each
/// segment to a builtin or an external process.
pub struct Shell {
    source: InputSource,
    session: Session,
    chain: ChainBuffer,
    executor: ProcessExecutor,
    prompt: PromptStyle,
    history_file: Option<HistoryFile>,
    quiet: bool,
}

impl Shell {
    pub fn new(flags: &Flags, source: InputSource, progname: String) -> Result<Self, ShellError> {
        let mut session = Session::new(progname);

        let history_file = session
            .home_dir()
            .map(|home| HistoryFile::new(home.join(HISTORY_FILE)));
        if let Some(file) = &history_file {
            // a missing or unreadable file simply starts an empty history
            let _ = session.history.load(file);
        }

        ctrlc::set_handler(|| {
            if !signal::foreground_active() {
                print!("\n$ ");
                let _ = std::io::stdout().flush();
            }
        })?;

        Ok(Shell {
            source,
            session,
            chain: ChainBuffer::new(),
            executor: ProcessExecutor::new(flags),
            prompt: PromptStyle::new(),
            history_file,
            quiet: flags.is_set("quiet"),
        })
    }

    /// Runs the shell loop to completion and returns the process exit code.
    pub fn run(&mut self) -> Result<i32, ShellError> {
        loop {
            self.session.clear_command();

            let Some(segment) = self.next_command()? else {
                return Ok(self.finish_on_eof());
            };

            self.session.argv = words::split_words(&segment);
            if self.session.argv.is_empty() {
                continue;
            }

            expand::expand_aliases(&mut self.session);
            expand::expand_variables(&mut self.session);

            match commands::dispatch(&mut self.session) {
                Dispatch::Handled(BuiltinOutcome::Exit) => return Ok(self.finish_on_exit()),
                Dispatch::Handled(BuiltinOutcome::Status(_)) => {}
                Dispatch::NotBuiltin => {
                    let interactive = self.source.is_interactive();
                    self.executor.run(&mut self.session, interactive);
                }
            }
        }
    }

    /// Produces the next command segment, reading a fresh raw line only when
    /// the chain buffer is consumed. Returns `None` on end of input.
    fn next_command(&mut self) -> Result<Option<String>, ShellError> {
        loop {
            if self.chain.is_consumed() {
                let Some(mut line) = self.read_raw_line()? else {
                    return Ok(None);
                };
                self.session.count_line = true;
                strip_comment(&mut line);
                self.session.history.push(&line);
                self.chain.load(line);
            }

            if let Some(segment) = self.chain.next_segment(self.session.status) {
                return Ok(Some(segment));
            }
            // the rest of the line was abandoned; read the next one
        }
    }

    fn read_raw_line(&mut self) -> Result<Option<String>, ShellError> {
        loop {
            let prompt = if self.source.is_interactive() {
                self.prompt.prompt()
            } else {
                String::new()
            };
            match self.source.read_line(&prompt)? {
                ReadOutcome::Line(line) => return Ok(Some(line)),
                ReadOutcome::Interrupted => continue,
                ReadOutcome::Eof => return Ok(None),
            }
        }
    }

    fn finish_on_eof(&mut self) -> i32 {
        if self.source.is_interactive() {
            println!();
        }
        self.save_history();
        if !self.source.is_interactive() && self.session.status != 0 {
            self.session.status
        } else {
            0
        }
    }

    fn finish_on_exit(&mut self) -> i32 {
        self.save_history();
        self.session.exit_code.unwrap_or(self.session.status)
    }

    fn save_history(&mut self) {
        if let Some(file) = &self.history_file {
            if let Err(e) = self.session.history.save(file) {
                if !self.quiet {
                    eprintln!("Warning: couldn't save history: {}", e);
                }
            }
        }
    }
}

/// Truncates the line at a `#` that starts it or follows a space.
fn strip_comment(line: &mut String) {
    if line.starts_with('#') {
        line.clear();
    } else if let Some(pos) = line.find(" #") {
        line.truncate(pos + 1);
    }
}
