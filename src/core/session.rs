use std::path::PathBuf;

use crate::core::alias::AliasStore;
use crate::core::env::EnvStore;
use crate::input::history::History;

/// Maximum number of history entries kept in memory and on disk.
pub const HIST_MAX: usize = 4096;

/// Mutable context threaded through every command.
///
/// The argument list is rebuilt at the start of each loop iteration; the
/// stores live for the whole session.
pub struct Session {
    pub argv: Vec<String>,
    pub env: EnvStore,
    pub aliases: AliasStore,
    pub history: History,
    /// Exit status of the last executed command.
    pub status: i32,
    /// Exit code requested by the `exit` builtin, if any.
    pub exit_code: Option<i32>,
    pub line_count: u32,
    /// Set when a fresh line is read; consumed by the first external
    /// dispatch so chained commands on one line count it once.
    pub count_line: bool,
    pub progname: String,
}

impl Session {
    pub fn new(progname: String) -> Self {
        Session {
            argv: Vec::new(),
            env: EnvStore::from_process(),
            aliases: AliasStore::new(),
            history: History::new(HIST_MAX),
            status: 0,
            exit_code: None,
            line_count: 0,
            count_line: false,
            progname,
        }
    }

    pub fn clear_command(&mut self) {
        self.argv.clear();
    }

    pub fn argv0(&self) -> &str {
        self.argv.first().map(String::as_str).unwrap_or("")
    }

    /// Writes a diagnostic in the `name: line: command: message` form used
    /// for every user-visible error.
    pub fn report_error(&self, message: &str) {
        eprintln!(
            "{}: {}: {}: {}",
            self.progname,
            self.line_count,
            self.argv0(),
            message
        );
    }

    /// Home directory, preferring the session's own HOME entry over the
    /// platform lookup.
    pub fn home_dir(&self) -> Option<PathBuf> {
        match self.env.get("HOME") {
            Some(home) if !home.is_empty() => Some(PathBuf::from(home)),
            _ => dirs::home_dir(),
        }
    }
}
