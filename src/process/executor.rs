use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command, Stdio};

use super::{resolver, signal};
use crate::core::session::Session;
use crate::flags::Flags;

/// Runs external commands: resolve, spawn, wait, decode.
#[derive(Debug, Clone, Copy)]
pub struct ProcessExecutor {
    quiet_mode: bool,
}

impl ProcessExecutor {
    pub fn new(flags: &Flags) -> Self {
        ProcessExecutor {
            quiet_mode: flags.is_set("quiet"),
        }
    }

    /// Dispatches the session's current argv as an external command.
    ///
    /// On resolution failure the bare name is still run when it is directly
    /// executable and the shell is interactive, has a search path, or the
    /// name is absolute; otherwise the command is reported as not found with
    /// status 127 and no child is created.
    pub fn run(&self, session: &mut Session, interactive: bool) {
        if session.count_line {
            session.line_count += 1;
            session.count_line = false;
        }

        let command = session.argv0().to_string();
        let search_path = session
            .env
            .get("PATH")
            .filter(|value| !value.is_empty())
            .map(str::to_owned);

        if let Some(path) = resolver::find_in_path(search_path.as_deref(), &command) {
            self.spawn_and_wait(session, &path);
            return;
        }

        let directly_runnable = (interactive || search_path.is_some() || command.starts_with('/'))
            && resolver::is_executable(Path::new(&command));
        if directly_runnable {
            self.spawn_and_wait(session, &command);
        } else {
            session.status = 127;
            session.report_error("not found");
        }
    }

    fn spawn_and_wait(&self, session: &mut Session, path: &str) {
        let mut child_command = Command::new(path);
        child_command
            .args(&session.argv[1..])
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .env_clear()
            .envs(
                session
                    .env
                    .materialize()
                    .iter()
                    .map(|(key, value)| (key.as_str(), value.as_str())),
            );

        let mut child = match child_command.spawn() {
            Ok(child) => child,
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                session.status = 126;
                session.report_error("Permission denied");
                return;
            }
            Err(e) => {
                // spawn failure abandons the command; the status is left as is
                if !self.quiet_mode {
                    eprintln!("{}: {}", session.progname, e);
                }
                return;
            }
        };

        signal::set_foreground(true);
        let waited = child.wait();
        signal::set_foreground(false);

        match waited {
            Ok(exit) => {
                // a signal-terminated child has no exit code and leaves the
                // status untouched
                if let Some(code) = exit.code() {
                    session.status = code;
                    if code == 126 {
                        session.report_error("Permission denied");
                    }
                }
            }
            Err(e) => {
                if !self.quiet_mode {
                    eprintln!("{}: {}", session.progname, e);
                }
            }
        }
    }
}
