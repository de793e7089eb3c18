mod alias;
mod cd;
mod env_ops;
mod exit;
mod help;
mod history;

use crate::core::session::Session;

/// What a builtin handler asked the loop to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinOutcome {
    /// Handler finished with this result code; the loop keeps going.
    Status(i32),
    /// Terminate the loop and exit the shell.
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    NotBuiltin,
    Handled(BuiltinOutcome),
}

type Handler = fn(&mut Session) -> BuiltinOutcome;

/// Fixed builtin table, scanned linearly for an exact match on argv[0].
const BUILTINS: [(&str, Handler); 8] = [
    ("exit", exit::run),
    ("env", env_ops::show),
    ("help", help::run),
    ("history", history::run),
    ("setenv", env_ops::set),
    ("unsetenv", env_ops::unset),
    ("cd", cd::run),
    ("alias", alias::run),
];

pub fn dispatch(session: &mut Session) -> Dispatch {
    for (name, handler) in BUILTINS {
        if session.argv0() == name {
            session.line_count += 1;
            return Dispatch::Handled(handler(session));
        }
    }
    Dispatch::NotBuiltin
}
