use super::BuiltinOutcome;
use crate::core::session::Session;

/// `history` — print every remembered line as `index: text`.
pub fn run(session: &mut Session) -> BuiltinOutcome {
    for entry in session.history.iter() {
        println!("{}: {}", entry.num, entry.text);
    }
    BuiltinOutcome::Status(0)
}
