use super::BuiltinOutcome;
use crate::core::session::Session;

/// `env` — print every environment entry as KEY=VALUE.
pub fn show(session: &mut Session) -> BuiltinOutcome {
    for (key, value) in session.env.iter() {
        println!("{}={}", key, value);
    }
    BuiltinOutcome::Status(0)
}

/// `setenv NAME VALUE` — insert or overwrite one entry.
pub fn set(session: &mut Session) -> BuiltinOutcome {
    if session.argv.len() != 3 {
        eprintln!("Incorrect number of arguments");
        return BuiltinOutcome::Status(1);
    }
    let name = session.argv[1].clone();
    let value = session.argv[2].clone();
    session.env.set(&name, &value);
    BuiltinOutcome::Status(0)
}

/// `unsetenv NAME ...` — remove each named entry.
pub fn unset(session: &mut Session) -> BuiltinOutcome {
    if session.argv.len() < 2 {
        eprintln!("Too few arguments.");
        return BuiltinOutcome::Status(1);
    }
    let names: Vec<String> = session.argv[1..].to_vec();
    for name in names {
        session.env.unset(&name);
    }
    BuiltinOutcome::Status(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with_argv(argv: &[&str]) -> Session {
        let mut session = Session::new("vena".to_string());
        session.argv = argv.iter().map(|s| s.to_string()).collect();
        session
    }

    #[test]
    fn test_setenv_inserts_entry() {
        let mut session = session_with_argv(&["setenv", "GREETING", "hello"]);
        assert_eq!(set(&mut session), BuiltinOutcome::Status(0));
        assert_eq!(session.env.get("GREETING"), Some("hello"));
    }

    #[test]
    fn test_setenv_overwrites_entry() {
        let mut session = session_with_argv(&["setenv", "GREETING", "again"]);
        session.env.set("GREETING", "hello");
        assert_eq!(set(&mut session), BuiltinOutcome::Status(0));
        assert_eq!(session.env.get("GREETING"), Some("again"));
    }

    #[test]
    fn test_setenv_wants_exactly_two_operands() {
        let mut session = session_with_argv(&["setenv", "ONLYNAME"]);
        assert_eq!(set(&mut session), BuiltinOutcome::Status(1));

        let mut session = session_with_argv(&["setenv", "A", "B", "C"]);
        assert_eq!(set(&mut session), BuiltinOutcome::Status(1));
    }

    #[test]
    fn test_unsetenv_removes_entries() {
        let mut session = session_with_argv(&["unsetenv", "ONE", "TWO"]);
        session.env.set("ONE", "1");
        session.env.set("TWO", "2");
        assert_eq!(unset(&mut session), BuiltinOutcome::Status(0));
        assert_eq!(session.env.get("ONE"), None);
        assert_eq!(session.env.get("TWO"), None);
    }

    #[test]
    fn test_unsetenv_wants_an_operand() {
        let mut session = session_with_argv(&["unsetenv"]);
        assert_eq!(unset(&mut session), BuiltinOutcome::Status(1));
    }
}
