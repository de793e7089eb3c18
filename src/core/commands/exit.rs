use super::BuiltinOutcome;
use crate::core::session::Session;

/// `exit [code]` — leave the shell, optionally with an explicit exit code.
///
/// A malformed code is reported and the shell keeps running with status 2.
pub fn run(session: &mut Session) -> BuiltinOutcome {
    let Some(arg) = session.argv.get(1).cloned() else {
        session.exit_code = None;
        return BuiltinOutcome::Exit;
    };

    match parse_exit_code(&arg) {
        Some(code) => {
            session.exit_code = Some(code);
            BuiltinOutcome::Exit
        }
        None => {
            session.status = 2;
            session.report_error(&format!("Illegal number: {}", arg));
            BuiltinOutcome::Status(1)
        }
    }
}

/// Strict non-negative decimal parse: optional leading `+`, digits only,
/// bounded by `i32::MAX`.
fn parse_exit_code(text: &str) -> Option<i32> {
    let digits = text.strip_prefix('+').unwrap_or(text);
    if digits.is_empty() {
        return None;
    }

    let mut value: u64 = 0;
    for ch in digits.chars() {
        let digit = ch.to_digit(10)? as u64;
        value = value * 10 + digit;
        if value > i32::MAX as u64 {
            return None;
        }
    }
    Some(value as i32)
}
