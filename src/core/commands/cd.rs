use std::env;

use super::BuiltinOutcome;
use crate::core::session::Session;

/// `cd [path|-]` — change the working directory.
///
/// Without an argument the target is HOME, then PWD, then `/`. `-` goes back
/// to OLDPWD, printing the destination first. On success PWD and OLDPWD are
/// updated; on failure neither is touched.
pub fn run(session: &mut Session) -> BuiltinOutcome {
    let target = match session.argv.get(1).map(String::as_str) {
        None => home_target(session),
        Some("-") => {
            let previous = session
                .env
                .get("OLDPWD")
                .filter(|value| !value.is_empty())
                .map(str::to_owned);
            match previous {
                Some(previous) => {
                    println!("{}", previous);
                    previous
                }
                None => {
                    if let Ok(current) = env::current_dir() {
                        println!("{}", current.display());
                    }
                    return BuiltinOutcome::Status(1);
                }
            }
        }
        Some(path) => path.to_string(),
    };

    if env::set_current_dir(&target).is_err() {
        session.report_error(&format!("can't cd to {}", target));
        return BuiltinOutcome::Status(1);
    }

    let previous = session
        .env
        .get("PWD")
        .filter(|value| !value.is_empty())
        .map(str::to_owned);
    if let Some(previous) = previous {
        session.env.set("OLDPWD", &previous);
    }
    if let Ok(current) = env::current_dir() {
        session.env.set("PWD", &current.to_string_lossy());
    }
    BuiltinOutcome::Status(0)
}

fn home_target(session: &Session) -> String {
    if let Some(home) = session.env.get("HOME").filter(|value| !value.is_empty()) {
        return home.to_string();
    }
    if let Some(home) = dirs::home_dir() {
        return home.to_string_lossy().into_owned();
    }
    match session.env.get("PWD").filter(|value| !value.is_empty()) {
        Some(pwd) => pwd.to_string(),
        None => String::from("/"),
    }
}
