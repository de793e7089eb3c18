use super::BuiltinOutcome;
use crate::core::session::Session;

/// `alias [name[=command ...] ...]` — list, query, or define aliases.
///
/// Without arguments every alias is printed as `name='command'`. An argument
/// containing `=` starts a definition; the target is the rest of that
/// argument plus everything after it, so alias targets may carry arguments.
/// An empty target removes the alias. Arguments before a definition that
/// lack `=` print the matching alias.
pub fn run(session: &mut Session) -> BuiltinOutcome {
    if session.argv.len() == 1 {
        for (name, command) in session.aliases.iter() {
            println!("{}='{}'", name, command);
        }
        return BuiltinOutcome::Status(0);
    }

    let args = session.argv[1..].to_vec();
    for (index, arg) in args.iter().enumerate() {
        if let Some((name, target_head)) = arg.split_once('=') {
            let mut target = target_head.to_string();
            for extra in &args[index + 1..] {
                target.push(' ');
                target.push_str(extra);
            }
            let target = target.trim().to_string();
            if target.is_empty() {
                session.aliases.unset(name);
            } else {
                session.aliases.set(name, &target);
            }
            break;
        }

        if let Some(command) = session.aliases.get(arg) {
            println!("{}='{}'", arg, command);
        }
    }

    BuiltinOutcome::Status(0)
}
