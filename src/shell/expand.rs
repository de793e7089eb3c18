use super::words;
use crate::core::session::Session;

/// Rounds of alias rewriting allowed for one command. Cyclic definitions are
/// not detected, only bounded.
const ALIAS_EXPANSION_LIMIT: usize = 10;

/// Rewrites the command name through the alias table.
///
/// An alias target may itself name another alias; lookup repeats until a
/// fixpoint or the bound. A target whose first word is the alias name itself
/// (`alias ls=ls -a`) is applied once and left alone.
pub fn expand_aliases(session: &mut Session) {
    for _ in 0..ALIAS_EXPANSION_LIMIT {
        let Some(name) = session.argv.first().cloned() else {
            return;
        };
        let Some(target) = session.aliases.get(&name).map(str::to_owned) else {
            return;
        };

        let replacement = words::split_words(&target);
        if replacement.is_empty() {
            return;
        }
        let self_reference = replacement[0] == name;
        session.argv.splice(0..1, replacement);
        if self_reference {
            return;
        }
    }
}

/// Replaces `$`-prefixed arguments in place, after alias rewriting.
///
/// `$?` becomes the last exit status, `$$` the shell's pid, and `$NAME` the
/// value of the environment entry NAME or the empty string. Whole tokens
/// only; anything else passes through untouched.
pub fn expand_variables(session: &mut Session) {
    for index in 0..session.argv.len() {
        let token = &session.argv[index];
        if !token.starts_with('$') || token.len() < 2 {
            continue;
        }
        let replacement = match token.as_str() {
            "$?" => session.status.to_string(),
            "$$" => std::process::id().to_string(),
            name => session.env.get(&name[1..]).unwrap_or("").to_string(),
        };
        session.argv[index] = replacement;
    }
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
    fn test_alias_replaces_command_name() {
        let mut session = session_with_argv(&["ll", "/tmp"]);
        session.aliases.set("ll", "ls -l");
        expand_aliases(&mut session);
        assert_eq!(session.argv, vec!["ls", "-l", "/tmp"]);
    }

    #[test]
    fn test_alias_chain_resolves_through_aliases() {
        let mut session = session_with_argv(&["greet"]);
        session.aliases.set("greet", "hello");
        session.aliases.set("hello", "echo hi");
        expand_aliases(&mut session);
        assert_eq!(session.argv, vec!["echo", "hi"]);
    }

    #[test]
    fn test_alias_expansion_is_idempotent() {
        let mut session = session_with_argv(&["greet"]);
        session.aliases.set("greet", "echo hi");
        expand_aliases(&mut session);
        let first = session.argv.clone();
        expand_aliases(&mut session);
        assert_eq!(session.argv, first);
    }

    #[test]
    fn test_alias_self_reference_applies_once() {
        let mut session = session_with_argv(&["ls"]);
        session.aliases.set("ls", "ls -a");
        expand_aliases(&mut session);
        assert_eq!(session.argv, vec!["ls", "-a"]);
    }

    #[test]
    fn test_alias_cycle_is_bounded() {
        let mut session = session_with_argv(&["a"]);
        session.aliases.set("a", "b");
        session.aliases.set("b", "a");
        expand_aliases(&mut session);
        // bounded, not resolved: the name is still one of the cycle members
        assert_eq!(session.argv.len(), 1);
        assert!(session.argv[0] == "a" || session.argv[0] == "b");
    }

    #[test]
    fn test_alias_ignores_later_arguments() {
        let mut session = session_with_argv(&["echo", "ll"]);
        session.aliases.set("ll", "ls -l");
        expand_aliases(&mut session);
        assert_eq!(session.argv, vec!["echo", "ll"]);
    }

    #[test]
    fn test_status_variable() {
        let mut session = session_with_argv(&["echo", "$?"]);
        session.status = 3;
        expand_variables(&mut session);
        assert_eq!(session.argv, vec!["echo", "3"]);
    }

    #[test]
    fn test_pid_variable_is_numeric() {
        let mut session = session_with_argv(&["echo", "$$"]);
        expand_variables(&mut session);
        assert!(session.argv[1].parse::<u32>().is_ok());
    }

    #[test]
    fn test_named_variable_from_store() {
        let mut session = session_with_argv(&["echo", "$GREETING"]);
        session.env.set("GREETING", "hello");
        expand_variables(&mut session);
        assert_eq!(session.argv, vec!["echo", "hello"]);
    }

    #[test]
    fn test_unknown_variable_becomes_empty() {
        let mut session = session_with_argv(&["echo", "$VENA_NOT_SET_ANYWHERE"]);
        session.env.unset("VENA_NOT_SET_ANYWHERE");
        expand_variables(&mut session);
        assert_eq!(session.argv, vec!["echo", ""]);
    }

    #[test]
    fn test_plain_tokens_untouched() {
        let mut session = session_with_argv(&["echo", "plain", "$"]);
        expand_variables(&mut session);
        assert_eq!(session.argv, vec!["echo", "plain", "$"]);
    }
}
