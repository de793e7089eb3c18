use super::BuiltinOutcome;
use crate::core::session::Session;

/// `help` — short summary of the builtin commands.
pub fn run(_session: &mut Session) -> BuiltinOutcome {
    println!("vena builtins:");
    println!("  exit [code]          leave the shell");
    println!("  cd [path|-]          change the working directory");
    println!("  env                  print the environment");
    println!("  setenv NAME VALUE    set an environment entry");
    println!("  unsetenv NAME ...    remove environment entries");
    println!("  alias [name[=cmd]]   list, query or define aliases");
    println!("  history              print the command history");
    println!("  help                 show this message");
    BuiltinOutcome::Status(0)
}
