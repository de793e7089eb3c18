use std::fs::File;
use std::io::ErrorKind;

use vena::flags::Flags;
use vena::input::{self, InputSource};
use vena::shell::Shell;

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    let mut arguments = std::env::args();
    let progname = arguments.next().unwrap_or_else(|| String::from("vena"));
    let args: Vec<String> = arguments.collect();

    let mut flags = Flags::new();
    if let Err(e) = flags.parse(&args) {
        eprintln!("{}: {}", progname, e);
        return 1;
    }

    if flags.is_set("help") {
        flags.print_help();
        return 0;
    }

    if flags.is_set("version") {
        println!("vena {}", env!("CARGO_PKG_VERSION"));
        return 0;
    }

    let source = match flags.script() {
        Some(script) => match File::open(script) {
            Ok(file) => InputSource::from_script(file),
            Err(e) if e.kind() == ErrorKind::PermissionDenied => return 126,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                eprintln!("{}: 0: Can't open {}", progname, script);
                return 127;
            }
            Err(_) => return 1,
        },
        None if input::stdin_is_tty() => match InputSource::terminal() {
            Ok(source) => source,
            Err(e) => {
                eprintln!("{}: {}", progname, e);
                return 1;
            }
        },
        None => InputSource::stdin(),
    };

    let mut shell = match Shell::new(&flags, source, progname.clone()) {
        Ok(shell) => shell,
        Err(e) => {
            eprintln!("{}: {}", progname, e);
            return 1;
        }
    };

    match shell.run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", progname, e);
            1
        }
    }
}
