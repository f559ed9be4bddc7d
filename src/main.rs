use std::io::{self, Write};
use std::process;

fn main() {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let written = factorial::run(factorial::DEFAULT_INPUT, &mut out).and_then(|()| out.flush());
    if let Err(e) = written {
        eprintln!("factorial: cannot write result: {}", e);
        process::exit(1);
    }
}
