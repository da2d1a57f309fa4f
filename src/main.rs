use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let argv: Vec<String> = env::args().skip(1).collect();
    ExitCode::from(airscmp::cli::run(&argv) as u8)
}
