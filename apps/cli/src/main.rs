use std::process::ExitCode;

fn main() -> ExitCode {
    acervus_cli::run()
}
