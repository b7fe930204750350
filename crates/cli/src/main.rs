use std::process::ExitCode;

fn main() -> ExitCode {
    repdesk_cli::run()
}
