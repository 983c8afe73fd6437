use gitmoji_selector::{cli, ui};
use std::process::ExitCode;

fn main() -> ExitCode {
    match cli::main() {
        Ok(code) => code,
        Err(e) => {
            ui::print_error(&format!("Error: {e:#}"));
            ExitCode::FAILURE
        }
    }
}
