use std::process::ExitCode;

use gitwrap::ui::output;

fn main() -> ExitCode {
    match gitwrap::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
