use codebase_txt::cli::commands::run;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    run()
}
