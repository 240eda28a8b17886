use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use drawio_validator::cli::commands::validate::handle_validate;

#[derive(Parser)]
#[command(name = "drawio-validate")]
#[command(about = "Validate draw.io diagram files for structural correctness")]
struct Cli {
    /// Treat warnings as validation failures
    #[arg(long)]
    strict: bool,

    /// Path to the .drawio file to validate
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let Some(file) = cli.file else {
        println!("Usage: drawio-validate [--strict] <file.drawio>");
        return ExitCode::FAILURE;
    };

    if handle_validate(&file, cli.strict) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
