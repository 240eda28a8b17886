//! Validate command implementation

use std::path::Path;

use crate::cli::output::format_report;
use crate::validation::{DiagramStats, DrawioValidator};

/// Handle the validate command
///
/// Prints the full report to standard output and returns whether the
/// file passed validation.
pub fn handle_validate(path: &Path, strict: bool) -> bool {
    let validator = DrawioValidator::new(strict);
    let result = validator.validate_file(path);

    // Summary counts come from an independent re-parse of the file
    let stats = DiagramStats::from_file(path);

    print!("{}", format_report(&result, stats));
    result.is_valid
}
