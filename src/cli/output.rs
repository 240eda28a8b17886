//! Output formatting for CLI

use crate::validation::{DiagramStats, ValidationResult};

/// Format a validation result as the console report
pub fn format_report(result: &ValidationResult, stats: DiagramStats) -> String {
    let mut output = String::new();

    if !result.errors.is_empty() {
        output.push_str("❌ ERRORS:\n");
        for error in &result.errors {
            output.push_str(&format!("   • {}\n", error));
        }
    }

    if !result.warnings.is_empty() {
        output.push_str("⚠️  WARNINGS:\n");
        for warning in &result.warnings {
            output.push_str(&format!("   • {}\n", warning));
        }
    }

    if result.is_valid {
        output.push_str(&format!(
            "\n✅ Valid draw.io file: {} shapes, {} edges\n",
            stats.shapes, stats.edges
        ));
    } else {
        output.push_str(&format!(
            "\n❌ Invalid draw.io file ({} errors, {} warnings)\n",
            result.errors.len(),
            result.warnings.len()
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_report_success() {
        let result = ValidationResult {
            is_valid: true,
            errors: vec![],
            warnings: vec![],
        };
        let stats = DiagramStats { shapes: 9, edges: 12 };

        let report = format_report(&result, stats);
        assert_eq!(report, "\n✅ Valid draw.io file: 9 shapes, 12 edges\n");
    }

    #[test]
    fn test_format_report_failure_lists_findings() {
        let result = ValidationResult {
            is_valid: false,
            errors: vec!["Duplicate id='5'".to_string()],
            warnings: vec!["Edge 'e1' has no source attribute".to_string()],
        };

        let report = format_report(&result, DiagramStats::default());
        assert_eq!(
            report,
            "❌ ERRORS:\n   • Duplicate id='5'\n\
             ⚠️  WARNINGS:\n   • Edge 'e1' has no source attribute\n\
             \n❌ Invalid draw.io file (1 errors, 1 warnings)\n"
        );
    }

    #[test]
    fn test_format_report_valid_with_warnings_keeps_warning_block() {
        let result = ValidationResult {
            is_valid: true,
            errors: vec![],
            warnings: vec!["Only 2 shapes — diagram may be too simple (recommend 8-15)".to_string()],
        };
        let stats = DiagramStats { shapes: 2, edges: 1 };

        let report = format_report(&result, stats);
        assert!(report.starts_with("⚠️  WARNINGS:\n"));
        assert!(report.ends_with("\n✅ Valid draw.io file: 2 shapes, 1 edges\n"));
    }
}
