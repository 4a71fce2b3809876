//! Human-readable validation reports.

use std::io::{self, Write};
use std::path::Path;

use crate::validation::ValidationResult;

const RULE: &str = "--------------------------------------------------";

/// Write the report for one validated document
pub fn write_report<W: Write>(
    out: &mut W,
    path: &Path,
    result: &ValidationResult,
    verbose: bool,
) -> io::Result<()> {
    if verbose {
        writeln!(out, "Validating agent file: {}", path.display())?;
        writeln!(out, "{}", RULE)?;
    }

    let errors = result.error_count();
    let warnings = result.warning_count();

    if errors > 0 {
        writeln!(out, "VALIDATION ERRORS:")?;
        for diagnostic in result.errors() {
            writeln!(out, "  • {}", diagnostic)?;
        }
    }

    if warnings > 0 {
        writeln!(out, "WARNINGS:")?;
        for diagnostic in result.warnings() {
            writeln!(out, "  • {}", diagnostic)?;
        }
    }

    match (errors, warnings) {
        (0, 0) => writeln!(out, "Validation passed! No errors or warnings found.")?,
        (0, _) => writeln!(out, "Validation passed! Only warnings found.")?,
        _ => {}
    }

    if verbose {
        writeln!(out, "{}", RULE)?;
        let verdict = if result.is_valid() { "VALID" } else { "INVALID" };
        writeln!(out, "Summary: {}", verdict)?;
        writeln!(out, "   Errors: {}", errors)?;
        writeln!(out, "   Warnings: {}", warnings)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(result: &ValidationResult, verbose: bool) -> String {
        let mut out = Vec::new();
        write_report(&mut out, Path::new("agent.yaml"), result, verbose).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_clean_report() {
        let output = render(&ValidationResult::new(), false);
        assert_eq!(output, "Validation passed! No errors or warnings found.\n");
    }

    #[test]
    fn test_warning_only_report() {
        let mut result = ValidationResult::new();
        result.add_field_warning("llm", "LLM provider 'x' is unusual".to_string());
        let output = render(&result, false);
        assert_eq!(
            output,
            "WARNINGS:\n  • LLM provider 'x' is unusual\nValidation passed! Only warnings found.\n"
        );
    }

    #[test]
    fn test_error_report_lists_both_sections() {
        let mut result = ValidationResult::new();
        result.add_field_error("name", "bad name".to_string());
        result.add_field_warning("llm", "odd provider".to_string());
        let output = render(&result, false);
        assert!(output.starts_with("VALIDATION ERRORS:\n  • bad name\nWARNINGS:\n  • odd provider\n"));
        assert!(!output.contains("Validation passed"));
    }

    #[test]
    fn test_verbose_summary() {
        let mut result = ValidationResult::new();
        result.add_error("Empty YAML file".to_string());
        let output = render(&result, true);
        assert!(output.starts_with("Validating agent file: agent.yaml\n"));
        assert!(output.contains("Summary: INVALID\n"));
        assert!(output.contains("   Errors: 1\n"));
        assert!(output.ends_with("   Warnings: 0\n"));
    }
}
