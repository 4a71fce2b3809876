//! Command-line driver.

use std::io::Write;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::report::write_report;
use crate::rules::RuleSet;
use crate::validation::validate_file;

/// Validate every configured file and print its report
///
/// Returns whether all documents were valid. Reports are written in the
/// order the files were given; a hard failure on any file stops the run.
pub fn run<W: Write>(config: &Config, rules: &RuleSet, out: &mut W) -> Result<bool> {
    let mut all_valid = true;
    let batch = config.files.len() > 1;

    for (i, path) in config.files.iter().enumerate() {
        let result = validate_file(path, rules)?;

        if batch {
            if i > 0 {
                writeln!(out)?;
            }
            // Verbose reports already name their file
            if !config.verbose {
                writeln!(out, "{}:", path.display())?;
            }
        }

        write_report(out, path, &result, config.verbose)
            .with_context(|| format!("Failed to write report for {}", path.display()))?;

        if !result.is_valid() {
            log::info!("{} is invalid", path.display());
            all_valid = false;
        }
    }

    Ok(all_valid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config(files: Vec<PathBuf>) -> Config {
        Config {
            files,
            verbose: false,
            rules_path: None,
            log_level: "warn".to_string(),
        }
    }

    #[test]
    fn test_batch_reports_each_file() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.yaml");
        std::fs::write(
            &good,
            "spec_version: v1\nkind: external\nname: a\ndescription: d\napi_url: https://x\n",
        )
        .unwrap();
        let missing = dir.path().join("missing.yaml");

        let mut out = Vec::new();
        let valid = run(
            &config(vec![good.clone(), missing.clone()]),
            RuleSet::builtin(),
            &mut out,
        )
        .unwrap();
        assert!(!valid);

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains(&format!("{}:", good.display())));
        assert!(output.contains("Validation passed! No errors or warnings found."));
        assert!(output.contains(&format!("File not found: {}", missing.display())));
    }

    #[test]
    fn test_single_file_has_no_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agent.yaml");
        std::fs::write(&path, "kind: robot\n").unwrap();

        let mut out = Vec::new();
        let valid = run(&config(vec![path]), RuleSet::builtin(), &mut out).unwrap();
        assert!(!valid);
        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("VALIDATION ERRORS:\n"));
    }
}
