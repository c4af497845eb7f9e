//! Generate error code documentation from the source of truth (the `LoadError` enum).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from the `LoadError` implementation via its
//! `code()`, `description()`, `details()`, and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use crossfill::errors::LoadError;
use std::fmt::Write;

/// Helper to create all `LoadError` variants for documentation
fn all_load_error_variants() -> Vec<LoadError> {
    vec![
        LoadError::Io {
            path: "grids/missing.txt".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory (os error 2)"),
        },
        LoadError::EmptyStructure,
        LoadError::EmptyWordList,
        LoadError::DimensionMismatch { width: 5, height: 5, cells: 24 },
    ]
}

/// Append the documentation block for one error.
fn document_error(out: &mut String, error: &LoadError) -> std::fmt::Result {
    writeln!(out, "### {}: {}\n", error.code(), error.description())?;
    writeln!(out, "**Details:** {}\n", error.details())?;

    if let Some(help_text) = error.help() {
        writeln!(out, "**How to fix:**")?;
        writeln!(out, "```\n{help_text}\n```\n")?;
    }

    writeln!(out, "**Example error message:**")?;
    writeln!(out, "```\n{error}\n```\n")?;

    writeln!(out, "**Detailed format:**")?;
    writeln!(out, "```\n{}\n```\n", error.display_detailed())?;

    writeln!(out, "---\n")
}

fn render_docs() -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    let errors = all_load_error_variants();

    writeln!(out, "# Error Code Reference\n")?;
    writeln!(out, "**This document is auto-generated from the source code. Do not edit manually.**\n")?;

    writeln!(out, "## Load Errors\n")?;
    writeln!(out, "Errors raised while reading a grid description or a word list. The solver itself has no error cases: an unsolvable grid is reported as \"No solution.\"\n")?;
    for error in &errors {
        document_error(&mut out, error)?;
    }

    writeln!(out, "## How to Use Error Codes\n")?;
    writeln!(out, "When you see an error like:\n")?;
    writeln!(out, "```\nError: {}\n```\n", LoadError::EmptyWordList.display_detailed())?;
    writeln!(out, "1. Note the error code (e.g., `E003`)")?;
    writeln!(out, "2. Look it up in this document for detailed explanation")?;
    writeln!(out, "3. Follow the suggested resolution steps")?;

    Ok(out)
}

fn main() -> std::process::ExitCode {
    match render_docs() {
        Ok(docs) => {
            print!("{docs}");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_docs_cover_every_code() {
        let docs = render_docs().unwrap();
        for error in all_load_error_variants() {
            assert!(docs.contains(&format!("### {}:", error.code())), "missing {}", error.code());
        }
    }

    #[test]
    fn test_docs_include_help_text() {
        let docs = render_docs().unwrap();
        assert!(docs.contains("**How to fix:**"));
        assert!(docs.contains(LoadError::EmptyStructure.help().unwrap()));
    }
}
