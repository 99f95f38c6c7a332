use std::path::{Path, PathBuf};

use clap::Args;

use crate::cli::OutputFormat;
use crate::extract;
use crate::matching;
use crate::parsing::expected;

#[derive(Args)]
pub struct PairArgs {
    /// Text file or directory to scan for registrations
    #[arg(short, long)]
    pub input: PathBuf,

    /// Expected-results CSV file or directory
    #[arg(short, long)]
    pub expected: PathBuf,
}

/// Execute pair subcommand
///
/// # Errors
///
/// Returns an error only if output serialization fails. Missing inputs,
/// dataset drift, and unmatched registrations are diagnostics, not
/// failures.
pub fn run(
    args: &PairArgs,
    format: OutputFormat,
    base_dir: &Path,
    verbose: bool,
) -> anyhow::Result<()> {
    let extraction = extract::from_source(base_dir, &args.input);
    let dataset = expected::load(base_dir, &args.expected);

    for issue in extraction.issues.iter().chain(&dataset.issues) {
        eprintln!("Warning: {issue}");
    }

    if verbose {
        eprintln!(
            "Extracted {} candidate(s), loaded {} expected record(s)",
            extraction.candidates.len(),
            dataset.records.len()
        );
    }

    let drift = matching::reconcile(&extraction.candidates, &dataset.records);
    let cases = matching::pair(&extraction.candidates, &dataset.records);

    match format {
        OutputFormat::Text => {
            if drift.is_empty() {
                println!("Extracted and expected registrations agree.");
            } else {
                println!("Registration drift between input and expected data:");
                for reg in &drift.extracted_only {
                    println!("  extracted only: {reg}");
                }
                for reg in &drift.expected_only {
                    println!("  expected only:  {reg}");
                }
            }

            println!("\n{} paired case(s)", cases.len());
            for case in &cases {
                let summary: Vec<String> = case
                    .expected
                    .iter()
                    .filter(|(column, _)| *column != crate::core::record::REGISTRATION_COLUMN)
                    .map(|(column, value)| format!("{column}={value}"))
                    .collect();
                println!("  {:<9} {}", case.registration, summary.join(", "));
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "drift": drift,
                "cases": cases,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
