use std::path::{Path, PathBuf};

use clap::Args;

use crate::cli::OutputFormat;
use crate::extract;

#[derive(Args)]
pub struct ExtractArgs {
    /// Text file or directory to scan for registrations
    #[arg(required = true)]
    pub input: PathBuf,
}

/// Execute extract subcommand
///
/// # Errors
///
/// Returns an error only if output serialization fails; unreadable input is
/// reported and yields an empty candidate list.
pub fn run(
    args: &ExtractArgs,
    format: OutputFormat,
    base_dir: &Path,
    verbose: bool,
) -> anyhow::Result<()> {
    let extraction = extract::from_source(base_dir, &args.input);

    for issue in &extraction.issues {
        eprintln!("Warning: {issue}");
    }

    if verbose {
        eprintln!(
            "Extracted {} distinct registration(s) from {}",
            extraction.candidates.len(),
            args.input.display()
        );
    }

    match format {
        OutputFormat::Text => {
            for candidate in &extraction.candidates {
                println!("{candidate}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&extraction.candidates)?);
        }
    }

    Ok(())
}
