//! Command-line interface for reg-verify.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **extract**: Extract registration candidates from a text file or
//!   directory
//! - **pair**: Reconcile extracted candidates against an expected dataset
//!   and print the paired cases
//! - **locators**: Inspect the element-locator repository
//!
//! ## Usage
//!
//! ```text
//! # Extract registrations from a notes file
//! reg-verify extract seller_notes.txt
//!
//! # Extract from every file in a fixture directory
//! reg-verify --base-dir fixtures extract input
//!
//! # Pair candidates with expected records, JSON output for scripting
//! reg-verify pair --input input --expected expected --format json
//!
//! # Show the configured locators for one site
//! reg-verify locators motorway.co.uk
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod extract;
pub mod locators;
pub mod pair;

#[derive(Parser)]
#[command(name = "reg-verify")]
#[command(version)]
#[command(about = "Extract UK vehicle registrations and cross-check them against expected valuation data")]
#[command(
    long_about = "reg-verify lines up valuation-site test fixtures before a browser run.\n\nIt extracts UK registration numbers from free-text input, reconciles them against an expected-results dataset, and pairs each registration with the dataset row describing that vehicle.\n\nFixture problems (missing files, unmatched registrations, dataset drift) are reported as diagnostics, never as hard failures: a partly-curated fixture set still produces every pair it can support."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Directory against which input paths are resolved
    #[arg(long, global = true, default_value = ".")]
    pub base_dir: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract registration candidates from a text file or directory
    Extract(extract::ExtractArgs),

    /// Reconcile and pair candidates against an expected dataset
    Pair(pair::PairArgs),

    /// Inspect the element-locator repository
    Locators(locators::LocatorsArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
