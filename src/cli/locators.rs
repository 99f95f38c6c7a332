use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::locators::LocatorRepository;

#[derive(Args)]
pub struct LocatorsArgs {
    /// Site key to show in detail (lists all sites when omitted)
    pub site: Option<String>,

    /// Path to a locator repository JSON file (defaults to embedded)
    #[arg(long)]
    pub locators: Option<PathBuf>,
}

/// Execute locators subcommand
///
/// # Errors
///
/// Returns an error if the repository cannot be loaded or the requested
/// site is not configured.
pub fn run(args: &LocatorsArgs, format: OutputFormat) -> anyhow::Result<()> {
    let repository = if let Some(path) = &args.locators {
        LocatorRepository::load_from_file(path)?
    } else {
        LocatorRepository::load_embedded()?
    };

    match &args.site {
        Some(site_key) => {
            let site = repository
                .site(site_key)
                .ok_or_else(|| anyhow::anyhow!("Site '{}' is not configured", site_key))?;

            match format {
                OutputFormat::Text => {
                    println!("Locators for {site_key}\n");
                    for (page, locators) in site.iter() {
                        println!("{page}");
                        for (role, selector) in locators.iter() {
                            println!("  {role:<22} {selector}");
                        }
                    }
                }
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(site)?);
                }
            }
        }
        None => match format {
            OutputFormat::Text => {
                println!("Configured sites ({})\n", repository.len());
                for (site_key, site) in repository.iter() {
                    let pages: Vec<&str> = site.iter().map(|(page, _)| page).collect();
                    println!("{site_key:<20} {}", pages.join(", "));
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&repository)?);
            }
        },
    }

    Ok(())
}
