//! `docnav check` command implementation.

use std::path::PathBuf;

use clap::Args;
use docnav_config::Config;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl CheckArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let (config, catalog) = Config::load(self.config.as_deref(), None)?;
        tracing::info!(config = ?config.config_path, "Configuration loaded");

        output.highlight(&config.site.title);
        for (prefix, groups) in catalog.sidebar().iter() {
            let entries: usize = groups.iter().map(|group| group.items.len()).sum();
            output.info(&format!("  {prefix} ({entries} entries)"));
        }
        output.success(&format!(
            "Configuration is valid: {} categories, {} entries, {} standalone links",
            catalog.categories().len(),
            catalog.entry_count(),
            catalog.extra_links().len()
        ));
        Ok(())
    }
}
