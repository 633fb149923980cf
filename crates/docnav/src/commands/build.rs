//! `docnav build` command implementation.

use std::path::PathBuf;

use clap::Args;
use docnav_config::{CliSettings, Config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Output file for the site configuration (overrides config).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Site base path (overrides config).
    #[arg(long, env = "DOCNAV_BASE")]
    base: Option<String>,

    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            base: self.base,
            output_path: self.output,
        };
        let (config, catalog) = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        if let Some(path) = &config.config_path {
            output.info(&format!("Config: {}", path.display()));
        }

        let site = docnav_site::build(&config, &catalog);
        let output_path = &config.output_resolved.path;
        tracing::info!(base = %site.base, path = %output_path.display(), "Writing site configuration");
        docnav_site::write(&site, output_path)?;

        output.success(&format!(
            "Site configuration written to {}",
            output_path.display()
        ));
        Ok(())
    }
}
