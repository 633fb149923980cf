//! `docnav nav` command implementation.

use std::path::PathBuf;

use clap::Args;
use docnav_catalog::NavigationCatalog;
use docnav_config::Config;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    /// Print the sidebar instead of the top navigation.
    #[arg(long, conflicts_with = "category")]
    sidebar: bool,

    /// Print the entries of a single category.
    #[arg(long)]
    category: Option<String>,

    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl NavArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let (_, catalog) = Config::load(self.config.as_deref(), None)?;

        let view = match &self.category {
            Some(name) => View::Category(name),
            None if self.sidebar => View::Sidebar,
            None => View::TopNav,
        };
        tracing::debug!(?view, "Rendering navigation view");
        Output::new().data(&render(&catalog, &view)?);
        Ok(())
    }
}

/// Navigation view selected on the command line.
#[derive(Debug)]
enum View<'a> {
    TopNav,
    Sidebar,
    Category(&'a str),
}

/// Render the selected view as pretty JSON.
fn render(catalog: &NavigationCatalog, view: &View<'_>) -> Result<String, CliError> {
    let json = match view {
        View::TopNav => serde_json::to_string_pretty(&catalog.top_nav())?,
        View::Sidebar => serde_json::to_string_pretty(&catalog.sidebar())?,
        View::Category(name) => {
            let category = catalog
                .category(name)
                .ok_or_else(|| CliError::UnknownCategory((*name).to_owned()))?;
            serde_json::to_string_pretty(category.entries())?
        }
    };
    Ok(json)
}
