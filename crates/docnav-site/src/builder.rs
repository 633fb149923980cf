//! Site configuration assembly and output.

use std::path::Path;

use docnav_catalog::NavigationCatalog;
use docnav_config::Config;

use crate::site_config::SiteConfig;

/// Error returned while writing the site configuration.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Build the site configuration object from a loaded config and the
/// catalog validated with it.
#[must_use]
pub fn build(config: &Config, catalog: &NavigationCatalog) -> SiteConfig {
    let site = SiteConfig::from_config(config, catalog);

    tracing::info!(
        categories = catalog.categories().len(),
        entries = catalog.entry_count(),
        nav_items = site.theme_config.nav.len(),
        "Site configuration built"
    );
    site
}

/// Write the site configuration as pretty-printed JSON.
///
/// Parent directories are created as needed.
///
/// # Errors
///
/// Returns `BuildError::Io` on file system failures and `BuildError::Json`
/// if serialization fails.
pub fn write(site: &SiteConfig, path: &Path) -> Result<(), BuildError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut json = serde_json::to_string_pretty(site)?;
    json.push('\n');
    std::fs::write(path, json)?;

    tracing::info!(path = %path.display(), "Site configuration written");
    Ok(())
}
