//! Configuration management for docnav.
//!
//! Parses `docnav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.base`
//! - `theme.edit_link.pattern`
//! - `theme.search.app_id`
//! - `theme.search.api_key`
//! - `theme.search.index_name`

mod expand;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use docnav_catalog::{
    Category, ConfigurationError, NavEntry, NavigationCatalog, define_category,
};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override site base path.
    pub base: Option<String>,
    /// Override output file path.
    pub output_path: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docnav.toml";

/// Placeholder the edit-link pattern must contain.
const EDIT_LINK_PLACEHOLDER: &str = ":path";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site metadata.
    pub site: SiteSection,
    /// Theme settings.
    pub theme: ThemeSection,
    /// Navigation source data.
    pub nav: NavSection,
    /// Output configuration (path is a relative string from TOML).
    output: OutputConfigRaw,

    /// Resolved output configuration (set after loading).
    #[serde(skip)]
    pub output_resolved: OutputConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site metadata section.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// URL prefix for every generated link.
    pub base: String,
    /// Site title.
    pub title: String,
    /// Site description.
    pub description: String,
    /// Language tag.
    pub lang: String,
    /// Tags injected into `<head>`.
    pub head: Vec<HeadTagConfig>,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            base: "/".to_owned(),
            title: "Documentation".to_owned(),
            description: String::new(),
            lang: "en-US".to_owned(),
            head: Vec::new(),
        }
    }
}

/// Tag injected into `<head>` (favicon, meta).
#[derive(Debug, Deserialize)]
pub struct HeadTagConfig {
    /// Tag name (e.g. `link`, `meta`).
    pub tag: String,
    /// Tag attributes.
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
    /// Inner content, for tags such as `script`.
    #[serde(default)]
    pub content: Option<String>,
}

/// Theme section.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ThemeSection {
    /// Logo path.
    pub logo: Option<String>,
    /// Heading levels shown in the page outline (`[min, max]`).
    pub outline: [u8; 2],
    /// Search provider.
    pub search: SearchConfig,
    /// "Edit this page" link.
    pub edit_link: Option<EditLinkConfig>,
    /// Social links shown in the navigation bar.
    pub social_links: Vec<SocialLinkConfig>,
}

impl Default for ThemeSection {
    fn default() -> Self {
        Self {
            logo: None,
            outline: [2, 3],
            search: SearchConfig::default(),
            edit_link: None,
            social_links: Vec::new(),
        }
    }
}

/// Search provider selection.
#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(tag = "provider", rename_all = "lowercase")]
pub enum SearchConfig {
    /// Built-in local search index.
    #[default]
    Local,
    /// Algolia `DocSearch`.
    Algolia {
        /// Application ID.
        app_id: String,
        /// Search-only API key.
        api_key: String,
        /// Index name.
        index_name: String,
    },
}

/// Edit-link configuration.
#[derive(Debug, Deserialize)]
pub struct EditLinkConfig {
    /// URL template containing `:path`.
    pub pattern: String,
    /// Link text.
    #[serde(default = "default_edit_link_text")]
    pub text: String,
}

fn default_edit_link_text() -> String {
    "Edit this page".to_owned()
}

/// Social link (icon name and URL).
#[derive(Debug, Deserialize)]
pub struct SocialLinkConfig {
    /// Icon name (e.g. `github`).
    pub icon: String,
    /// Target URL.
    pub link: String,
}

/// Navigation section: standalone links and categories.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NavSection {
    /// Top-nav links that belong to no category.
    pub links: Vec<NavEntry>,
    /// Categories in top-nav order.
    pub categories: Vec<CategoryConfig>,
}

/// Category as authored in the config file.
#[derive(Debug, Deserialize)]
pub struct CategoryConfig {
    /// Category name, also the routing prefix.
    pub name: String,
    /// Optional top-nav label.
    #[serde(default)]
    pub title: Option<String>,
    /// Entries in order.
    #[serde(default)]
    pub entries: Vec<NavEntry>,
}

/// Raw output configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct OutputConfigRaw {
    path: Option<String>,
}

/// Resolved output configuration with absolute paths.
#[derive(Debug, Default)]
pub struct OutputConfig {
    /// File the site configuration JSON is written to.
    pub path: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Navigation data violates a catalog invariant.
    #[error("Navigation error: {0}")]
    Catalog(#[from] ConfigurationError),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`theme.search.api_key`").
        field: String,
        /// Error message (e.g., "${`ALGOLIA_KEY`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docnav.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values. Validation runs
    /// last, so overridden values are checked too. The navigation catalog
    /// built during validation is returned alongside the config.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<(Self, NavigationCatalog), ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            tracing::info!("No {CONFIG_FILENAME} found, using defaults");
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        let catalog = config.validate()?;

        Ok((config, catalog))
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(base) = &settings.base {
            self.site.base.clone_from(base);
        }
        if let Some(output_path) = &settings.output_path {
            self.output_resolved.path.clone_from(output_path);
        }
    }

    /// Build the navigation catalog from the `[nav]` section.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Catalog` if any category or standalone link
    /// violates a catalog invariant.
    pub fn catalog(&self) -> Result<NavigationCatalog, ConfigError> {
        let categories = self
            .nav
            .categories
            .iter()
            .map(|raw| -> Result<Category, ConfigurationError> {
                let category = define_category(raw.name.clone(), raw.entries.clone())?;
                Ok(match &raw.title {
                    Some(title) => category.with_title(title.clone()),
                    None => category,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(NavigationCatalog::new(categories, self.nav.links.clone())?)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let cwd = std::env::current_dir().ok()?;
        Self::discover_config_from(&cwd)
    }

    /// Search for config file in `start` and its parents.
    fn discover_config_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteSection::default(),
            theme: ThemeSection::default(),
            nav: NavSection::default(),
            output: OutputConfigRaw::default(),
            output_resolved: OutputConfig {
                path: base.join(".docnav/site.json"),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!(path = %path.display(), "Loading configuration");
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Checks site metadata, theme settings and the navigation catalog, and
    /// returns the catalog. Called automatically by [`Config::load`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` for invalid site or theme values and
    /// `ConfigError::Catalog` for invalid navigation data.
    pub fn validate(&self) -> Result<NavigationCatalog, ConfigError> {
        self.validate_site()?;
        self.validate_theme()?;
        self.catalog()
    }

    /// Validate site section.
    fn validate_site(&self) -> Result<(), ConfigError> {
        let base = &self.site.base;
        if !base.starts_with('/') || !base.ends_with('/') {
            return Err(ConfigError::Validation(format!(
                "site.base must start and end with '/', got {base:?}"
            )));
        }
        require_non_empty(&self.site.title, "site.title")?;
        require_non_empty(&self.site.lang, "site.lang")?;
        for tag in &self.site.head {
            require_non_empty(&tag.tag, "site.head.tag")?;
        }
        Ok(())
    }

    /// Validate theme section.
    fn validate_theme(&self) -> Result<(), ConfigError> {
        const MAX_HEADING: u8 = 6;

        let [min, max] = self.theme.outline;
        if min == 0 || max > MAX_HEADING || min > max {
            return Err(ConfigError::Validation(format!(
                "theme.outline must satisfy 1 <= min <= max <= {MAX_HEADING}, got [{min}, {max}]"
            )));
        }

        if let Some(edit_link) = &self.theme.edit_link {
            require_http_url(&edit_link.pattern, "theme.edit_link.pattern")?;
            if !edit_link.pattern.contains(EDIT_LINK_PLACEHOLDER) {
                return Err(ConfigError::Validation(format!(
                    "theme.edit_link.pattern must contain {EDIT_LINK_PLACEHOLDER}"
                )));
            }
        }

        if let SearchConfig::Algolia {
            app_id,
            api_key,
            index_name,
        } = &self.theme.search
        {
            require_non_empty(app_id, "theme.search.app_id")?;
            require_non_empty(api_key, "theme.search.api_key")?;
            require_non_empty(index_name, "theme.search.index_name")?;
        }

        for social in &self.theme.social_links {
            require_non_empty(&social.icon, "theme.social_links.icon")?;
            require_http_url(&social.link, "theme.social_links.link")?;
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.base = expand::expand_env(&self.site.base, "site.base")?;

        if let Some(ref mut edit_link) = self.theme.edit_link {
            edit_link.pattern = expand::expand_env(&edit_link.pattern, "theme.edit_link.pattern")?;
        }

        if let SearchConfig::Algolia {
            ref mut app_id,
            ref mut api_key,
            ref mut index_name,
        } = self.theme.search
        {
            *app_id = expand::expand_env(app_id, "theme.search.app_id")?;
            *api_key = expand::expand_env(api_key, "theme.search.api_key")?;
            *index_name = expand::expand_env(index_name, "theme.search.index_name")?;
        }

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.output_resolved = OutputConfig {
            path: config_dir.join(
                self.output
                    .path
                    .as_deref()
                    .unwrap_or(".docnav/site.json"),
            ),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const NAV_TOML: &str = r#"
[[nav.links]]
text = "Home"
link = "/"

[[nav.categories]]
name = "base"
entries = [
    { text = "CSS", link = "/base/css" },
    { text = "Git", link = "/base/git" },
]

[[nav.categories]]
name = "frontend"
title = "Frontend"
entries = [{ text = "Vite", link = "/frontend/vite" }]
"#;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.site.base, "/");
        assert_eq!(config.site.title, "Documentation");
        assert_eq!(config.site.lang, "en-US");
        assert_eq!(config.theme.outline, [2, 3]);
        assert_eq!(config.theme.search, SearchConfig::Local);
        assert_eq!(
            config.output_resolved.path,
            PathBuf::from("/test/.docnav/site.json")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.site.base, "/");
        assert!(config.nav.categories.is_empty());
        assert!(config.theme.edit_link.is_none());
    }

    #[test]
    fn test_parse_site_config() {
        let toml = r#"
[site]
base = "/notes/"
title = "Notes"
description = "Personal study notes"
lang = "zh-CN"

[[site.head]]
tag = "link"
attrs = { rel = "icon", href = "/favicon.ico" }
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.site.base, "/notes/");
        assert_eq!(config.site.title, "Notes");
        assert_eq!(config.site.description, "Personal study notes");
        assert_eq!(config.site.lang, "zh-CN");
        assert_eq!(config.site.head.len(), 1);
        assert_eq!(config.site.head[0].tag, "link");
        assert_eq!(config.site.head[0].attrs["href"], "/favicon.ico");
        assert!(config.site.head[0].content.is_none());
    }

    #[test]
    fn test_parse_theme_config() {
        let toml = r#"
[theme]
logo = "/logo.svg"
outline = [2, 4]
edit_link = { pattern = "https://github.com/o/r/edit/main/docs/:path" }
social_links = [{ icon = "github", link = "https://github.com/o/r" }]
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.theme.logo.as_deref(), Some("/logo.svg"));
        assert_eq!(config.theme.outline, [2, 4]);
        let edit_link = config.theme.edit_link.as_ref().unwrap();
        assert_eq!(edit_link.text, "Edit this page");
        assert_eq!(config.theme.social_links[0].icon, "github");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_algolia_search() {
        let toml = r#"
[theme.search]
provider = "algolia"
app_id = "APP"
api_key = "KEY"
index_name = "notes"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(
            config.theme.search,
            SearchConfig::Algolia {
                app_id: "APP".to_owned(),
                api_key: "KEY".to_owned(),
                index_name: "notes".to_owned(),
            }
        );
    }

    #[test]
    fn test_parse_unknown_search_provider_fails() {
        let toml = r#"
[theme.search]
provider = "elastic"
"#;
        assert!(toml::from_str::<Config>(toml).is_err());
    }

    #[test]
    fn test_catalog_from_nav_section() {
        let config: Config = toml::from_str(NAV_TOML).unwrap();

        let catalog = config.catalog().unwrap();

        assert_eq!(catalog.categories().len(), 2);
        assert_eq!(catalog.extra_links()[0].link, "/");
        assert_eq!(catalog.category("frontend").unwrap().title(), "Frontend");
        assert_eq!(catalog.category("base").unwrap().title(), "base");
        assert_eq!(catalog.entry_count(), 3);
    }

    #[test]
    fn test_catalog_rejects_entry_outside_prefix() {
        let toml = r#"
[[nav.categories]]
name = "base"
entries = [{ text = "Vite", link = "/frontend/vite" }]
"#;
        let config: Config = toml::from_str(toml).unwrap();

        let err = config.validate().unwrap_err();

        assert!(
            matches!(
                err,
                ConfigError::Catalog(ConfigurationError::PrefixMismatch { .. })
            ),
            "Expected PrefixMismatch, got {err:?}"
        );
        assert!(err.to_string().contains("/frontend/vite"));
    }

    #[test]
    fn test_validate_base_requires_slashes() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site.base = "notes".to_owned();

        let err = config.validate().unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("site.base"));
    }

    #[test]
    fn test_validate_empty_title() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site.title = String::new();

        let err = config.validate().unwrap_err();

        assert!(err.to_string().contains("site.title cannot be empty"));
    }

    #[test]
    fn test_validate_outline_range() {
        for outline in [[0, 2], [3, 2], [2, 7]] {
            let mut config = Config::default_with_base(Path::new("/test"));
            config.theme.outline = outline;

            let err = config.validate().unwrap_err();

            assert!(err.to_string().contains("theme.outline"), "{outline:?}");
        }
    }

    #[test]
    fn test_validate_edit_link_requires_placeholder() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.theme.edit_link = Some(EditLinkConfig {
            pattern: "https://github.com/o/r/edit/main/docs".to_owned(),
            text: default_edit_link_text(),
        });

        let err = config.validate().unwrap_err();

        assert!(err.to_string().contains(":path"));
    }

    #[test]
    fn test_validate_social_link_url() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.theme.social_links.push(SocialLinkConfig {
            icon: "github".to_owned(),
            link: "github.com/o/r".to_owned(),
        });

        let err = config.validate().unwrap_err();

        assert!(err.to_string().contains("theme.social_links.link"));
    }

    #[test]
    fn test_validate_empty_algolia_key() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.theme.search = SearchConfig::Algolia {
            app_id: "APP".to_owned(),
            api_key: String::new(),
            index_name: "notes".to_owned(),
        };

        let err = config.validate().unwrap_err();

        assert!(err.to_string().contains("theme.search.api_key"));
    }

    #[test]
    fn test_resolve_paths() {
        let toml = r#"
[output]
path = "docs/.vitepress/site.json"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.output_resolved.path,
            PathBuf::from("/project/docs/.vitepress/site.json")
        );
    }

    #[test]
    fn test_resolve_paths_default_output() {
        let mut config: Config = toml::from_str("").unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.output_resolved.path,
            PathBuf::from("/project/.docnav/site.json")
        );
    }

    #[test]
    fn test_apply_cli_settings_base() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            base: Some("/preview/".to_owned()),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.site.base, "/preview/");
        assert_eq!(
            config.output_resolved.path,
            PathBuf::from("/test/.docnav/site.json")
        );
    }

    #[test]
    fn test_apply_cli_settings_output_path() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            output_path: Some(PathBuf::from("/out/site.json")),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.output_resolved.path, PathBuf::from("/out/site.json"));
        assert_eq!(config.site.base, "/");
    }

    #[test]
    fn test_expand_env_vars_in_base() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("DOCNAV_TEST_BASE", "/from-env/");
        }
        let toml = r#"
[site]
base = "${DOCNAV_TEST_BASE}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();
        assert_eq!(config.site.base, "/from-env/");
        unsafe {
            std::env::remove_var("DOCNAV_TEST_BASE");
        }
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, NAV_TOML).unwrap();

        let (config, catalog) = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
        assert_eq!(catalog.categories().len(), 2);
        assert_eq!(
            config.output_resolved.path,
            dir.path().join(".docnav/site.json")
        );
        assert_eq!(config.nav.categories.len(), 2);
    }

    #[test]
    fn test_load_validates_cli_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, NAV_TOML).unwrap();
        let overrides = CliSettings {
            base: Some("no-slashes".to_owned()),
            ..Default::default()
        };

        let err = Config::load(Some(&path), Some(&overrides)).unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_discover_config_from_nested_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, NAV_TOML).unwrap();
        let nested = dir.path().join("docs/base/css");
        std::fs::create_dir_all(&nested).unwrap();

        let discovered = Config::discover_config_from(&nested).unwrap();
        let config = Config::load_from_file(&discovered).unwrap();

        assert_eq!(discovered, path);
        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
        assert_eq!(
            config.output_resolved.path,
            dir.path().join(".docnav/site.json")
        );
    }

    #[test]
    fn test_discover_config_prefers_nearest_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "").unwrap();
        let nested = dir.path().join("sub");
        std::fs::create_dir_all(&nested).unwrap();
        let nearest = nested.join(CONFIG_FILENAME);
        std::fs::write(&nearest, NAV_TOML).unwrap();

        let discovered = Config::discover_config_from(&nested.join("deeper")).unwrap();

        assert_eq!(discovered, nearest);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[site\nbase = ").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
