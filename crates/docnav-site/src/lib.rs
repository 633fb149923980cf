//! Site configuration object for docnav.
//!
//! Combines the loaded [`Config`](docnav_config::Config) with the views
//! derived from its navigation catalog into the JSON object the rendering
//! framework reads (`base`, `title`, `themeConfig.nav`,
//! `themeConfig.sidebar`, ...).

mod builder;
mod site_config;

pub use builder::{BuildError, build, write};
pub use site_config::{AlgoliaOptions, EditLink, HeadTag, Search, SiteConfig, SocialLink, ThemeConfig};
