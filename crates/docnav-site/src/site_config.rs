//! Framework-facing configuration types.

use std::collections::BTreeMap;

use docnav_catalog::{NavigationCatalog, SidebarView, TopNavView};
use docnav_config::{
    Config, EditLinkConfig, HeadTagConfig, SearchConfig, SocialLinkConfig, ThemeSection,
};
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

/// Site configuration object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// URL prefix for every generated link.
    pub base: String,
    /// Site title.
    pub title: String,
    /// Site description.
    pub description: String,
    /// Language tag.
    pub lang: String,
    /// Tags injected into `<head>`.
    pub head: Vec<HeadTag>,
    /// Theme configuration.
    pub theme_config: ThemeConfig,
}

impl SiteConfig {
    /// Assemble the site configuration from a config and its catalog.
    #[must_use]
    pub fn from_config(config: &Config, catalog: &NavigationCatalog) -> Self {
        let site = &config.site;
        Self {
            base: site.base.clone(),
            title: site.title.clone(),
            description: site.description.clone(),
            lang: site.lang.clone(),
            head: site.head.iter().map(HeadTag::from).collect(),
            theme_config: ThemeConfig::new(&config.theme, catalog),
        }
    }
}

/// `<head>` tag, serialized as `[tag, attrs]` or `[tag, attrs, content]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadTag {
    /// Tag name.
    pub tag: String,
    /// Attributes, sorted by name.
    pub attrs: BTreeMap<String, String>,
    /// Inner content.
    pub content: Option<String>,
}

impl From<&HeadTagConfig> for HeadTag {
    fn from(raw: &HeadTagConfig) -> Self {
        Self {
            tag: raw.tag.clone(),
            attrs: raw.attrs.clone(),
            content: raw.content.clone(),
        }
    }
}

impl Serialize for HeadTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.content.is_some() { 3 } else { 2 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.tag)?;
        seq.serialize_element(&self.attrs)?;
        if let Some(content) = &self.content {
            seq.serialize_element(content)?;
        }
        seq.end()
    }
}

/// Theme configuration object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Logo path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Search provider.
    pub search: Search,
    /// Outline heading range `[min, max]`.
    pub outline: [u8; 2],
    /// Top navigation.
    pub nav: TopNavView,
    /// Sidebar.
    pub sidebar: SidebarView,
    /// "Edit this page" link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_link: Option<EditLink>,
    /// Social links.
    pub social_links: Vec<SocialLink>,
}

impl ThemeConfig {
    fn new(theme: &ThemeSection, catalog: &NavigationCatalog) -> Self {
        Self {
            logo: theme.logo.clone(),
            search: Search::from(&theme.search),
            outline: theme.outline,
            nav: catalog.top_nav(),
            sidebar: catalog.sidebar(),
            edit_link: theme.edit_link.as_ref().map(EditLink::from),
            social_links: theme.social_links.iter().map(SocialLink::from).collect(),
        }
    }
}

/// Search provider selector.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "provider", rename_all = "lowercase")]
pub enum Search {
    /// Built-in local search.
    Local,
    /// Algolia `DocSearch`.
    Algolia {
        /// Provider options.
        options: AlgoliaOptions,
    },
}

impl From<&SearchConfig> for Search {
    fn from(raw: &SearchConfig) -> Self {
        match raw {
            SearchConfig::Local => Self::Local,
            SearchConfig::Algolia {
                app_id,
                api_key,
                index_name,
            } => Self::Algolia {
                options: AlgoliaOptions {
                    app_id: app_id.clone(),
                    api_key: api_key.clone(),
                    index_name: index_name.clone(),
                },
            },
        }
    }
}

/// Algolia options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgoliaOptions {
    /// Application ID.
    pub app_id: String,
    /// Search-only API key.
    pub api_key: String,
    /// Index name.
    pub index_name: String,
}

/// Edit-link template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EditLink {
    /// URL template with a `:path` placeholder.
    pub pattern: String,
    /// Link text.
    pub text: String,
}

impl From<&EditLinkConfig> for EditLink {
    fn from(raw: &EditLinkConfig) -> Self {
        Self {
            pattern: raw.pattern.clone(),
            text: raw.text.clone(),
        }
    }
}

/// Social link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    /// Icon name.
    pub icon: String,
    /// Target URL.
    pub link: String,
}

impl From<&SocialLinkConfig> for SocialLink {
    fn from(raw: &SocialLinkConfig) -> Self {
        Self {
            icon: raw.icon.clone(),
            link: raw.link.clone(),
        }
    }
}
