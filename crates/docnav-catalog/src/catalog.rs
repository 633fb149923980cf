//! Validated set of categories and standalone links.

use std::collections::HashSet;

use regex::RegexSet;

use crate::category::Category;
use crate::entry::NavEntry;
use crate::error::ConfigurationError;
use crate::view::{SidebarView, TopNavView, build_sidebar, build_top_nav};

/// Single source of truth for navigable entries.
///
/// Built once from static data and immutable afterwards. Construction
/// checks the invariants that span categories: unique names, mutually
/// exclusive prefixes, and standalone links staying outside every category.
#[derive(Clone, Debug)]
pub struct NavigationCatalog {
    categories: Vec<Category>,
    extra_links: Vec<NavEntry>,
    active: RegexSet,
}

impl NavigationCatalog {
    /// Assemble a catalog from defined categories and standalone links.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if two categories share a name or have
    /// overlapping prefixes, or if a standalone link is not root-relative or
    /// falls under a category.
    pub fn new(
        categories: Vec<Category>,
        extra_links: Vec<NavEntry>,
    ) -> Result<Self, ConfigurationError> {
        check_exclusive(&categories)?;

        for link in &extra_links {
            if !link.is_root_relative() {
                return Err(ConfigurationError::StandaloneNotRootRelative {
                    label: link.text.clone(),
                    path: link.link.clone(),
                });
            }
            if let Some(category) = categories.iter().find(|c| c.owns(&link.link)) {
                return Err(ConfigurationError::StandaloneInCategory {
                    label: link.text.clone(),
                    path: link.link.clone(),
                    category: category.name().to_owned(),
                });
            }
        }

        let active = RegexSet::new(categories.iter().map(Category::active_match))?;

        let catalog = Self {
            categories,
            extra_links,
            active,
        };
        tracing::debug!(
            categories = catalog.categories.len(),
            entries = catalog.entry_count(),
            links = catalog.extra_links.len(),
            "Navigation catalog built"
        );
        Ok(catalog)
    }

    /// Categories in authored order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Standalone links in authored order.
    #[must_use]
    pub fn extra_links(&self) -> &[NavEntry] {
        &self.extra_links
    }

    /// Look up a category by name.
    #[must_use]
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name() == name)
    }

    /// Total number of category entries.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.categories.iter().map(|c| c.entries().len()).sum()
    }

    /// Category whose top-nav item is active for a visited path.
    ///
    /// Prefixes are mutually exclusive, so at most one pattern matches.
    #[must_use]
    pub fn active_category(&self, path: &str) -> Option<&Category> {
        self.active
            .matches(path)
            .iter()
            .next()
            .map(|idx| &self.categories[idx])
    }

    /// Derive the top navigation.
    #[must_use]
    pub fn top_nav(&self) -> TopNavView {
        build_top_nav(&self.categories, &self.extra_links)
    }

    /// Derive the sidebar.
    #[must_use]
    pub fn sidebar(&self) -> SidebarView {
        build_sidebar(&self.categories)
    }
}

/// Check that no path can satisfy two category prefixes.
fn check_exclusive(categories: &[Category]) -> Result<(), ConfigurationError> {
    let mut names = HashSet::with_capacity(categories.len());
    for category in categories {
        if !names.insert(category.name()) {
            return Err(ConfigurationError::DuplicateCategory {
                name: category.name().to_owned(),
            });
        }
    }

    for (i, first) in categories.iter().enumerate() {
        let first_prefix = first.prefix();
        for second in &categories[i + 1..] {
            let second_prefix = second.prefix();
            if first_prefix.starts_with(&second_prefix) || second_prefix.starts_with(&first_prefix)
            {
                return Err(ConfigurationError::OverlappingPrefixes {
                    first: first_prefix,
                    second: second_prefix,
                });
            }
        }
    }

    Ok(())
}
