//! Categories: named groups of entries sharing a path prefix.

use std::collections::HashSet;

use crate::entry::NavEntry;
use crate::error::ConfigurationError;

/// Named group of navigation entries.
///
/// The name doubles as the routing prefix: every entry path starts with
/// `/{name}/`. Values are only created through [`define_category`], so a
/// `Category` in hand always satisfies that invariant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    name: String,
    title: Option<String>,
    entries: Vec<NavEntry>,
}

impl Category {
    /// Category name (routing prefix segment).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Label shown in the top navigation.
    ///
    /// Falls back to the name when no display title was set.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }

    /// Entries in authored order.
    #[must_use]
    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    /// Route prefix owned by this category (e.g. `/base/`).
    ///
    /// Used as the sidebar key.
    #[must_use]
    pub fn prefix(&self) -> String {
        format!("/{}/", self.name)
    }

    /// Active-match pattern for the top-nav dropdown (e.g. `^/base/`).
    #[must_use]
    pub fn active_match(&self) -> String {
        format!("^/{}/", self.name)
    }

    /// Set the display title used as the top-nav label.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Whether `path` falls under this category's prefix.
    #[must_use]
    pub fn owns(&self, path: &str) -> bool {
        path.strip_prefix('/')
            .and_then(|rest| rest.strip_prefix(self.name.as_str()))
            .is_some_and(|rest| rest.starts_with('/'))
    }
}

/// Define a category from a name and its ordered entries.
///
/// # Errors
///
/// Returns [`ConfigurationError`] when the name is empty or not a single
/// `[A-Za-z0-9_-]` segment, or when an entry path is not root-relative,
/// lies outside `/{name}/`, or repeats within the category. The error names
/// the first offending entry.
pub fn define_category(
    name: impl Into<String>,
    entries: Vec<NavEntry>,
) -> Result<Category, ConfigurationError> {
    let name = name.into();
    validate_name(&name)?;

    let category = Category {
        name,
        title: None,
        entries,
    };

    let prefix = category.prefix();
    let mut seen = HashSet::with_capacity(category.entries.len());
    for entry in &category.entries {
        if !entry.is_root_relative() {
            return Err(ConfigurationError::NotRootRelative {
                category: category.name.clone(),
                label: entry.text.clone(),
                path: entry.link.clone(),
            });
        }
        if !category.owns(&entry.link) {
            return Err(ConfigurationError::PrefixMismatch {
                category: category.name.clone(),
                label: entry.text.clone(),
                path: entry.link.clone(),
                prefix,
            });
        }
        if !seen.insert(entry.link.as_str()) {
            return Err(ConfigurationError::DuplicatePath {
                category: category.name.clone(),
                path: entry.link.clone(),
            });
        }
    }

    if category.entries.is_empty() {
        tracing::warn!(category = %category.name, "Category has no entries");
    }

    Ok(category)
}

fn validate_name(name: &str) -> Result<(), ConfigurationError> {
    if name.is_empty() {
        return Err(ConfigurationError::EmptyCategoryName);
    }
    let valid = name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        return Err(ConfigurationError::InvalidCategoryName {
            name: name.to_owned(),
        });
    }
    Ok(())
}
