//! Catalog validation errors.

/// Error raised while defining categories or assembling the catalog.
///
/// Every variant describes a mistake in the navigation source data. None of
/// them is recoverable at runtime: the configuration has to be edited.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    /// Category name is empty.
    #[error("Category name cannot be empty")]
    EmptyCategoryName,

    /// Category name is not a single `[A-Za-z0-9_-]` path segment.
    #[error("Invalid category name {name:?}: use letters, digits, '-' or '_' only")]
    InvalidCategoryName {
        /// Offending name.
        name: String,
    },

    /// Entry path is not root-relative.
    #[error("Entry {label:?} in category {category:?} has path {path:?} that does not start with '/'")]
    NotRootRelative {
        /// Owning category.
        category: String,
        /// Entry label.
        label: String,
        /// Entry path.
        path: String,
    },

    /// Entry path lies outside its owning category prefix.
    #[error("Entry {label:?} in category {category:?} has path {path:?} outside prefix {prefix:?}")]
    PrefixMismatch {
        /// Owning category.
        category: String,
        /// Entry label.
        label: String,
        /// Entry path.
        path: String,
        /// Required prefix (e.g. `/base/`).
        prefix: String,
    },

    /// Two entries of one category share a target path.
    #[error("Duplicate path {path:?} in category {category:?}")]
    DuplicatePath {
        /// Owning category.
        category: String,
        /// Repeated path.
        path: String,
    },

    /// Two categories share a name.
    #[error("Category {name:?} is defined more than once")]
    DuplicateCategory {
        /// Repeated name.
        name: String,
    },

    /// One category prefix contains the other.
    #[error("Category prefixes {first:?} and {second:?} overlap")]
    OverlappingPrefixes {
        /// Prefix of the earlier category.
        first: String,
        /// Prefix of the later category.
        second: String,
    },

    /// Standalone link path is not root-relative.
    #[error("Standalone link {label:?} has path {path:?} that does not start with '/'")]
    StandaloneNotRootRelative {
        /// Link label.
        label: String,
        /// Link path.
        path: String,
    },

    /// Standalone link points into a category.
    #[error("Standalone link {label:?} ({path:?}) falls under category {category:?}")]
    StandaloneInCategory {
        /// Link label.
        label: String,
        /// Link path.
        path: String,
        /// Category whose prefix matches.
        category: String,
    },

    /// Active-match patterns failed to compile.
    #[error("Active match pattern error: {0}")]
    ActiveMatch(#[from] regex::Error),
}
