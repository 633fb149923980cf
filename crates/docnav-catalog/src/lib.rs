//! Navigation catalog for docnav.
//!
//! Owns the categories and standalone links of a documentation site and
//! derives the two views the rendering framework consumes:
//! - [`TopNavView`]: the navigation bar, one dropdown per category
//! - [`SidebarView`]: route prefix to sidebar group mapping
//!
//! Both views come from the same entry lists, so they cannot drift apart.
//!
//! # Example
//!
//! ```
//! use docnav_catalog::{NavEntry, NavigationCatalog, define_category};
//!
//! let base = define_category(
//!     "base",
//!     vec![NavEntry::new("CSS", "/base/css"), NavEntry::new("Git", "/base/git")],
//! )?;
//! let catalog = NavigationCatalog::new(vec![base], vec![NavEntry::new("Home", "/")])?;
//!
//! assert_eq!(catalog.top_nav().len(), 2);
//! assert!(catalog.sidebar().get("/base/").is_some());
//! # Ok::<(), docnav_catalog::ConfigurationError>(())
//! ```

mod catalog;
mod category;
mod entry;
mod error;
mod view;

pub use catalog::NavigationCatalog;
pub use category::{Category, define_category};
pub use entry::NavEntry;
pub use error::ConfigurationError;
pub use view::{SidebarGroup, SidebarView, TopNavItem, TopNavView, build_sidebar, build_top_nav};
