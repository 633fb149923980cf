//! Top navigation and sidebar views.
//!
//! Both views are derived from the same [`Category`] values. Nothing here is
//! authored by hand, so an entry added to a category shows up in the
//! dropdown and in the sidebar at once.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::category::Category;
use crate::entry::NavEntry;

/// Item of the top navigation bar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TopNavItem {
    /// Standalone link rendered directly in the bar.
    Link(NavEntry),
    /// Dropdown for one category.
    Group {
        /// Dropdown label.
        text: String,
        /// Category entries in authored order.
        items: Vec<NavEntry>,
        /// Pattern highlighting the dropdown for visited paths under the prefix.
        #[serde(rename = "activeMatch")]
        active_match: String,
    },
}

/// Ordered top navigation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TopNavView {
    items: Vec<TopNavItem>,
}

impl TopNavView {
    /// Items in render order.
    #[must_use]
    pub fn items(&self) -> &[TopNavItem] {
        &self.items
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the bar is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Cluster of sidebar links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarGroup {
    /// Group heading; `None` renders an unlabeled group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Links in the group.
    pub items: Vec<NavEntry>,
}

/// Sidebar keyed by route prefix.
///
/// Keys keep category order. Serializes as a JSON object
/// `{ "/base/": [ { "items": [...] } ], ... }`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SidebarView {
    routes: Vec<(String, Vec<SidebarGroup>)>,
}

impl SidebarView {
    /// Groups shown under `prefix`.
    #[must_use]
    pub fn get(&self, prefix: &str) -> Option<&[SidebarGroup]> {
        self.routes
            .iter()
            .find(|(key, _)| key == prefix)
            .map(|(_, groups)| groups.as_slice())
    }

    /// Route prefixes in category order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|(key, _)| key.as_str())
    }

    /// `(prefix, groups)` pairs in category order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SidebarGroup])> {
        self.routes
            .iter()
            .map(|(key, groups)| (key.as_str(), groups.as_slice()))
    }

    /// Number of routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether there are no routes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Serialize for SidebarView {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.routes.len()))?;
        for (key, groups) in &self.routes {
            map.serialize_entry(key, groups)?;
        }
        map.end()
    }
}

/// Build the top navigation.
///
/// Standalone links come first as direct links, followed by one dropdown per
/// category. Both keep the given order.
#[must_use]
pub fn build_top_nav(categories: &[Category], extra_links: &[NavEntry]) -> TopNavView {
    let links = extra_links.iter().cloned().map(TopNavItem::Link);
    let groups = categories.iter().map(|category| TopNavItem::Group {
        text: category.title().to_owned(),
        items: category.entries().to_vec(),
        active_match: category.active_match(),
    });

    TopNavView {
        items: links.chain(groups).collect(),
    }
}

/// Build the sidebar.
///
/// Each category maps its prefix to a single unlabeled group holding exactly
/// its entries.
#[must_use]
pub fn build_sidebar(categories: &[Category]) -> SidebarView {
    let routes = categories
        .iter()
        .map(|category| {
            let group = SidebarGroup {
                text: None,
                items: category.entries().to_vec(),
            };
            (category.prefix(), vec![group])
        })
        .collect();

    SidebarView { routes }
}
