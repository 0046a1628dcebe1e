//! Navigation tree model and sidebar loading

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{NavError, Result};

/// A node of the navigation tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationItem {
    /// Leaf with a direct destination
    Link(SidebarLink),
    /// Group of nested items without a destination of its own
    Category(SidebarCategory),
}

/// A leaf entry pointing at a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarLink {
    /// URL path of the page
    pub destination: String,
    /// Text shown for the entry
    pub label: String,
    /// Explicit description
    pub description: Option<String>,
    /// Reference to the content record backing this link
    pub content_id: Option<String>,
}

/// A category entry grouping other items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarCategory {
    pub label: String,
    pub description: Option<String>,
    pub items: Vec<NavigationItem>,
    /// Custom icon path or URL
    pub icon: Option<String>,
}

impl SidebarLink {
    pub fn new(destination: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            label: label.into(),
            description: None,
            content_id: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_content_id(mut self, content_id: impl Into<String>) -> Self {
        self.content_id = Some(content_id.into());
        self
    }
}

impl SidebarCategory {
    pub fn new(label: impl Into<String>, items: Vec<NavigationItem>) -> Self {
        Self {
            label: label.into(),
            description: None,
            items,
            icon: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Number of direct children
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl NavigationItem {
    /// Shorthand for a plain link
    pub fn link(destination: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Link(SidebarLink::new(destination, label))
    }

    /// Shorthand for a plain category
    pub fn category(label: impl Into<String>, items: Vec<NavigationItem>) -> Self {
        Self::Category(SidebarCategory::new(label, items))
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Link(link) => &link.label,
            Self::Category(category) => &category.label,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Link(link) => link.description.as_deref(),
            Self::Category(category) => category.description.as_deref(),
        }
    }
}

impl From<SidebarLink> for NavigationItem {
    fn from(link: SidebarLink) -> Self {
        Self::Link(link)
    }
}

impl From<SidebarCategory> for NavigationItem {
    fn from(category: SidebarCategory) -> Self {
        Self::Category(category)
    }
}

/// Sidebar item as emitted by the site generator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSidebarItem {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    doc_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    items: Vec<RawSidebarItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    custom_props: Option<RawCustomProps>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawCustomProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    icon: Option<String>,
}

impl TryFrom<RawSidebarItem> for NavigationItem {
    type Error = NavError;

    fn try_from(raw: RawSidebarItem) -> Result<Self> {
        match raw.kind.as_str() {
            "link" => {
                let destination = raw.href.unwrap_or_default();
                if destination.is_empty() {
                    return Err(NavError::EmptyDestination { label: raw.label });
                }
                Ok(Self::Link(SidebarLink {
                    destination,
                    label: raw.label,
                    description: raw.description,
                    content_id: raw.doc_id,
                }))
            }
            "category" => {
                let items = raw
                    .items
                    .into_iter()
                    .map(NavigationItem::try_from)
                    .collect::<Result<Vec<_>>>()?;
                Ok(Self::Category(SidebarCategory {
                    label: raw.label,
                    description: raw.description,
                    items,
                    icon: raw.custom_props.and_then(|props| props.icon),
                }))
            }
            _ => {
                let item = serde_json::to_string(&raw).unwrap_or_else(|_| raw.label.clone());
                Err(NavError::InvalidItemKind {
                    kind: raw.kind,
                    item,
                })
            }
        }
    }
}

/// Parse a sidebar from its JSON form
pub fn parse_sidebar(json: &str) -> Result<Vec<NavigationItem>> {
    let raw: Vec<RawSidebarItem> = serde_json::from_str(json)?;
    raw.into_iter().map(NavigationItem::try_from).collect()
}

/// Load a sidebar JSON file
pub fn load_sidebar(path: &Path) -> Result<Vec<NavigationItem>> {
    let content = std::fs::read_to_string(path)?;
    let items = parse_sidebar(&content)?;
    tracing::info!("Loaded {} sidebar items from {}", items.len(), path.display());
    Ok(items)
}

/// Find a category by its `/`-separated label path, e.g. `AWS/VPC`
pub fn find_category<'a>(items: &'a [NavigationItem], path: &str) -> Option<&'a SidebarCategory> {
    let mut current = items;
    let mut found = None;

    for segment in path.split('/').map(str::trim).filter(|s| !s.is_empty()) {
        let category = current.iter().find_map(|item| match item {
            NavigationItem::Category(category) if category.label == segment => Some(category),
            _ => None,
        })?;
        current = &category.items;
        found = Some(category);
    }

    found
}
