//! Resolution of navigation items into cards
//!
//! A link maps onto a card directly. A category has no page of its own, so
//! its card points at the first link found below it: children are searched
//! depth-first in document order, and a nested category is exhausted before
//! its next sibling is looked at. A category with no link anywhere below it
//! produces no card.
//!
//! Descriptions are taken from the first non-empty source of:
//!
//! 1. the item's own description
//! 2. the item count of a category ("1 item", "5 items", ...)
//! 3. the content record a link points at
//! 4. the override table entry for the card's destination

use super::card::{CardDescriptor, CardIcon, CardIcons};
use super::content::ContentLookup;
use super::item::{NavigationItem, SidebarCategory};
use super::overrides::OverrideLookup;
use super::plural::CategoryItemsPlural;

/// First link destination below `items`, depth-first in document order
pub fn first_link_destination(items: &[NavigationItem]) -> Option<&str> {
    items.iter().find_map(|item| match item {
        NavigationItem::Link(link) => Some(link.destination.as_str()),
        NavigationItem::Category(category) => first_link_destination(&category.items),
    })
}

/// Turns navigation items into card descriptors
pub struct SidebarItemResolver<'a> {
    content: &'a dyn ContentLookup,
    overrides: &'a dyn OverrideLookup,
    plural: CategoryItemsPlural,
    icons: CardIcons,
}

impl<'a> SidebarItemResolver<'a> {
    /// Create a resolver with English item counts and the default glyphs
    pub fn new(content: &'a dyn ContentLookup, overrides: &'a dyn OverrideLookup) -> Self {
        Self {
            content,
            overrides,
            plural: CategoryItemsPlural::default(),
            icons: CardIcons::default(),
        }
    }

    pub fn with_plural(mut self, plural: CategoryItemsPlural) -> Self {
        self.plural = plural;
        self
    }

    pub fn with_icons(mut self, icons: CardIcons) -> Self {
        self.icons = icons;
        self
    }

    /// Destination a category card points at
    pub fn resolve_destination<'c>(&self, category: &'c SidebarCategory) -> Option<&'c str> {
        let destination = first_link_destination(&category.items);
        if destination.is_none() {
            tracing::debug!("Category '{}' has no link below it", category.label);
        }
        destination
    }

    pub fn resolve_icon(&self, item: &NavigationItem) -> CardIcon {
        match item {
            NavigationItem::Link(_) => CardIcon::glyph(&self.icons.link),
            NavigationItem::Category(category) => match category.icon.as_deref() {
                Some(src) if !src.is_empty() => CardIcon::image(src, &category.label),
                _ => CardIcon::glyph(&self.icons.category),
            },
        }
    }

    pub fn resolve_description(&self, item: &NavigationItem, destination: &str) -> String {
        if let Some(description) = item.description().filter(|d| !d.is_empty()) {
            return description.to_string();
        }

        let derived = match item {
            NavigationItem::Category(category) => Some(self.plural.describe(category.item_count())),
            NavigationItem::Link(link) => link
                .content_id
                .as_deref()
                .and_then(|id| self.content.lookup_description(id))
                .map(str::to_string),
        };
        if let Some(description) = derived.filter(|d| !d.is_empty()) {
            return description;
        }

        self.overrides
            .lookup_override(destination)
            .map(str::to_string)
            .unwrap_or_default()
    }

    /// Card for an item, or `None` when a category has nothing to link to
    pub fn resolve_card(&self, item: &NavigationItem) -> Option<CardDescriptor> {
        let (destination, title) = match item {
            NavigationItem::Link(link) => (link.destination.as_str(), link.label.as_str()),
            NavigationItem::Category(category) => {
                (self.resolve_destination(category)?, category.label.as_str())
            }
        };

        Some(CardDescriptor {
            destination: destination.to_string(),
            icon: self.resolve_icon(item),
            title: title.to_string(),
            description: self.resolve_description(item, destination),
        })
    }

    /// Cards for a list of sibling items, skipping the ones without a card
    pub fn resolve_cards(&self, items: &[NavigationItem]) -> Vec<CardDescriptor> {
        items.iter().filter_map(|item| self.resolve_card(item)).collect()
    }
}
