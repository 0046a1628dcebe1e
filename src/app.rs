//! Application state and card resolution coordination

use std::path::Path;

use anyhow::{Context, Result};

use crate::core::{config::AppConfig, file_system::DocsTree};
use crate::nav::{
    find_category, load_sidebar, CardDescriptor, ContentIndex, DescriptionOverrideTable,
    NavigationItem, SidebarItemResolver,
};

/// Main application state
pub struct CardsApp {
    /// Application configuration
    pub config: AppConfig,
    /// Navigation tree being resolved
    pub items: Vec<NavigationItem>,
    /// Content records of the scanned docs, if any
    pub content: ContentIndex,
    /// Fallback descriptions, fixed at startup
    pub overrides: DescriptionOverrideTable,
}

impl CardsApp {
    /// Create a new application instance
    pub fn new(config: AppConfig) -> Self {
        let overrides = config.description_override_table();
        tracing::debug!("Using {} description overrides", overrides.len());

        Self {
            config,
            items: Vec::new(),
            content: ContentIndex::new(),
            overrides,
        }
    }

    /// Scan a docs directory for both the navigation tree and the content index
    pub fn open_docs(&mut self, path: &Path) -> Result<()> {
        let tree = DocsTree::from_path(path, &self.config.site.route_base_path)
            .with_context(|| format!("Failed to scan docs: {}", path.display()))?;

        self.items = tree.items;
        self.content = tree.content;
        Ok(())
    }

    /// Use a sidebar JSON file as the navigation tree, keeping any content index
    pub fn open_sidebar(&mut self, path: &Path) -> Result<()> {
        self.items = load_sidebar(path)
            .with_context(|| format!("Failed to load sidebar: {}", path.display()))?;
        Ok(())
    }

    /// Resolver bound to this app's content, overrides and card settings
    pub fn resolver(&self) -> SidebarItemResolver<'_> {
        SidebarItemResolver::new(&self.content, &self.overrides)
            .with_plural(self.config.category_items_plural())
            .with_icons(self.config.card_icons())
    }

    /// Cards for the top level, or for the children of a category path
    pub fn cards(&self, category: Option<&str>) -> Result<Vec<CardDescriptor>> {
        let items = match category {
            Some(path) => {
                &find_category(&self.items, path)
                    .with_context(|| format!("No category named '{}'", path))?
                    .items
            }
            None => &self.items,
        };

        let cards = self.resolver().resolve_cards(items);
        let skipped = items.len() - cards.len();
        if skipped > 0 {
            tracing::info!("Skipped {} categories without links", skipped);
        }
        Ok(cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::card::{CardIcon, DEFAULT_CATEGORY_ICON};
    use pretty_assertions::assert_eq;
    use std::fs;

    const SIDEBAR: &str = r#"[
        {"type": "category", "label": "AWS", "items": [
            {"type": "category", "label": "VPC", "items": [
                {"type": "link", "href": "/template-library/aws/simple-vpc", "label": "Simple VPC"}
            ]}
        ]},
        {"type": "category", "label": "GCP", "items": []}
    ]"#;

    #[test]
    fn test_cards_from_sidebar_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sidebar.json");
        fs::write(&path, SIDEBAR).unwrap();

        let mut app = CardsApp::new(AppConfig::default());
        app.open_sidebar(&path).unwrap();

        let cards = app.cards(None).unwrap();
        assert_eq!(
            cards,
            vec![CardDescriptor {
                destination: "/template-library/aws/simple-vpc".to_string(),
                icon: CardIcon::glyph(DEFAULT_CATEGORY_ICON),
                title: "AWS".to_string(),
                description: "1 item".to_string(),
            }]
        );

        let vpc_cards = app.cards(Some("AWS/VPC")).unwrap();
        assert_eq!(vpc_cards.len(), 1);
        assert_eq!(vpc_cards[0].title, "Simple VPC");
        assert_eq!(vpc_cards[0].description, "Simple VPC configuration in AWS");

        assert!(app.cards(Some("Azure")).is_err());
    }

    #[test]
    fn test_cards_from_docs_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("guides")).unwrap();
        fs::write(
            dir.path().join("guides/deploy.md"),
            "---\ntitle: Deploy\n---\nRun `stackql-deploy build`.\n",
        )
        .unwrap();

        let mut app = CardsApp::new(AppConfig::default());
        app.open_docs(dir.path()).unwrap();

        let cards = app.cards(Some("guides")).unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].destination, "/guides/deploy");
        assert_eq!(cards[0].description, "Run stackql-deploy build.");
    }

    #[test]
    fn test_invalid_sidebar_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sidebar.json");
        fs::write(&path, r#"[{"type": "ref", "id": "intro"}]"#).unwrap();

        let mut app = CardsApp::new(AppConfig::default());
        let err = app.open_sidebar(&path).unwrap_err();
        assert!(err.to_string().contains("sidebar.json"));
        assert!(format!("{:#}", err).contains("unknown item type `ref`"));
    }
}
