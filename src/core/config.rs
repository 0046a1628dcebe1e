//! Site configuration management

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::nav::card::{CardIcons, DEFAULT_CATEGORY_ICON, DEFAULT_LINK_ICON};
use crate::nav::overrides::DescriptionOverrideTable;
use crate::nav::plural::{CategoryItemsPlural, PluralRules, DEFAULT_CATEGORY_ITEMS_MESSAGE};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Site settings
    pub site: SiteConfig,
    /// Card settings
    pub cards: CardsConfig,
    /// Fallback descriptions keyed by destination path
    pub description_overrides: BTreeMap<String, String>,
}

/// Site-wide settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// BCP 47 locale used for plural rules
    pub locale: String,
    /// URL path under which docs pages are served
    pub route_base_path: String,
    /// Docs directory used when none is given on the command line
    pub docs_dir: Option<PathBuf>,
}

/// Card presentation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardsConfig {
    /// Glyph for categories without a custom icon
    pub category_icon: String,
    /// Glyph for links
    pub link_icon: String,
    /// Item count templates keyed by locale, e.g. `"1 item|{count} items"`
    pub category_items_messages: BTreeMap<String, String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let description_overrides = [
            ("/template-library/aws/simple-vpc", "Simple VPC configuration in AWS"),
            (
                "/template-library/azure/simple-vnet",
                "Basic Virtual Network setup in Azure",
            ),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            site: SiteConfig::default(),
            cards: CardsConfig::default(),
            description_overrides,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            route_base_path: "/".to_string(),
            docs_dir: None,
        }
    }
}

impl Default for CardsConfig {
    fn default() -> Self {
        let mut category_items_messages = BTreeMap::new();
        category_items_messages.insert("en".to_string(), DEFAULT_CATEGORY_ITEMS_MESSAGE.to_string());

        Self {
            category_icon: DEFAULT_CATEGORY_ICON.to_string(),
            link_icon: DEFAULT_LINK_ICON.to_string(),
            category_items_messages,
        }
    }
}

impl AppConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "doccards", "Doccards")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        let path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Self::load_from(&path)
    }

    /// Load configuration from `path`, falling back to defaults if it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        tracing::info!("Loaded config from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure config directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;

        tracing::info!("Saved config to: {}", path.display());
        Ok(())
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&path)
    }

    pub fn description_override_table(&self) -> DescriptionOverrideTable {
        DescriptionOverrideTable::new(self.description_overrides.clone())
    }

    /// Item count template for the configured locale.
    ///
    /// Tries the full tag, then its language, then English.
    pub fn category_items_message(&self) -> &str {
        let locale = self.site.locale.as_str();
        let language = locale.split(['-', '_']).next().unwrap_or(locale);
        let messages = &self.cards.category_items_messages;

        messages
            .get(locale)
            .or_else(|| messages.get(language))
            .or_else(|| messages.get("en"))
            .map(String::as_str)
            .unwrap_or(DEFAULT_CATEGORY_ITEMS_MESSAGE)
    }

    pub fn category_items_plural(&self) -> CategoryItemsPlural {
        CategoryItemsPlural::new(
            PluralRules::for_locale(&self.site.locale),
            self.category_items_message(),
        )
    }

    pub fn card_icons(&self) -> CardIcons {
        CardIcons {
            category: self.cards.category_icon.clone(),
            link: self.cards.link_icon.clone(),
        }
    }
}
