//! Resolved card descriptors handed to the presentation layer

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default glyph for category cards
pub const DEFAULT_CATEGORY_ICON: &str = "\u{2601}\u{FE0F}";
/// Default glyph for link cards
pub const DEFAULT_LINK_ICON: &str = "\u{1F4C4}\u{FE0F}";

/// Icon shown on a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CardIcon {
    /// Built-in emoji glyph
    Glyph { glyph: String },
    /// Custom image supplied by the category
    Image { src: String, alt: String },
}

impl CardIcon {
    pub fn glyph(glyph: impl Into<String>) -> Self {
        Self::Glyph {
            glyph: glyph.into(),
        }
    }

    pub fn image(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self::Image {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

impl fmt::Display for CardIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Glyph { glyph } => write!(f, "{}", glyph),
            Self::Image { src, .. } => write!(f, "[{}]", src),
        }
    }
}

/// Default glyphs used when an item carries no icon of its own
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardIcons {
    pub category: String,
    pub link: String,
}

impl Default for CardIcons {
    fn default() -> Self {
        Self {
            category: DEFAULT_CATEGORY_ICON.to_string(),
            link: DEFAULT_LINK_ICON.to_string(),
        }
    }
}

/// A navigation card ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDescriptor {
    pub destination: String,
    pub icon: CardIcon,
    pub title: String,
    /// Empty when no description could be found
    pub description: String,
}
