//! Error types for sidebar loading

use thiserror::Error;

/// Errors raised while turning sidebar data into navigation items
#[derive(Error, Debug)]
pub enum NavError {
    /// The item is neither a link nor a category
    #[error("unknown item type `{kind}` for item {item}")]
    InvalidItemKind {
        /// The `type` tag found on the item
        kind: String,
        /// The offending item, serialized back to JSON
        item: String,
    },

    /// A link without a destination
    #[error("link `{label}` has an empty destination")]
    EmptyDestination {
        /// Label of the broken link
        label: String,
    },

    /// Malformed sidebar JSON
    #[error("invalid sidebar JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Sidebar file could not be read
    #[error("failed to read sidebar: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for navigation operations
pub type Result<T> = std::result::Result<T, NavError>;
