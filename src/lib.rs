//! Doccards - navigation cards for documentation sites
//!
//! Resolves a documentation sidebar (links and nested categories) into
//! cards with a destination, title, description and icon.

pub mod app;
pub mod core;
pub mod nav;
pub mod ui;

pub use app::CardsApp;
pub use nav::{CardDescriptor, NavigationItem, SidebarItemResolver};
