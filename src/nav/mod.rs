//! Navigation tree model and sidebar-to-card resolution

pub mod card;
pub mod content;
pub mod error;
pub mod item;
pub mod overrides;
pub mod plural;
pub mod resolver;

pub use card::{CardDescriptor, CardIcon, CardIcons};
pub use content::{ContentIndex, ContentLookup, ContentRecord};
pub use error::NavError;
pub use item::{find_category, load_sidebar, parse_sidebar, NavigationItem, SidebarCategory, SidebarLink};
pub use overrides::{DescriptionOverrideTable, OverrideLookup};
pub use plural::{CategoryItemsPlural, PluralCategory, PluralRules};
pub use resolver::SidebarItemResolver;
