//! Terminal output for cards and navigation trees

pub mod card_list;
pub mod sidebar;
