//! Navigation tree outline

use std::io::{self, Write};

use crate::nav::item::NavigationItem;

const FOLDER_ICON: &str = "\u{1F4C1}";
const FILE_ICON: &str = "\u{1F4C4}";

/// Sidebar outline panel
pub struct Sidebar;

impl Sidebar {
    /// Show the tree, one item per line
    pub fn show(out: &mut impl Write, items: &[NavigationItem]) -> io::Result<()> {
        for item in items {
            Self::show_node(out, item, 0)?;
        }
        Ok(())
    }

    /// Recursively show a tree node
    fn show_node(out: &mut impl Write, item: &NavigationItem, depth: usize) -> io::Result<()> {
        let indent = "  ".repeat(depth);
        match item {
            NavigationItem::Category(category) => {
                if category.items.is_empty() {
                    writeln!(out, "{}{} {} (empty)", indent, FOLDER_ICON, category.label)?;
                } else {
                    writeln!(out, "{}{} {}", indent, FOLDER_ICON, category.label)?;
                }
                for child in &category.items {
                    Self::show_node(out, child, depth + 1)?;
                }
                Ok(())
            }
            NavigationItem::Link(link) => writeln!(
                out,
                "{}{} {}  {}",
                indent, FILE_ICON, link.label, link.destination
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_show_outline() {
        let items = vec![
            NavigationItem::category(
                "AWS",
                vec![NavigationItem::link("/aws/vpc", "VPC")],
            ),
            NavigationItem::category("GCP", vec![]),
        ];

        let mut out = Vec::new();
        Sidebar::show(&mut out, &items).unwrap();
        let expected = format!(
            "{f} AWS\n  {d} VPC  /aws/vpc\n{f} GCP (empty)\n",
            f = FOLDER_ICON,
            d = FILE_ICON
        );
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }
}
