//! Card grid output

use std::io::{self, Write};

use crate::nav::card::CardDescriptor;

/// Descriptions longer than this are cut with an ellipsis
const DESCRIPTION_WIDTH: usize = 72;

/// Card grid panel
pub struct CardListPanel;

impl CardListPanel {
    /// Write the cards as text blocks
    pub fn show(out: &mut impl Write, cards: &[CardDescriptor]) -> io::Result<()> {
        if cards.is_empty() {
            writeln!(out, "No cards")?;
            return Ok(());
        }

        for (i, card) in cards.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            Self::show_card(out, card)?;
        }
        Ok(())
    }

    fn show_card(out: &mut impl Write, card: &CardDescriptor) -> io::Result<()> {
        writeln!(out, "{} {}", card.icon, card.title)?;
        if !card.description.is_empty() {
            writeln!(out, "   {}", truncate(&card.description, DESCRIPTION_WIDTH))?;
        }
        writeln!(out, "   -> {}", card.destination)
    }

    /// Write the cards as pretty JSON
    pub fn show_json(out: &mut impl Write, cards: &[CardDescriptor]) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(cards)?;
        writeln!(out, "{}", json)?;
        Ok(())
    }
}

/// Cut `text` to at most `width` characters, ending in `…` when shortened
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('\u{2026}');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::card::CardIcon;
    use pretty_assertions::assert_eq;

    fn card(title: &str, description: &str) -> CardDescriptor {
        CardDescriptor {
            destination: format!("/{}", title.to_lowercase()),
            icon: CardIcon::glyph("*"),
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_show_cards() {
        let mut out = Vec::new();
        CardListPanel::show(&mut out, &[card("AWS", "1 item"), card("Intro", "")]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "* AWS\n   1 item\n   -> /aws\n\n* Intro\n   -> /intro\n"
        );
    }

    #[test]
    fn test_show_no_cards() {
        let mut out = Vec::new();
        CardListPanel::show(&mut out, &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No cards\n");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghijk", 5), "abcd\u{2026}");
    }

    #[test]
    fn test_show_json() {
        let mut out = Vec::new();
        CardListPanel::show_json(&mut out, &[card("AWS", "1 item")]).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["title"], "AWS");
        assert_eq!(value[0]["icon"]["kind"], "glyph");
        assert_eq!(value[0]["icon"]["glyph"], "*");
    }
}
