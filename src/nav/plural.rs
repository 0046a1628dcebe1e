//! Locale plural rules for count-based messages
//!
//! Messages use the `singular|plural` convention of the site generator:
//! a template such as `"1 item|{count} items"` is split on `|` and the
//! part matching the locale's plural category for the count is selected.
//! Categories are indexed in canonical CLDR order, restricted to the ones
//! the locale actually uses, so `"1 élément|{count} éléments"` works for
//! French just as the English template does.

use serde::{Deserialize, Serialize};

/// Default template for category item counts
pub const DEFAULT_CATEGORY_ITEMS_MESSAGE: &str = "1 item|{count} items";

const MESSAGE_SEPARATOR: char = '|';

/// CLDR plural category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

/// Rule families keyed by language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RuleSet {
    /// ja, zh, ko, ...
    OtherOnly,
    /// en, de, nl, ...
    OneOther,
    /// fr, pt (Brazil): 0 and 1 are singular
    ZeroOneSingular,
    /// es, it, ca, pt-PT
    OneManyOther,
    /// ru, uk, be
    EastSlavic,
    Polish,
    /// cs, sk
    CzechSlovak,
    Arabic,
    Hebrew,
}

impl RuleSet {
    fn for_language(language: &str, region: Option<&str>) -> Option<Self> {
        let rules = match language {
            "ja" | "zh" | "ko" | "vi" | "th" | "id" | "ms" | "lo" | "my" | "km" => Self::OtherOnly,
            "en" | "de" | "nl" | "sv" | "da" | "nb" | "nn" | "no" | "fi" | "et" | "el" | "hu"
            | "tr" | "bg" | "eu" | "gl" | "af" | "sw" => Self::OneOther,
            "fr" => Self::ZeroOneSingular,
            "pt" if region == Some("pt") => Self::OneManyOther,
            "pt" => Self::ZeroOneSingular,
            "es" | "it" | "ca" => Self::OneManyOther,
            "ru" | "uk" | "be" => Self::EastSlavic,
            "pl" => Self::Polish,
            "cs" | "sk" => Self::CzechSlovak,
            "ar" => Self::Arabic,
            "he" | "iw" => Self::Hebrew,
            _ => return None,
        };
        Some(rules)
    }

    fn categories(self) -> &'static [PluralCategory] {
        use PluralCategory::*;
        match self {
            Self::OtherOnly => &[Other],
            Self::OneOther => &[One, Other],
            Self::ZeroOneSingular | Self::OneManyOther => &[One, Many, Other],
            Self::EastSlavic | Self::Polish | Self::CzechSlovak => &[One, Few, Many, Other],
            Self::Arabic => &[Zero, One, Two, Few, Many, Other],
            Self::Hebrew => &[One, Two, Other],
        }
    }

    /// Cardinal category for a non-negative integer
    fn select(self, n: u64) -> PluralCategory {
        use PluralCategory::*;
        let mod10 = n % 10;
        let mod100 = n % 100;
        let millions = n != 0 && n % 1_000_000 == 0;

        match self {
            Self::OtherOnly => Other,
            Self::OneOther => {
                if n == 1 {
                    One
                } else {
                    Other
                }
            }
            Self::ZeroOneSingular => match n {
                0 | 1 => One,
                _ if millions => Many,
                _ => Other,
            },
            Self::OneManyOther => match n {
                1 => One,
                _ if millions => Many,
                _ => Other,
            },
            Self::EastSlavic => {
                if mod10 == 1 && mod100 != 11 {
                    One
                } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
                    Few
                } else {
                    Many
                }
            }
            Self::Polish => {
                if n == 1 {
                    One
                } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
                    Few
                } else {
                    Many
                }
            }
            // "many" is reserved for fractions
            Self::CzechSlovak => match n {
                1 => One,
                2..=4 => Few,
                _ => Other,
            },
            Self::Arabic => match n {
                0 => Zero,
                1 => One,
                2 => Two,
                _ if (3..=10).contains(&mod100) => Few,
                _ if (11..=99).contains(&mod100) => Many,
                _ => Other,
            },
            Self::Hebrew => match n {
                1 => One,
                2 => Two,
                _ => Other,
            },
        }
    }
}

/// Plural rules of a single locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralRules {
    locale: String,
    rules: RuleSet,
}

impl Default for PluralRules {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            rules: RuleSet::OneOther,
        }
    }
}

impl PluralRules {
    /// Rules for a BCP 47 tag such as `en`, `pt-BR` or `ru_RU`.
    ///
    /// Unknown languages fall back to English rules.
    pub fn for_locale(tag: &str) -> Self {
        let normalized = tag.trim().to_lowercase().replace('_', "-");
        let mut subtags = normalized.split('-');
        let language = subtags.next().unwrap_or_default();
        let region = subtags.next();

        match RuleSet::for_language(language, region) {
            Some(rules) => Self {
                locale: normalized,
                rules,
            },
            None => {
                tracing::warn!("No plural rules for locale '{}', using English rules", tag);
                Self::default()
            }
        }
    }

    /// Locale these rules were resolved for
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Categories used by the locale, in canonical order
    pub fn categories(&self) -> &'static [PluralCategory] {
        self.rules.categories()
    }

    pub fn select(&self, count: usize) -> PluralCategory {
        self.rules.select(count as u64)
    }

    /// Pick the message variant for `count` and interpolate `{count}`
    pub fn select_message(&self, template: &str, count: usize) -> String {
        let message = template.replace("{count}", &count.to_string());
        let parts: Vec<&str> = message.split(MESSAGE_SEPARATOR).collect();
        if parts.len() == 1 {
            return message;
        }

        let categories = self.categories();
        if parts.len() > categories.len() {
            tracing::warn!(
                "Message '{}' has {} plural forms but locale '{}' only uses {}",
                template,
                parts.len(),
                self.locale,
                categories.len()
            );
        }

        let category = self.select(count);
        let index = categories
            .iter()
            .position(|c| *c == category)
            .unwrap_or(categories.len() - 1);
        parts[index.min(parts.len() - 1)].to_string()
    }
}

/// Item-count description for category cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryItemsPlural {
    rules: PluralRules,
    template: String,
}

impl Default for CategoryItemsPlural {
    fn default() -> Self {
        Self::new(PluralRules::default(), DEFAULT_CATEGORY_ITEMS_MESSAGE)
    }
}

impl CategoryItemsPlural {
    pub fn new(rules: PluralRules, template: impl Into<String>) -> Self {
        Self {
            rules,
            template: template.into(),
        }
    }

    /// Describe `count` items, e.g. `"5 items"`
    pub fn describe(&self, count: usize) -> String {
        self.rules.select_message(&self.template, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PluralCategory::*;

    #[test]
    fn test_english_items() {
        let plural = CategoryItemsPlural::default();
        assert_eq!(plural.describe(0), "0 items");
        assert_eq!(plural.describe(1), "1 item");
        assert_eq!(plural.describe(5), "5 items");
        assert_eq!(plural.describe(21), "21 items");
    }

    #[test]
    fn test_french_treats_zero_as_singular() {
        let plural = CategoryItemsPlural::new(
            PluralRules::for_locale("fr"),
            "{count} élément|{count} éléments",
        );
        assert_eq!(plural.describe(0), "0 élément");
        assert_eq!(plural.describe(1), "1 élément");
        assert_eq!(plural.describe(2), "2 éléments");
        assert_eq!(plural.describe(1_000_000), "1000000 éléments");
    }

    #[test]
    fn test_russian_categories() {
        let rules = PluralRules::for_locale("ru-RU");
        assert_eq!(rules.categories(), &[One, Few, Many, Other]);
        assert_eq!(rules.select(1), One);
        assert_eq!(rules.select(21), One);
        assert_eq!(rules.select(11), Many);
        assert_eq!(rules.select(3), Few);
        assert_eq!(rules.select(13), Many);
        assert_eq!(rules.select(5), Many);

        let template = "{count} элемент|{count} элемента|{count} элементов";
        assert_eq!(rules.select_message(template, 1), "1 элемент");
        assert_eq!(rules.select_message(template, 3), "3 элемента");
        assert_eq!(rules.select_message(template, 5), "5 элементов");
        assert_eq!(rules.select_message(template, 11), "11 элементов");
    }

    #[test]
    fn test_polish_and_czech() {
        let pl = PluralRules::for_locale("pl");
        assert_eq!(pl.select(1), One);
        assert_eq!(pl.select(22), Few);
        assert_eq!(pl.select(21), Many);

        let cs = PluralRules::for_locale("cs");
        assert_eq!(cs.select(4), Few);
        assert_eq!(cs.select(5), Other);
    }

    #[test]
    fn test_arabic_categories() {
        let rules = PluralRules::for_locale("ar");
        assert_eq!(rules.select(0), Zero);
        assert_eq!(rules.select(2), Two);
        assert_eq!(rules.select(7), Few);
        assert_eq!(rules.select(11), Many);
        assert_eq!(rules.select(100), Other);
    }

    #[test]
    fn test_portugal_differs_from_brazil() {
        assert_eq!(PluralRules::for_locale("pt-BR").select(0), One);
        assert_eq!(PluralRules::for_locale("pt_PT").select(0), Other);
    }

    #[test]
    fn test_other_only_locale_uses_first_part() {
        let rules = PluralRules::for_locale("ja");
        assert_eq!(rules.select_message("{count} 項目|{count} 項目s", 1), "1 項目");
        assert_eq!(rules.select_message("{count} 項目|{count} 項目s", 4), "4 項目");
    }

    #[test]
    fn test_unknown_locale_falls_back_to_english() {
        let rules = PluralRules::for_locale("tlh");
        assert_eq!(rules.locale(), "en");
        assert_eq!(rules.select_message(DEFAULT_CATEGORY_ITEMS_MESSAGE, 1), "1 item");
    }

    #[test]
    fn test_single_form_message_is_returned_as_is() {
        let rules = PluralRules::default();
        assert_eq!(rules.select_message("{count} pages", 1), "1 pages");
    }
}
