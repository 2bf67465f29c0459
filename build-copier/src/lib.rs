pub mod error;
pub mod itemset;
pub mod mobafire;
pub mod mobalytics;
pub mod opgg;

pub use crate::error::{ConversionError, Result};
pub use crate::itemset::{ItemSet, ItemSetBlock, ItemSetBlockItem};
pub use crate::opgg::Role;

use ddragon_sdk::DataDragon;
use scraper::{ElementRef, Selector};

/// Maximum length for an item set title.
pub const TITLE_MAX_LENGTH: usize = 75;

const DEFAULT_TITLE: &str = "Unnamed";

/// Converts third-party build guides into item sets the game client can
/// import, resolving names against one DDragon catalog.
pub struct Copier {
    dragon: DataDragon,
    web: reqwest::Client,
}

impl Copier {
    pub fn new(dragon: DataDragon) -> Self {
        Self {
            dragon,
            web: reqwest::Client::new(),
        }
    }

    pub fn dragon(&self) -> &DataDragon {
        &self.dragon
    }

    /// Converts a MOBAfire guide page.
    pub fn mobafire(&self, url: &str) -> mobafire::MobafireRequestBuilder {
        mobafire::MobafireRequestBuilder::new(self.dragon.clone(), self.web.clone(), url)
    }

    /// Converts a Mobalytics build for the given champion.
    pub fn mobalytics(&self, champion: &str, build_id: i64) -> mobalytics::MobalyticsRequestBuilder {
        mobalytics::MobalyticsRequestBuilder::new(
            self.dragon.clone(),
            self.web.clone(),
            champion,
            build_id,
        )
    }

    /// Converts the OP.GG build for the given champion and role.
    pub fn opgg(&self, champion: &str, role: Role) -> opgg::OpggRequestBuilder {
        opgg::OpggRequestBuilder::new(self.dragon.clone(), self.web.clone(), champion, role)
    }
}

impl Clone for Copier {
    fn clone(&self) -> Self {
        Self {
            dragon: self.dragon.clone(),
            web: self.web.clone(),
        }
    }
}

/// Title rules shared by every converter: an explicit title must be
/// non-empty (after trimming) and within the length bound; a scraped title
/// is trimmed and truncated; with neither we fall back to a placeholder.
fn resolve_title(explicit: Option<&str>, scraped: Option<&str>) -> Result<String> {
    if let Some(title) = explicit {
        let title = title.trim();
        if title.is_empty() || title.chars().count() > TITLE_MAX_LENGTH {
            return Err(ConversionError::input(format!(
                "title must not be empty and have a length smaller than or equal to {}",
                TITLE_MAX_LENGTH
            )));
        }
        return Ok(title.to_string());
    }
    match scraped.map(str::trim).filter(|title| !title.is_empty()) {
        Some(title) => Ok(title.chars().take(TITLE_MAX_LENGTH).collect()),
        None => Ok(DEFAULT_TITLE.to_string()),
    }
}

fn selector(selector: &str) -> Selector {
    Selector::parse(selector).expect("valid selector")
}

fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
pub(crate) mod test_util {
    use ddragon_sdk::champions::{Champion, Champions};
    use ddragon_sdk::items::{Item, Items};
    use ddragon_sdk::DataDragon;
    use serde::Deserialize;
    use std::collections::HashMap;

    pub(crate) const VERSION: &str = "13.15.1";

    #[derive(Deserialize)]
    struct Envelope<T> {
        data: HashMap<String, T>,
    }

    pub(crate) fn champions() -> Champions {
        let envelope: Envelope<Champion> =
            serde_json::from_str(include_str!("../fixtures/champion.json")).unwrap();
        Champions::new(envelope.data)
    }

    pub(crate) fn items() -> Items {
        let envelope: Envelope<Item> =
            serde_json::from_str(include_str!("../fixtures/item.json")).unwrap();
        Items::new(envelope.data)
    }

    pub(crate) fn dragon() -> DataDragon {
        DataDragon::preloaded(VERSION, champions(), items())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_title_is_trimmed_and_validated() {
        assert_eq!(resolve_title(Some("  Jungle Graves "), None).unwrap(), "Jungle Graves");
        assert!(resolve_title(Some("   "), None).is_err());

        let too_long = "x".repeat(76);
        assert!(resolve_title(Some(too_long.as_str()), None).is_err());
        let just_fits = "x".repeat(75);
        assert_eq!(resolve_title(Some(just_fits.as_str()), None).unwrap(), just_fits);
    }

    #[test]
    fn scraped_title_is_truncated_not_rejected() {
        let long = "y".repeat(80);
        assert_eq!(resolve_title(None, Some(long.as_str())).unwrap(), "y".repeat(75));
        assert_eq!(resolve_title(None, Some(" guide ")).unwrap(), "guide");
    }

    #[test]
    fn missing_titles_fall_back_to_the_placeholder() {
        assert_eq!(resolve_title(None, None).unwrap(), "Unnamed");
        assert_eq!(resolve_title(None, Some("  ")).unwrap(), "Unnamed");
    }
}
