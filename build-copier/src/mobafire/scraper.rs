use crate::error::{ConversionError, Result};
use crate::itemset::{ItemSetBlock, ItemSetBlockItem};
use crate::{element_text, selector};
use ddragon_sdk::items::Items;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^https?://(?:www\.)?mobafire\.com/league-of-legends/build/[0-9A-Za-z-]+-[0-9]{6}(?:#.*)?$",
    )
    .expect("valid MOBAfire URL pattern")
});

static TITLE: Lazy<Selector> =
    Lazy::new(|| selector("h1.view-guide__banner__title:nth-child(1) > span"));
static HEADER: Lazy<Selector> = Lazy::new(|| selector(".mobile-sr"));
static BUILDS: Lazy<Selector> = Lazy::new(|| selector(".view-guide__build"));
static BLOCKS: Lazy<Selector> = Lazy::new(|| selector("div.view-guide__items"));
static BLOCK_TITLE: Lazy<Selector> = Lazy::new(|| selector("div:nth-child(1) > span:nth-child(1)"));
static BLOCK_ITEMS: Lazy<Selector> = Lazy::new(|| selector("div:nth-child(2) > span"));
static ITEM_NAME: Lazy<Selector> = Lazy::new(|| selector("a:nth-child(1) > span:nth-child(2)"));
static ITEM_COUNT: Lazy<Selector> = Lazy::new(|| selector("a:nth-child(1) > label:nth-child(3)"));

/// A parsed MOBAfire guide page.
pub struct Guide {
    document: Html,
}

impl Guide {
    pub fn from_html(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    pub fn is_valid_url(url: &str) -> bool {
        URL_REGEX.is_match(url)
    }

    /// Validates the URL and downloads the page body.
    pub(crate) async fn fetch_html(web: &reqwest::Client, url: &str) -> Result<String> {
        if !Self::is_valid_url(url) {
            return Err(ConversionError::input("Invalid MOBAfire guide URL"));
        }
        let response = web.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }

    pub fn title(&self) -> Result<String> {
        self.document
            .select(&TITLE)
            .next()
            .map(|element| element_text(&element))
            .ok_or_else(|| ConversionError::scraper("Cannot get the title of the guide"))
    }

    /// The champion the guide is written for: the second line of the
    /// mobile header text.
    pub fn champion_name(&self) -> Result<String> {
        let header = self
            .document
            .select(&HEADER)
            .next()
            .ok_or_else(|| ConversionError::scraper("Cannot get the header of the guide"))?;
        let text: String = header.text().collect();
        text.lines()
            .nth(1)
            .map(|line| line.trim().to_string())
            .ok_or_else(|| ConversionError::scraper("Cannot get the champion of the guide"))
    }

    pub fn build_count(&self) -> usize {
        self.document.select(&BUILDS).count()
    }

    /// The build at `index`. Guides hold one or more builds; an index past
    /// the end is an input error naming how many the guide has.
    pub fn build(&self, index: usize) -> Result<Build<'_>> {
        match self.document.select(&BUILDS).nth(index) {
            Some(root) => Ok(Build { root }),
            None => {
                let count = self.build_count();
                Err(ConversionError::input(format!(
                    "Invalid build index: the guide has {} build{}",
                    count,
                    if count == 1 { "" } else { "s" }
                )))
            }
        }
    }
}

/// One `view-guide__build` subtree.
#[derive(Debug)]
pub struct Build<'a> {
    root: ElementRef<'a>,
}

impl<'a> Build<'a> {
    pub fn to_item_set_blocks(
        &self,
        items: &Items,
        version: &str,
        ignore_unknown_items: bool,
    ) -> Result<Vec<ItemSetBlock>> {
        self.root
            .select(&BLOCKS)
            .map(|root| BuildBlock { root }.to_item_set_block(items, version, ignore_unknown_items))
            .collect()
    }
}

struct BuildBlock<'a> {
    root: ElementRef<'a>,
}

impl<'a> BuildBlock<'a> {
    fn to_item_set_block(
        &self,
        items: &Items,
        version: &str,
        ignore_unknown_items: bool,
    ) -> Result<ItemSetBlock> {
        let mut block = ItemSetBlock::new(self.title()?);
        for item in self.root.select(&BLOCK_ITEMS).map(|root| BuildItem { root }) {
            let name = item.name()?;
            match items.key_of(&name) {
                Some(key) => block.items.push(ItemSetBlockItem {
                    id: key.to_string(),
                    count: item.count()?,
                }),
                None if ignore_unknown_items => {
                    tracing::warn!("skipping item `{}' not found in version {}", name, version);
                }
                None => {
                    return Err(ConversionError::scraper(format!(
                        "Cannot find item `{}' in version {}",
                        name, version
                    )));
                }
            }
        }
        Ok(block)
    }

    fn title(&self) -> Result<String> {
        self.root
            .select(&BLOCK_TITLE)
            .next()
            .map(|element| element_text(&element))
            .ok_or_else(|| ConversionError::scraper("Cannot get the build block title"))
    }
}

struct BuildItem<'a> {
    root: ElementRef<'a>,
}

impl<'a> BuildItem<'a> {
    fn name(&self) -> Result<String> {
        self.root
            .select(&ITEM_NAME)
            .next()
            .map(|element| element_text(&element))
            .ok_or_else(|| ConversionError::scraper("Cannot get the item name"))
    }

    /// The optional purchase-count label next to the item name. No label
    /// means a single purchase.
    fn count(&self) -> Result<u32> {
        match self.root.select(&ITEM_COUNT).next() {
            Some(element) => {
                let text = element_text(&element);
                text.parse().map_err(|_| {
                    ConversionError::scraper(format!("Cannot parse the item count `{}'", text))
                })
            }
            None => Ok(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util;

    const GUIDE: &str = include_str!("../../fixtures/mobafire-guide.html");

    #[test]
    fn validates_guide_urls() {
        assert!(Guide::is_valid_url(
            "https://www.mobafire.com/league-of-legends/build/13-15-arfreezys-guide-to-graves-jungle-585199"
        ));
        assert!(Guide::is_valid_url(
            "http://mobafire.com/league-of-legends/build/giga-chad-graves-607192"
        ));
        assert!(Guide::is_valid_url(
            "https://www.mobafire.com/league-of-legends/build/giga-chad-graves-607192#comments"
        ));
        // missing scheme
        assert!(!Guide::is_valid_url(
            "www.mobafire.com/league-of-legends/build/giga-chad-graves-607192"
        ));
        // guide id is six digits
        assert!(!Guide::is_valid_url(
            "https://www.mobafire.com/league-of-legends/build/graves-1234"
        ));
        assert!(!Guide::is_valid_url("https://www.mobafire.com/"));
    }

    #[test]
    fn scrapes_title_and_champion() {
        let guide = Guide::from_html(GUIDE);
        assert_eq!(guide.title().unwrap(), "Arfreezy's guide to Graves Jungle");
        assert_eq!(guide.champion_name().unwrap(), "Graves");
    }

    #[test]
    fn counts_builds() {
        let guide = Guide::from_html(GUIDE);
        assert_eq!(guide.build_count(), 2);
        assert!(guide.build(1).is_ok());
    }

    #[test]
    fn rejects_out_of_range_build_index() {
        let guide = Guide::from_html(GUIDE);
        let err = guide.build(2).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid build index: the guide has 2 builds"
        );
    }

    #[test]
    fn missing_title_is_a_scraper_error() {
        let guide = Guide::from_html("<html><body></body></html>");
        assert_eq!(
            guide.title().unwrap_err().to_string(),
            "Cannot get the title of the guide"
        );
        assert_eq!(
            guide.champion_name().unwrap_err().to_string(),
            "Cannot get the header of the guide"
        );
    }

    #[test]
    fn converts_blocks_with_counts_and_entities() {
        let guide = Guide::from_html(GUIDE);
        let items = test_util::items();
        let blocks = guide
            .build(0)
            .unwrap()
            .to_item_set_blocks(&items, test_util::VERSION, false)
            .unwrap();

        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].kind, "Starting Items");
        assert_eq!(
            blocks[0].items,
            vec![
                ItemSetBlockItem { id: "2010".to_string(), count: 2 },
                ItemSetBlockItem { id: "1001".to_string(), count: 1 },
            ]
        );
        assert_eq!(blocks[1].kind, "Core Items");
        // `Wit&#39;s End' in the markup resolves through the decoded name
        assert_eq!(blocks[2].items[0].id, "3091");
    }

    #[test]
    fn unknown_items_error_by_default() {
        let guide = Guide::from_html(GUIDE);
        let items = test_util::items();
        let err = guide
            .build(1)
            .unwrap()
            .to_item_set_blocks(&items, test_util::VERSION, false)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot find item `Sword of the Divine' in version 13.15.1"
        );
    }

    #[test]
    fn unknown_items_are_skipped_when_ignored() {
        let guide = Guide::from_html(GUIDE);
        let items = test_util::items();
        let blocks = guide
            .build(1)
            .unwrap()
            .to_item_set_blocks(&items, test_util::VERSION, true)
            .unwrap();

        assert_eq!(blocks.len(), 1);
        assert_eq!(
            blocks[0].items,
            vec![
                ItemSetBlockItem { id: "1038".to_string(), count: 1 },
                ItemSetBlockItem { id: "2055".to_string(), count: 2 },
            ]
        );
    }
}
