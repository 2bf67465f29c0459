mod scraper;

pub use self::scraper::{Build, Guide};

use crate::error::Result;
use crate::itemset::ItemSet;
use ddragon_sdk::champions::Champions;
use ddragon_sdk::items::Items;
use ddragon_sdk::DataDragon;

/// Converts one build of a MOBAfire guide page into an item set.
pub struct MobafireRequestBuilder {
    dragon: DataDragon,
    web: reqwest::Client,
    url: String,
    title: Option<String>,
    build_index: usize,
    ignore_unknown_items: bool,
}

impl MobafireRequestBuilder {
    pub fn new(dragon: DataDragon, web: reqwest::Client, url: &str) -> Self {
        Self {
            dragon,
            web,
            url: url.to_string(),
            title: None,
            build_index: 0,
            ignore_unknown_items: false,
        }
    }

    /// Title of the output item set; defaults to the scraped guide title.
    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Index of the build to convert (starting from 0).
    pub fn build_index(mut self, index: usize) -> Self {
        self.build_index = index;
        self
    }

    /// Skip item names the catalog does not know instead of failing.
    pub fn ignore_unknown_items(mut self, ignore: bool) -> Self {
        self.ignore_unknown_items = ignore;
        self
    }

    pub async fn send(self) -> Result<ItemSet> {
        let html = Guide::fetch_html(&self.web, &self.url).await?;
        let champions = self.dragon.champions().await?;
        let items = self.dragon.items().await?;
        let guide = Guide::from_html(&html);
        self.convert(&guide, champions, items)
    }

    fn convert(&self, guide: &Guide, champions: &Champions, items: &Items) -> Result<ItemSet> {
        let champion_name = guide.champion_name()?;
        let associated_champions = champions
            .by_name(&champion_name)
            .and_then(|champion| champion.key.parse::<i64>().ok())
            .map(|key| vec![key])
            .unwrap_or_default();

        let build = guide.build(self.build_index)?;
        let blocks =
            build.to_item_set_blocks(items, self.dragon.version(), self.ignore_unknown_items)?;

        let title = match &self.title {
            Some(explicit) => crate::resolve_title(Some(explicit.as_str()), None)?,
            None => crate::resolve_title(None, Some(guide.title()?.as_str()))?,
        };

        Ok(ItemSet {
            associated_champions,
            associated_maps: Vec::new(),
            title,
            blocks,
        })
    }
}
