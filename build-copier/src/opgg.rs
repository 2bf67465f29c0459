use crate::error::{ConversionError, Result};
use crate::itemset::{ItemSet, ItemSetBlock, ItemSetBlockItem};
use crate::{element_text, selector};
use ddragon_sdk::DataDragon;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use std::fmt::Display;
use std::str::FromStr;

static TABLES: Lazy<Selector> = Lazy::new(|| selector("table.champion-overview__table"));
static ROWS: Lazy<Selector> = Lazy::new(|| selector("tbody > tr"));
static CATEGORY: Lazy<Selector> = Lazy::new(|| selector("th"));
static PICK_RATE: Lazy<Selector> =
    Lazy::new(|| selector("td.champion-overview__stats--pick > strong"));
static ITEMS: Lazy<Selector> = Lazy::new(|| {
    selector(
        "td.champion-overview__data.champion-overview__border.champion-overview__border--first > ul > li.champion-stats__list__item.tip",
    )
});
static IMAGES: Lazy<Selector> = Lazy::new(|| selector("img"));

const CATEGORY_CLASS: &str = "champion-overview__row--first";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Top,
    Jungle,
    Middle,
    Bottom,
    Support,
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let role = match self {
            Role::Top => "top",
            Role::Jungle => "jungle",
            Role::Middle => "mid",
            Role::Bottom => "bot",
            Role::Support => "support",
        };
        write!(f, "{}", role)
    }
}

impl FromStr for Role {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "top" => Ok(Role::Top),
            "jungle" | "jng" => Ok(Role::Jungle),
            "mid" | "middle" => Ok(Role::Middle),
            "bot" | "bottom" | "adc" => Ok(Role::Bottom),
            "support" | "sup" => Ok(Role::Support),
            other => Err(ConversionError::input(format!("Unknown role `{}'", other))),
        }
    }
}

/// Converts the OP.GG statistics build for a champion and role.
pub struct OpggRequestBuilder {
    dragon: DataDragon,
    web: reqwest::Client,
    champion: String,
    role: Role,
    title: Option<String>,
}

impl OpggRequestBuilder {
    pub fn new(dragon: DataDragon, web: reqwest::Client, champion: &str, role: Role) -> Self {
        Self {
            dragon,
            web,
            champion: champion.to_string(),
            role,
            title: None,
        }
    }

    /// Title of the output item set.
    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub async fn send(self) -> Result<ItemSet> {
        let champions = self.dragon.champions().await?;
        let champion = champions.resolve(&self.champion).ok_or_else(|| {
            ConversionError::input(format!(
                "Champion `{}' not found in version {}",
                self.champion,
                self.dragon.version()
            ))
        })?;
        let key: i64 = champion.key.parse().map_err(|_| {
            ConversionError::scraper(format!("Champion key `{}' is not numeric", champion.key))
        })?;

        let url = format!(
            "https://www.op.gg/champion/{}/statistics/{}",
            champion.name, self.role
        );
        let response = self.web.get(&url).send().await?.error_for_status()?;
        let html = response.text().await?;

        let title = crate::resolve_title(self.title.as_deref(), None)?;

        Ok(ItemSet {
            associated_champions: vec![key],
            associated_maps: Vec::new(),
            title,
            blocks: scrape_blocks(&html)?,
        })
    }
}

/// Every row of the second overview table becomes one block. Rows marked as
/// category starts carry the category title; the rest inherit it.
fn scrape_blocks(html: &str) -> Result<Vec<ItemSetBlock>> {
    let document = Html::parse_document(html);
    let table = document.select(&TABLES).nth(1).ok_or_else(|| {
        ConversionError::scraper("Cannot find the item table on the champion page")
    })?;

    let mut category = String::from("???");
    let mut blocks = Vec::new();

    for row in table.select(&ROWS) {
        if row.value().classes().any(|class| class == CATEGORY_CLASS) {
            category = match row.select(&CATEGORY).next() {
                Some(th) => element_text(&th),
                None => return Err(ConversionError::scraper("Cannot get the item row category")),
            };
        }

        let pick_rate = row
            .select(&PICK_RATE)
            .next()
            .map(|strong| element_text(&strong))
            .ok_or_else(|| ConversionError::scraper("Cannot get the pick rate of an item row"))?;

        let mut block = ItemSetBlock::new(format!("{} ({})", category, pick_rate));
        for item in row.select(&ITEMS) {
            let src = item
                .select(&IMAGES)
                .next()
                .and_then(|img| img.value().attr("src"));
            if let Some(id) = src.and_then(item_id) {
                block.items.push(ItemSetBlockItem { id, count: 1 });
            }
        }
        blocks.push(block);
    }

    Ok(blocks)
}

/// Extracts the item id from an image source: the path filename with its
/// extension stripped (`.../item/3046.png?image=...` → `3046`).
fn item_id(src: &str) -> Option<String> {
    let path = src.split(['?', '#']).next().unwrap_or(src);
    let filename = path.rsplit('/').next()?;
    let id = match filename.rfind('.') {
        Some(dot) => &filename[..dot],
        None => filename,
    };
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}
