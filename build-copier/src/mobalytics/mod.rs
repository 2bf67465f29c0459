use crate::error::{ConversionError, Result};
use crate::itemset::{ItemSet, ItemSetBlock, ItemSetBlockItem};
use ddragon_sdk::DataDragon;
use serde::{Deserialize, Serialize};

const GRAPHQL_URL: &str = "https://app.mobalytics.gg/api/lol/graphql/v1/query";
const OPERATION_NAME: &str = "LolChampionPageQuery";
const PAGE_QUERY: &str = include_str!("query.graphql");

/// Converts a Mobalytics build into an item set.
pub struct MobalyticsRequestBuilder {
    dragon: DataDragon,
    web: reqwest::Client,
    champion: String,
    build_id: i64,
    title: Option<String>,
}

impl MobalyticsRequestBuilder {
    pub fn new(dragon: DataDragon, web: reqwest::Client, champion: &str, build_id: i64) -> Self {
        Self {
            dragon,
            web,
            champion: champion.to_string(),
            build_id,
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

        let patch = patch_of(self.dragon.version());
        let request = PageQuery::new(champion.id.to_lowercase(), self.build_id, &patch);

        let response = self
            .web
            .post(GRAPHQL_URL)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;
        let response: PageResponse = response.json().await?;

        let build = response
            .data
            .lol
            .selected_build
            .and_then(|selected| selected.build)
            .ok_or_else(|| {
                ConversionError::scraper("Cannot find the requested build in the Mobalytics response")
            })?;

        let title = crate::resolve_title(self.title.as_deref(), None)?;

        Ok(ItemSet {
            associated_champions: vec![key],
            associated_maps: Vec::new(),
            title,
            blocks: to_item_set_blocks(&build),
        })
    }
}

/// The game patch a catalog version belongs to (`13.15.1` → `13.15`).
fn patch_of(version: &str) -> String {
    let mut parts = version.splitn(3, '.');
    match (parts.next(), parts.next()) {
        (Some(major), Some(minor)) => format!("{}.{}", major, minor),
        _ => version.to_string(),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PageQuery<'a> {
    operation_name: &'a str,
    query: &'a str,
    variables: PageVariables<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PageVariables<'a> {
    build_id: i64,
    patch: &'a str,
    queue: Option<&'a str>,
    rank: Option<&'a str>,
    region: Option<&'a str>,
    role: Option<&'a str>,
    slug: String,
    summoner_name: Option<&'a str>,
    summoner_region: Option<&'a str>,
    with_build: bool,
    with_builds_list: bool,
    with_common: bool,
    with_counter: bool,
    with_counters_list: bool,
    with_filters: bool,
}

impl<'a> PageQuery<'a> {
    fn new(slug: String, build_id: i64, patch: &'a str) -> Self {
        Self {
            operation_name: OPERATION_NAME,
            query: PAGE_QUERY,
            variables: PageVariables {
                build_id,
                patch,
                queue: None,
                rank: None,
                region: None,
                role: None,
                slug,
                summoner_name: None,
                summoner_region: None,
                with_build: true,
                with_builds_list: false,
                with_common: false,
                with_counter: false,
                with_counters_list: false,
                with_filters: true,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct PageResponse {
    data: PageData,
}

#[derive(Debug, Deserialize)]
struct PageData {
    lol: LolData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LolData {
    selected_build: Option<SelectedBuild>,
}

#[derive(Debug, Deserialize)]
struct SelectedBuild {
    build: Option<ChampionBuild>,
}

#[derive(Debug, Deserialize)]
struct ChampionBuild {
    items: Vec<ItemsBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemsBlock {
    items: Vec<i64>,
    time_to_target: Option<f64>,
    #[serde(rename = "type")]
    kind: String,
}

fn to_item_set_blocks(build: &ChampionBuild) -> Vec<ItemSetBlock> {
    build
        .items
        .iter()
        .map(|source| {
            let mut block = ItemSetBlock::new(block_title(source));
            // item ids repeat once per copy; fold them into counts keeping
            // first-occurrence order
            for id in &source.items {
                let id = id.to_string();
                match block.items.iter_mut().find(|item| item.id == id) {
                    Some(item) => item.count += 1,
                    None => block.items.push(ItemSetBlockItem { id, count: 1 }),
                }
            }
            block
        })
        .collect()
}

fn block_title(block: &ItemsBlock) -> String {
    match block.time_to_target {
        Some(seconds) if seconds >= 60.0 => {
            format!("{} @ {} min", block.kind, (seconds / 60.0).round() as i64)
        }
        _ => block.kind.clone(),
    }
}
