use serde::{Deserialize, Serialize};

/// One purchasable entry of a block. `id` is the DDragon item key as a
/// string, the way the game client expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSetBlockItem {
    pub id: String,
    pub count: u32,
}

/// One titled section of an item set ("Starting Items", "Core Items", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSetBlock {
    pub show_if_summoner_spell: String,
    pub hide_if_summoner_spell: String,
    pub items: Vec<ItemSetBlockItem>,
    #[serde(rename = "type")]
    pub kind: String,
}

impl ItemSetBlock {
    /// An empty block with the given title. The summoner-spell filters are
    /// part of the wire shape but never populated by any converter.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            show_if_summoner_spell: String::new(),
            hide_if_summoner_spell: String::new(),
            items: Vec::new(),
            kind: kind.into(),
        }
    }
}

/// The item-set document the game client imports. Field order and casing
/// are fixed by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSet {
    pub associated_champions: Vec<i64>,
    pub associated_maps: Vec<i64>,
    pub title: String,
    pub blocks: Vec<ItemSetBlock>,
}
