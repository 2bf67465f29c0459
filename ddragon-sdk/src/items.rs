use crate::Image;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemGold {
    pub base: i32,
    pub total: i32,
    pub sell: i32,
    pub purchasable: bool,
}

/// One entry of the `item.json` dataset. Most fields are optional on the
/// wire; `stats` keys vary per item, so they stay an open map.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub colloq: String,
    #[serde(default)]
    pub plaintext: String,
    #[serde(rename = "from")]
    pub builds_from: Option<Vec<String>>,
    #[serde(rename = "into")]
    pub builds_into: Option<Vec<String>>,
    pub image: Image,
    pub gold: ItemGold,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub maps: HashMap<String, bool>,
    #[serde(default)]
    pub stats: HashMap<String, f64>,
    pub depth: Option<i32>,
    pub consumed: Option<bool>,
    pub stacks: Option<i32>,
    pub consume_on_full: Option<bool>,
    pub special_recipe: Option<i32>,
    pub in_store: Option<bool>,
    pub hide_from_all: Option<bool>,
    pub required_champion: Option<String>,
    pub required_ally: Option<String>,
}

/// The items dataset, keyed by the numeric item key as a string.
#[derive(Debug, Clone)]
pub struct Items {
    data: HashMap<String, Item>,
}

impl Items {
    pub fn new(data: HashMap<String, Item>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Item)> {
        self.data.iter().map(|(key, item)| (key.as_str(), item))
    }

    /// Gets an item by its numeric key.
    pub fn by_key(&self, key: &str) -> Option<&Item> {
        self.data.get(key.trim())
    }

    /// Gets an item by its display name, ignoring case.
    pub fn by_name(&self, name: &str) -> Option<&Item> {
        let name = name.trim().to_lowercase();
        self.data.values().find(|item| item.name.to_lowercase() == name)
    }

    /// Gets the numeric key of the item with the given name, ignoring case.
    pub fn key_of(&self, name: &str) -> Option<&str> {
        let name = name.trim().to_lowercase();
        self.data
            .iter()
            .find(|(_, item)| item.name.to_lowercase() == name)
            .map(|(key, _)| key.as_str())
    }
}
