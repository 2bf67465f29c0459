use crate::Image;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChampionInfo {
    pub attack: i32,
    pub defense: i32,
    pub magic: i32,
    pub difficulty: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChampionStats {
    pub hp: f64,
    #[serde(rename = "hpperlevel")]
    pub hp_per_level: f64,
    pub mp: f64,
    #[serde(rename = "mpperlevel")]
    pub mp_per_level: f64,
    #[serde(rename = "movespeed")]
    pub move_speed: f64,
    pub armor: f64,
    #[serde(rename = "armorperlevel")]
    pub armor_per_level: f64,
    #[serde(rename = "spellblock")]
    pub spell_block: f64,
    #[serde(rename = "spellblockperlevel")]
    pub spell_block_per_level: f64,
    #[serde(rename = "attackrange")]
    pub attack_range: f64,
    #[serde(rename = "hpregen")]
    pub hp_regen: f64,
    #[serde(rename = "hpregenperlevel")]
    pub hp_regen_per_level: f64,
    #[serde(rename = "mpregen")]
    pub mp_regen: f64,
    #[serde(rename = "mpregenperlevel")]
    pub mp_regen_per_level: f64,
    pub crit: f64,
    #[serde(rename = "critperlevel")]
    pub crit_per_level: f64,
    #[serde(rename = "attackdamage")]
    pub attack_damage: f64,
    #[serde(rename = "attackdamageperlevel")]
    pub attack_damage_per_level: f64,
    #[serde(rename = "attackspeedperlevel")]
    pub attack_speed_per_level: f64,
    #[serde(rename = "attackspeed")]
    pub attack_speed: f64,
}

/// One entry of the `champion.json` dataset.
///
/// `id` is the alphabetic identifier (`MonkeyKing`), `key` the numeric one
/// as a string (`"62"`), `name` the display name (`Wukong`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Champion {
    pub version: String,
    pub id: String,
    pub key: String,
    pub name: String,
    pub title: String,
    pub blurb: String,
    pub info: ChampionInfo,
    pub image: Image,
    pub tags: Vec<String>,
    pub partype: String,
    pub stats: ChampionStats,
}

/// The champions dataset. Lookups trim the query and ignore case; the table
/// holds a few hundred entries, so they are plain linear scans.
#[derive(Debug, Clone)]
pub struct Champions {
    data: HashMap<String, Champion>,
}

impl Champions {
    pub fn new(data: HashMap<String, Champion>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Champion> {
        self.data.values()
    }

    /// Gets a champion by its display name, ignoring case.
    pub fn by_name(&self, name: &str) -> Option<&Champion> {
        let name = name.trim().to_lowercase();
        self.data.values().find(|c| c.name.to_lowercase() == name)
    }

    /// Gets a champion by its alphabetic identifier, ignoring case.
    pub fn by_id(&self, id: &str) -> Option<&Champion> {
        let id = id.trim().to_lowercase();
        self.data.values().find(|c| c.id.to_lowercase() == id)
    }

    /// Gets a champion by its numeric key.
    pub fn by_key(&self, key: &str) -> Option<&Champion> {
        let key = key.trim();
        self.data.values().find(|c| c.key == key)
    }

    /// Resolves a free-form champion query: name first, then id, then key.
    pub fn resolve(&self, query: &str) -> Option<&Champion> {
        self.by_name(query)
            .or_else(|| self.by_id(query))
            .or_else(|| self.by_key(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Champions {
        let data: crate::DataSet<Champion> =
            serde_json::from_str(include_str!("../fixtures/champion.json")).unwrap();
        Champions::new(data.data)
    }

    #[test]
    fn deserializes_the_dataset() {
        let champions = catalog();
        assert_eq!(champions.len(), 3);

        let graves = champions.by_key("104").unwrap();
        assert_eq!(graves.id, "Graves");
        assert_eq!(graves.title, "the Outlaw");
        assert_eq!(graves.stats.attack_range, 425.0);
        assert_eq!(graves.image.full, "Graves.png");
    }

    #[test]
    fn by_name_ignores_case_and_whitespace() {
        let champions = catalog();
        assert_eq!(champions.by_name("AATROX").unwrap().key, "266");
        assert_eq!(champions.by_name(" graves ").unwrap().key, "104");
        assert!(champions.by_name("---").is_none());
    }

    #[test]
    fn by_key_is_exact() {
        let champions = catalog();
        assert_eq!(champions.by_key("104").unwrap().name, "Graves");
        assert!(champions.by_key("0").is_none());
    }

    #[test]
    fn id_and_name_are_distinct_namespaces() {
        let champions = catalog();
        assert_eq!(champions.by_id("monkeyking").unwrap().name, "Wukong");
        assert!(champions.by_name("MonkeyKing").is_none());
    }

    #[test]
    fn resolve_falls_back_from_name_to_id_to_key() {
        let champions = catalog();
        assert_eq!(champions.resolve("Wukong").unwrap().key, "62");
        assert_eq!(champions.resolve("MonkeyKing").unwrap().key, "62");
        assert_eq!(champions.resolve("62").unwrap().key, "62");
        assert!(champions.resolve("Teemo").is_none());
    }
}
