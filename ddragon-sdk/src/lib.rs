pub mod champions;
pub mod items;

use crate::champions::{Champion, Champions};
use crate::items::{Item, Items};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Display;
use std::sync::Arc;
use tokio::sync::OnceCell;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    HttpError(reqwest::Error),
    UnexpectedStatus(reqwest::StatusCode),
    NoVersions,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::HttpError(e) => e.fmt(f),
            Error::UnexpectedStatus(status) => {
                write!(f, "DDragon returned status code {}", status)
            }
            Error::NoVersions => write!(f, "DDragon returned an empty version list"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::HttpError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::HttpError(e)
    }
}

const DDRAGON_HOST: &str = "https://ddragon.leagueoflegends.com";

fn versions_url() -> String {
    format!("{}/api/versions.json", DDRAGON_HOST)
}

fn data_url(version: &str, dataset: &str) -> String {
    format!("{}/cdn/{}/data/en_US/{}.json", DDRAGON_HOST, version, dataset)
}

/// Image descriptor shared by every DDragon dataset entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub full: String,
    pub sprite: String,
    pub group: String,
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

/// Envelope every DDragon dataset file is wrapped in.
#[derive(Debug, Deserialize)]
struct DataSet<T> {
    data: HashMap<String, T>,
}

#[derive(Debug)]
pub struct Handle {
    pub web: reqwest::Client,
    version: String,
    champions: OnceCell<Champions>,
    items: OnceCell<Items>,
}

/// Client for the DDragon static-data CDN, pinned to one game version.
///
/// The champion and item datasets are fetched at most once and cached for
/// the lifetime of the client; clones share the cache.
pub struct DataDragon {
    handle: Arc<Handle>,
}

impl DataDragon {
    pub fn new(version: &str) -> Self {
        Self {
            handle: Arc::new(Handle {
                web: reqwest::Client::new(),
                version: version.to_string(),
                champions: OnceCell::new(),
                items: OnceCell::new(),
            }),
        }
    }

    /// Builds a client pinned to the newest game version.
    pub async fn latest() -> Result<Self> {
        let version = Self::latest_version().await?;
        Ok(Self::new(&version))
    }

    /// Builds a client over datasets the caller already holds. No network
    /// requests are made for these datasets afterwards.
    pub fn preloaded(version: &str, champions: Champions, items: Items) -> Self {
        Self {
            handle: Arc::new(Handle {
                web: reqwest::Client::new(),
                version: version.to_string(),
                champions: OnceCell::new_with(Some(champions)),
                items: OnceCell::new_with(Some(items)),
            }),
        }
    }

    /// The newest game version known to DDragon.
    pub async fn latest_version() -> Result<String> {
        let web = reqwest::Client::new();
        let versions: Vec<String> = fetch_json(&web, &versions_url()).await?;
        versions.into_iter().next().ok_or(Error::NoVersions)
    }

    pub fn version(&self) -> &str {
        &self.handle.version
    }

    /// The champions dataset, fetched on first use.
    pub async fn champions(&self) -> Result<&Champions> {
        self.handle
            .champions
            .get_or_try_init(|| async {
                let url = data_url(&self.handle.version, "champion");
                let data: DataSet<Champion> = fetch_json(&self.handle.web, &url).await?;
                Ok(Champions::new(data.data))
            })
            .await
    }

    /// The items dataset, fetched on first use.
    pub async fn items(&self) -> Result<&Items> {
        self.handle
            .items
            .get_or_try_init(|| async {
                let url = data_url(&self.handle.version, "item");
                let data: DataSet<Item> = fetch_json(&self.handle.web, &url).await?;
                Ok(Items::new(data.data))
            })
            .await
    }
}

impl Clone for DataDragon {
    fn clone(&self) -> Self {
        Self {
            handle: self.handle.clone(),
        }
    }
}

async fn fetch_json<T: DeserializeOwned>(web: &reqwest::Client, url: &str) -> Result<T> {
    let res = web.get(url).send().await?;
    match res.status() {
        reqwest::StatusCode::OK => {}
        status => return Err(Error::UnexpectedStatus(status)),
    }
    let data: T = res.json().await?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn champions() -> Champions {
        let data: DataSet<Champion> =
            serde_json::from_str(include_str!("../fixtures/champion.json")).unwrap();
        Champions::new(data.data)
    }

    fn items() -> Items {
        let data: DataSet<Item> =
            serde_json::from_str(include_str!("../fixtures/item.json")).unwrap();
        Items::new(data.data)
    }

    #[test]
    fn url_formatting() {
        assert_eq!(
            versions_url(),
            "https://ddragon.leagueoflegends.com/api/versions.json"
        );
        assert_eq!(
            data_url("13.15.1", "champion"),
            "https://ddragon.leagueoflegends.com/cdn/13.15.1/data/en_US/champion.json"
        );
    }

    #[tokio::test]
    async fn preloaded_client_serves_datasets_offline() {
        let dragon = DataDragon::preloaded("13.15.1", champions(), items());
        assert_eq!(dragon.version(), "13.15.1");

        let champions = dragon.champions().await.unwrap();
        assert_eq!(champions.len(), 3);

        let items = dragon.items().await.unwrap();
        assert_eq!(items.by_key("1001").unwrap().name, "Boots");
    }

    #[test]
    fn clones_share_the_handle() {
        let dragon = DataDragon::new("13.15.1");
        let clone = dragon.clone();
        assert!(Arc::ptr_eq(&dragon.handle, &clone.handle));
    }
}
