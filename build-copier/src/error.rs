use std::fmt::Display;

pub type Result<T> = core::result::Result<T, ConversionError>;

/// Error raised while converting a build guide into an item set.
#[derive(Debug)]
pub enum ConversionError {
    /// The caller handed us something unusable: a URL, title, build index
    /// or champion query.
    Input(String),
    /// The guide site could not be reached or answered with an error status.
    Network(reqwest::Error),
    /// The page or API response no longer has the shape we scrape.
    Scraper(String),
    /// The DDragon catalog could not be fetched or decoded.
    Dragon(ddragon_sdk::Error),
}

impl ConversionError {
    pub fn input(message: impl Into<String>) -> Self {
        ConversionError::Input(message.into())
    }

    pub fn scraper(message: impl Into<String>) -> Self {
        ConversionError::Scraper(message.into())
    }
}

impl Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::Input(msg) => write!(f, "{}", msg),
            ConversionError::Network(e) => write!(f, "Cannot fetch the guide: {}", e),
            ConversionError::Scraper(msg) => write!(f, "{}", msg),
            ConversionError::Dragon(e) => write!(f, "DDragon error: {}", e),
        }
    }
}

impl std::error::Error for ConversionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConversionError::Network(e) => Some(e),
            ConversionError::Dragon(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ConversionError {
    fn from(e: reqwest::Error) -> Self {
        ConversionError::Network(e)
    }
}

impl From<ddragon_sdk::Error> for ConversionError {
    fn from(e: ddragon_sdk::Error) -> Self {
        ConversionError::Dragon(e)
    }
}
