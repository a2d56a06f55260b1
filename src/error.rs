use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScryError {
    #[error("No Scryfall search query found.\n\nPass a query (e.g. 't:goblin cmc<=2') or a scryfall.com/search URL.")]
    NoQuery,

    #[error("Not a Scryfall search page: {0}\n\nOnly https://scryfall.com/search?q=... URLs are supported.")]
    NotSearchPage(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ScryError {
    fn from(err: std::io::Error) -> Self {
        ScryError::Io(err.to_string())
    }
}
