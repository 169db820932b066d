use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("search query is empty")]
    EmptyQuery,

    #[error("Browser error: {0}")]
    Browser(#[from] bizreg_browser::BrowserError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} fetching {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Configuration error: {0}")]
    Config(#[from] bizreg_core::ConfigError),
}

pub type Result<T> = std::result::Result<T, LookupError>;
