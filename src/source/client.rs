use reqwest::blocking::Client;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::LoadError;

/// Relative location the document is published at
pub const DEFAULT_LOCATION: &str = "data/card_shops.json";

/// Where the card document lives: a local file or an HTTP(S) URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataLocation {
    File(PathBuf),
    Url(String),
}

impl DataLocation {
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            DataLocation::Url(location.to_string())
        } else {
            DataLocation::File(PathBuf::from(location))
        }
    }
}

impl fmt::Display for DataLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataLocation::File(path) => write!(f, "{}", path.display()),
            DataLocation::Url(url) => f.write_str(url),
        }
    }
}

/// Fetch the raw document body
pub fn fetch_text(location: &DataLocation) -> Result<String, LoadError> {
    let failed = |reason: String| LoadError::FetchFailed {
        location: location.to_string(),
        reason,
    };

    match location {
        DataLocation::File(path) => std::fs::read_to_string(path).map_err(|e| failed(e.to_string())),
        DataLocation::Url(url) => {
            let client = Client::builder()
                .user_agent("card-search")
                .timeout(Duration::from_secs(30))
                .build()
                .map_err(|e| failed(format!("failed to create HTTP client: {}", e)))?;

            let response = client.get(url).send().map_err(|e| failed(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(failed(format!("HTTP {}", status)));
            }

            response.text().map_err(|e| failed(e.to_string()))
        }
    }
}
