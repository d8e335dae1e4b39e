//! # Country Data Source
//!
//! The boundary between the app and the public REST Countries endpoint:
//! the wire model for v2 country records, the [`CountrySource`] trait the
//! rest of the app consumes, and the error taxonomy for a failed retrieval.
//!
//! The collection is fetched once at startup and replaced wholesale; nothing
//! downstream ever mutates a `Country`.

use std::fmt;

use async_trait::async_trait;
use serde::Deserialize;

mod rest;
pub use rest::{DEFAULT_BASE_URL, RestCountriesSource};

/// A named sub-record (language, currency, regional bloc). The v2 payload
/// carries more fields per entry; only the name is displayed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Named {
    #[serde(default)]
    pub name: String,
}

/// Flag image URLs for a country.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Flags {
    pub svg: Option<String>,
}

/// One country record as returned by the v2 `/all` endpoint.
///
/// Every field is defaulted: the source omits fields freely, and a record
/// with gaps still renders (missing values fall back to "N/A" at display
/// time, never to an error).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Country {
    /// Display, sort and filter key. Not guaranteed unique by the source.
    pub name: String,
    /// Stable list key.
    pub alpha3_code: String,
    pub population: u64,
    pub capital: Option<String>,
    pub region: Option<String>,
    pub flags: Option<Flags>,
    pub languages: Vec<Named>,
    pub currencies: Vec<Named>,
    pub regional_blocs: Vec<Named>,
}

impl Country {
    /// Flag image URL, when the source provided one.
    pub fn flag_url(&self) -> Option<&str> {
        self.flags.as_ref().and_then(|f| f.svg.as_deref())
    }
}

/// Errors that can occur while retrieving the country collection.
///
/// All of them are caught at the adapter boundary, logged, and swallowed:
/// the UI keeps rendering whatever collection it already has.
#[derive(Debug)]
pub enum SourceError {
    /// Network-level failure (DNS, connection refused, hung socket).
    Network(String),
    /// The endpoint answered with a non-success status.
    Api { status: u16, message: String },
    /// The body was not the expected JSON array.
    Parse(String),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Network(msg) => write!(f, "network error: {msg}"),
            SourceError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            SourceError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for SourceError {}

/// A provider of the full country collection.
///
/// One implementation talks to the real REST endpoint; tests substitute
/// their own.
#[async_trait]
pub trait CountrySource: Send + Sync {
    /// Returns the name of the source (used for logging and the title bar).
    fn name(&self) -> &str;

    /// Retrieves the full collection in one call. No pagination on the
    /// wire, no authentication, no query parameters.
    async fn fetch_all(&self) -> Result<Vec<Country>, SourceError>;
}
