//! One scraped background image record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::url_model;

/// A background image listed on the home page.
///
/// `url` is the only required field. Fields other than `url` and a string
/// `author` found in a loaded file are kept in `extra` and written back
/// unchanged, so an `author` of any other JSON type (including `null`) stays
/// in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawEntry")]
pub struct BackgroundEntry {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Deserialize)]
struct RawEntry {
    url: String,
    #[serde(flatten)]
    rest: Map<String, Value>,
}

impl From<RawEntry> for BackgroundEntry {
    fn from(raw: RawEntry) -> Self {
        let RawEntry { url, mut rest } = raw;
        let author = match rest.remove("author") {
            Some(Value::String(s)) => Some(s),
            Some(other) => {
                rest.insert("author".into(), other);
                None
            }
            None => None,
        };
        Self {
            url,
            author,
            extra: rest,
        }
    }
}

impl BackgroundEntry {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            author: None,
            extra: Map::new(),
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Dedup key: the percent-decoded last path segment of `url`.
    pub fn key(&self) -> String {
        url_model::entry_key(&self.url)
    }
}
