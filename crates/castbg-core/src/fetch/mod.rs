//! Home page fetch and background extraction.
//!
//! The home page embeds its background list as a JavaScript initializer of the
//! form `JSON.parse('…')` inside a `<script>` element. The string literal is
//! decoded, parsed as JSON, and the first element of the resulting array is
//! the list of backgrounds, each `[url, author, ...]`.

mod js_string;

use scraper::{Html, Selector};
use serde_json::Value;

use crate::config::CastbgConfig;
use crate::entry::BackgroundEntry;
use crate::error::{Error, FetchError, ParseError};
use crate::http::{self, HttpOptions};

const INITIALIZER: &str = "JSON.parse('";

/// Fetches the configured home page and extracts its backgrounds in document order.
///
/// Markup that cannot be understood yields an empty list (logged), not an error.
pub async fn fetch_backgrounds(cfg: &CastbgConfig) -> Result<Vec<BackgroundEntry>, Error> {
    let url = cfg.home_url.clone();
    let opts = HttpOptions::from(cfg);
    tracing::debug!(%url, "fetching home page");

    let body = tokio::task::spawn_blocking(move || http::get_body(&url, &opts)).await??;
    let html = std::str::from_utf8(&body).map_err(FetchError::from)?;
    tracing::debug!(bytes = body.len(), "home page fetched");

    match parse_home_page(html) {
        Ok(entries) => {
            tracing::info!(count = entries.len(), "extracted backgrounds");
            Ok(entries)
        }
        Err(e) => {
            tracing::warn!("no backgrounds extracted: {}", e);
            Ok(Vec::new())
        }
    }
}

/// Extracts backgrounds from the home page HTML.
pub fn parse_home_page(html: &str) -> Result<Vec<BackgroundEntry>, ParseError> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("script").expect("valid selector");

    let literal = document
        .select(&selector)
        .find_map(|script| {
            let text: String = script.text().collect();
            js_string::initializer_literal(&text, INITIALIZER).map(str::to_string)
        })
        .ok_or(ParseError::MarkupMissing)?;

    let json = js_string::decode(&literal)?;
    let payload: Value =
        serde_json::from_str(&json).map_err(|e| ParseError::Payload(e.to_string()))?;
    entries_from_payload(&payload)
}

fn entries_from_payload(payload: &Value) -> Result<Vec<BackgroundEntry>, ParseError> {
    let list = payload
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| ParseError::Payload("expected an array of backgrounds at [0]".into()))?;

    let mut entries = Vec::with_capacity(list.len());
    for item in list {
        let Some(url) = item.get(0).and_then(Value::as_str) else {
            tracing::debug!("skipping background without url: {}", item);
            continue;
        };
        let mut entry = BackgroundEntry::new(url);
        entry.author = item
            .get(1)
            .and_then(Value::as_str)
            .filter(|a| !a.is_empty())
            .map(str::to_string);
        entries.push(entry);
    }
    Ok(entries)
}
