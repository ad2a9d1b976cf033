//! Embedded prediction state extraction
//!
//! horo.mail.ru renders predictions server-side and embeds the page state
//! as JSON inside a `<script id="horo-script">` element, assigned to
//! `window.__PRELOADED_STATE__`. Pulling that JSON out is far more stable
//! than scraping the rendered markup: the state is the exact data the page
//! scripts hydrate from.

use crate::error::HoroError;
use scraper::{Html, Selector};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// CSS selector for the script element carrying the page state
const SCRIPT_SELECTOR: &str = r#"script[id="horo-script"]"#;

/// Assignment prefix preceding the JSON document
const STATE_PREFIX: &str = "window.__PRELOADED_STATE__ = ";

/// One entry of the prediction's content array.
///
/// Only `"html"`-typed items carry prediction text; other discriminators
/// (ads, widgets) are ignored downstream. Defaults keep shape drift from
/// failing the whole array.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContentItem {
    /// Type discriminator, `"html"` for markup-bearing items
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Markup text, present when `kind` is `"html"`
    #[serde(default)]
    pub html: Option<String>,
}

impl ContentItem {
    /// True for items carrying markup text
    pub fn is_html(&self) -> bool {
        self.kind == "html"
    }
}

/// Locate the embedded state payload inside the page markup.
///
/// Returns the JSON text after the assignment prefix, with surrounding
/// whitespace and a single trailing `;` removed. `None` when the script
/// element or the prefix is absent.
fn script_payload(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(SCRIPT_SELECTOR).ok()?;
    let element = document.select(&selector).next()?;
    let text = element.text().collect::<String>();
    let (_, payload) = text.split_once(STATE_PREFIX)?;
    let payload = payload.trim();
    let payload = payload.strip_suffix(';').unwrap_or(payload);
    Some(payload.trim_end().to_string())
}

/// Parse the embedded page state out of raw page markup.
///
/// A missing script element and a missing assignment prefix are the same
/// condition: the page carries no recognizable state. Malformed JSON is
/// kept distinct so callers can tell page drift from payload corruption.
pub fn preloaded_state(html: &str) -> Result<Value, HoroError> {
    let payload = script_payload(html).ok_or(HoroError::ScriptMissing)?;
    serde_json::from_str(&payload).map_err(HoroError::MalformedState)
}

/// Walk the state down to the prediction's content items.
///
/// Every step of `page_data` -> `prediction` -> `text` is optional:
/// a missing or reshaped level yields an empty list, not an error. Items
/// that fail to deserialize are skipped.
pub fn prediction_items(state: &Value) -> Vec<ContentItem> {
    let items = state
        .get("page_data")
        .and_then(|v| v.get("prediction"))
        .and_then(|v| v.get("text"))
        .and_then(|v| v.as_array());

    match items {
        Some(items) => items
            .iter()
            .filter_map(|item| serde_json::from_value(item.clone()).ok())
            .collect(),
        None => {
            debug!("state has no page_data.prediction.text array");
            Vec::new()
        }
    }
}
