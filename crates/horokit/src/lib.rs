//! HoroKit - horoscope extraction library
//!
//! Fetches daily predictions from horo.mail.ru, extracts the JSON state
//! embedded in the page, and flattens the prediction fragments into plain
//! display text. The pipeline tolerates markup drift, missing fields,
//! malformed payloads, and empty results: the boundary API always returns
//! a displayable string.
//!
//! ```no_run
//! use horokit::{Horoscope, Sign};
//!
//! # async fn run() {
//! let horoscope = Horoscope::default();
//! let message = horoscope.message(Sign::Aries).await;
//! println!("{message}");
//! # }
//! ```

mod client;
mod convert;
mod error;
mod extract;
mod sign;
mod tool;

pub use client::{fetch_page, prediction_url, FetchOptions};
pub use convert::{items_to_text, strip_tags};
pub use error::{HoroError, EMPTY_MESSAGE, NOT_FOUND_MESSAGE};
pub use extract::{prediction_items, preloaded_state, ContentItem};
pub use sign::{label_for, Sign, ALL_SIGNS};
pub use tool::{format_horoscope, Horoscope, HoroscopeBuilder};

/// Default User-Agent string
pub const DEFAULT_USER_AGENT: &str = "HoroKit/0.1";

/// Production host serving the predictions
pub const DEFAULT_BASE_URL: &str = "https://horo.mail.ru";
