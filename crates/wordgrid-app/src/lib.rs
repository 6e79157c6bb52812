#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::doc_markdown)]
//! Dictionary lookup screens built on the wordgrid layout engine.
//!
//! - [`HomeModel`]: search field, recent searches, loading overlay
//! - [`WordDetail`]: definitions filtered by part of speech, synonyms
//! - [`DictionaryClient`]: lookups over a pluggable [`Transport`]
//! - [`KeyboardObserver`]: shrinks the host while the keyboard is up
//!
//! Screen models produce [`wordgrid_layout::Grid`]s; hosting them in a
//! [`wordgrid_layout::Surface`] and feeding it resizes is up to the caller.
//!
//! # Examples
//!
//! ```
//! use wordgrid_app::{
//!     AppConfig, DictionaryClient, HomeModel, LoadingOverlay, RecentSearches, Response,
//!     Transport, TransportError, WordDetail,
//! };
//!
//! struct Offline;
//!
//! impl Transport for Offline {
//!     fn get(&self, url: &str) -> Result<Response, TransportError> {
//!         assert!(url.ends_with("/hello"));
//!         Ok(Response::new(200, r#"[{"word": "hello", "meanings": []}]"#))
//!     }
//! }
//!
//! let config = AppConfig::default();
//! let client = DictionaryClient::new(Offline, &config);
//! let mut home = HomeModel::new(client, RecentSearches::default(), LoadingOverlay::new());
//!
//! let entry = home.search("hello").unwrap();
//! let detail = WordDetail::new(entry, config.max_synonyms);
//! assert_eq!(detail.title(), "Hello");
//! assert_eq!(home.recent_search(0), Some("hello"));
//! ```

mod client;
mod config;
mod detail;
mod filter;
mod home;
mod keyboard;
mod model;
mod overlay;
mod recent;

#[cfg(feature = "http")]
pub use client::HttpTransport;
pub use client::{DictionaryClient, DictionaryError, Response, Transport, TransportError};
pub use config::{AppConfig, ConfigError, EndpointConfig};
pub use detail::{capitalize, DefinitionRow, WordDetail};
pub use filter::{FilterDelegate, FilterSelector, FilterStyle};
pub use home::{HomeModel, SearchError};
pub use keyboard::KeyboardObserver;
pub use model::{Definition, Meaning, Phonetic, Synonym, WordEntry};
pub use overlay::LoadingOverlay;
pub use recent::{RecentSearches, StoreError};
