//! Dictionary and synonym lookups.
//!
//! The client builds URLs from [`EndpointConfig`]s and decodes JSON bodies;
//! the bytes themselves come from a [`Transport`], so tests can run without
//! a network.

use crate::config::{AppConfig, EndpointConfig};
use crate::model::{Synonym, WordEntry};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

/// Raw HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Status code
    pub status: u16,
    /// Response body
    pub body: Vec<u8>,
}

impl Response {
    /// Create a response.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Check for a 2xx status.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// The request never produced a response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportError {
    /// Human-readable reason
    pub message: String,
}

impl TransportError {
    /// Create a transport error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Blocking GET requests.
pub trait Transport {
    /// Fetch `url`.
    fn get(&self, url: &str) -> Result<Response, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str) -> Result<Response, TransportError> {
        (**self).get(url)
    }
}

/// Errors from a lookup.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// No response.
    #[error("network error: {0}")]
    Network(#[from] TransportError),
    /// Non-2xx status.
    #[error("server returned status {code}")]
    Status {
        /// HTTP status code
        code: u16,
    },
    /// The body was not the expected JSON.
    #[error("unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl DictionaryError {
    /// The service does not know the word.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { code: 404 })
    }
}

/// Client for the dictionary and synonym services.
#[derive(Debug, Clone)]
pub struct DictionaryClient<T> {
    transport: T,
    dictionary: EndpointConfig,
    synonyms: EndpointConfig,
}

impl<T: Transport> DictionaryClient<T> {
    /// Create a client using the endpoints from `config`.
    pub fn new(transport: T, config: &AppConfig) -> Self {
        Self {
            transport,
            dictionary: config.dictionary.clone(),
            synonyms: config.synonyms.clone(),
        }
    }

    /// The transport requests go through.
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Dictionary entries for `word`.
    pub fn lookup(&self, word: &str) -> Result<Vec<WordEntry>, DictionaryError> {
        self.fetch(&self.dictionary.query_url(word))
    }

    /// Synonyms for `word`, in the order the service returns them.
    pub fn synonyms(&self, word: &str) -> Result<Vec<Synonym>, DictionaryError> {
        self.fetch(&self.synonyms.query_url(word))
    }

    fn fetch<R: DeserializeOwned>(&self, url: &str) -> Result<R, DictionaryError> {
        debug!(url, "GET");
        let response = self.transport.get(url)?;
        debug!(url, status = response.status, bytes = response.body.len(), "response");

        if !response.is_success() {
            return Err(DictionaryError::Status {
                code: response.status,
            });
        }
        Ok(serde_json::from_slice(&response.body)?)
    }
}

/// [`Transport`] backed by a blocking `reqwest` client.
#[cfg(feature = "http")]
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

#[cfg(feature = "http")]
impl HttpTransport {
    /// Create a transport with reqwest's default client settings.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(feature = "http")]
impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<Response, TransportError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| TransportError::new(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .map_err(|e| TransportError::new(e.to_string()))?;
        Ok(Response::new(status, body.to_vec()))
    }
}
