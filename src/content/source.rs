// src/content/source.rs

use crate::content::{decode_response, ContentBlock, ContentError};
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;

/// Something that can produce authoritative content on demand.
pub trait ContentSource: Send + Sync {
    fn fetch(&self) -> Result<ContentBlock, ContentError>;
}

impl<F> ContentSource for F
where
    F: Fn() -> Result<ContentBlock, ContentError> + Send + Sync,
{
    fn fetch(&self) -> Result<ContentBlock, ContentError> {
        self()
    }
}

/// Fetches a content block with a single GET against a JSON endpoint.
pub struct HttpContentSource {
    client: Client,
    url: String,
}

impl HttpContentSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

impl ContentSource for HttpContentSource {
    fn fetch(&self) -> Result<ContentBlock, ContentError> {
        let response = self
            .client
            .get(&self.url)
            .header(ACCEPT, mime::APPLICATION_JSON.as_ref())
            .send()
            .map_err(|e| ContentError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| ContentError::Transport(e.to_string()))?;

        decode_response(status, &body)
    }
}
