//! REST implementation of the heroes resource

mod heroes;
mod http;

use reqwest::Client;

use crate::config::{ClientConfig, create_http_client};
use crate::error::Result;
use crate::types::HeroId;

/// Collection path, relative to the base URL.
pub(crate) const HEROES_PATH: &str = "/heroes";

/// Heroes API over HTTP
pub struct HttpHeroesApi {
    pub(crate) client: Client,
    pub(crate) base_url: String,
}

impl HttpHeroesApi {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            client: create_http_client(config)?,
            base_url: config.normalized_base_url().to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `/heroes/{id}` with the id percent-encoded.
    pub(crate) fn hero_path(id: &HeroId) -> String {
        format!("{HEROES_PATH}/{}", urlencoding::encode(id.as_str()))
    }
}
