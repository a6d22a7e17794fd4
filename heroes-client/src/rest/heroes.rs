//! `HeroesApi` trait 实现

use async_trait::async_trait;

use crate::error::{ApiError, Result};
use crate::http_client::HttpUtils;
use crate::traits::HeroesApi;
use crate::types::{Hero, HeroEnvelope, HeroId, HeroListResponse, HeroPayload, SaveReceipt};

use super::{HEROES_PATH, HttpHeroesApi};

#[async_trait]
impl HeroesApi for HttpHeroesApi {
    async fn list_heroes(&self) -> Result<Vec<Hero>> {
        let (status, text) = self.get(HEROES_PATH).await?;
        Self::expect_status(status, &text, &[200])?;

        // An empty body is an empty collection, not a parse failure
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let body: HeroListResponse = HttpUtils::parse_json(&text)?;
        body.into_heroes().map_err(|e| {
            log::error!("Hero row decode failed: {e}");
            ApiError::ParseError {
                detail: e.to_string(),
            }
        })
    }

    async fn get_hero(&self, id: &HeroId) -> Result<Hero> {
        let (status, text) = self.get(&Self::hero_path(id)).await?;
        Self::expect_status(status, &text, &[200])?;

        let envelope: HeroEnvelope = HttpUtils::parse_json(&text)?;
        envelope
            .heroe
            .map(|raw| raw.into_hero_with(id))
            .ok_or_else(|| ApiError::HeroNotFound { id: id.to_string() })
    }

    async fn create_hero(&self, payload: &HeroPayload) -> Result<SaveReceipt> {
        let (status, text) = self.post(HEROES_PATH, payload).await?;
        Self::expect_status(status, &text, &[201])?;
        Ok(SaveReceipt {
            message: HttpUtils::success_message(&text),
        })
    }

    async fn update_hero(&self, id: &HeroId, payload: &HeroPayload) -> Result<SaveReceipt> {
        let (status, text) = self.put(&Self::hero_path(id), payload).await?;
        Self::expect_status(status, &text, &[200])?;
        Ok(SaveReceipt {
            message: HttpUtils::success_message(&text),
        })
    }

    async fn delete_hero(&self, id: &HeroId) -> Result<()> {
        let (status, text) = self.delete(&Self::hero_path(id)).await?;
        Self::expect_status(status, &text, &[200, 204])
    }
}
