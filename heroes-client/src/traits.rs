use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Hero, HeroId, HeroPayload, SaveReceipt};

/// Heroes collection resource Trait
///
/// Implemented over HTTP by [`HttpHeroesApi`](crate::HttpHeroesApi); tests
/// substitute scripted in-memory implementations.
#[async_trait]
pub trait HeroesApi: Send + Sync {
    /// `GET /heroes`
    ///
    /// Accepts a bare array or a `{heroes: [...]}` wrapper; any other shape is
    /// an empty collection.
    async fn list_heroes(&self) -> Result<Vec<Hero>>;

    /// `GET /heroes/{id}`
    ///
    /// The record comes under `heroe`. When it carries no `_id`/`id`, `id`
    /// is used; a body without `heroe` is [`ApiError::HeroNotFound`](crate::ApiError).
    ///
    /// # Arguments
    /// * `id` - Hero ID
    async fn get_hero(&self, id: &HeroId) -> Result<Hero>;

    /// `POST /heroes`, expecting `201 Created`
    async fn create_hero(&self, payload: &HeroPayload) -> Result<SaveReceipt>;

    /// `PUT /heroes/{id}`, expecting `200 OK`
    async fn update_hero(&self, id: &HeroId, payload: &HeroPayload) -> Result<SaveReceipt>;

    /// `DELETE /heroes/{id}`, expecting `200 OK` or `204 No Content`
    async fn delete_hero(&self, id: &HeroId) -> Result<()>;
}
