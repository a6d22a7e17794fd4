//! # heroes-client
//!
//! A typed client for the heroes collection REST resource: list, fetch one,
//! create, update and delete hero records.
//!
//! ## Endpoints
//!
//! | Operation | Method | Path | Success |
//! |-----------|--------|------|---------|
//! | List | `GET` | `/heroes` | `200`, array or `{heroes: [...]}` |
//! | Get one | `GET` | `/heroes/{id}` | `200`, `{heroe: {...}}` |
//! | Create | `POST` | `/heroes` | `201` with `message` |
//! | Update | `PUT` | `/heroes/{id}` | `200` with `message` |
//! | Delete | `DELETE` | `/heroes/{id}` | `200` or `204` |
//!
//! Records travel with Spanish field names (`nombre`, `poder`, `estado`).
//!
//! ## Feature Flags
//!
//! - **`rustls`** *(default)*: use rustls. Recommended for cross-compilation.
//! - **`native-tls`**: use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use heroes_client::{ClientConfig, HeroPayload, HeroesApi, HttpHeroesApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = HttpHeroesApi::new(&ClientConfig::default())?;
//!
//!     for hero in api.list_heroes().await? {
//!         println!("{} ({}) alive={}", hero.name, hero.power, hero.is_alive());
//!     }
//!
//!     let receipt = api
//!         .create_hero(&HeroPayload {
//!             name: "Flash".to_string(),
//!             power: "Velocidad".to_string(),
//!             alive: true,
//!         })
//!         .await?;
//!     println!("{:?}", receipt.message);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ApiError>`](ApiError). Failed requests are
//! never retried. [`ApiError::display_message`] derives the text to show a user
//! from the server's error body.

mod config;
mod error;
mod http_client;
mod rest;
mod traits;
mod types;
mod utils;

pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{ApiError, Result};
pub use rest::HttpHeroesApi;
pub use traits::HeroesApi;
pub use types::{Hero, HeroId, HeroListResponse, HeroPayload, SaveReceipt};
